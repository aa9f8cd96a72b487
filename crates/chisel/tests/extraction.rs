//! End-to-end extraction of a component fragment.

use chisel::{
    get_stylesheet, get_used_imports, leading_spaces, uri_extension, Analysis, Extractor, ImportOptions,
    LeadingSpaces,
};
use serde_json::json;

const SOURCE: &str = r#"import React from 'react';
import { View, Text } from 'react-native';

export default function Card({ title, onPress }) {
  const subtitle = title.toUpperCase();
  return (
    <View style={styles.box}>
      <Text style={styles.text} onPress={() => onPress(title)}>{title}</Text>
    </View>
  );
}

const styles = StyleSheet.create({
  box: { flex: 1 },
  text: { color: 'red' },
  unused: { margin: 4 },
});
"#;

const FRAGMENT: &str = r#"  <View style={styles.box}>
      <Text style={styles.text} onPress={() => onPress(title)}>{title}</Text>
    </View>"#;

#[test]
fn unused_binding_is_reported() {
    let extractor = Extractor::new();
    let analysis = extractor.unused_vars("const x = 1;\nconst label = 'a';\n<Text>{label}</Text>;");
    assert!(analysis.is_strict());
    assert!(analysis.names().iter().any(|n| n == "x"));
    assert!(!analysis.names().iter().any(|n| n == "label"));
}

#[test]
fn free_variables_of_fragment() {
    let extractor = Extractor::new();
    let analysis = extractor.undefined_vars(FRAGMENT.trim(), "styles");
    assert!(analysis.is_strict());
    let names = analysis.into_names();
    assert_eq!(names, vec!["View", "Text", "onPress", "title"]);
}

#[test]
fn malformed_fragment_uses_heuristic() {
    let extractor = Extractor::new();
    let analysis = extractor.undefined_vars("<View>{title}<Text onPress={() => onPress()}>", "styles");
    match analysis {
        Analysis::Heuristic(names) => assert_eq!(names, vec!["title", "onPress"]),
        other => panic!("expected heuristic result, got {other:?}"),
    }
}

#[test]
fn imports_gain_style_sheet() {
    let imports = get_used_imports(
        "import { A, B } from 'react-native';\nexport const C = () => <A><B /></A>;",
        ImportOptions::default(),
    )
    .unwrap();
    assert_eq!(imports.len(), 1, "{imports:?}");
    let line = &imports[0];
    let a = line.find('A').unwrap();
    let b = line.find('B').unwrap();
    let style_sheet = line.find("StyleSheet").unwrap();
    assert!(a < b && b < style_sheet, "{line}");
    assert!(line[style_sheet + "StyleSheet".len()..].trim_start().starts_with('}'), "{line}");
}

#[test]
fn stylesheet_narrowed_to_fragment() {
    let sheet = get_stylesheet(SOURCE, FRAGMENT);
    assert_eq!(sheet.name, "styles");
    assert_eq!(
        serde_json::Value::Object(sheet.object),
        json!({ "box": { "flex": 1 }, "text": { "color": "red" } })
    );

    let code = "const styles = StyleSheet.create({ box: { flex: 1 }, text: { color: 'red' } })";
    let sheet = get_stylesheet(code, "<View style={styles.box} />");
    assert_eq!(serde_json::Value::Object(sheet.object), json!({ "box": { "flex": 1 } }));
}

#[test]
fn pretify_is_idempotent() {
    let extractor = Extractor::new();
    let component = format!("const Extracted = ({{title, onPress}}) => (\n{FRAGMENT}\n);");
    let once = extractor.pretify(&component).unwrap();
    let twice = extractor.pretify(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn helpers() {
    assert_eq!(leading_spaces("  <View>\n  <Text/>\n", LeadingSpaces::FORWARD), 2);
    assert_eq!(leading_spaces(FRAGMENT, LeadingSpaces::BACKWARD), 4);
    assert_eq!(uri_extension("file:///src/Card.tsx?v=1#L3"), "tsx");
}
