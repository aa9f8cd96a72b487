//! Style extraction.
//!
//! Narrows a `StyleSheet.create({...})` object down to the keys a fragment
//! references, so the extracted component carries only its own styles.
//! Every step is best effort: a missing declaration or an unparsable
//! object degrades to a smaller result, never to an error.

use chisel_carton::normalize_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

/// Style binding name used when the source declares none
pub const DEFAULT_STYLE_BINDING: &str = "styles";

/// `<name> = StyleSheet.create(`
static STYLE_SHEET_CREATE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(\w+)\s*=\s*StyleSheet\.create\(\s*").ok());

/// A `StyleSheet.create` declaration found in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheetDecl<'s> {
    /// Binding name (`styles` in `const styles = StyleSheet.create(...)`)
    pub name: &'s str,
    /// Object literal text, braces included
    pub object: &'s str,
}

/// Style object narrowed to a fragment
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Style binding name
    pub name: String,
    /// `const <name> = StyleSheet.create(<object>);`
    pub snippet: String,
    /// Referenced style entries, in order of first reference
    pub object: Map<String, Value>,
}

/// Find the first `StyleSheet.create({...})` declaration in `code`.
pub fn locate_stylesheet(code: &str) -> Option<StyleSheetDecl<'_>> {
    let pattern = STYLE_SHEET_CREATE.as_ref()?;

    pattern.captures_iter(code).find_map(|caps| {
        let name = caps.get(1)?;
        let rest = &code[caps.get(0)?.end()..];
        let len = balanced_object_len(rest)?;
        Some(StyleSheetDecl {
            name: name.as_str(),
            object: &rest[..len],
        })
    })
}

/// Length of the `{...}` block at the start of `text`.
///
/// Braces inside strings, template literals and comments are ignored.
fn balanced_object_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'"' | b'\'' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i += 1;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Keys referenced as `<name>.<key>` in `selection`, deduplicated in order.
pub fn referenced_style_keys(selection: &str, name: &str) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }
    let Ok(pattern) = Regex::new(&format!(r"\b{}\.(\w+)", regex::escape(name))) else {
        return Vec::new();
    };

    let mut keys: Vec<String> = Vec::new();
    for caps in pattern.captures_iter(selection) {
        if let Some(key) = caps.get(1) {
            if !keys.iter().any(|k| k == key.as_str()) {
                keys.push(key.as_str().to_string());
            }
        }
    }
    keys
}

/// Resolve `keys` against the object literal text.
///
/// The whole literal is parsed as JSON, then as JSON5 (unquoted keys,
/// single quotes, trailing commas). When that fails, each key's body is
/// matched textually; a body that still does not parse is kept as its
/// normalized text. Keys that cannot be found are skipped.
pub fn resolve_style_object(object: &str, keys: &[String]) -> Map<String, Value> {
    match parse_object(object) {
        Some(all) => keys
            .iter()
            .filter_map(|key| all.get(key).map(|value| (key.clone(), value.clone())))
            .collect(),
        None => {
            debug!("style object is not JSON5, matching keys textually");
            keys.iter()
                .filter_map(|key| match_style_value(object, key).map(|value| (key.clone(), value)))
                .collect()
        }
    }
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    let value = serde_json::from_str::<Value>(text)
        .ok()
        .or_else(|| json5::from_str::<Value>(text).ok())?;
    match integral_numbers(value) {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Value of `key: { ... }` for a body without nested objects
fn match_style_value(object: &str, key: &str) -> Option<Value> {
    let pattern = Regex::new(&format!(r"\b{}\s*:\s*(\{{[^{{]*?\}})", regex::escape(key))).ok()?;
    let body = pattern.captures(object)?.get(1)?.as_str();
    let normalized = normalize_whitespace(body);
    Some(json5::from_str::<Value>(&normalized).map_or(Value::String(normalized), integral_numbers))
}

/// Largest integer an `f64` holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrite whole floats such as `1e3` or `2.0` as integers, the way a
/// JavaScript engine prints them.
fn integral_numbers(value: Value) -> Value {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(float)
                if number.is_f64() && float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER =>
            {
                Value::from(float as i64)
            }
            _ => Value::Number(number),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(integral_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, integral_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Build the style snippet for `selection` from the declaration in `code`.
///
/// Without a declaration the snippet creates an empty `styles` object.
pub fn get_stylesheet(code: &str, selection: &str) -> Stylesheet {
    let (name, object) = match locate_stylesheet(code) {
        Some(decl) => {
            let keys = referenced_style_keys(selection, decl.name);
            (decl.name.to_string(), resolve_style_object(decl.object, &keys))
        }
        None => (DEFAULT_STYLE_BINDING.to_string(), Map::new()),
    };

    let json = serde_json::to_string_pretty(&object).unwrap_or_else(|_| "{}".to_string());
    let snippet = format!("const {name} = StyleSheet.create({json});");

    Stylesheet {
        name,
        snippet,
        object,
    }
}
