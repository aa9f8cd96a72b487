//! Import line resolution.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TransformError;
use crate::transform::transform;

/// Lines that look like an import statement
static IMPORT_LINE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\s*import.*from.*").ok());

/// Named import from `react-native`, capturing the text up to the closing brace
static REACT_NATIVE_IMPORT: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r#"^(\s*import\s*(?:\w+\s*,\s*)?\{[^}]*?)(\s*)\}\s*from\s*['"]react-native['"]"#).ok()
});

/// Symbol added to the `react-native` import for extracted styles
const STYLE_SHEET: &str = "StyleSheet";

/// Options of the import resolver
#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Run the source transformer first (drops unused and type-only imports)
    pub transform: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { transform: true }
    }
}

/// Import lines of `code`, in source order.
///
/// Fails only when the transform is enabled and fails.
pub fn get_imports(code: &str, options: ImportOptions) -> Result<Vec<String>, TransformError> {
    let code = if options.transform {
        Cow::Owned(transform(code)?)
    } else {
        Cow::Borrowed(code)
    };

    let Some(import_line) = IMPORT_LINE.as_ref() else {
        return Ok(Vec::new());
    };

    Ok(code
        .split('\n')
        .filter(|line| import_line.is_match(line))
        .map(str::to_string)
        .collect())
}

/// Import lines of `code` for an extracted component.
///
/// The first named import from `react-native` also binds `StyleSheet`, so
/// the extracted style object can be created.
pub fn get_used_imports(code: &str, options: ImportOptions) -> Result<Vec<String>, TransformError> {
    let mut imports = get_imports(code, options)?;

    let Some(pattern) = REACT_NATIVE_IMPORT.as_ref() else {
        return Ok(imports);
    };

    if let Some(line) = imports.iter_mut().find(|line| pattern.is_match(line)) {
        if !binds_style_sheet(line) {
            add_style_sheet(pattern, line);
        }
    }

    Ok(imports)
}

/// Insert `StyleSheet` directly before the closing brace of the named
/// bindings. Blanks ahead of the brace stay in front of the insertion.
fn add_style_sheet(pattern: &Regex, line: &mut String) {
    let insertion = pattern.captures(line).and_then(|caps| {
        let head = caps.get(1)?;
        let blank = caps.get(2)?;
        let separator = match head.as_str().trim_end().chars().last() {
            Some('{' | ',') if blank.is_empty() => " ",
            Some('{' | ',') => "",
            _ => ", ",
        };
        Some((blank.end(), format!("{separator}{STYLE_SHEET}")))
    });
    if let Some((at, text)) = insertion {
        line.insert_str(at, &text);
    }
}

fn binds_style_sheet(line: &str) -> bool {
    line.split(|c: char| !c.is_alphanumeric() && c != '_' && c != '$')
        .any(|word| word == STYLE_SHEET)
}
