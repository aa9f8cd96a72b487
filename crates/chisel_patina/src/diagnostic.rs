//! Diagnostics reported by rules, with optional text fixes.

use chisel_carton::CompactString;
use serde::{Deserialize, Serialize};

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Replacement of the byte range `start..end` of the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub start: u32,
    pub end: u32,
    pub new_text: String,
}

impl TextEdit {
    #[inline]
    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        Self::replace(offset, offset, text)
    }

    #[inline]
    pub fn delete(start: u32, end: u32) -> Self {
        Self::replace(start, end, "")
    }

    #[inline]
    pub fn replace(start: u32, end: u32, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            new_text: text.into(),
        }
    }
}

/// Edits resolving one diagnostic; applied together or not at all
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    pub edits: Vec<TextEdit>,
}

impl Fix {
    #[inline]
    pub fn new(edit: TextEdit) -> Self {
        Self { edits: vec![edit] }
    }

    /// Byte range covered by all edits of this fix
    pub fn range(&self) -> Option<(u32, u32)> {
        let start = self.edits.iter().map(|e| e.start).min()?;
        let end = self.edits.iter().map(|e| e.end).max()?;
        Some((start, end))
    }
}

/// Apply edits to `source`, last edit first so earlier offsets stay valid.
///
/// Edits falling outside the source or off a char boundary are skipped.
pub(crate) fn apply_edits(source: &str, edits: impl IntoIterator<Item = TextEdit>) -> String {
    let mut result = source.to_string();
    let mut edits: Vec<TextEdit> = edits.into_iter().collect();
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    for edit in edits {
        let (start, end) = (edit.start as usize, edit.end as usize);
        if start <= end
            && end <= result.len()
            && result.is_char_boundary(start)
            && result.is_char_boundary(end)
        {
            result.replace_range(start..end, &edit.new_text);
        }
    }
    result
}

/// A lint diagnostic.
///
/// Messages follow the ESLint convention of quoting the offending
/// identifier in single quotes, e.g. `'title' is not defined.`
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    /// Severity configured for the rule
    pub severity: Severity,
    pub message: CompactString,
    /// Start byte offset in source
    pub start: u32,
    /// End byte offset in source
    pub end: u32,
    pub fix: Option<Fix>,
}

impl LintDiagnostic {
    /// Create a diagnostic; the linter sets the configured severity on report
    #[inline]
    pub fn error(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            rule_name,
            severity: Severity::Error,
            message: message.into(),
            start,
            end,
            fix: None,
        }
    }

    #[inline]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// The identifier quoted in the message, if any.
    ///
    /// This is the text between the first pair of single quotes, e.g.
    /// `title` for `'title' is not defined.`
    pub fn entity_name(&self) -> Option<&str> {
        let (_, rest) = self.message.split_once('\'')?;
        let (name, _) = rest.split_once('\'')?;
        (!name.is_empty()).then_some(name)
    }
}
