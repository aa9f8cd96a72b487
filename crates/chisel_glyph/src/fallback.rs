//! Formatting with a lint fix fallback.
//!
//! When the code does not parse, or the printer would lose comments, the
//! text-level style rules of `chisel_patina` still normalize line breaks
//! and whitespace.

use chisel_patina::{Linter, RuleConfig};
use tracing::debug;

use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::script::format_script_content;

/// Which formatter produced a [`Formatted`] output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPath {
    /// The code generator pipeline
    Primary,
    /// The formatting lint rules in fix mode
    LintFix,
}

/// Formatted code with the path that produced it
#[derive(Debug, Clone)]
pub struct Formatted {
    /// Formatted code
    pub code: String,
    /// Producing path
    pub path: FormatPath,
}

/// Format `source`, falling back to the formatting lint rules in fix mode.
///
/// Fails only when both paths fail.
pub fn format_with_fallback(
    source: &str,
    options: &FormatOptions,
    linter: &Linter,
) -> Result<Formatted, FormatError> {
    let primary = match format_script_content(source, options) {
        Ok(code) => {
            return Ok(Formatted {
                code,
                path: FormatPath::Primary,
            })
        }
        Err(err) => err,
    };
    debug!(error = %primary, "formatter failed, applying lint fixes");

    match linter.verify_and_fix(source, &RuleConfig::formatting()) {
        Ok(report) => Ok(Formatted {
            code: report.output,
            path: FormatPath::LintFix,
        }),
        Err(fallback) => Err(FormatError::Fallback {
            primary: Box::new(primary),
            fallback,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_path() {
        let linter = Linter::new();
        let result = format_with_fallback("const x=1", &FormatOptions::default(), &linter).unwrap();
        assert_eq!(result.path, FormatPath::Primary);
        assert_eq!(result.code, "const x = 1;\n");
    }

    #[test]
    fn test_lint_fix_path() {
        let linter = Linter::new();
        let source = "<View>\r\n\t<Text>{</Text>   \r\n\r\n\r\n</View>";
        let result = format_with_fallback(source, &FormatOptions::default(), &linter).unwrap();
        assert_eq!(result.path, FormatPath::LintFix);
        assert_eq!(result.code, "<View>\n  <Text>{</Text>\n\n</View>\n");
    }

    #[test]
    fn test_comments_survive_through_lint_fix() {
        let linter = Linter::new();
        let options = FormatOptions::extraction();

        let result = format_with_fallback("const x = 1; // trailing note\n", &options, &linter).unwrap();
        assert_eq!(result.path, FormatPath::LintFix);
        assert_eq!(result.code, "const x = 1; // trailing note\n");

        let source = "const a = {\n  // spacing\n  flex: 1, /* why */\n};\n";
        let result = format_with_fallback(source, &options, &linter).unwrap();
        assert!(result.code.contains("// spacing"), "{}", result.code);
        assert!(result.code.contains("/* why */"), "{}", result.code);
    }
}
