//! no-trailing-spaces
//!
//! Disallow trailing whitespace at the end of lines.

use super::lines_with_offsets;
use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, TextEdit};
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "no-trailing-spaces",
    fixable: true,
    requires_semantic: false,
};

/// Disallow trailing whitespace
pub struct NoTrailingSpaces;

impl Rule for NoTrailingSpaces {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let source = ctx.source;
        for (offset, line) in lines_with_offsets(source) {
            let trimmed = line.trim_end_matches([' ', '\t']);
            if trimmed.len() == line.len() {
                continue;
            }
            let start = offset + trimmed.len() as u32;
            let end = offset + line.len() as u32;
            ctx.report(
                LintDiagnostic::error(META.name, "Trailing spaces not allowed.", start, end)
                    .with_fix(Fix::new(TextEdit::delete(start, end))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{RuleConfig, RuleLevel};
    use crate::linter::Linter;

    fn config() -> RuleConfig {
        RuleConfig::new("t").with_rule("no-trailing-spaces", RuleLevel::Error)
    }

    #[test]
    fn test_reports_each_line() {
        let diagnostics = Linter::new().verify("a;  \nb;\t\nc;\n", &config()).unwrap();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!((diagnostics[0].start, diagnostics[0].end), (2, 4));
    }

    #[test]
    fn test_fix_keeps_crlf() {
        let report = Linter::new().verify_and_fix("a; \r\nb;", &config()).unwrap();
        assert_eq!(report.output, "a;\r\nb;");
    }
}
