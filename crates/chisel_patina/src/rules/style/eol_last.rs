//! eol-last
//!
//! Require a newline at the end of non-empty files.

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, TextEdit};
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "eol-last",
    fixable: true,
    requires_semantic: false,
};

/// Require a final newline
pub struct EolLast;

impl Rule for EolLast {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let source = ctx.source;
        if source.is_empty() || source.ends_with('\n') {
            return;
        }
        let end = source.len() as u32;
        ctx.report(
            LintDiagnostic::error(META.name, "Newline required at end of file but not found.", end, end)
                .with_fix(Fix::new(TextEdit::insert(end, "\n"))),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{RuleConfig, RuleLevel};
    use crate::linter::Linter;

    fn config() -> RuleConfig {
        RuleConfig::new("t").with_rule("eol-last", RuleLevel::Error)
    }

    #[test]
    fn test_missing_newline() {
        let report = Linter::new().verify_and_fix("a;", &config()).unwrap();
        assert_eq!(report.output, "a;\n");
    }

    #[test]
    fn test_empty_and_terminated_sources() {
        let linter = Linter::new();
        assert!(linter.verify("", &config()).unwrap().is_empty());
        assert!(linter.verify("a;\n", &config()).unwrap().is_empty());
    }
}
