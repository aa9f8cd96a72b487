//! no-undef
//!
//! Disallow references to undeclared variables.
//!
//! Standard ECMAScript and React Native host globals, plus the globals of
//! the active configuration, count as declared. A bare `typeof x` operand
//! is not reported. JSX element names are left to `react/jsx-no-undef`.
//!
//! ## Examples
//!
//! ### Invalid
//! ```jsx
//! const label = formatTitle(title);
//! ```
//!
//! ### Valid
//! ```jsx
//! const title = "Hi";
//! if (typeof window !== "undefined") console.log(title);
//! ```

use crate::context::LintContext;
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "no-undef",
    fixable: false,
    requires_semantic: true,
};

/// Disallow undeclared variables
pub struct NoUndef;

impl Rule for NoUndef {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let Some(references) = ctx.references() else {
            return;
        };

        for reference in &references.unresolved {
            if reference.in_jsx_name || ctx.is_global(&reference.name) {
                continue;
            }
            ctx.report_at(
                format!("'{}' is not defined.", reference.name),
                reference.span.start,
                reference.span.end,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleConfig, RuleLevel};
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn undefined(source: &str, globals: &[&str]) -> Vec<String> {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(NoUndef));
        let config = RuleConfig::new("test")
            .with_rule("no-undef", RuleLevel::Error)
            .with_globals(globals.iter().copied());
        Linter::with_registry(registry)
            .extract_entity_names(source, &config)
            .unwrap()
    }

    #[test]
    fn test_valid_declared() {
        assert!(undefined("const a = 1; a;", &[]).is_empty());
    }

    #[test]
    fn test_invalid_undeclared() {
        assert_eq!(undefined("formatTitle(title);", &[]), vec!["formatTitle", "title"]);
    }

    #[test]
    fn test_known_globals() {
        assert!(undefined("console.log(JSON.stringify(Math.max(1, 2)));", &[]).is_empty());
    }

    #[test]
    fn test_config_globals() {
        assert!(undefined("if (__DEV__) {}", &["__DEV__"]).is_empty());
    }

    #[test]
    fn test_typeof_is_allowed() {
        assert!(undefined("typeof maybe === 'undefined';", &[]).is_empty());
        assert_eq!(undefined("typeof (maybe + other);", &[]), vec!["maybe", "other"]);
    }

    #[test]
    fn test_jsx_names_are_skipped() {
        assert_eq!(undefined("<Card title={title} />;", &[]), vec!["title"]);
    }
}
