//! react/jsx-no-undef
//!
//! Disallow undeclared components in JSX.
//!
//! Only globals named by the configuration count as declared: built-in
//! names such as `Image` or `Text` are host objects, not components.
//!
//! ## Examples
//!
//! ### Invalid
//! ```jsx
//! <Card.Title>Hello</Card.Title>
//! ```
//!
//! ### Valid
//! ```jsx
//! import { Text } from "react-native";
//! <Text>Hello</Text>
//! ```

use crate::context::LintContext;
use crate::rule::{Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "react/jsx-no-undef",
    fixable: false,
    requires_semantic: true,
};

/// Disallow undeclared JSX components
pub struct JsxNoUndef;

impl Rule for JsxNoUndef {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_, '_>) {
        let Some(references) = ctx.references() else {
            return;
        };

        for reference in &references.unresolved {
            if !reference.in_jsx_name || ctx.config().is_global(&reference.name) {
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

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(JsxNoUndef));
        Linter::with_registry(registry)
    }

    fn config() -> RuleConfig {
        RuleConfig::new("test").with_rule("react/jsx-no-undef", RuleLevel::Error)
    }

    #[test]
    fn test_valid_imported_component() {
        let source = "import { Text } from 'react-native';\n<Text>Hi</Text>;";
        let names = create_linter().extract_entity_names(source, &config()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_invalid_undeclared_component() {
        let source = "<View><Text>{title}</Text><Card.Title /></View>;";
        let names = create_linter().extract_entity_names(source, &config()).unwrap();
        assert_eq!(names, vec!["View", "Text", "Card"]);
    }

    #[test]
    fn test_intrinsic_elements_are_ignored() {
        let names = create_linter()
            .extract_entity_names("<div><span /></div>;", &config())
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_config_globals() {
        let config = config().with_globals(["View"]);
        let names = create_linter()
            .extract_entity_names("<View />;", &config)
            .unwrap();
        assert!(names.is_empty());
    }
}
