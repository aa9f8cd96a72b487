//! # chisel_patina
//!
//! Patina - The identifier analyzer for Chisel.
//! Rule-based linter for JSX fragments.
//!
//! ## Name Origin
//!
//! **Patina** (/ˈpætɪnə/) refers to the layer that forms on bronze and
//! copper over time, revealing what the surface has been exposed to.
//! `chisel_patina` reveals which identifiers a fragment leans on and which
//! it leaves untouched.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chisel_patina::{Linter, RuleConfig};
//!
//! let linter = Linter::new();
//! let fragment = "const unused = 1;\n<Card title={title} />;";
//!
//! let unused = linter.extract_entity_names(fragment, &RuleConfig::unused_vars())?;
//! assert_eq!(unused, vec!["unused"]);
//!
//! let undefined = linter.extract_entity_names(fragment, &RuleConfig::undefined_refs())?;
//! assert_eq!(undefined, vec!["Card", "title"]);
//! ```
//!
//! ## Rules
//!
//! ### Scope Rules
//! - `no-unused-vars` - Disallow declarations that are never read
//! - `no-undef` - Disallow references to undeclared variables
//!
//! ### React Rules
//! - `react/jsx-no-undef` - Disallow undeclared components in JSX
//!
//! ### Style Rules (fixable, no parse needed)
//! - `linebreak-style` - Enforce LF line breaks
//! - `no-tabs` - Disallow tabs in indentation
//! - `no-trailing-spaces` - Disallow trailing whitespace
//! - `no-multiple-empty-lines` - Disallow consecutive blank lines
//! - `eol-last` - Require a final newline

pub mod config;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod linter;
pub mod rule;
pub mod rules;
pub mod visitor;

pub use config::{RuleConfig, RuleLevel};
pub use context::LintContext;
pub use diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
pub use error::AnalysisError;
pub use linter::{FixReport, Linter};
pub use rule::{Rule, RuleMeta, RuleRegistry};
pub use visitor::{ReferenceIndex, UnresolvedReference};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_analysis() {
        let linter = Linter::new();
        let fragment = "const unused = 1;\n<Card title={title} />;";

        let unused = linter
            .extract_entity_names(fragment, &RuleConfig::unused_vars())
            .unwrap();
        assert_eq!(unused, vec!["unused"]);

        let undefined = linter
            .extract_entity_names(fragment, &RuleConfig::undefined_refs())
            .unwrap();
        assert_eq!(undefined, vec!["Card", "title"]);
    }

    #[test]
    fn test_linter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Linter>();
    }
}
