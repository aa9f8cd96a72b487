//! Rule configuration for a single linter invocation.
//!
//! A `RuleConfig` names the rules to run and their levels, in the same
//! shape as an ESLint `rules` block:
//!
//! ```json
//! {
//!   "name": "undefined-refs",
//!   "rules": { "no-undef": "error", "react/jsx-no-undef": "warn" },
//!   "globals": ["__DEV__"]
//! }
//! ```

use chisel_carton::{CompactString, FxHashMap};
use serde::{Deserialize, Serialize};

use crate::diagnostic::Severity;

/// Level of a configured rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Rule does not run
    #[default]
    Off,
    /// Rule reports warnings
    Warn,
    /// Rule reports errors
    Error,
}

impl RuleLevel {
    /// Severity reported by an enabled rule
    #[inline]
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

/// A named set of rule levels plus extra known globals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Name of this rule set (for logs)
    #[serde(default)]
    pub name: CompactString,
    /// Rule name to level
    #[serde(default)]
    pub rules: FxHashMap<CompactString, RuleLevel>,
    /// Identifiers treated as declared by scope rules
    #[serde(default)]
    pub globals: Vec<CompactString>,
}

impl RuleConfig {
    /// Create an empty rule set
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the level of a rule
    pub fn with_rule(mut self, rule: impl Into<CompactString>, level: RuleLevel) -> Self {
        self.rules.insert(rule.into(), level);
        self
    }

    /// Add identifiers that should be treated as declared
    pub fn with_globals<I, S>(mut self, globals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.globals.extend(globals.into_iter().map(Into::into));
        self
    }

    /// Level configured for `rule` (off when absent)
    #[inline]
    pub fn level(&self, rule: &str) -> RuleLevel {
        self.rules.get(rule).copied().unwrap_or_default()
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_enabled(&self, rule: &str) -> bool {
        self.level(rule) != RuleLevel::Off
    }

    /// Check if a name was declared as a global by this config
    #[inline]
    pub fn is_global(&self, name: &str) -> bool {
        self.globals.iter().any(|g| g.as_str() == name)
    }

    /// Identifiers bound but never read
    pub fn unused_vars() -> Self {
        Self::new("unused-vars").with_rule("no-unused-vars", RuleLevel::Error)
    }

    /// Identifiers read but never bound, including JSX component names
    pub fn undefined_refs() -> Self {
        Self::new("undefined-refs")
            .with_rule("react/jsx-no-undef", RuleLevel::Error)
            .with_rule("no-undef", RuleLevel::Error)
    }

    /// Text-level formatting rules used by the formatter fallback
    pub fn formatting() -> Self {
        Self::new("formatting")
            .with_rule("linebreak-style", RuleLevel::Error)
            .with_rule("no-tabs", RuleLevel::Error)
            .with_rule("no-trailing-spaces", RuleLevel::Error)
            .with_rule("no-multiple-empty-lines", RuleLevel::Error)
            .with_rule("eol-last", RuleLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let unused = RuleConfig::unused_vars();
        assert!(unused.is_enabled("no-unused-vars"));
        assert!(!unused.is_enabled("no-undef"));

        let undefined = RuleConfig::undefined_refs();
        assert!(undefined.is_enabled("no-undef"));
        assert!(undefined.is_enabled("react/jsx-no-undef"));
        assert!(!undefined.is_enabled("no-unused-vars"));

        let formatting = RuleConfig::formatting();
        assert!(formatting.is_enabled("no-trailing-spaces"));
        assert!(!formatting.is_enabled("no-undef"));
    }

    #[test]
    fn test_deserialize() {
        let config: RuleConfig = serde_json::from_str(
            r#"{ "name": "custom", "rules": { "no-undef": "warn", "no-unused-vars": "off" }, "globals": ["__DEV__"] }"#,
        )
        .unwrap();
        assert_eq!(config.name.as_str(), "custom");
        assert_eq!(config.level("no-undef"), RuleLevel::Warn);
        assert_eq!(config.level("no-unused-vars"), RuleLevel::Off);
        assert_eq!(config.level("eol-last"), RuleLevel::Off);
        assert!(config.is_global("__DEV__"));
    }

    #[test]
    fn test_level_severity() {
        assert_eq!(RuleLevel::Off.severity(), None);
        assert_eq!(RuleLevel::Warn.severity(), Some(Severity::Warning));
        assert_eq!(RuleLevel::Error.severity(), Some(Severity::Error));
    }
}
