//! Rule trait and registry for lint rules.

use crate::context::LintContext;

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "no-unused-vars"), as used in a `RuleConfig`
    pub name: &'static str,
    /// Whether the rule attaches fixes to its diagnostics
    pub fixable: bool,
    /// Whether the rule needs a parsed program and its scopes
    pub requires_semantic: bool,
}

/// Rule trait for implementing lint rules
///
/// A rule inspects the context once per verification pass and reports
/// diagnostics through it. Rules that declare `requires_semantic` can rely
/// on [`LintContext::semantic`] and [`LintContext::references`] being set.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Run the rule over the current source
    fn run(&self, ctx: &mut LintContext<'_, '_>);
}

/// Registry holding all known lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with every built-in rule
    ///
    /// Which rules actually run is decided per call by a `RuleConfig`.
    pub fn with_all() -> Self {
        let mut registry = Self::new();

        // ============================================
        // Scope Rules
        // ============================================

        registry.register(Box::new(crate::rules::scope::NoUnusedVars));
        registry.register(Box::new(crate::rules::scope::NoUndef));

        // ============================================
        // React Rules
        // ============================================

        registry.register(Box::new(crate::rules::react::JsxNoUndef));

        // ============================================
        // Style Rules
        // ============================================
        // Text-level rules used by the formatter fallback. None of them
        // needs a parse, so they also work on broken code.

        registry.register(Box::new(crate::rules::style::LinebreakStyle));
        registry.register(Box::new(crate::rules::style::NoTabs));
        registry.register(Box::new(crate::rules::style::NoTrailingSpaces));
        registry.register(Box::new(crate::rules::style::NoMultipleEmptyLines));
        registry.register(Box::new(crate::rules::style::EolLast));

        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_all()
    }
}
