//! Lint context for rule execution.

use chisel_carton::{is_known_global, CompactString};
use oxc_semantic::Semantic;

use crate::config::RuleConfig;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::visitor::ReferenceIndex;

/// Lint context provides utilities for rules during execution.
///
/// `'c` is the borrow of the analysis products, `'a` the lifetime of the
/// arena that holds the parsed program.
pub struct LintContext<'c, 'a> {
    /// Source code being linted
    pub source: &'c str,
    /// Scope analysis, present when a rule of the run needs it
    semantic: Option<&'c Semantic<'a>>,
    /// References collected from the program, present with `semantic`
    references: Option<&'c ReferenceIndex>,
    /// Configuration of the current run
    config: &'c RuleConfig,
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by the linter before calling each rule)
    pub current_rule: &'static str,
    /// Severity configured for the current rule
    current_severity: Severity,
}

impl<'c, 'a> LintContext<'c, 'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    /// Create a context for text-only rules
    #[inline]
    pub fn new(source: &'c str, config: &'c RuleConfig) -> Self {
        Self {
            source,
            semantic: None,
            references: None,
            config,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            current_severity: Severity::Error,
        }
    }

    /// Create a context with scope analysis
    #[inline]
    pub fn with_semantic(
        source: &'c str,
        config: &'c RuleConfig,
        semantic: &'c Semantic<'a>,
        references: &'c ReferenceIndex,
    ) -> Self {
        Self {
            semantic: Some(semantic),
            references: Some(references),
            ..Self::new(source, config)
        }
    }

    /// Scope analysis of the source, if parsed
    #[inline]
    pub fn semantic(&self) -> Option<&'c Semantic<'a>> {
        self.semantic
    }

    /// Reference index of the source, if parsed
    #[inline]
    pub fn references(&self) -> Option<&'c ReferenceIndex> {
        self.references
    }

    /// Select the rule that subsequent reports belong to
    #[inline]
    pub(crate) fn enter_rule(&mut self, name: &'static str, severity: Severity) {
        self.current_rule = name;
        self.current_severity = severity;
    }

    /// Configuration of the current run
    #[inline]
    pub fn config(&self) -> &'c RuleConfig {
        self.config
    }

    /// Check if a name is declared outside the analyzed text
    #[inline]
    pub fn is_global(&self, name: &str) -> bool {
        is_known_global(name) || self.config.is_global(name)
    }

    /// Report a lint diagnostic with the configured severity of the current rule
    #[inline]
    pub fn report(&mut self, mut diagnostic: LintDiagnostic) {
        diagnostic.severity = self.current_severity;
        self.diagnostics.push(diagnostic);
    }

    /// Report a diagnostic for the current rule over a byte range
    #[inline]
    pub fn report_at(&mut self, message: impl Into<CompactString>, start: u32, end: u32) {
        self.report(LintDiagnostic::error(self.current_rule, message, start, end));
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }
}
