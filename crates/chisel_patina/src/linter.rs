//! Main linter entry point.
//!
//! A `Linter` owns the rule registry. Each call picks the rules enabled by a
//! [`RuleConfig`], parses only when one of them needs scope information, and
//! reports diagnostics in source order.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;

use crate::config::RuleConfig;
use crate::context::LintContext;
use crate::diagnostic::{apply_edits, LintDiagnostic, Severity, TextEdit};
use crate::error::AnalysisError;
use crate::rule::{Rule, RuleRegistry};
use crate::visitor::ReferenceIndex;

/// Result of [`Linter::verify_and_fix`]
#[derive(Debug, Clone)]
pub struct FixReport {
    /// Source after all applied fixes
    pub output: String,
    /// Whether at least one fix was applied
    pub changed: bool,
    /// Diagnostics reported on `output`
    pub remaining: Vec<LintDiagnostic>,
}

impl FixReport {
    /// Check if no diagnostic is left
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Main linter struct.
///
/// The registry is built once on construction and never mutated, so a
/// `Linter` can be shared by reference between threads.
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    /// Upper bound of fix passes in [`Linter::verify_and_fix`]
    pub const MAX_FIX_PASSES: usize = 10;

    /// Create a linter with every built-in rule
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_all(),
        }
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Run the rules enabled by `config` over `source`.
    ///
    /// The source is parsed as JavaScript with JSX only when an enabled rule
    /// needs scope information. A parse failure aborts the run.
    pub fn verify(
        &self,
        source: &str,
        config: &RuleConfig,
    ) -> Result<Vec<LintDiagnostic>, AnalysisError> {
        let enabled = self.enabled_rules(config);
        if enabled.is_empty() {
            return Ok(Vec::new());
        }

        let mut diagnostics = if enabled.iter().any(|(rule, _)| rule.meta().requires_semantic) {
            Self::verify_parsed(source, config, &enabled)?
        } else {
            let mut ctx = LintContext::new(source, config);
            run_rules(&mut ctx, &enabled);
            ctx.into_diagnostics()
        };

        diagnostics.sort_by_key(|d| (d.start, d.end));
        Ok(diagnostics)
    }

    /// Rules turned on by `config`, with their configured severity
    fn enabled_rules(&self, config: &RuleConfig) -> Vec<(&dyn Rule, Severity)> {
        self.registry
            .rules()
            .iter()
            .filter_map(|rule| {
                config
                    .level(rule.meta().name)
                    .severity()
                    .map(|severity| (rule.as_ref(), severity))
            })
            .collect()
    }

    fn verify_parsed(
        source: &str,
        config: &RuleConfig,
        enabled: &[(&dyn Rule, Severity)],
    ) -> Result<Vec<LintDiagnostic>, AnalysisError> {
        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();

        if parsed.panicked || !parsed.errors.is_empty() {
            let messages: Vec<String> = parsed.errors.iter().map(|e| e.to_string()).collect();
            return Err(AnalysisError::Parse(messages.join("\n")));
        }

        let semantic_ret = SemanticBuilder::new()
            .with_check_syntax_error(true)
            .build(&parsed.program);

        if !semantic_ret.errors.is_empty() {
            let messages: Vec<String> =
                semantic_ret.errors.iter().map(|e| e.to_string()).collect();
            return Err(AnalysisError::Parse(messages.join("\n")));
        }

        let semantic = semantic_ret.semantic;
        let references = ReferenceIndex::build(&parsed.program, semantic.scoping());

        let mut ctx = LintContext::with_semantic(source, config, &semantic, &references);
        run_rules(&mut ctx, enabled);
        Ok(ctx.into_diagnostics())
    }

    /// Identifier names quoted in the diagnostics of `source`.
    ///
    /// Names appear once, in the order of their first diagnostic.
    pub fn extract_entity_names(
        &self,
        source: &str,
        config: &RuleConfig,
    ) -> Result<Vec<String>, AnalysisError> {
        let diagnostics = self.verify(source, config)?;
        let mut names: Vec<String> = Vec::with_capacity(diagnostics.len());
        for name in diagnostics.iter().filter_map(LintDiagnostic::entity_name) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Apply fixes of the enabled rules until the source is stable.
    ///
    /// Each pass applies every fix that does not overlap an earlier one.
    /// At most [`Linter::MAX_FIX_PASSES`] passes run. Without an enabled
    /// fixable rule this is a single [`Linter::verify`].
    pub fn verify_and_fix(
        &self,
        source: &str,
        config: &RuleConfig,
    ) -> Result<FixReport, AnalysisError> {
        if !self
            .enabled_rules(config)
            .iter()
            .any(|(rule, _)| rule.meta().fixable)
        {
            return Ok(FixReport {
                output: source.to_string(),
                changed: false,
                remaining: self.verify(source, config)?,
            });
        }

        let mut output = source.to_string();
        let mut changed = false;
        let mut passes = 0;

        loop {
            let diagnostics = self.verify(&output, config)?;
            let edits = if passes < Self::MAX_FIX_PASSES {
                collect_fix_edits(&diagnostics)
            } else {
                Vec::new()
            };

            if edits.is_empty() {
                return Ok(FixReport {
                    output,
                    changed,
                    remaining: diagnostics,
                });
            }

            let next = apply_edits(&output, edits);
            if next == output {
                return Ok(FixReport {
                    output,
                    changed,
                    remaining: diagnostics,
                });
            }

            output = next;
            changed = true;
            passes += 1;
        }
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

fn run_rules(ctx: &mut LintContext<'_, '_>, enabled: &[(&dyn Rule, Severity)]) {
    for (rule, severity) in enabled {
        let meta = rule.meta();
        if meta.requires_semantic && ctx.semantic().is_none() {
            continue;
        }
        ctx.enter_rule(meta.name, *severity);
        rule.run(ctx);
    }
}

/// Edits of all fixes that do not overlap a fix starting earlier
fn collect_fix_edits(diagnostics: &[LintDiagnostic]) -> Vec<TextEdit> {
    let mut fixes: Vec<_> = diagnostics
        .iter()
        .filter_map(|d| d.fix.as_ref())
        .filter_map(|fix| fix.range().map(|range| (range, fix)))
        .collect();
    fixes.sort_by_key(|((start, end), _)| (*start, *end));

    let mut edits = Vec::new();
    let mut last_end: Option<u32> = None;
    for ((start, end), fix) in fixes {
        if last_end.is_some_and(|last| start < last) {
            continue;
        }
        edits.extend(fix.edits.iter().cloned());
        last_end = Some(end);
    }
    edits
}
