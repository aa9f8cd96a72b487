//! Identifier analysis of extracted fragments.
//!
//! The strict path transforms the fragment to plain JavaScript with JSX and
//! runs the scope rules over it. When that path fails, undefined references
//! fall back to [`heuristic_undefined_refs`]; unused bindings have no
//! fallback and are reported as unavailable.

use chisel_carton::CompactString;
use chisel_glyph::{format_script, format_with_fallback, FormatError, FormatOptions};
use chisel_patina::{Linter, RuleConfig};
use tracing::debug;

use crate::config::ChiselConfig;
use crate::error::AnalysisFailure;
use crate::heuristic::heuristic_undefined_refs;
use crate::transform::transform;

/// Outcome of an identifier query
#[derive(Debug)]
pub enum Analysis {
    /// Names reported by the scope rules
    Strict(Vec<String>),
    /// Names guessed from the raw fragment text
    Heuristic(Vec<String>),
    /// The fragment could not be analyzed
    Unavailable(AnalysisFailure),
}

impl Analysis {
    /// Names found, empty when unavailable
    pub fn names(&self) -> &[String] {
        match self {
            Analysis::Strict(names) | Analysis::Heuristic(names) => names,
            Analysis::Unavailable(_) => &[],
        }
    }

    pub fn into_names(self) -> Vec<String> {
        match self {
            Analysis::Strict(names) | Analysis::Heuristic(names) => names,
            Analysis::Unavailable(_) => Vec::new(),
        }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        matches!(self, Analysis::Strict(_))
    }
}

/// Entry point for fragment analysis and formatting.
///
/// Holds one [`Linter`] for its whole lifetime; every query parses the
/// fragment afresh, so an `Extractor` can be shared between threads.
pub struct Extractor {
    linter: Linter,
    format_options: FormatOptions,
    globals: Vec<CompactString>,
}

impl Extractor {
    /// Create an extractor with default options
    pub fn new() -> Self {
        Self {
            linter: Linter::new(),
            format_options: FormatOptions::default(),
            globals: Vec::new(),
        }
    }

    /// Create an extractor from a loaded configuration
    pub fn with_config(config: &ChiselConfig) -> Self {
        Self {
            linter: Linter::new(),
            format_options: config.format.clone(),
            globals: config
                .analysis
                .globals
                .iter()
                .map(|g| CompactString::from(g.as_str()))
                .collect(),
        }
    }

    #[inline]
    pub fn linter(&self) -> &Linter {
        &self.linter
    }

    /// Bindings declared in `code` but never read.
    pub fn unused_vars(&self, code: &str) -> Analysis {
        match self.strict(code, RuleConfig::unused_vars()) {
            Ok(names) => Analysis::Strict(names),
            Err(failure) => {
                debug!(error = %failure, "unused variable analysis unavailable");
                Analysis::Unavailable(failure)
            }
        }
    }

    /// Identifiers and components read by `code` but never declared.
    ///
    /// `style_binding` is the name of the style object the fragment keeps
    /// referencing after extraction; it is never reported.
    pub fn undefined_vars(&self, code: &str, style_binding: &str) -> Analysis {
        match self.strict(code, RuleConfig::undefined_refs()) {
            Ok(mut names) => {
                names.retain(|name| name != style_binding);
                Analysis::Strict(names)
            }
            Err(failure) => {
                debug!(error = %failure, "falling back to heuristic reference scan");
                Analysis::Heuristic(heuristic_undefined_refs(code, style_binding))
            }
        }
    }

    /// Format extracted code with the extraction style.
    ///
    /// Falls back to the text-level lint fixes when `code` does not parse.
    pub fn pretify(&self, code: &str) -> Result<String, FormatError> {
        format_with_fallback(code, &FormatOptions::extraction(), &self.linter)
            .map(|formatted| formatted.code)
    }

    /// Format `code` with the configured options.
    pub fn format(&self, code: &str) -> Result<String, FormatError> {
        format_script(code, &self.format_options)
    }

    fn strict(&self, code: &str, config: RuleConfig) -> Result<Vec<String>, AnalysisFailure> {
        let transformed = transform(code)?;
        let config = config.with_globals(self.globals.iter().cloned());
        Ok(self.linter.extract_entity_names(&transformed, &config)?)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
