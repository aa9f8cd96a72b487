//! Error types for chisel_glyph formatter.

use chisel_patina::AnalysisError;
use thiserror::Error;

/// Errors that can occur during formatting
#[derive(Debug, Error)]
pub enum FormatError {
    /// Error parsing JavaScript/TypeScript
    #[error("Failed to parse script: {0}")]
    ScriptParseError(String),

    /// The printer lost comments of the source
    #[error("Formatter dropped {} of {expected} comments", expected - printed)]
    CommentsDropped { expected: usize, printed: usize },

    /// Both the formatter and the lint fix fallback failed
    #[error("Failed to format script ({primary}); lint fallback failed ({fallback})")]
    Fallback {
        primary: Box<FormatError>,
        fallback: AnalysisError,
    },
}
