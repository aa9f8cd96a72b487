//! Error types for chisel.

use chisel_patina::AnalysisError;
use thiserror::Error;

/// Errors of the source transformer
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Failed to parse source: {0}")]
    Parse(String),

    #[error("Failed to analyze source: {0}")]
    Semantic(String),

    #[error("Failed to transform source: {0}")]
    Transform(String),
}

/// Why a strict analysis produced no result
#[derive(Debug, Error)]
pub enum AnalysisFailure {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Errors of [`crate::autofix`]
#[derive(Debug, Error)]
pub enum AutofixError {
    /// No `chisel.config.json` in the file's directory or its ancestors
    #[error("No chisel.config.json found from {0}")]
    ConfigNotFound(std::path::PathBuf),

    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Format(#[from] chisel_glyph::FormatError),

    #[error("Autofix timed out after {0:?}")]
    TimedOut(std::time::Duration),

    #[error("Autofix task failed: {0}")]
    Join(String),
}
