//! Error types for chisel_patina.

use thiserror::Error;

/// Errors that stop an analysis run before any rule executes
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to parse fragment: {0}")]
    Parse(String),
}
