//! Configuration file loading for chisel.
//!
//! Reads `chisel.config.json` from a project directory. The `format`
//! section uses Prettier option names.

use std::path::{Path, PathBuf};

use chisel_glyph::FormatOptions;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// File name looked up in project directories
pub const CONFIG_FILE_NAME: &str = "chisel.config.json";

/// Top-level chisel configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChiselConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Formatting options for extracted code and autofix.
    #[serde(default)]
    pub format: FormatOptions,

    /// Identifier analysis configuration.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Configuration for identifier analysis.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Identifiers provided by the runtime (e.g., `["__DEV__"]`).
    ///
    /// They are never reported as undefined.
    #[serde(default)]
    pub globals: Vec<String>,
}

/// Parse the contents of a configuration file.
pub fn parse_config(content: &str) -> Result<ChiselConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load `chisel.config.json` from the given directory (or CWD if None).
///
/// A missing file yields the defaults; an unreadable or invalid one is
/// reported with a warning and also yields the defaults.
pub fn load_config(dir: Option<&Path>) -> ChiselConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return ChiselConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "failed to parse config");
                ChiselConfig::default()
            }
        },
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "failed to read config");
            ChiselConfig::default()
        }
    }
}

/// Find `chisel.config.json` in `start` or its closest ancestor.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
