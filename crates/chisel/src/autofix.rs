//! Asynchronous autofix with project-local formatting options.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::config::{parse_config, CONFIG_FILE_NAME};
use crate::error::AutofixError;

/// Format `code` with the options of the `chisel.config.json` closest to
/// `file_path`.
///
/// The lookup starts in the directory containing `file_path` and walks up
/// to the filesystem root. The whole operation is bounded by `timeout`;
/// dropping the future cancels it.
pub async fn autofix(code: &str, file_path: &Path, timeout: Duration) -> Result<String, AutofixError> {
    match tokio::time::timeout(timeout, run(code.to_string(), file_path)).await {
        Ok(result) => result,
        Err(_) => Err(AutofixError::TimedOut(timeout)),
    }
}

/// [`autofix`], returning `code` unchanged on any failure.
pub async fn autofix_or_original(code: &str, file_path: &Path, timeout: Duration) -> String {
    match autofix(code, file_path, timeout).await {
        Ok(fixed) => fixed,
        Err(e) => {
            warn!(path = %file_path.display(), error = %e, "autofix failed");
            code.to_string()
        }
    }
}

async fn run(code: String, file_path: &Path) -> Result<String, AutofixError> {
    let config_path = discover_config(file_path).await?;

    let content = tokio::fs::read_to_string(&config_path)
        .await
        .map_err(|source| AutofixError::ConfigRead {
            path: config_path.clone(),
            source,
        })?;
    let config = parse_config(&content).map_err(|source| AutofixError::ConfigParse {
        path: config_path,
        source,
    })?;

    let options = config.format;
    let formatted = tokio::task::spawn_blocking(move || chisel_glyph::format_script(&code, &options))
        .await
        .map_err(|e| AutofixError::Join(e.to_string()))??;
    Ok(formatted)
}

async fn discover_config(file_path: &Path) -> Result<PathBuf, AutofixError> {
    let start = file_path.parent().unwrap_or(file_path);
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        // Unreadable directories count as "not here".
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            return Ok(candidate);
        }
    }
    Err(AutofixError::ConfigNotFound(start.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn project(config: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), config).unwrap();
        let nested = dir.path().join("src/components");
        std::fs::create_dir_all(&nested).unwrap();
        let file = nested.join("Card.tsx");
        (dir, file)
    }

    #[tokio::test]
    async fn test_autofix_uses_project_config() {
        let (_dir, file) = project(r#"{ "format": { "singleQuote": true, "semi": false } }"#);
        let fixed = autofix("const a = \"x\";", &file, TIMEOUT).await.unwrap();
        assert_eq!(fixed, "const a = 'x'\n");
    }

    #[tokio::test]
    async fn test_autofix_config_parse_error() {
        let (_dir, file) = project("{ format: ");
        let result = autofix("const a = 1;", &file, TIMEOUT).await;
        assert!(matches!(result, Err(AutofixError::ConfigParse { .. })));
    }

    #[tokio::test]
    async fn test_autofix_format_error() {
        let (_dir, file) = project("{}");
        let result = autofix("const = ;", &file, TIMEOUT).await;
        assert!(matches!(result, Err(AutofixError::Format(_))));
    }

    #[tokio::test]
    async fn test_autofix_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Card.tsx");
        let result = autofix("const a = 1;", &file, TIMEOUT).await;
        assert!(matches!(result, Err(AutofixError::ConfigNotFound(_))));
    }

    #[tokio::test]
    async fn test_autofix_or_original() {
        let (_dir, file) = project("{}");
        let code = "const = ;";
        assert_eq!(autofix_or_original(code, &file, TIMEOUT).await, code);
    }
}
