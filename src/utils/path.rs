//! Path utilities: expand ~, derive default output paths, detect input format.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Supported input document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `plan.yaml` -> `plan.pdf`, next to the input.
pub fn default_output_for(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

pub fn input_format(path: &Path) -> AppResult<InputFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
        Some("json") => Ok(InputFormat::Json),
        _ => Err(AppError::UnsupportedInput(path.display().to_string())),
    }
}
