//! Unified application error type.
//! All modules (model, layout, render, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Document decoding
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported input file: {0} (expected .yaml, .yml or .json)")]
    UnsupportedInput(String),

    // ---------------------------
    // Format errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    // ---------------------------
    // Configuration errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ---------------------------
    // Render errors
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),
}

pub type AppResult<T> = Result<T, AppError>;
