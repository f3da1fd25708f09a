//! Unified application error type.
//! Every module (canvas, core, export, config) returns AppError so failures
//! surface through a single type up to `main`.

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
    // Upstream API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid settings file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
