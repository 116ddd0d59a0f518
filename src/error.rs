// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::lang::Lang;

#[derive(Debug, Error)]
pub enum WingmanError {
    #[error("no go.mod found above {start}")]
    ModuleDescriptorNotFound { start: PathBuf },

    #[error("module descriptor unreadable: {reason} (path: {path})")]
    ModuleDescriptorUnreadable { path: PathBuf, reason: String },

    #[error("failed to initialize {lang} parser: {reason}")]
    ParserInitializationFailed { lang: Lang, reason: String },

    #[error("failed to read file: {source} (path: {path})")]
    FileReadFailed {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("directory walk failed: {0}")]
    Walk(String),

    #[error("invalid config: {reason} (path: {path})")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("model client error: {0}")]
    Llm(String),
}

pub type Result<T> = std::result::Result<T, WingmanError>;

impl WingmanError {
    /// Wraps an I/O failure on `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WingmanError::FileReadFailed {
            source,
            path: path.into(),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for WingmanError {
    fn from(e: walkdir::Error) -> Self {
        WingmanError::Walk(e.to_string())
    }
}
