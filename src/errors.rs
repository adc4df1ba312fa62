use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No input files in {0}")]
    EmptyInput(PathBuf),

    #[error("Book not found: {0}")]
    MissingBook(String),

    #[error("Word pool is empty: {0}")]
    EmptyPool(String),

    #[error("Unknown size tier: {0}")]
    UnknownTier(usize),

    #[error("Unknown lexicon profile: {0}")]
    UnknownProfile(usize),

    #[error("{path}:{line}: {reason}")]
    Malformed { path: PathBuf, line: usize, reason: String },
}

impl GenError {
    /// Wraps an I/O error with the path it was raised for.
    pub fn io(path: &Path, e: std::io::Error) -> Self {
        GenError::Io(format!("{}: {}", path.display(), e))
    }

    pub fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> Self {
        GenError::Malformed { path: path.to_path_buf(), line, reason: reason.into() }
    }
}
