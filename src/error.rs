// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the converter can hit. All of them end the run.
#[derive(Error, Debug)]
pub enum SpoilerError {
    #[error("Malformed card database (line {line}): {message}")]
    Parse { line: usize, message: String },

    #[error("No card named \"{0}\"")]
    NotFound(String),

    #[error("Card \"{card}\" has no {field}")]
    MissingField { card: String, field: &'static str },

    #[error("Card \"{card}\": {field} contains {ch:?}, which is not representable in Latin-1")]
    Encoding { card: String, field: &'static str, ch: char },

    #[error("Cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} (try --help)")]
    Usage(String),
}

impl SpoilerError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        SpoilerError::Parse { line, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, SpoilerError>;
