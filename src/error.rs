// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QaError>;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Undecodable byte sequence in {path} (detected encoding: {encoding})")]
    Encoding { path: PathBuf, encoding: String },

    #[error("PDF extraction failed for {path}: {message}")]
    PdfExtraction { path: PathBuf, message: String },

    #[error("Embedding request failed: {0}")]
    Embedding(String),

    #[error("Completion request failed: {0}")]
    Completion(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
