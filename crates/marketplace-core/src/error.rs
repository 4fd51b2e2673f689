//! Error types for the marketplace signing toolkit.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Typed-data schema mismatch: {message}")]
    SchemaMismatch { message: String },

    #[error("Invalid signature format: {message}")]
    InvalidSignatureFormat { message: String },

    #[error("Signature recovery failed: {message}")]
    RecoveryFailure { message: String },

    #[error("Signing error: {message}")]
    Signing { message: String },

    #[error("Submission error: {message}")]
    Submission { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
