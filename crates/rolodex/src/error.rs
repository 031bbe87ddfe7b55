//! Error types for rolodex.
//!
//! Validation failures are expected and user-correctable; they carry the
//! full per-field report so the presentation layer can point at the
//! offending inputs. Storage failures are fatal to the operation that
//! triggered them, never to the process.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationReport;

/// The main error type for registry operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// The submitted customer data failed validation.
    #[error("customer data is invalid: {0}")]
    InvalidCustomer(ValidationReport),

    // === Storage Errors ===
    /// Failed to persist the customer collection.
    #[error("failed to write customer store at {path}: {source}")]
    StoreWrite {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error is a validation failure.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidCustomer(_))
    }

    /// The validation report, when this error is a validation failure.
    #[must_use]
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            Self::InvalidCustomer(report) => Some(report),
            _ => None,
        }
    }
}
