//! Error types for the NLU conversion passes.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`CsvError`] - reading the tabular side
//! - [`DocumentError`] - reading the structured (YAML) side
//! - [`ConvertError`] - top-level errors returned by a conversion pass
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading an intent CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the underlying stream.
    #[error("Failed to read CSV: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV record.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Content could not be decoded.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// No header row at all.
    #[error("CSV file is empty")]
    EmptyFile,

    /// A required column is absent from the header row.
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// Document Errors
// =============================================================================

/// Errors while reading an NLU YAML document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read the document.
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// Not valid YAML.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An expected key is absent.
    #[error("Malformed document: missing key '{0}'")]
    MissingKey(String),

    /// A key that must hold a list holds something else.
    #[error("Malformed document: '{0}' is not a list")]
    NotASequence(String),

    /// An entry of the `nlu` list has the wrong shape.
    #[error("Malformed document: entry {index}: {message}")]
    InvalidEntry { index: usize, message: String },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert`]
/// and both directional passes.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// YAML document error.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Opening, reading or writing a file failed.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the tabular input lacked a required column.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::Csv(CsvError::MissingColumn(_)))
    }

    /// True when the structured input lacked an expected key.
    pub fn is_malformed_document(&self) -> bool {
        matches!(
            self,
            Self::Document(
                DocumentError::MissingKey(_)
                    | DocumentError::NotASequence(_)
                    | DocumentError::InvalidEntry { .. }
            )
        )
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Result type for conversion passes.
pub type ConvertResult<T> = Result<T, ConvertError>;
