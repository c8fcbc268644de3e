//! Error types for cicfacts operations.
//!
//! This module defines [`CicFactsError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CicFactsError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CicFactsError::Other`) for unexpected errors
//! - Fact probes never surface errors: every store failure inside a probe is
//!   converted to a negative fact value at the point of occurrence

use thiserror::Error;

use crate::store::StoreError;

/// Core error type for cicfacts operations.
#[derive(Debug, Error)]
pub enum CicFactsError {
    /// Referenced fact is not registered.
    #[error("Unknown fact: {name}")]
    UnknownFact { name: String },

    /// A resource name failed validation.
    #[error("Invalid resource name '{value}': {reason}")]
    InvalidName { value: String, reason: String },

    /// A backing record is missing a required column.
    #[error("Backing record is missing column '{column}'")]
    ColumnMissing { column: String },

    /// Registry store error wrapper.
    #[error("Registry store error: {0}")]
    Store(#[from] StoreError),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cicfacts operations.
pub type Result<T> = std::result::Result<T, CicFactsError>;
