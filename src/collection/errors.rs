//! # Collection Errors
//!
//! Error types for building versioned collections.

use thiserror::Error;

/// Result type for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors raised while building a collection.
///
/// Construction is synchronous and deterministic, so every error surfaces
/// immediately to the caller and nothing is retried.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Two records share a group key and version under `DuplicatePolicy::Reject`.
    #[error("duplicate version {version} for group {key}")]
    DuplicateVersion {
        /// Debug rendering of the group key.
        key: String,
        /// The repeated version.
        version: String,
    },

    /// An input element could not be read as a record.
    #[error("record {index} is invalid: {source}")]
    Record {
        /// Position of the element in the input array.
        index: usize,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The input document is not a JSON array.
    #[error("malformed record list: {0}")]
    Json(#[from] serde_json::Error),
}
