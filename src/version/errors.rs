//! Version parsing errors.

use thiserror::Error;

/// Result type for version operations.
pub type VersionResult<T> = Result<T, VersionError>;

/// Errors produced while parsing or comparing versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The string is not a `MAJOR.MINOR.PATCH` version.
    #[error("invalid version {input:?}: {reason}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl VersionError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        VersionError::Invalid {
            input: input.to_string(),
            reason,
        }
    }
}
