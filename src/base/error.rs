//! Errors for version values.

use thiserror::Error;

/// Errors produced when constructing or parsing version values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Malformed version text or an invalid qualifier.
    #[error("invalid version: {0}")]
    InvalidVersion(String),

    /// A variance keyword that is none of `none`, `micro`, `minor`, `major`.
    #[error("unknown variance '{0}'")]
    UnknownVariance(String),
}

impl VersionError {
    pub(crate) fn not_a_version(text: &str) -> Self {
        Self::InvalidVersion(format!("'{text}' is not a version"))
    }
}
