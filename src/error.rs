//! Error types for the access control engine

use thiserror::Error;

/// Errors that can occur while building or evaluating permissions
///
/// Every legitimate "no" outcome of a permission check is a plain `false`,
/// never an error. The variants below signal setup mistakes that must not be
/// swallowed as denials.
#[derive(Error, Debug)]
pub enum AccessError {
    /// A permission graph was assembled incorrectly, e.g. a self-reference
    /// evaluated outside of a permission set
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// A declarative policy document failed to parse or validate
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

impl AccessError {
    /// Create a new improperly configured error
    pub fn improperly_configured(msg: impl Into<String>) -> Self {
        Self::ImproperlyConfigured(msg.into())
    }

    /// Create a new invalid policy error
    pub fn invalid_policy(msg: impl Into<String>) -> Self {
        Self::InvalidPolicy(msg.into())
    }
}

/// Result type for access control operations
pub type AccessResult<T> = std::result::Result<T, AccessError>;
