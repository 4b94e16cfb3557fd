//! # Error Types
//!
//! A single error enum for every store operation.
//!
//! Provider failures are carried verbatim in `source`. The only normalization the
//! adapters perform is folding [`Error::NotFound`] into an absent value or a missing
//! map entry; everything else reaches the caller unchanged.

use thiserror::Error;

/// Boxed error used to keep the original provider error as `source`
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by stores, clients and configuration loaders
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed request, e.g. a blank path. Never retried.
    #[error("invalid {operation} request: {message}")]
    Validation {
        operation: &'static str,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The requested key does not exist.
    ///
    /// Raised by [`SsmApi`](crate::provider::aws::SsmApi) and
    /// [`SecretsManagerApi`](crate::provider::aws::SecretsManagerApi) implementations only;
    /// store operations turn it into absence.
    #[error("key not found: {key}")]
    NotFound { key: String },

    /// Transport, authorization or throttling failure reported by the provider
    #[error("{provider} {operation} failed: {source}")]
    Provider {
        provider: &'static str,
        operation: &'static str,
        /// Service error code when the provider returned one (e.g. `ThrottlingException`)
        code: Option<String>,
        #[source]
        source: BoxError,
    },

    /// The store does not implement an optional capability
    #[error("{store} does not support {operation}")]
    Unsupported {
        store: &'static str,
        operation: &'static str,
    },

    /// Invalid construction-time configuration
    #[error("configuration error: {0}")]
    Config(String),

    #[error("metrics registration failed: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl Error {
    pub(crate) fn validation(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            operation,
            message: message.into(),
            source: None,
        }
    }

    /// Stable label for this error class, used in metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "validation",
            Error::NotFound { .. } => "not_found",
            Error::Provider { .. } => "provider",
            Error::Unsupported { .. } => "unsupported",
            Error::Config(_) => "config",
            Error::Metrics(_) => "metrics",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Service error code reported by the provider, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Provider { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
