//! # AWS Providers
//!
//! AWS provider modules for configuration and secret retrieval.
//!
//! - `parameter_store`: AWS Systems Manager Parameter Store
//! - `secrets_manager`: AWS Secrets Manager
//! - `auth`: SDK configuration from the ambient credential chain

mod auth;
pub mod parameter_store;
pub mod secrets_manager;

pub use auth::create_sdk_config;
pub use parameter_store::{ParameterStore, SsmApi};
pub use secrets_manager::{SecretsManager, SecretsManagerApi};

use crate::error::Error;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

/// Service error codes meaning the requested key does not exist
const NOT_FOUND_CODES: &[&str] = &["ParameterNotFound", "ResourceNotFoundException"];

/// Service error codes meaning the request itself was rejected
const VALIDATION_CODES: &[&str] = &[
    "ValidationException",
    "InvalidParameterException",
    "InvalidRequestException",
    "InvalidFilterKey",
    "InvalidFilterOption",
    "InvalidFilterValue",
    "InvalidKeyId",
];

/// Map an SDK error onto the crate taxonomy, keeping the SDK error as `source`.
///
/// `key` is set for single-key lookups; only those can report [`Error::NotFound`].
pub(crate) fn classify_sdk_error<E, R>(
    provider: &'static str,
    operation: &'static str,
    key: Option<&str>,
    err: SdkError<E, R>,
) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let code = err.code().map(ToOwned::to_owned);

    if let (Some(key), Some(code)) = (key, code.as_deref()) {
        if NOT_FOUND_CODES.contains(&code) {
            return Error::NotFound {
                key: key.to_owned(),
            };
        }
    }

    let is_validation = matches!(err, SdkError::ConstructionFailure(_))
        || code
            .as_deref()
            .is_some_and(|code| VALIDATION_CODES.contains(&code));
    if is_validation {
        return Error::Validation {
            operation,
            message: DisplayErrorContext(&err).to_string(),
            source: Some(Box::new(err)),
        };
    }

    Error::Provider {
        provider,
        operation,
        code,
        source: Box::new(err),
    }
}
