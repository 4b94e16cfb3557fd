//! # Constants
//!
//! Provider limits, naming defaults and environment variable names.

/// Joins project, environment and service into a namespace prefix
pub const NAMESPACE_JOINER: &str = "-";

/// Delimiter for hierarchical (path layout) keys
pub const PATH_DELIMITER: char = '/';

/// Separator used by the secrets-manager project store when none is configured
pub const DEFAULT_SECRETS_SEPARATOR: &str = "/";

/// Maximum number of names accepted by a single SSM `GetParameters` call
pub const SSM_MAX_BATCH_SIZE: usize = 10;

/// Default for server-side decryption of `SecureString` parameters
pub const DEFAULT_WITH_DECRYPTION: bool = true;

// Store options
pub const ENV_WITH_DECRYPTION: &str = "PARAM_TELLER_WITH_DECRYPTION";
pub const ENV_KEY_SEPARATOR: &str = "PARAM_TELLER_KEY_SEPARATOR";
pub const ENV_LEAD_SEPARATOR: &str = "PARAM_TELLER_LEAD_SEPARATOR";
pub const ENV_RECURSIVE: &str = "PARAM_TELLER_RECURSIVE";

// AWS client
pub const ENV_AWS_REGION: &str = "PARAM_TELLER_AWS_REGION";
pub const ENV_AWS_PROFILE: &str = "PARAM_TELLER_AWS_PROFILE";
pub const ENV_ENDPOINT_URL: &str = "PARAM_TELLER_ENDPOINT_URL";

// Namespace
pub const ENV_PROJECT: &str = "PARAM_TELLER_PROJECT";
pub const ENV_ENVIRONMENT: &str = "PARAM_TELLER_ENV";
pub const ENV_SERVICE: &str = "PARAM_TELLER_SERVICE";
