//! # Configuration
//!
//! Construction-time settings for stores and AWS clients.
//!
//! Every setting has a default and can be overridden from environment variables
//! (`PARAM_TELLER_*`) or deserialized from a camelCase document.

mod aws;
mod store;

pub use aws::AwsConfig;
pub use store::StoreOptions;

use crate::error::{Error, Result};

/// Read a boolean flag through `lookup`, using `default` when it is unset or blank.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off` in any case.
///
/// # Errors
/// Returns [`Error::Config`] naming the variable when the value is anything else
pub(crate) fn bool_var_or_default<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = non_blank_var(lookup, key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!(
            "{key} must be a boolean (true/false, 1/0, yes/no), got {raw:?}"
        ))),
    }
}

/// Read a variable through `lookup`, treating blank values as unset
pub(crate) fn non_blank_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

/// Process environment lookup used by the `from_env` constructors
pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
