//! # Store Options
//!
//! Options recognized when constructing stores and project stores.

use super::{bool_var_or_default, non_blank_var, process_env};
use crate::constants::{
    DEFAULT_WITH_DECRYPTION, ENV_KEY_SEPARATOR, ENV_LEAD_SEPARATOR, ENV_RECURSIVE,
    ENV_WITH_DECRYPTION,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Retrieval and key layout options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreOptions {
    /// Request server-side decryption of `SecureString` parameters
    pub with_decryption: bool,
    /// Selects separator layout instead of path layout
    pub key_separator: Option<String>,
    /// Whether the namespace prefix itself begins with the separator
    pub lead_separator: bool,
    /// Descend into nested levels on path queries
    pub recursive: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            with_decryption: DEFAULT_WITH_DECRYPTION,
            key_separator: None,
            lead_separator: false,
            recursive: false,
        }
    }
}

impl StoreOptions {
    /// Load options from `PARAM_TELLER_*` environment variables with defaults
    ///
    /// # Errors
    /// Returns [`Error::Config`](crate::Error::Config) when a boolean variable holds
    /// an unrecognized value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(process_env)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            with_decryption: bool_var_or_default(
                &lookup,
                ENV_WITH_DECRYPTION,
                DEFAULT_WITH_DECRYPTION,
            )?,
            // Separators are taken verbatim; only blank values count as unset
            key_separator: non_blank_var(&lookup, ENV_KEY_SEPARATOR),
            lead_separator: bool_var_or_default(&lookup, ENV_LEAD_SEPARATOR, false)?,
            recursive: bool_var_or_default(&lookup, ENV_RECURSIVE, false)?,
        })
    }

    /// Use separator layout with the given delimiter
    #[must_use]
    pub fn with_key_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_lead_separator(mut self, lead: bool) -> Self {
        self.lead_separator = lead;
        self
    }

    #[must_use]
    pub fn with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = with_decryption;
        self
    }

    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}
