//! # Providers
//!
//! Key/value retrieval adapters over remote secret stores.
//!
//! - `aws::ParameterStore`: AWS Systems Manager Parameter Store (path, batch and prefix queries)
//! - `aws::SecretsManager`: AWS Secrets Manager (single get and full enumeration only)
//!
//! Both implement [`KeyValueStore`]. Path queries are an optional capability that only
//! the parameter store provides.

pub mod aws;
mod pagination;

#[cfg(test)]
pub(crate) mod fake;

pub(crate) use pagination::drain_pages;

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Key to value mapping returned by every multi-key retrieval.
/// Only keys the provider returned a value for are present.
pub type KeyValueMap = HashMap<String, String>;

/// One page of a provider listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Opaque continuation token. `None` (or empty) ends the listing.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    /// A page with no continuation
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// Retrieval capabilities shared by all stores
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Short provider label used in logs, metrics and errors
    fn name(&self) -> &'static str;

    /// Fetch a single value. A missing key is `Ok(None)`, never an error.
    async fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Fetch several keys. Keys without a value are absent from the result.
    /// An empty key list returns an empty map without contacting the provider.
    async fn get_values(&self, keys: &[&str]) -> Result<KeyValueMap>;

    /// Fetch every key whose name starts with `prefix`
    async fn get_values_by_prefix(&self, prefix: &str) -> Result<KeyValueMap>;

    /// Whether [`get_values_by_path`](Self::get_values_by_path) is implemented
    fn supports_path_queries(&self) -> bool {
        false
    }

    /// Fetch every key below a hierarchical path
    async fn get_values_by_path(&self, _path: &str) -> Result<KeyValueMap> {
        Err(Error::Unsupported {
            store: self.name(),
            operation: "get_values_by_path",
        })
    }
}

/// Drop repeated keys while keeping first-seen order
pub(crate) fn unique_keys<'a>(keys: &[&'a str]) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::with_capacity(keys.len());
    keys.iter().copied().filter(|key| seen.insert(*key)).collect()
}
