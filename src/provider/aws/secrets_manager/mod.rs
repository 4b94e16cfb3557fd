//! # AWS Secrets Manager
//!
//! Retrieval adapter over Secrets Manager.
//!
//! Secrets Manager has no path query, no prefix filter and no batch get. Prefix
//! lookups enumerate every secret name, filter locally and then fetch the matches
//! one at a time.

mod client;

pub use client::SecretsManagerApi;

use crate::error::Result;
use crate::observability::instrument_operation;
use crate::provider::{drain_pages, unique_keys, KeyValueMap, KeyValueStore};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use tracing::debug;

const PROVIDER: &str = "secrets_manager";

/// Secrets Manager retrieval adapter
pub struct SecretsManager<C = SecretsManagerClient> {
    client: C,
}

impl<C> std::fmt::Debug for SecretsManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsManager").finish_non_exhaustive()
    }
}

impl SecretsManager<SecretsManagerClient> {
    /// Create a store backed by an SDK client built from `sdk_config`
    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self::new(SecretsManagerClient::new(sdk_config))
    }
}

impl<C: SecretsManagerApi> SecretsManager<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Names of every secret visible to the caller, across all pages
    ///
    /// # Errors
    /// Returns the first `ListSecrets` failure; no partial listing is returned
    pub async fn list_all_keys(&self) -> Result<Vec<String>> {
        instrument_operation(PROVIDER, "list_all_keys", self.fetch_all_keys()).await
    }

    async fn fetch_all_keys(&self) -> Result<Vec<String>> {
        let client = &self.client;
        let entries = drain_pages(PROVIDER, "list_secrets", move |token| {
            client.list_secrets(token)
        })
        .await?;

        Ok(entries.into_iter().flatten().collect())
    }

    async fn fetch_value(&self, key: &str) -> Result<Option<String>> {
        match self.client.get_secret_value(key).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => {
                debug!("Secret {} not found", key);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_values(&self, keys: &[&str]) -> Result<KeyValueMap> {
        let keys = unique_keys(keys);
        let mut values = KeyValueMap::with_capacity(keys.len());

        for key in &keys {
            if let Some(value) = self.fetch_value(key).await? {
                values.insert((*key).to_owned(), value);
            }
        }

        debug!(
            requested = keys.len(),
            found = values.len(),
            "Fetched secrets by name"
        );
        Ok(values)
    }

    async fn fetch_values_by_prefix(&self, prefix: &str) -> Result<KeyValueMap> {
        let names = self.fetch_all_keys().await?;
        let matching: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|name| name.starts_with(prefix))
            .collect();

        if matching.is_empty() {
            return Ok(KeyValueMap::new());
        }
        self.fetch_values(&matching).await
    }
}

#[async_trait]
impl<C: SecretsManagerApi> KeyValueStore for SecretsManager<C> {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        instrument_operation(PROVIDER, "get_value", self.fetch_value(key)).await
    }

    /// One `GetSecretValue` call per key, in order
    async fn get_values(&self, keys: &[&str]) -> Result<KeyValueMap> {
        if keys.is_empty() {
            return Ok(KeyValueMap::new());
        }
        instrument_operation(PROVIDER, "get_values", self.fetch_values(keys)).await
    }

    /// Client-side `starts_with` match over every secret name
    async fn get_values_by_prefix(&self, prefix: &str) -> Result<KeyValueMap> {
        instrument_operation(
            PROVIDER,
            "get_values_by_prefix",
            self.fetch_values_by_prefix(prefix),
        )
        .await
    }
}
