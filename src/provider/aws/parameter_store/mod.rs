//! # AWS Systems Manager Parameter Store
//!
//! Retrieval adapter over Parameter Store.
//!
//! This module provides functionality to:
//! - Fetch single parameters and batches of parameters by name
//! - Fetch every parameter below a hierarchical path
//! - Fetch every parameter whose name begins with a prefix (list, then batch fetch)
//! - Resolve a project/environment/service namespace onto either of the last two

mod client;

pub use client::SsmApi;

use crate::config::StoreOptions;
use crate::constants::{PATH_DELIMITER, SSM_MAX_BATCH_SIZE};
use crate::error::{Error, Result};
use crate::namespace::Namespace;
use crate::observability::instrument_operation;
use crate::provider::{drain_pages, unique_keys, KeyValueMap, KeyValueStore};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client as SsmClient;
use tracing::debug;

const PROVIDER: &str = "ssm";

/// Parameter Store retrieval adapter
pub struct ParameterStore<C = SsmClient> {
    client: C,
    with_decryption: bool,
    recursive: bool,
}

impl<C> std::fmt::Debug for ParameterStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterStore")
            .field("with_decryption", &self.with_decryption)
            .field("recursive", &self.recursive)
            .finish_non_exhaustive()
    }
}

impl ParameterStore<SsmClient> {
    /// Create a store backed by an SDK client built from `sdk_config`
    pub fn from_sdk_config(sdk_config: &SdkConfig, options: &StoreOptions) -> Self {
        Self::new(SsmClient::new(sdk_config), options)
    }
}

impl<C: SsmApi> ParameterStore<C> {
    pub fn new(client: C, options: &StoreOptions) -> Self {
        Self {
            client,
            with_decryption: options.with_decryption,
            recursive: options.recursive,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch the parameters of one service.
    ///
    /// With `use_path` the namespace is queried as a path, otherwise as a name prefix.
    ///
    /// # Errors
    /// Propagates provider failures; no partial result is returned
    pub async fn get_service_parameters(
        &self,
        project: &str,
        env: &str,
        service: &str,
        use_path: bool,
    ) -> Result<KeyValueMap> {
        let prefix = Namespace::new(project, env, service).prefix();
        if use_path {
            self.get_values_by_path(&prefix).await
        } else {
            self.get_values_by_prefix(&prefix).await
        }
    }

    async fn fetch_value(&self, key: &str) -> Result<Option<String>> {
        match self.client.get_parameter(key, self.with_decryption).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => {
                debug!("Parameter {} not found", key);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_values(&self, keys: &[&str]) -> Result<KeyValueMap> {
        let keys = unique_keys(keys);
        let mut values = KeyValueMap::with_capacity(keys.len());
        let client = &self.client;
        let with_decryption = self.with_decryption;

        for batch in keys.chunks(SSM_MAX_BATCH_SIZE) {
            let pairs = drain_pages(PROVIDER, "get_parameters", move |token| {
                client.get_parameters(batch, with_decryption, token)
            })
            .await?;
            values.extend(pairs);
        }

        debug!(
            requested = keys.len(),
            found = values.len(),
            "Fetched parameters by name"
        );
        Ok(values)
    }

    async fn fetch_values_by_path(&self, path: &str) -> Result<KeyValueMap> {
        let path = normalize_path(path)?;
        let client = &self.client;
        let (recursive, with_decryption) = (self.recursive, self.with_decryption);
        let path_ref = path.as_str();

        let pairs = drain_pages(PROVIDER, "get_parameters_by_path", move |token| {
            client.get_parameters_by_path(path_ref, recursive, with_decryption, token)
        })
        .await?;

        Ok(pairs.into_iter().collect())
    }

    async fn fetch_values_by_prefix(&self, prefix: &str) -> Result<KeyValueMap> {
        let client = &self.client;
        let name_prefix = (!prefix.is_empty()).then_some(prefix);

        let names = drain_pages(PROVIDER, "describe_parameters", move |token| {
            client.describe_parameters(name_prefix, token)
        })
        .await?;

        if names.is_empty() {
            return Ok(KeyValueMap::new());
        }

        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        self.fetch_values(&names).await
    }
}

#[async_trait]
impl<C: SsmApi> KeyValueStore for ParameterStore<C> {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn get_value(&self, key: &str) -> Result<Option<String>> {
        instrument_operation(PROVIDER, "get_value", self.fetch_value(key)).await
    }

    async fn get_values(&self, keys: &[&str]) -> Result<KeyValueMap> {
        if keys.is_empty() {
            return Ok(KeyValueMap::new());
        }
        instrument_operation(PROVIDER, "get_values", self.fetch_values(keys)).await
    }

    /// Server-side `BeginsWith` filter on the parameter name, then a batch fetch
    /// of the matching names
    async fn get_values_by_prefix(&self, prefix: &str) -> Result<KeyValueMap> {
        instrument_operation(
            PROVIDER,
            "get_values_by_prefix",
            self.fetch_values_by_prefix(prefix),
        )
        .await
    }

    fn supports_path_queries(&self) -> bool {
        true
    }

    async fn get_values_by_path(&self, path: &str) -> Result<KeyValueMap> {
        instrument_operation(
            PROVIDER,
            "get_values_by_path",
            self.fetch_values_by_path(path),
        )
        .await
    }
}

/// Give a path exactly one leading delimiter. Blank paths are rejected.
fn normalize_path(path: &str) -> Result<String> {
    if path.trim().is_empty() {
        return Err(Error::validation(
            "get_values_by_path",
            "path must not be empty or whitespace",
        ));
    }
    Ok(format!(
        "{PATH_DELIMITER}{}",
        path.trim_start_matches(PATH_DELIMITER)
    ))
}
