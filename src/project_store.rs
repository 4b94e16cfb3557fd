//! # Project Store
//!
//! Provider-agnostic access to one service's configuration.
//!
//! A [`ProjectStore`] pairs a retrieval adapter with a [`Namespace`] and a [`KeyLayout`].
//! Path layout needs a store with path queries (Parameter Store); Secrets Manager
//! project stores always use separator layout.

use crate::config::{AwsConfig, StoreOptions};
use crate::constants::DEFAULT_SECRETS_SEPARATOR;
use crate::error::{Error, Result};
use crate::namespace::{KeyLayout, Namespace};
use crate::provider::aws::{create_sdk_config, ParameterStore, SecretsManager};
use crate::provider::{KeyValueMap, KeyValueStore};
use tracing::debug;

/// Project store over Parameter Store
pub type ProjectParameterStore = ProjectStore<ParameterStore>;

/// Project store over Secrets Manager
pub type ProjectSecretsManager = ProjectStore<SecretsManager>;

/// Access to the keys of one (project, environment, service) namespace
pub struct ProjectStore<S> {
    store: S,
    namespace: Namespace,
    prefix: String,
    layout: KeyLayout,
}

impl<S> std::fmt::Debug for ProjectStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("namespace", &self.prefix)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> ProjectStore<S> {
    /// # Errors
    /// Returns [`Error::Config`] when `layout` is [`KeyLayout::Path`] and `store`
    /// has no path queries
    pub fn new(store: S, namespace: Namespace, layout: KeyLayout) -> Result<Self> {
        if layout.is_path() && !store.supports_path_queries() {
            return Err(Error::Config(format!(
                "{} does not support path queries; configure a key separator",
                store.name()
            )));
        }

        let prefix = namespace.prefix();
        Ok(Self {
            store,
            namespace,
            prefix,
            layout,
        })
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every value of this service, keyed by full key name
    ///
    /// # Errors
    /// Propagates provider failures unchanged; a blank namespace path is
    /// [`Error::Validation`]
    pub async fn get_service_parameters(&self) -> Result<KeyValueMap> {
        let scope = self.layout.scope(&self.prefix);
        debug!(
            namespace = %self.prefix,
            path_layout = self.layout.is_path(),
            "Fetching service parameters"
        );

        if self.layout.is_path() {
            self.store.get_values_by_path(&scope).await
        } else {
            self.store.get_values_by_prefix(&scope).await
        }
    }

    /// A single value of this service by its short name. Missing keys are `Ok(None)`.
    ///
    /// # Errors
    /// Propagates provider failures other than a missing key
    pub async fn get_service_parameter(&self, key: &str) -> Result<Option<String>> {
        self.store
            .get_value(&self.layout.key(&self.prefix, key))
            .await
    }
}

impl ProjectStore<ParameterStore> {
    /// Build a Parameter Store project store from the ambient AWS configuration.
    ///
    /// `options.key_separator` selects separator layout; otherwise path layout is used.
    ///
    /// # Errors
    /// Same as [`ProjectStore::new`]
    pub async fn connect_parameter_store(
        namespace: Namespace,
        options: &StoreOptions,
        aws: &AwsConfig,
    ) -> Result<Self> {
        let sdk_config = create_sdk_config(aws).await;
        let store = ParameterStore::from_sdk_config(&sdk_config, options);
        Self::new(store, namespace, KeyLayout::from_options(options))
    }
}

impl ProjectStore<SecretsManager> {
    /// Build a Secrets Manager project store from the ambient AWS configuration.
    ///
    /// Without a configured separator keys are joined with `/` and no lead separator.
    ///
    /// # Errors
    /// Same as [`ProjectStore::new`]
    pub async fn connect_secrets_manager(
        namespace: Namespace,
        options: &StoreOptions,
        aws: &AwsConfig,
    ) -> Result<Self> {
        let sdk_config = create_sdk_config(aws).await;
        let store = SecretsManager::from_sdk_config(&sdk_config);
        Self::new(store, namespace, secrets_layout(options))
    }
}

/// Separator layout for stores without path queries
pub(crate) fn secrets_layout(options: &StoreOptions) -> KeyLayout {
    match KeyLayout::from_options(options) {
        KeyLayout::Path => KeyLayout::Separator {
            separator: DEFAULT_SECRETS_SEPARATOR.to_owned(),
            lead: options.lead_separator,
        },
        layout => layout,
    }
}
