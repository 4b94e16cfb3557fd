//! # param-teller
//!
//! Fetch service configuration from AWS Systems Manager Parameter Store and AWS
//! Secrets Manager.
//!
//! ## Overview
//!
//! - **Retrieval adapters** - [`ParameterStore`] and [`SecretsManager`] fetch values by exact
//!   key, by hierarchical path or by key-name prefix, draining provider pagination into one
//!   [`KeyValueMap`]
//! - **Namespacing** - a [`Namespace`] (`{project}-{env}-{service}`) and a [`KeyLayout`] map a
//!   service identity onto provider key names
//! - **Project stores** - [`ProjectStore`] exposes `get_service_parameters` and
//!   `get_service_parameter` over either adapter
//!
//! Missing keys are never errors: they are absent from maps and `None` for single lookups.
//! Every other provider failure is returned unchanged.
//!
//! ## Usage
//!
//! ```no_run
//! use param_teller::{AwsConfig, Namespace, ProjectParameterStore, StoreOptions};
//!
//! # async fn run() -> param_teller::Result<()> {
//! let store = ProjectParameterStore::connect_parameter_store(
//!     Namespace::new("proj1", "prod", "service1"),
//!     &StoreOptions::default(),
//!     &AwsConfig::default(),
//! )
//! .await?;
//!
//! let all = store.get_service_parameters().await?;
//! let db_url = store.get_service_parameter("db_url").await?;
//! # let _ = (all, db_url);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod namespace;
pub mod observability;
pub mod project_store;
pub mod provider;

pub use config::{AwsConfig, StoreOptions};
pub use error::{Error, Result};
pub use namespace::{KeyLayout, Namespace};
pub use project_store::{ProjectParameterStore, ProjectSecretsManager, ProjectStore};
pub use provider::aws::{ParameterStore, SecretsManager, SecretsManagerApi, SsmApi};
pub use provider::{KeyValueMap, KeyValueStore, Page};
