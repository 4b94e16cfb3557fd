//! # Namespacing
//!
//! Maps a (project, environment, service) identity onto provider key names.
//!
//! The namespace prefix is always `{project}-{env}-{service}`. A [`KeyLayout`] decides how
//! keys are placed under it: as a path (`proj-prod-api/db_url`) or joined by a custom
//! separator (`proj-prod-api.db_url`, optionally `.proj-prod-api.db_url`).

mod layout;

pub use layout::KeyLayout;

use crate::config::process_env;
use crate::constants::{ENV_ENVIRONMENT, ENV_PROJECT, ENV_SERVICE, NAMESPACE_JOINER};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A service's identity within a project and environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub project: String,
    /// Environment name (e.g. prod, staging, dev)
    pub environment: String,
    pub service: String,
}

impl Namespace {
    pub fn new(
        project: impl Into<String>,
        environment: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
            service: service.into(),
        }
    }

    /// Read the namespace from `PARAM_TELLER_PROJECT`, `PARAM_TELLER_ENV` and
    /// `PARAM_TELLER_SERVICE`
    ///
    /// # Errors
    /// Returns [`Error::Config`] if any of the variables is missing or blank
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(process_env)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{key} must be set")))
        };

        Ok(Self::new(
            required(ENV_PROJECT)?,
            required(ENV_ENVIRONMENT)?,
            required(ENV_SERVICE)?,
        ))
    }

    /// The namespace prefix: `{project}-{env}-{service}`
    pub fn prefix(&self) -> String {
        [
            self.project.as_str(),
            self.environment.as_str(),
            self.service.as_str(),
        ]
        .join(NAMESPACE_JOINER)
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix())
    }
}
