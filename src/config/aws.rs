//! # AWS Client Configuration
//!
//! Settings for building SDK clients from the ambient credential chain.

use super::{non_blank_var, process_env};
use crate::constants::{ENV_AWS_PROFILE, ENV_AWS_REGION, ENV_ENDPOINT_URL};
use serde::{Deserialize, Serialize};

/// AWS SDK settings. Unset fields fall back to the SDK's own resolution
/// (`AWS_REGION`, `AWS_PROFILE`, instance metadata, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwsConfig {
    /// AWS region (e.g., "us-east-1", "eu-west-1")
    pub region: Option<String>,
    /// Named profile from the shared config files
    pub profile: Option<String>,
    /// Endpoint override, e.g. a local emulator
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    /// Load settings from `PARAM_TELLER_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            region: non_blank_var(&lookup, ENV_AWS_REGION),
            profile: non_blank_var(&lookup, ENV_AWS_PROFILE),
            endpoint_url: non_blank_var(&lookup, ENV_ENDPOINT_URL),
        }
    }
}
