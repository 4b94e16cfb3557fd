//! # AWS SDK Configuration
//!
//! Builds the shared SDK configuration used to construct service clients.
//! Stores never call this themselves; they are handed a client.

use crate::config::AwsConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use tracing::info;

/// Create AWS SDK config using the default credential chain, applying any
/// region, profile or endpoint override from `config`
pub async fn create_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }

    if let Some(profile) = &config.profile {
        info!("Using AWS profile: {}", profile);
        loader = loader.profile_name(profile);
    }

    if let Some(endpoint) = &config.endpoint_url {
        info!("Routing AWS requests to endpoint override: {}", endpoint);
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}
