//! # Secrets Manager Client
//!
//! The primitive Secrets Manager calls the adapter is built on, and their
//! implementation for the AWS SDK client.

use crate::error::Result;
use crate::provider::aws::classify_sdk_error;
use crate::provider::Page;
use async_trait::async_trait;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;

const PROVIDER: &str = "secrets_manager";

/// Primitive Secrets Manager operations
#[async_trait]
pub trait SecretsManagerApi: Send + Sync {
    /// Fetch the string value of a secret. A missing secret is
    /// [`Error::NotFound`](crate::Error::NotFound); a binary-only secret is `Ok(None)`.
    async fn get_secret_value(&self, secret_id: &str) -> Result<Option<String>>;

    /// One page of secret names. Entries the provider returned without a name are `None`.
    async fn list_secrets(&self, next_token: Option<String>) -> Result<Page<Option<String>>>;
}

#[async_trait]
impl SecretsManagerApi for SecretsManagerClient {
    async fn get_secret_value(&self, secret_id: &str) -> Result<Option<String>> {
        let output = self
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| classify_sdk_error(PROVIDER, "get_secret_value", Some(secret_id), e))?;

        Ok(output.secret_string().map(ToOwned::to_owned))
    }

    async fn list_secrets(&self, next_token: Option<String>) -> Result<Page<Option<String>>> {
        let output = self
            .list_secrets()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| classify_sdk_error(PROVIDER, "list_secrets", None, e))?;

        let names = output
            .secret_list()
            .iter()
            .map(|entry| entry.name().map(ToOwned::to_owned))
            .collect();
        Ok(Page::new(names, output.next_token().map(ToOwned::to_owned)))
    }
}
