//! # Parameter Store Client
//!
//! The primitive Parameter Store calls the adapter is built on, and their
//! implementation for the AWS SDK client.

use crate::error::{Error, Result};
use crate::provider::aws::classify_sdk_error;
use crate::provider::Page;
use async_trait::async_trait;
use aws_sdk_ssm::types::{Parameter, ParameterStringFilter};
use aws_sdk_ssm::Client as SsmClient;

const PROVIDER: &str = "ssm";

/// Primitive Parameter Store operations.
///
/// Items are `(name, value)` pairs. Implementations must only return pairs the
/// provider affirmatively reported a value for.
#[async_trait]
pub trait SsmApi: Send + Sync {
    /// Fetch one parameter. A missing parameter is [`Error::NotFound`].
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<Option<String>>;

    /// Fetch a batch of parameters by name. Unknown names are skipped.
    async fn get_parameters(
        &self,
        names: &[&str],
        with_decryption: bool,
        next_token: Option<String>,
    ) -> Result<Page<(String, String)>>;

    /// Fetch parameters below a path beginning with `/`
    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        with_decryption: bool,
        next_token: Option<String>,
    ) -> Result<Page<(String, String)>>;

    /// List parameter names, optionally restricted to names beginning with `name_prefix`
    async fn describe_parameters(
        &self,
        name_prefix: Option<&str>,
        next_token: Option<String>,
    ) -> Result<Page<String>>;
}

fn name_value_pairs(parameters: &[Parameter]) -> Vec<(String, String)> {
    parameters
        .iter()
        .filter_map(|p| Some((p.name()?.to_owned(), p.value()?.to_owned())))
        .collect()
}

#[async_trait]
impl SsmApi for SsmClient {
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<Option<String>> {
        let output = self
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| classify_sdk_error(PROVIDER, "get_parameter", Some(name), e))?;

        Ok(output
            .parameter()
            .and_then(Parameter::value)
            .map(ToOwned::to_owned))
    }

    async fn get_parameters(
        &self,
        names: &[&str],
        with_decryption: bool,
        next_token: Option<String>,
    ) -> Result<Page<(String, String)>> {
        // GetParameters is not paginated by the service; the token is accepted for
        // symmetry with the other listings and is always absent.
        debug_assert!(next_token.is_none());

        let output = self
            .get_parameters()
            .set_names(Some(names.iter().map(|n| (*n).to_owned()).collect()))
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| classify_sdk_error(PROVIDER, "get_parameters", None, e))?;

        Ok(Page::last(name_value_pairs(output.parameters())))
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        with_decryption: bool,
        next_token: Option<String>,
    ) -> Result<Page<(String, String)>> {
        let output = self
            .get_parameters_by_path()
            .path(path)
            .recursive(recursive)
            .with_decryption(with_decryption)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| classify_sdk_error(PROVIDER, "get_parameters_by_path", None, e))?;

        Ok(Page::new(
            name_value_pairs(output.parameters()),
            output.next_token().map(ToOwned::to_owned),
        ))
    }

    async fn describe_parameters(
        &self,
        name_prefix: Option<&str>,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        let filters = name_prefix
            .map(|prefix| {
                ParameterStringFilter::builder()
                    .key("Name")
                    .option("BeginsWith")
                    .values(prefix)
                    .build()
                    .map_err(|e| Error::Validation {
                        operation: "describe_parameters",
                        message: e.to_string(),
                        source: Some(Box::new(e)),
                    })
            })
            .transpose()?;

        let output = self
            .describe_parameters()
            .set_parameter_filters(filters.map(|f| vec![f]))
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| classify_sdk_error(PROVIDER, "describe_parameters", None, e))?;

        let names = output
            .parameters()
            .iter()
            .filter_map(|p| p.name().map(ToOwned::to_owned))
            .collect();
        Ok(Page::new(names, output.next_token().map(ToOwned::to_owned)))
    }
}
