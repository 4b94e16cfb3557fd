//! In-memory stand-ins for the Parameter Store and Secrets Manager clients.
//!
//! Both fakes paginate with a configurable page size, record every call and can be
//! told to fail every request with a provider error code.

use crate::error::{Error, Result};
use crate::provider::aws::{SecretsManagerApi, SsmApi};
use crate::provider::Page;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

const DEFAULT_PAGE_SIZE: usize = 10;
const GET_PARAMETERS_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub operation: &'static str,
    pub argument: Option<String>,
    pub with_decryption: Option<bool>,
}

#[derive(Debug, Default)]
pub(crate) struct CallLog {
    calls: Mutex<Vec<Call>>,
}

impl CallLog {
    fn record(&self, operation: &'static str, argument: Option<&str>, with_decryption: Option<bool>) {
        self.calls.lock().expect("call log poisoned").push(Call {
            operation,
            argument: argument.map(ToOwned::to_owned),
            with_decryption,
        });
    }

    fn snapshot(&self) -> Vec<Call> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

fn paginate<T: Clone>(items: &[T], page_size: usize, token: Option<String>) -> Result<Page<T>> {
    let start = match token {
        None => 0,
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| Error::validation("paginate", format!("bad token {token}")))?,
    };
    let end = (start + page_size).min(items.len());
    let next_token = (end < items.len()).then(|| end.to_string());
    Ok(Page::new(items[start.min(end)..end].to_vec(), next_token))
}

fn provider_failure(provider: &'static str, operation: &'static str, code: &str) -> Error {
    Error::Provider {
        provider,
        operation,
        code: Some(code.to_owned()),
        source: format!("{code}: injected failure").into(),
    }
}

/// Parameter Store fake. Clones share the call log.
#[derive(Debug, Clone)]
pub(crate) struct FakeSsm {
    parameters: Arc<BTreeMap<String, String>>,
    page_size: usize,
    failure: Option<String>,
    log: Arc<CallLog>,
}

impl Default for FakeSsm {
    fn default() -> Self {
        Self::from_pairs(Vec::new())
    }
}

impl FakeSsm {
    pub fn with_parameters(parameters: &[(&str, &str)]) -> Self {
        Self::from_pairs(
            parameters
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        )
    }

    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            parameters: Arc::new(pairs.into_iter().collect()),
            page_size: DEFAULT_PAGE_SIZE,
            failure: None,
            log: Arc::default(),
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn failing_with(mut self, code: &str) -> Self {
        self.failure = Some(code.to_owned());
        self
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.log
            .snapshot()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.log.snapshot().len()
    }

    /// Arguments passed to `operation`, in call order
    pub fn requested(&self, operation: &str) -> Vec<String> {
        self.log
            .snapshot()
            .into_iter()
            .filter(|c| c.operation == operation)
            .filter_map(|c| c.argument)
            .collect()
    }

    pub fn last_with_decryption(&self) -> Option<bool> {
        self.log
            .snapshot()
            .iter()
            .rev()
            .find_map(|c| c.with_decryption)
    }

    fn check_failure(&self, operation: &'static str) -> Result<()> {
        match &self.failure {
            Some(code) => Err(provider_failure("ssm", operation, code)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SsmApi for FakeSsm {
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<Option<String>> {
        self.log.record("get_parameter", Some(name), Some(with_decryption));
        self.check_failure("get_parameter")?;
        match self.parameters.get(name) {
            Some(value) => Ok(Some(value.clone())),
            None => Err(Error::NotFound {
                key: name.to_owned(),
            }),
        }
    }

    async fn get_parameters(
        &self,
        names: &[&str],
        with_decryption: bool,
        _next_token: Option<String>,
    ) -> Result<Page<(String, String)>> {
        self.log
            .record("get_parameters", Some(&names.join(",")), Some(with_decryption));
        self.check_failure("get_parameters")?;
        if names.len() > GET_PARAMETERS_LIMIT {
            return Err(Error::validation(
                "get_parameters",
                format!("{} names exceeds the limit", names.len()),
            ));
        }
        let found = names
            .iter()
            .filter_map(|name| {
                self.parameters
                    .get(*name)
                    .map(|value| ((*name).to_owned(), value.clone()))
            })
            .collect();
        Ok(Page::last(found))
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        with_decryption: bool,
        next_token: Option<String>,
    ) -> Result<Page<(String, String)>> {
        self.log
            .record("get_parameters_by_path", Some(path), Some(with_decryption));
        self.check_failure("get_parameters_by_path")?;
        if path.trim().is_empty() || !path.starts_with('/') {
            return Err(Error::validation("get_parameters_by_path", "invalid path"));
        }
        let scope = format!("{}/", path.trim_end_matches('/'));
        let matching: Vec<(String, String)> = self
            .parameters
            .iter()
            .filter(|(name, _)| {
                name.strip_prefix(&scope)
                    .is_some_and(|rest| recursive || !rest.contains('/'))
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        paginate(&matching, self.page_size, next_token)
    }

    async fn describe_parameters(
        &self,
        name_prefix: Option<&str>,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        self.log.record("describe_parameters", name_prefix, None);
        self.check_failure("describe_parameters")?;
        let names: Vec<String> = self
            .parameters
            .keys()
            .filter(|name| name_prefix.is_none_or(|prefix| name.starts_with(prefix)))
            .cloned()
            .collect();
        paginate(&names, self.page_size, next_token)
    }
}

/// Secrets Manager fake. A `None` value stands for a binary-only secret.
#[derive(Debug, Clone)]
pub(crate) struct FakeSecretsManager {
    secrets: Arc<BTreeMap<String, Option<String>>>,
    unnamed_entries: usize,
    page_size: usize,
    failure: Option<String>,
    log: Arc<CallLog>,
}

impl FakeSecretsManager {
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        Self {
            secrets: Arc::new(
                secrets
                    .iter()
                    .map(|(k, v)| ((*k).to_owned(), Some((*v).to_owned())))
                    .collect(),
            ),
            unnamed_entries: 0,
            page_size: DEFAULT_PAGE_SIZE,
            failure: None,
            log: Arc::default(),
        }
    }

    pub fn with_binary_secret(mut self, name: &str) -> Self {
        Arc::make_mut(&mut self.secrets).insert(name.to_owned(), None);
        self
    }

    pub fn with_unnamed_entries(mut self, count: usize) -> Self {
        self.unnamed_entries = count;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn failing_with(mut self, code: &str) -> Self {
        self.failure = Some(code.to_owned());
        self
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.log
            .snapshot()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.log.snapshot().len()
    }

    pub fn requested(&self, operation: &str) -> Vec<String> {
        self.log
            .snapshot()
            .into_iter()
            .filter(|c| c.operation == operation)
            .filter_map(|c| c.argument)
            .collect()
    }

    fn check_failure(&self, operation: &'static str) -> Result<()> {
        match &self.failure {
            Some(code) => Err(provider_failure("secrets_manager", operation, code)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SecretsManagerApi for FakeSecretsManager {
    async fn get_secret_value(&self, secret_id: &str) -> Result<Option<String>> {
        self.log.record("get_secret_value", Some(secret_id), None);
        self.check_failure("get_secret_value")?;
        match self.secrets.get(secret_id) {
            Some(value) => Ok(value.clone()),
            None => Err(Error::NotFound {
                key: secret_id.to_owned(),
            }),
        }
    }

    async fn list_secrets(&self, next_token: Option<String>) -> Result<Page<Option<String>>> {
        self.log.record("list_secrets", next_token.as_deref(), None);
        self.check_failure("list_secrets")?;
        let entries: Vec<Option<String>> = self
            .secrets
            .keys()
            .cloned()
            .map(Some)
            .chain(std::iter::repeat_n(None, self.unnamed_entries))
            .collect();
        paginate(&entries, self.page_size, next_token)
    }
}
