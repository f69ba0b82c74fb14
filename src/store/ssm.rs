//! AWS Systems Manager Parameter Store.
//!
//! The SSM client is built once per process (cold start) and shared by every
//! read. Retries are left to the SDK's defaults; envtier itself never retries.

use std::time::Duration;

use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::Client;
use tracing::debug;

use super::ParameterStore;
use crate::config::Settings;
use crate::error::StoreError;

/// Build an SSM client from the default AWS credential and region chain.
///
/// `endpoint_url` overrides the service endpoint (e.g. LocalStack).
pub async fn build_client(endpoint_url: Option<&str>) -> Client {
    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let mut ssm_config = aws_sdk_ssm::config::Builder::from(&sdk_config);
    if let Some(url) = endpoint_url {
        ssm_config = ssm_config.endpoint_url(url);
    }
    Client::from_conf(ssm_config.build())
}

/// Reads parameters with `ssm:GetParameter`.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
    with_decryption: bool,
    timeout: Option<Duration>,
}

impl SsmParameterStore {
    /// Wrap an existing client. No decryption, no timeout.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            with_decryption: false,
            timeout: None,
        }
    }

    /// Build a client and store from runtime settings.
    pub async fn from_settings(settings: &Settings) -> Self {
        let client = build_client(settings.ssm_endpoint.as_deref()).await;
        Self::new(client)
            .with_decryption(settings.ssm_decrypt)
            .with_timeout(settings.store_timeout)
    }

    /// Request decryption of `SecureString` parameters.
    pub fn with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = with_decryption;
        self
    }

    /// Bound every read by `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch(&self, key: &str) -> Result<String, StoreError> {
        debug!(parameter = key, decrypt = self.with_decryption, "Calling ssm:GetParameter");
        let output = self
            .client
            .get_parameter()
            .name(key)
            .with_decryption(self.with_decryption)
            .send()
            .await
            .map_err(|err| store_error(key, err.into_service_error()))?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_owned)
            .ok_or_else(|| StoreError::MissingValue {
                key: key.to_string(),
            })
    }
}

impl ParameterStore for SsmParameterStore {
    async fn get_value(&self, key: &str) -> Result<String, StoreError> {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.fetch(key))
                .await
                .map_err(|_| StoreError::Timeout {
                    key: key.to_string(),
                    timeout,
                })?,
            None => self.fetch(key).await,
        }
    }
}

/// Map an SSM service error onto [`StoreError`].
fn store_error(key: &str, err: GetParameterError) -> StoreError {
    match err {
        GetParameterError::ParameterNotFound(_) => StoreError::NotFound {
            key: key.to_string(),
        },
        other => StoreError::Unavailable {
            key: key.to_string(),
            source: Box::new(other),
        },
    }
}
