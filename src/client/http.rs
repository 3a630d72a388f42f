//! ureq-backed implementation of the transport seam.

use std::time::Duration;

use serde_json::Value;

use crate::client::error::{ClientError, ClientResult};
use crate::client::{Fetch, Method};
use crate::transaction::TransactionBatch;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration options.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server, e.g. `http://localhost:4000`.
    pub base_url: String,
    /// Global timeout applied to each round trip.
    pub timeout: Duration,
    /// Bearer token sent as `Authorization` header, if any.
    pub auth_token: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            auth_token: None,
        }
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the bearer token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// A connection to a RecBase server.
///
/// Cheap to clone is not a goal; create one per server and hand out
/// [`TransactionBatch`]es from it. The client performs blocking I/O and
/// holds no mutable state, so sharing a reference across threads is fine.
pub struct Client {
    config: ClientConfig,
    agent: ureq::Agent,
}

impl Client {
    /// Connect to a server with default configuration.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Connect to a server with custom configuration.
    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        let base = config.base_url.trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        // Non-2xx statuses are reported through ClientError::Status with the
        // response body attached, so keep ureq from turning them into its
        // own error first.
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build();

        Ok(Self {
            config,
            agent: ureq::Agent::new_with_config(agent_config),
        })
    }

    /// Start an empty transaction batch bound to this client.
    pub fn transaction(&self) -> TransactionBatch<'_> {
        TransactionBatch::new(self)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join the base URL and a server-relative path.
    fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

impl Fetch for Client {
    fn fetch(&self, path: &str, method: Method, body: Option<&Value>) -> ClientResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut response = match body {
            Some(body) => {
                let bytes = serde_json::to_vec(body)?;
                let mut request = match method {
                    Method::Post => self.agent.post(&url),
                    Method::Patch => self.agent.patch(&url),
                    Method::Get | Method::Delete => {
                        return Err(ClientError::InvalidRequest(format!(
                            "{} requests cannot carry a body",
                            method
                        )))
                    }
                };
                request = request.header("Content-Type", "application/json");
                if let Some(token) = &self.config.auth_token {
                    request = request.header("Authorization", &format!("Bearer {}", token));
                }
                request
                    .send(&bytes[..])
                    .map_err(|e| ClientError::Network(e.to_string()))?
            }
            None => {
                let mut request = match method {
                    Method::Get => self.agent.get(&url),
                    Method::Delete => self.agent.delete(&url),
                    Method::Post | Method::Patch => {
                        return Err(ClientError::InvalidRequest(format!(
                            "{} requests require a body",
                            method
                        )))
                    }
                };
                if let Some(token) = &self.config.auth_token {
                    request = request.header("Authorization", &format!("Bearer {}", token));
                }
                request
                    .call()
                    .map_err(|e| ClientError::Network(e.to_string()))?
            }
        };

        let status = response.status();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Network(format!("failed to read response: {}", e)))?;

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "received response");

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = Client::new("localhost:4000");
        assert!(matches!(err, Err(ClientError::InvalidUrl(_))));

        let err = Client::new("ftp://example.com");
        assert!(matches!(err, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_url_joining() {
        let client = Client::new("http://localhost:4000/").unwrap();
        assert_eq!(
            client.url("/api/transactions/v1/execute"),
            "http://localhost:4000/api/transactions/v1/execute"
        );
        assert_eq!(client.url("health"), "http://localhost:4000/health");
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://example.com")
            .timeout(Duration::from_secs(5))
            .auth_token("secret");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.auth_token.as_deref(), Some("secret"));

        let client = Client::with_config(config).unwrap();
        assert_eq!(client.config().base_url, "https://example.com");
    }

    #[test]
    fn test_body_method_mismatch() {
        let client = Client::new("http://localhost:4000").unwrap();
        let body = serde_json::json!({});
        assert!(client.fetch("/x", Method::Get, Some(&body)).is_err());
        assert!(client.fetch("/x", Method::Post, None).is_err());
    }
}
