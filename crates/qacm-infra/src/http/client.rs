//! Shared HTTP plumbing: base URL, bearer token, status and body handling.

use std::time::Duration;

use qacm_core::ClientError;
use qacm_shared::ErrorResponse;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Backend origin, e.g. `http://localhost:8080`. `/api` is appended.
    pub base_url: String,
    /// Bearer token issued by the identity provider.
    pub auth_token: Option<String>,
    pub timeout: Duration,
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Cheap to clone; every clone shares one connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    api_url: String,
    auth_token: Option<String>,
}

impl RestClient {
    pub fn new(config: &RestConfig) -> Result<Self, ClientError> {
        let api_url = format!("{}/api", config.base_url.trim_end_matches('/'));
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport {
                url: api_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            api_url,
            auth_token: config.auth_token.clone(),
        })
    }

    /// `{base}/api/{path}`
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn any non-2xx answer into [`ClientError::Status`].
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Request failed");
            ClientError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        let body = response.bytes().await.unwrap_or_default();
        let error = match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(problem) => ClientError::from_problem(code, problem),
            Err(_) => ClientError::Status {
                status: code,
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string(),
                problem: None,
            },
        };
        tracing::debug!(url = %url, status = code, error = %error, "Backend rejected request");
        Err(error)
    }

    pub(crate) async fn decode<T: DeserializeOwned>(
        entity: &'static str,
        response: Response,
    ) -> Result<T, ClientError> {
        let body = response.bytes().await.map_err(|e| ClientError::Decode {
            entity,
            message: e.to_string(),
        })?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
            entity,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_ignores_trailing_slash() {
        let client = RestClient::new(&RestConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(
            client.resource_url("comments"),
            "http://localhost:8080/api/comments"
        );
    }
}
