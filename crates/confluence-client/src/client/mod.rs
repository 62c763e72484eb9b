//! Confluence REST API client.
//!
//! Sync HTTP client for the Confluence Server/Data Center content REST
//! API. One request per operation; status handling and JSON decoding are
//! centralized here, operation semantics live in [`content`].

mod content;

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use ureq::Agent;

use crate::config::{ClientConfig, ConfigError};
use crate::error::ConfluenceError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Confluence REST API client.
///
/// Holds only static configuration; safe to share across threads.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth_header: Option<String>,
}

impl ConfluenceClient {
    /// Client without authentication (anonymous access).
    pub fn new(base_url: &str) -> Self {
        Self::build(base_url, None)
    }

    /// Client authenticating with HTTP basic auth (username + API token).
    pub fn with_basic_auth(base_url: &str, username: &str, api_token: &str) -> Self {
        let credentials = BASE64.encode(format!("{username}:{api_token}"));
        Self::build(base_url, Some(format!("Basic {credentials}")))
    }

    /// Client authenticating with a bearer token (personal access token).
    pub fn with_bearer(base_url: &str, token: &str) -> Self {
        Self::build(base_url, Some(format!("Bearer {token}")))
    }

    /// Client from a validated [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the config is incomplete.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match (&config.username, &config.api_token) {
            (Some(username), Some(token)) => {
                Self::with_basic_auth(&config.base_url, username, token)
            }
            (None, Some(token)) => Self::with_bearer(&config.base_url, token),
            _ => Self::new(&config.base_url),
        })
    }

    fn build(base_url: &str, auth_header: Option<String>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header,
        }
    }

    /// Full URL for a resource path under the API root.
    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/{}", self.base_url, path)
    }

    fn http_get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ConfluenceError> {
        let url = self.api_url(path);
        let mut request = self.agent.get(&url).header("Accept", "application/json");
        if let Some(auth) = &self.auth_header {
            request = request.header("Authorization", auth);
        }
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        let response = request.call()?;
        Self::decode_body(response)
    }

    fn http_post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        payload: &Value,
    ) -> Result<Value, ConfluenceError> {
        let url = self.api_url(path);
        let payload_bytes = serde_json::to_vec(payload)?;

        let mut request = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(auth) = &self.auth_header {
            request = request.header("Authorization", auth);
        }
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        let response = request.send(&payload_bytes[..])?;
        Self::decode_body(response)
    }

    fn http_put(&self, path: &str, payload: &Value) -> Result<Value, ConfluenceError> {
        let url = self.api_url(path);
        let payload_bytes = serde_json::to_vec(payload)?;

        let mut request = self
            .agent
            .put(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(auth) = &self.auth_header {
            request = request.header("Authorization", auth);
        }

        let response = request.send(&payload_bytes[..])?;
        Self::decode_body(response)
    }

    /// DELETE returning the raw transport response; there is no body to
    /// decode on success.
    fn http_delete(
        &self,
        path: &str,
    ) -> Result<ureq::http::Response<ureq::Body>, ConfluenceError> {
        let url = self.api_url(path);
        let mut request = self.agent.delete(&url).header("Accept", "application/json");
        if let Some(auth) = &self.auth_header {
            request = request.header("Authorization", auth);
        }

        let response = request.call()?;
        let status = response.status().as_u16();
        if status >= 400 {
            let error_body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ConfluenceError::Response {
                status,
                body: error_body,
            });
        }
        Ok(response)
    }

    /// Check the status, then decode the body as JSON.
    ///
    /// Non-JSON bodies on success surface as [`ConfluenceError::Decoding`];
    /// error statuses carry the raw body text instead.
    fn decode_body(
        response: ureq::http::Response<ureq::Body>,
    ) -> Result<Value, ConfluenceError> {
        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ConfluenceError::Response {
                status,
                body: error_body,
            });
        }

        let text = body.read_to_string()?;
        Ok(serde_json::from_str(&text)?)
    }
}
