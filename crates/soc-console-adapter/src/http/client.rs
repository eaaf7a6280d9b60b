/*
[INPUT]:  Client configuration, credentials and a Transport implementation
[OUTPUT]: Verb helpers and decoded JSON responses for endpoint wrappers
[POS]:    HTTP layer - shared client used by every endpoint module
[UPDATE]: When adding connection options or changing response handling
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::http::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::http::{ConsoleError, Result};

/// Default backend address
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub access_token: String,
}

impl Credentials {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

/// Main HTTP client for the SOC console backend
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    transport: Arc<dyn Transport>,
    credentials: Option<Credentials>,
}

impl ConsoleClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client pointing at `base_url` with otherwise default settings
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    /// Create a client over any transport (used to substitute fakes)
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            credentials: None,
        }
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn clear_credentials(&mut self) {
        self.credentials = None;
    }

    /// Start a GET request
    pub fn get(&self, path: impl Into<String>) -> HttpRequest {
        self.request(Method::GET, path)
    }

    /// Start a POST request
    pub fn post(&self, path: impl Into<String>) -> HttpRequest {
        self.request(Method::POST, path)
    }

    /// Start a PUT request
    pub fn put(&self, path: impl Into<String>) -> HttpRequest {
        self.request(Method::PUT, path)
    }

    /// Start a DELETE request
    pub fn delete(&self, path: impl Into<String>) -> HttpRequest {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: impl Into<String>) -> HttpRequest {
        HttpRequest::new(method, path).bearer_token(
            self.credentials
                .as_ref()
                .map(|credentials| credentials.access_token.clone()),
        )
    }

    /// Execute a request once and decode the JSON body.
    ///
    /// Non-2xx statuses become [`ConsoleError::Api`].
    pub async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let method = request.method.clone();
        let path = request.path.clone();

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            let message = error_message(&response.body);
            warn!(
                method = %method,
                path = %path,
                status = response.status,
                message = %message,
                "request rejected by backend"
            );
            return Err(ConsoleError::Api {
                status: response.status,
                message,
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// Pull a human readable message out of an error body
fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        for key in ["detail", "message"] {
            match value.get(key) {
                Some(Value::String(text)) => return text.clone(),
                // validation errors carry a list under `detail`
                Some(other) if !other.is_null() => return other.to_string(),
                _ => {}
            }
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}
