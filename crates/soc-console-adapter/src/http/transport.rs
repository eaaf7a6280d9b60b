/*
[INPUT]:  Transport-neutral request descriptions from ConsoleClient
[OUTPUT]: Raw status + body pairs from the backend
[POS]:    HTTP layer - capability seam between endpoint wrappers and the network
[UPDATE]: When changing how requests reach the wire or adding body kinds
*/

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::http::{ClientConfig, ConsoleError, Result};
use crate::types::{FormPart, UploadForm};

/// Body attached to an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(UploadForm),
}

/// A single request as built by an endpoint wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub bearer_token: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            bearer_token: None,
        }
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a multipart form body
    pub fn multipart(mut self, form: UploadForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    /// JSON body, if one is attached
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Value of the first query parameter named `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw backend response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a response carrying a JSON document
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests against the backend.
///
/// Implementations perform exactly one network exchange per call and
/// never retry.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Production transport backed by reqwest
#[derive(Debug)]
pub struct ReqwestTransport {
    http_client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Create a transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConsoleError::Config(format!(
                "base URL cannot carry paths: {}",
                config.base_url
            )));
        }

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append an endpoint path to the base URL, keeping any base path prefix
    fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            path,
            query,
            body,
            bearer_token,
        } = request;
        let url = self.url(&path)?;

        debug!(
            method = %method,
            url = %url,
            query_params = query.len(),
            "sending request"
        );

        let mut builder = self.http_client.request(method, url);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(token) = bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(multipart_form(form)?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, body_len = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}

fn multipart_form(form: UploadForm) -> Result<Form> {
    let mut multipart = Form::new();
    for part in form.into_parts() {
        multipart = match part {
            FormPart::Text { name, value } => multipart.text(name, value),
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let mut file_part = Part::bytes(bytes).file_name(file_name);
                if let Some(content_type) = content_type {
                    file_part = file_part.mime_str(&content_type)?;
                }
                multipart.part(name, file_part)
            }
        };
    }
    Ok(multipart)
}
