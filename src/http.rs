//! Request values and the transport that sends them.
//!
//! The client only ever produces an [`ApiRequest`] and hands it to a
//! [`Transport`]. [`ReqwestTransport`] is the production implementation; tests
//! substitute their own.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

use crate::error::{AppError, Result};

/// Name of the static authorization header attached to every request.
pub const AUTH_HEADER: &str = "AUTH-KEY";

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Sent verbatim, without any content-type wrapping.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: &str, value: String) -> Self {
        self.query.push((key.to_string(), value));
        self
    }
}

#[async_trait]
pub trait Transport {
    /// Send the request and return the response body as text.
    async fn execute(&self, request: &ApiRequest) -> std::result::Result<String, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, auth_key: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut auth_value = HeaderValue::from_str(auth_key)
            .map_err(|e| AppError::Config(format!("Invalid auth key: {}", e)))?;
        auth_value.set_sensitive(true);

        let auth_name = HeaderName::from_bytes(AUTH_HEADER.as_bytes())
            .map_err(|e| AppError::Config(format!("Invalid auth header name: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert(auth_name, auth_value);

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build reqwest client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    fn resolve(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

/// Parse the base URL, forcing a trailing slash so relative paths are appended
/// rather than replacing the last segment.
///
/// A query string or fragment would end up ahead of every request path, so
/// both are rejected.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| AppError::Config(format!("Invalid base URL {:?}: {}", base_url, e)))?;

    if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
        return Err(AppError::Config(format!(
            "Invalid base URL {:?}: must be a hierarchical URL without query or fragment",
            base_url
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> std::result::Result<String, TransportError> {
        let url = self.resolve(&request.path)?;
        debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
