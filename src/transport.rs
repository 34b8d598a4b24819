use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::debug;

use crate::{config::Pan123Config, error::Result};

/// A single HTTP round trip
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn query(mut self, query: &[(&str, String)]) -> Self {
        self.query
            .extend(query.iter().map(|(k, v)| (k.to_string(), v.clone())));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Performs HTTP round trips on behalf of a driver
///
/// Implementations return the raw response body whatever the HTTP status
/// line says; the remote reports success or failure inside the body.
/// Only failures of the round trip itself (DNS, connection, timeout) are
/// errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<Bytes>;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &Pan123Config) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Wrap an existing client, e.g. one shared with other drivers
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(&Pan123Config::default())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Bytes> {
        let mut builder = self.client.request(request.method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!(status = %response.status(), url = %request.url, "response received");

        Ok(response.bytes().await?)
    }
}
