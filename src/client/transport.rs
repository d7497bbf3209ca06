//! Request transports.
//!
//! A `Transport` performs one fully prepared request. `ConfiguredHttpClient`
//! owns one behind an `Arc<dyn Transport>`, so tests can substitute a fake.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{ClientBuilder, Method};

use crate::client::Response;
use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{classify_reqwest_error, ClientError};

/// A request with the base URL resolved, headers merged, and the deadline fixed.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute target URL
    pub url: String,
    /// Default headers merged with per-call headers
    pub headers: HeaderMap,
    /// Request body, if any
    pub body: Option<Vec<u8>>,
    /// Maximum time to wait for the response
    pub timeout: Duration,
}

/// Performs prepared requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and reads the whole response.
    ///
    /// Implementations report connection failures as `ClientError::Network`
    /// or `ClientError::Transport`. Status codes are not interpreted here.
    async fn send(&self, request: PreparedRequest) -> Result<Response, ClientError>;
}

/// Shared transports, so callers can keep a handle to the one they hand over.
#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: PreparedRequest) -> Result<Response, ClientError> {
        (**self).send(request).await
    }
}

/// The production transport, backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    max_body_size: usize,
}

impl ReqwestTransport {
    /// Builds a reqwest client with `timeout` as its overall request timeout.
    ///
    /// Uses the rustls TLS backend and follows redirects with reqwest's
    /// default policy.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the client cannot be created.
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self::from_client(client))
    }

    /// Wraps an existing reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client,
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }

    /// Sets the largest response body, in bytes, that will be buffered.
    pub fn with_max_body_size(mut self, limit: usize) -> Self {
        self.max_body_size = limit;
        self
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<Response, ClientError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;

        let mut builder = self
            .client
            .request(method, url.as_str())
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&url, timeout, e))?;
        Response::from_reqwest(response, &url, timeout, self.max_body_size).await
    }
}
