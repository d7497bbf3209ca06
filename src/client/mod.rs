//! The pre-configured HTTP client.
//!
//! `ConfiguredHttpClient` resolves every request path against a fixed base
//! URL, merges the configured default headers with per-call headers, applies
//! the configured deadline, and maps the outcome onto `ClientError`.
//!
//! There is no global instance: construct one at startup and pass it (or an
//! `Arc` of it) to whatever needs it. Cloning is cheap and clones share the
//! same configuration and transport.

mod options;
mod policy;
mod response;
mod transport;

use std::fmt;
use std::sync::Arc;

use log::debug;
use reqwest::Method;
use url::{form_urlencoded, Url};

use crate::config::ClientConfig;
use crate::error_handling::ClientError;

pub use options::RequestOptions;
pub use policy::StatusPolicy;
pub use response::Response;
pub use transport::{PreparedRequest, ReqwestTransport, Transport};

/// HTTP client bound to a base URL, timeout, and default headers.
///
/// # Examples
///
/// ```no_run
/// use api_client::{ClientConfig, ConfiguredHttpClient, RequestOptions};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ConfiguredHttpClient::new(ClientConfig::default())?;
/// let response = client.get("users/1", RequestOptions::new()).await?;
/// println!("{}", response.text()?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConfiguredHttpClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ConfiguredHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredHttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ConfiguredHttpClient {
    /// Creates a client that sends requests with reqwest.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the underlying reqwest client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport<T: Transport + 'static>(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// The immutable configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a request to `base_url + path`.
    ///
    /// Default headers are merged with `options` headers (per-call wins on
    /// name collision). The call fails with `ClientError::Timeout` if no
    /// response arrives within the effective timeout, and with
    /// `ClientError::HttpStatus` if the effective status policy rejects the
    /// response status.
    ///
    /// # Errors
    ///
    /// - `ClientError::InvalidUrl` if `base_url + path` does not parse
    /// - `ClientError::InvalidTimeout` if the per-call timeout is zero
    /// - `ClientError::Network` / `ClientError::Transport` on connection failure
    /// - `ClientError::Timeout` when the deadline passes
    /// - `ClientError::HttpStatus` when the status policy rejects the response
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        mut options: RequestOptions,
    ) -> Result<Response, ClientError> {
        let policy = options
            .policy_override()
            .unwrap_or_else(|| self.config.status_policy());
        let url = self.resolve_url(path, options.query_pairs())?;
        let timeout = options
            .timeout_override()
            .unwrap_or_else(|| self.config.timeout());
        if timeout.is_zero() {
            return Err(ClientError::InvalidTimeout { url });
        }
        let headers = self.config.default_headers().merge(options.header_map());

        let prepared = PreparedRequest {
            method,
            url: url.clone(),
            headers,
            body: options.take_body(),
            timeout,
        };

        debug!("{} {} (timeout {:?})", prepared.method, url, timeout);

        // Enforced here as well as in the transport so that every transport
        // observes the same deadline
        let response = match tokio::time::timeout(timeout, self.transport.send(prepared)).await {
            Ok(result) => result?,
            Err(_) => {
                debug!("Request to {url} timed out after {timeout:?}");
                return Err(ClientError::Timeout { url, timeout });
            }
        };

        let status = response.status();
        debug!("Response from {url}: {status}");

        if !policy.accepts(status) {
            return Err(ClientError::HttpStatus {
                url,
                status,
                response: Box::new(response),
            });
        }
        Ok(response)
    }

    /// `GET base_url + path`.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Response, ClientError> {
        self.request(Method::GET, path, options).await
    }

    /// `DELETE base_url + path`.
    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        self.request(Method::DELETE, path, options).await
    }

    /// `HEAD base_url + path`.
    pub async fn head(&self, path: &str, options: RequestOptions) -> Result<Response, ClientError> {
        self.request(Method::HEAD, path, options).await
    }

    /// `POST base_url + path`.
    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<Response, ClientError> {
        self.request(Method::POST, path, options).await
    }

    /// `PUT base_url + path`.
    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<Response, ClientError> {
        self.request(Method::PUT, path, options).await
    }

    /// `PATCH base_url + path`.
    pub async fn patch(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        self.request(Method::PATCH, path, options).await
    }

    /// Joins the base URL and `path` by plain concatenation.
    ///
    /// The joined string must parse as a URL but is never normalized: dot
    /// segments and unescaped characters are passed on as written. Query
    /// parameters are form-encoded and appended after `?` (or `&` when the
    /// path already carries a query).
    fn resolve_url(&self, path: &str, query: &[(String, String)]) -> Result<String, ClientError> {
        let mut target = format!("{}{}", self.config.base_url(), path);
        Url::parse(&target).map_err(|source| ClientError::InvalidUrl {
            url: target.clone(),
            source,
        })?;
        if query.is_empty() {
            return Ok(target);
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        target.push(if target.contains('?') { '&' } else { '?' });
        target.push_str(&encoded);
        Ok(target)
    }
}
