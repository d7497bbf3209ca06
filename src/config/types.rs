//! Configuration types and CLI options.
//!
//! This module defines the library-level `ClientConfig` and the structs and
//! enums used for command-line argument parsing.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use reqwest::Method;

use crate::client::{RequestOptions, StatusPolicy};
use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_MS, ENV_BASE_URL, ENV_TIMEOUT_MS,
};
use crate::config::headers::DefaultHeaders;
use crate::error_handling::{ClientError, ConfigError};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Immutable client configuration.
///
/// Built once at startup and shared read-only by every request issued through
/// a `ConfiguredHttpClient`. The base URL is not validated here; a malformed
/// base URL surfaces as `ClientError::InvalidUrl` on the first request.
///
/// # Examples
///
/// ```
/// use api_client::{ClientConfig, DefaultHeaders};
///
/// let config = ClientConfig::new("http://localhost:8000/", 10_000)
///     .unwrap()
///     .with_default_headers(DefaultHeaders::json());
/// assert_eq!(config.timeout().as_millis(), 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    default_headers: DefaultHeaders,
    status_policy: StatusPolicy,
}

impl ClientConfig {
    /// Creates a configuration with the default JSON headers and status policy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTimeout` if `timeout_ms` is zero.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(timeout_ms),
            default_headers: DefaultHeaders::default(),
            status_policy: StatusPolicy::default(),
        })
    }

    /// Replaces the default headers.
    pub fn with_default_headers(mut self, headers: DefaultHeaders) -> Self {
        self.default_headers = headers;
        self
    }

    /// Replaces the status policy applied when a request does not set its own.
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Prefix prepended to every request path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maximum time to wait for a response.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers merged into every request.
    pub fn default_headers(&self) -> &DefaultHeaders {
        &self.default_headers
    }

    /// Policy deciding which status codes are failures.
    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: DefaultHeaders::default(),
            status_policy: StatusPolicy::default(),
        }
    }
}

/// Parses an HTTP method, accepting any case (`get`, `GET`).
pub fn parse_method(s: &str) -> Result<Method, String> {
    Method::from_bytes(s.to_ascii_uppercase().as_bytes())
        .map_err(|e| format!("invalid HTTP method '{s}': {e}"))
}

/// Parses a `Name: value` header argument.
pub fn parse_header_arg(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("header '{s}' must be in the form 'Name: value'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header '{s}' has an empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Parses a `key=value` query argument.
pub fn parse_query_arg(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("query parameter '{s}' must be in the form 'key=value'"))?;
    Ok((key.to_string(), value.to_string()))
}

/// Command-line options for the `api_client` binary.
///
/// Issues a single request against the backend API and prints the response.
///
/// # Examples
///
/// ```bash
/// api_client get users/1
/// api_client post users --data '{"name":"x"}'
/// api_client post users -H 'Content-Type: text/plain' --data x
/// API_CLIENT_BASE_URL=http://api.internal/ api_client get health
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "api_client",
    about = "Sends a request to the backend API using the pre-configured client."
)]
pub struct Opt {
    /// HTTP method (GET, POST, PUT, PATCH, DELETE, HEAD, ...)
    #[arg(value_parser = parse_method)]
    pub method: Method,

    /// Path relative to the base URL (e.g. users/1)
    pub path: String,

    /// Base URL prepended to the path
    #[arg(long, env = ENV_BASE_URL, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[arg(long, env = ENV_TIMEOUT_MS, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Extra header, overriding defaults on name collision ('Name: value')
    #[arg(short = 'H', long = "header", value_parser = parse_header_arg)]
    pub headers: Vec<(String, String)>,

    /// Query parameter appended to the URL ('key=value')
    #[arg(short = 'q', long = "query", value_parser = parse_query_arg)]
    pub query: Vec<(String, String)>,

    /// Request body sent verbatim
    #[arg(short = 'd', long)]
    pub data: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the client configuration from the CLI options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTimeout` if `--timeout-ms 0` was given.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        ClientConfig::new(self.base_url.clone(), self.timeout_ms)
    }

    /// Builds the per-call request options from the CLI options.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidHeader` if a `--header` is malformed.
    pub fn request_options(&self) -> Result<RequestOptions, ClientError> {
        let mut options = RequestOptions::new();
        for (name, value) in &self.headers {
            options = options.header(name, value)?;
        }
        for (key, value) in &self.query {
            options = options.query(key.clone(), value.clone());
        }
        if let Some(data) = &self.data {
            options = options.body(data.clone().into_bytes());
        }
        Ok(options)
    }
}
