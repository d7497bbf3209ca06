//! Error type definitions.

use std::time::Duration;

use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::client::Response;

/// Errors returned by `ConfiguredHttpClient::request` and its helpers.
///
/// Nothing is retried or suppressed locally: every failure reaches the caller.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The connection could not be established, was reset, or the response
    /// body could not be read.
    #[error("Network error requesting {url}: {source}")]
    Network {
        /// Target URL
        url: String,
        /// Underlying transport error
        source: reqwest::Error,
    },

    /// Transport-level failure reported by a non-reqwest transport.
    #[error("Transport error requesting {url}: {message}")]
    Transport {
        /// Target URL
        url: String,
        /// Description supplied by the transport
        message: String,
    },

    /// No response arrived within the deadline.
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Target URL
        url: String,
        /// Deadline that elapsed
        timeout: Duration,
    },

    /// A response arrived but the status policy treats its status as a failure.
    #[error("Request to {url} failed with HTTP status {status}")]
    HttpStatus {
        /// Target URL
        url: String,
        /// Status code of the rejected response
        status: StatusCode,
        /// The full response, so callers can inspect the error body
        response: Box<Response>,
    },

    /// `base_url + path` is not a valid URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The joined URL that failed to parse
        url: String,
        /// Parse failure
        source: url::ParseError,
    },

    /// A header name or value is malformed.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// Header name as supplied
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// The effective timeout is zero.
    #[error("Invalid timeout for {url}: must be greater than zero")]
    InvalidTimeout {
        /// Target URL
        url: String,
    },

    /// The response body exceeded the transport's size limit.
    #[error("Response body from {url} exceeds {limit} bytes")]
    BodyTooLarge {
        /// Target URL
        url: String,
        /// Maximum accepted body size in bytes
        limit: usize,
    },

    /// The request body could not be serialized.
    #[error("Request body serialization error: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The response body could not be decoded as requested.
    #[error("Response decode error: {0}")]
    Decode(String),

    /// The underlying HTTP client or request could not be built.
    #[error("HTTP client build error: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Network { .. } | ClientError::Transport { .. } => ErrorKind::Network,
            ClientError::Timeout { .. } => ErrorKind::Timeout,
            ClientError::HttpStatus { .. } => ErrorKind::HttpStatus,
            ClientError::InvalidUrl { .. }
            | ClientError::InvalidHeader { .. }
            | ClientError::InvalidTimeout { .. }
            | ClientError::InvalidBody(_) => ErrorKind::InvalidRequest,
            ClientError::Decode(_) | ClientError::BodyTooLarge { .. } => ErrorKind::Decode,
            ClientError::Build(_) => ErrorKind::Build,
        }
    }

    /// The response attached to an `HttpStatus` error.
    pub fn response(&self) -> Option<&Response> {
        match self {
            ClientError::HttpStatus { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Flat categorisation of `ClientError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    // Exchange failures
    /// Connection failed, was reset, or the body could not be read
    Network,
    /// No response within the deadline
    Timeout,
    /// Response status rejected by the status policy
    HttpStatus,
    // Local failures
    /// Bad URL, header, or body
    InvalidRequest,
    /// Response body not decodable as requested
    Decode,
    /// HTTP client or request could not be built
    Build,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Human-readable name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "Network error",
            ErrorKind::Timeout => "Timeout error",
            ErrorKind::HttpStatus => "HTTP status error",
            ErrorKind::InvalidRequest => "Invalid request",
            ErrorKind::Decode => "Decode error",
            ErrorKind::Build => "Client build error",
        }
    }
}

/// Errors constructing a `ClientConfig`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The timeout must be a positive number of milliseconds.
    #[error("Timeout must be greater than zero milliseconds")]
    ZeroTimeout,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ClientError),
}
