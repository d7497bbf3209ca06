//! Configuration constants.
//!
//! Defaults for the backend API client. Every value here can be overridden
//! when building a `ClientConfig` or from the command line.

use std::time::Duration;

/// Base URL of the backend API. Request paths are appended to it verbatim.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Per-request timeout as a `Duration`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

/// Content type sent with every request unless overridden per call.
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Environment variables read by the CLI (also loadable from a .env file)
/// Overrides the base URL for the CLI
pub const ENV_BASE_URL: &str = "API_CLIENT_BASE_URL";
/// Overrides the timeout (milliseconds) for the CLI
pub const ENV_TIMEOUT_MS: &str = "API_CLIENT_TIMEOUT_MS";

// HTTP status codes (for clarity and consistency)
/// First status code treated as a failure by the default status policy
pub const HTTP_STATUS_ERROR_THRESHOLD: u16 = 400;

// Response size limits
/// Maximum response body size in bytes (10MB)
/// Larger bodies fail with `ClientError::BodyTooLarge` instead of being buffered
pub const MAX_RESPONSE_BODY_SIZE: usize = 10 * 1024 * 1024;
