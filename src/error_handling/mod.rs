//! Error handling.
//!
//! This module provides:
//! - The `ClientError` taxonomy returned by every request
//! - `ErrorKind`, a flat categorisation of `ClientError` variants
//! - Configuration and initialization error types
//! - Mapping of `reqwest::Error` into the taxonomy
//!
//! Errors are categorized into:
//! - **Network**: the connection could not be established, was reset, or the
//!   body could not be read
//! - **Timeout**: no response arrived within the configured deadline
//! - **HttpStatus**: a response arrived but the status policy rejected it
//! - **InvalidRequest / Build / Decode**: local failures before or after the exchange

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, classify_reqwest_error};
pub use types::{ClientError, ConfigError, ErrorKind, InitializationError};
