//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (base URL, timeout, content type)
//! - The default header mapping and its merge semantics
//! - `ClientConfig` and the CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::{parse_header, DefaultHeaders};
pub use types::{parse_header_arg, parse_method, parse_query_arg, ClientConfig, LogFormat, LogLevel, Opt};
