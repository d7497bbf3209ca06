//! Application initialization.
//!
//! This module provides functions to initialize the shared resources:
//! - The logger
//! - The configured HTTP client
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
