//! api_client library: a pre-configured HTTP client for the backend API
//!
//! A `ConfiguredHttpClient` is built once from a `ClientConfig` (base URL,
//! timeout, default headers) and then issues requests against paths relative
//! to the base URL, so calling code never repeats that boilerplate.
//!
//! # Example
//!
//! ```no_run
//! use api_client::{ClientConfig, ConfiguredHttpClient, RequestOptions};
//! use reqwest::Method;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // http://localhost:8000/, 10 s timeout, Content-Type: application/json
//! let client = ConfiguredHttpClient::new(ClientConfig::default())?;
//!
//! let user = client
//!     .request(Method::GET, "users/1", RequestOptions::new())
//!     .await?;
//! println!("{} {}", user.status(), user.text()?);
//!
//! let created = client
//!     .post("users", RequestOptions::new().json(&serde_json::json!({"name": "ada"}))?)
//!     .await?;
//! println!("{}", created.status());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod client;
pub mod config;
mod error_handling;
pub mod initialization;

// Re-export public API
pub use client::{
    ConfiguredHttpClient, PreparedRequest, RequestOptions, ReqwestTransport, Response,
    StatusPolicy, Transport,
};
pub use config::{ClientConfig, DefaultHeaders, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, ClientError, ConfigError, ErrorKind, InitializationError,
};
