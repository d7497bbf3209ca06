//! HTTP client initialization.

use std::sync::Arc;

use log::debug;

use crate::client::ConfiguredHttpClient;
use crate::config::ClientConfig;
use crate::error_handling::InitializationError;

/// Initializes the shared API client.
///
/// Creates a `ConfiguredHttpClient` backed by reqwest with:
/// - Base URL, timeout and default headers from `config`
/// - Rustls TLS backend (no native TLS)
///
/// The returned `Arc` is meant to be handed to every component that talks to
/// the backend.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: ClientConfig) -> Result<Arc<ConfiguredHttpClient>, InitializationError> {
    debug!(
        "Initializing API client for {} (timeout {:?})",
        config.base_url(),
        config.timeout()
    );
    let client = ConfiguredHttpClient::new(config)?;
    Ok(Arc::new(client))
}
