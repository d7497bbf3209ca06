// Shared test helpers for mock backend setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use wiremock::MockServer;

use api_client::{ClientConfig, ConfiguredHttpClient};

/// Base URL of a mock server in the same shape as the production default
/// (scheme, host, port and a trailing slash).
pub fn base_url(server: &MockServer) -> String {
    format!("{}/", server.uri())
}

/// Creates a reqwest-backed client pointed at the mock server.
pub fn client_for(server: &MockServer, timeout_ms: u64) -> ConfiguredHttpClient {
    let config = ClientConfig::new(base_url(server), timeout_ms).expect("valid timeout");
    ConfiguredHttpClient::new(config).expect("Failed to build client")
}

/// Returns a localhost port with nothing listening on it.
#[allow(dead_code)] // Used by other test files
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    port
}
