//! Error categorization.
//!
//! Maps `reqwest::Error` values onto the client's error taxonomy.

use std::time::Duration;

use super::types::{ClientError, ErrorKind};

/// Categorizes a `reqwest::Error` into an `ErrorKind`.
///
/// Timeouts are checked first: reqwest reports a connect that exceeded the
/// deadline as both `is_connect()` and `is_timeout()`, and it must count as a
/// timeout. Builder errors (e.g. an unparseable URL) never reach the wire.
/// Everything else that went wrong on the wire is a network error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() {
        ErrorKind::Timeout
    } else if error.is_builder() {
        ErrorKind::Build
    } else if error.is_decode() {
        ErrorKind::Decode
    } else {
        // connect, request, body, redirect and anything unclassified
        ErrorKind::Network
    }
}

/// Converts a `reqwest::Error` raised while requesting `url` into a `ClientError`.
///
/// # Arguments
///
/// * `url` - The target URL of the failed request
/// * `timeout` - The deadline that applied to the request
/// * `error` - The error reported by reqwest
pub fn classify_reqwest_error(url: &str, timeout: Duration, error: reqwest::Error) -> ClientError {
    match categorize_reqwest_error(&error) {
        ErrorKind::Timeout => ClientError::Timeout {
            url: url.to_string(),
            timeout,
        },
        ErrorKind::Build => ClientError::Build(error),
        ErrorKind::Decode => ClientError::Decode(error.to_string()),
        _ => ClientError::Network {
            url: url.to_string(),
            source: error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = format!("http://127.0.0.1:{port}/");
        let error = reqwest::Client::new().get(&url).send().await.unwrap_err();

        assert_eq!(categorize_reqwest_error(&error), ErrorKind::Network);
        let classified = classify_reqwest_error(&url, Duration::from_secs(10), error);
        assert!(matches!(classified, ClientError::Network { .. }));
    }

    #[tokio::test]
    async fn test_builder_error_is_build_error() {
        let error = reqwest::Client::new()
            .get("http://[::1")
            .send()
            .await
            .unwrap_err();
        assert_eq!(categorize_reqwest_error(&error), ErrorKind::Build);
    }
}
