//! Tests for CLI option parsing.

use clap::Parser;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use api_client::config::{LogFormat, Opt, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

#[test]
fn test_minimal_invocation_uses_defaults() {
    let opt = Opt::try_parse_from(["api_client", "get", "users/1"]).unwrap();
    assert_eq!(opt.method, Method::GET);
    assert_eq!(opt.path, "users/1");
    // Env overrides may be set in the test environment; only check when absent
    if std::env::var("API_CLIENT_BASE_URL").is_err() {
        assert_eq!(opt.base_url, DEFAULT_BASE_URL);
    }
    if std::env::var("API_CLIENT_TIMEOUT_MS").is_err() {
        assert_eq!(opt.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
    assert!(opt.headers.is_empty());
    assert!(opt.data.is_none());
    assert!(matches!(opt.log_format, LogFormat::Plain));
}

#[test]
fn test_full_invocation() {
    let opt = Opt::try_parse_from([
        "api_client",
        "POST",
        "users",
        "--base-url",
        "http://api.internal:9000/",
        "--timeout-ms",
        "2500",
        "-H",
        "Content-Type: text/plain",
        "--header",
        "X-Trace: abc",
        "-q",
        "dry_run=true",
        "--data",
        "x",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(opt.method, Method::POST);
    assert_eq!(opt.base_url, "http://api.internal:9000/");
    assert_eq!(opt.timeout_ms, 2500);
    assert_eq!(
        opt.headers,
        vec![
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("X-Trace".to_string(), "abc".to_string())
        ]
    );
    assert_eq!(opt.query, vec![("dry_run".to_string(), "true".to_string())]);
    assert_eq!(opt.data.as_deref(), Some("x"));

    let config = opt.client_config().unwrap();
    assert_eq!(config.timeout().as_millis(), 2500);
    assert_eq!(
        config.default_headers().as_map().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert!(opt.request_options().is_ok());
}

#[test]
fn test_malformed_header_is_rejected() {
    let result = Opt::try_parse_from(["api_client", "get", "users", "-H", "no-colon"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_timeout_rejected_when_building_config() {
    let opt =
        Opt::try_parse_from(["api_client", "get", "users", "--timeout-ms", "0"]).unwrap();
    assert!(opt.client_config().is_err());
}

#[test]
fn test_missing_path_is_rejected() {
    assert!(Opt::try_parse_from(["api_client", "get"]).is_err());
}
