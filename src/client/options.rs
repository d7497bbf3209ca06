//! Per-call request options.

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Serialize;

use crate::client::StatusPolicy;
use crate::config::parse_header;
use crate::error_handling::ClientError;

/// Options for a single request.
///
/// Everything is optional. Headers set here override the client's default
/// headers on name collision; a timeout or status policy set here replaces the
/// client-wide one for this call only.
///
/// # Examples
///
/// ```
/// use api_client::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("Content-Type", "text/plain")
///     .unwrap()
///     .body("x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    query: Vec<(String, String)>,
    timeout: Option<Duration>,
    status_policy: Option<StatusPolicy>,
}

impl RequestOptions {
    /// Empty options: default headers, no body, configured timeout and policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header for this call, replacing any earlier value for the same name.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidHeader` if the name or value is malformed.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ClientError> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets several already-typed headers for this call.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        for name in headers.keys() {
            self.headers.remove(name);
        }
        for (name, value) in &headers {
            self.headers.append(name.clone(), value.clone());
        }
        self
    }

    /// Sets a raw body, sent verbatim.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as JSON and uses it as the body.
    ///
    /// Headers are left alone; the default `Content-Type` is already JSON.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBody` if serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_vec(value).map_err(ClientError::InvalidBody)?;
        self.body = Some(body);
        Ok(self)
    }

    /// Appends a query parameter. Parameters keep their insertion order.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Overrides the client timeout for this call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the client status policy for this call.
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = Some(policy);
        self
    }

    pub(crate) fn header_map(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub(crate) fn timeout_override(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn policy_override(&self) -> Option<StatusPolicy> {
        self.status_policy
    }

    pub(crate) fn take_body(&mut self) -> Option<Vec<u8>> {
        self.body.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_replaces_earlier_value() {
        let options = RequestOptions::new()
            .header("X-Trace", "a")
            .unwrap()
            .header("x-trace", "b")
            .unwrap();
        let values: Vec<_> = options.header_map().get_all("x-trace").iter().collect();
        assert_eq!(values, vec!["b"]);
    }

    #[test]
    fn test_json_body() {
        let mut options = RequestOptions::new()
            .json(&json!({"name": "ada"}))
            .unwrap();
        assert_eq!(options.take_body().unwrap(), br#"{"name":"ada"}"#.to_vec());
        // JSON bodies do not add headers
        assert!(options.header_map().is_empty());
    }

    #[test]
    fn test_query_keeps_order() {
        let options = RequestOptions::new().query("b", "2").query("a", "1");
        assert_eq!(
            options.query_pairs(),
            &[
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn test_overrides_default_to_none() {
        let options = RequestOptions::new();
        assert!(options.timeout_override().is_none());
        assert!(options.policy_override().is_none());
    }
}
