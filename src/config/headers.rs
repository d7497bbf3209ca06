//! Default request headers.
//!
//! Headers are stored in a `reqwest::header::HeaderMap`, so names compare
//! case-insensitively (`Content-Type` and `content-type` are the same key).
//!
//! Merge semantics: when a request carries its own headers, every header name
//! present on the request replaces *all* default values for that name. Default
//! headers whose names the request does not mention are kept unchanged.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::config::constants::CONTENT_TYPE_JSON;
use crate::error_handling::ClientError;

/// Parses a header name and value from strings.
///
/// # Errors
///
/// Returns `ClientError::InvalidHeader` if the name is not a valid HTTP token
/// or the value contains characters not allowed in a header value.
pub fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ClientError> {
    let header_name =
        HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| ClientError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok((header_name, header_value))
}

/// Headers applied to every outgoing request unless overridden per call.
///
/// The default set contains only `Content-Type: application/json`.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultHeaders(HeaderMap);

impl DefaultHeaders {
    /// The standard set: `Content-Type: application/json`.
    pub fn json() -> Self {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        Self(map)
    }

    /// An empty header set.
    pub fn empty() -> Self {
        Self(HeaderMap::new())
    }

    /// Adds (or replaces) a default header.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidHeader` if the name or value is malformed.
    pub fn with(mut self, name: &str, value: &str) -> Result<Self, ClientError> {
        let (name, value) = parse_header(name, value)?;
        self.0.insert(name, value);
        Ok(self)
    }

    /// Removes a default header by name. Unknown names are ignored.
    pub fn without(mut self, name: &str) -> Self {
        self.0.remove(name);
        self
    }

    /// Returns the value of a default header, if present and valid UTF-8.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.to_str().ok())
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &HeaderMap {
        &self.0
    }

    /// Merges per-call headers over the defaults.
    ///
    /// Per-call headers win on name collision; all default values for a
    /// colliding name are dropped before the per-call values are added.
    pub fn merge(&self, overrides: &HeaderMap) -> HeaderMap {
        let mut merged = self.0.clone();
        for name in overrides.keys() {
            merged.remove(name);
        }
        for (name, value) in overrides {
            merged.append(name.clone(), value.clone());
        }
        merged
    }
}

impl Default for DefaultHeaders {
    fn default() -> Self {
        Self::json()
    }
}

impl From<HeaderMap> for DefaultHeaders {
    fn from(map: HeaderMap) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_contain_json_content_type() {
        let headers = DefaultHeaders::default();
        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert_eq!(headers.as_map().len(), 1);
    }

    #[test]
    fn test_merge_without_overrides_keeps_defaults() {
        let headers = DefaultHeaders::json();
        let merged = headers.merge(&HeaderMap::new());
        assert_eq!(merged, *headers.as_map());
    }

    #[test]
    fn test_merge_override_wins_case_insensitive() {
        let defaults = DefaultHeaders::json();
        let mut overrides = HeaderMap::new();
        let (name, value) = parse_header("content-TYPE", "text/plain").unwrap();
        overrides.insert(name, value);

        let merged = defaults.merge(&overrides);
        let values: Vec<_> = merged.get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values, vec!["text/plain"]);
    }

    #[test]
    fn test_merge_keeps_unrelated_defaults() {
        let defaults = DefaultHeaders::json().with("X-Client", "web").unwrap();
        let mut overrides = HeaderMap::new();
        let (name, value) = parse_header("X-Request-Id", "abc").unwrap();
        overrides.insert(name, value);

        let merged = defaults.merge(&overrides);
        assert_eq!(merged.get("content-type").unwrap(), "application/json");
        assert_eq!(merged.get("x-client").unwrap(), "web");
        assert_eq!(merged.get("x-request-id").unwrap(), "abc");
    }

    #[test]
    fn test_merge_replaces_every_default_value_for_name() {
        let mut map = HeaderMap::new();
        map.append("accept", HeaderValue::from_static("a/a"));
        map.append("accept", HeaderValue::from_static("b/b"));
        let defaults = DefaultHeaders::from(map);

        let mut overrides = HeaderMap::new();
        overrides.insert("accept", HeaderValue::from_static("c/c"));

        let merged = defaults.merge(&overrides);
        let values: Vec<_> = merged.get_all("accept").iter().collect();
        assert_eq!(values, vec!["c/c"]);
    }

    #[test]
    fn test_without_removes_header() {
        let headers = DefaultHeaders::json().without("Content-Type");
        assert!(headers.get("content-type").is_none());
        assert!(headers.as_map().is_empty());
    }

    #[test]
    fn test_parse_header_rejects_bad_name() {
        let err = parse_header("bad header", "x").unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader { .. }));
    }

    #[test]
    fn test_parse_header_rejects_bad_value() {
        let err = parse_header("X-Test", "line\nbreak").unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader { .. }));
    }
}
