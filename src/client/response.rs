//! Buffered HTTP response.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error_handling::{classify_reqwest_error, ClientError};

/// A fully received response: status, headers, and the buffered body.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response from its parts. Used by transports.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Reads a `reqwest::Response` to completion, refusing bodies over `limit` bytes.
    ///
    /// A declared `Content-Length` over the limit fails before any body is
    /// read; otherwise chunks are accumulated until the limit is crossed.
    pub(crate) async fn from_reqwest(
        mut response: reqwest::Response,
        url: &str,
        timeout: Duration,
        limit: usize,
    ) -> Result<Self, ClientError> {
        let too_large = || ClientError::BodyTooLarge {
            url: url.to_string(),
            limit,
        };
        if response
            .content_length()
            .is_some_and(|len| len > limit as u64)
        {
            return Err(too_large());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| classify_reqwest_error(url, timeout, e))?
        {
            if body.len() + chunk.len() > limit {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        Ok(Self::new(status, headers, body))
    }

    /// Status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, returning the body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Decode` if the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str, ClientError> {
        std::str::from_utf8(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Body parsed as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u32,
        name: String,
    }

    #[test]
    fn test_json_body() {
        let response = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            br#"{"id":1,"name":"ada"}"#.to_vec(),
        );
        let user: User = response.json().unwrap();
        assert_eq!(
            user,
            User {
                id: 1,
                name: "ada".to_string()
            }
        );
    }

    #[test]
    fn test_json_decode_error() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), b"not json".to_vec());
        let err = response.json::<User>().unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), vec![0xff, 0xfe]);
        assert!(matches!(response.text(), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_into_body() {
        let response = Response::new(StatusCode::CREATED, HeaderMap::new(), b"x".to_vec());
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.into_body(), b"x".to_vec());
    }
}
