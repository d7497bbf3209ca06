//! Status policy: which response status codes count as failures.

use reqwest::StatusCode;

use crate::config::HTTP_STATUS_ERROR_THRESHOLD;

/// Decides whether a received response is returned as `Ok` or turned into
/// `ClientError::HttpStatus`.
#[derive(Debug, Clone, Copy, Default)]
pub enum StatusPolicy {
    /// Status codes 400 and above are failures (default).
    #[default]
    FailOnClientOrServerError,
    /// Anything outside 2xx is a failure.
    FailOnNonSuccess,
    /// Every status is accepted.
    AcceptAll,
    /// Caller-supplied predicate; `true` means the status is accepted.
    Custom(fn(StatusCode) -> bool),
}

impl StatusPolicy {
    /// Returns `true` if a response with `status` should be returned as `Ok`.
    pub fn accepts(&self, status: StatusCode) -> bool {
        match self {
            StatusPolicy::FailOnClientOrServerError => {
                status.as_u16() < HTTP_STATUS_ERROR_THRESHOLD
            }
            StatusPolicy::FailOnNonSuccess => status.is_success(),
            StatusPolicy::AcceptAll => true,
            StatusPolicy::Custom(accept) => accept(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_threshold() {
        let policy = StatusPolicy::default();
        assert!(policy.accepts(StatusCode::OK));
        assert!(policy.accepts(StatusCode::NO_CONTENT));
        assert!(policy.accepts(StatusCode::NOT_MODIFIED));
        assert!(!policy.accepts(StatusCode::BAD_REQUEST));
        assert!(!policy.accepts(StatusCode::NOT_FOUND));
        assert!(!policy.accepts(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_non_success_policy_rejects_redirects() {
        let policy = StatusPolicy::FailOnNonSuccess;
        assert!(policy.accepts(StatusCode::CREATED));
        assert!(!policy.accepts(StatusCode::NOT_MODIFIED));
    }

    #[test]
    fn test_accept_all() {
        assert!(StatusPolicy::AcceptAll.accepts(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn test_custom_policy() {
        fn allow_not_found(status: StatusCode) -> bool {
            status.is_success() || status == StatusCode::NOT_FOUND
        }
        let policy = StatusPolicy::Custom(allow_not_found);
        assert!(policy.accepts(StatusCode::NOT_FOUND));
        assert!(!policy.accepts(StatusCode::GONE));
    }
}
