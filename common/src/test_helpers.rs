/// Shared Test Helpers for Cross-Crate Use
///
/// This module provides centralized test utilities used by the `churn`
/// integration tests to avoid code duplication.

// =============================================================================
// UNIFIED TEST ERROR HANDLING
// =============================================================================

/// Unified error type for all test failures
///
/// This provides a consistent error interface across all test suites,
/// making debugging easier and error handling more predictable.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    #[error("Assertion failed: {message}")]
    AssertionFailure { message: String },

    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("HTTP error: {source}")]
    HttpError {
        #[from]
        source: http::Error,
    },

    #[error("Generic test error: {message}")]
    Generic { message: String },
}

impl TestError {
    /// Create an assertion failure error
    pub fn assertion_failure(message: impl Into<String>) -> Self {
        Self::AssertionFailure {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }
}

/// Alias for the standard test result type
pub type TestResult<T = ()> = Result<T, TestError>;

/// Utility functions for common test operations
pub mod test_utils {
    use super::*;

    /// Safe HTTP request builder that returns TestError
    pub fn build_request(
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> TestResult<http::Request<String>> {
        let mut builder = http::Request::builder().uri(uri).method(method);

        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let request = builder
            .body(body.unwrap_or_default())
            .map_err(TestError::from)?;

        Ok(request)
    }

    /// Safe JSON serialization that returns TestError
    pub fn serialize_json<T: serde::Serialize>(value: &T) -> TestResult<String> {
        serde_json::to_string(value).map_err(TestError::from)
    }

    /// Safe response status check
    pub fn check_status_code(
        actual: http::StatusCode,
        expected: http::StatusCode,
    ) -> TestResult<()> {
        if actual != expected {
            return Err(TestError::assertion_failure(format!(
                "Status code mismatch: expected {}, got {}",
                expected, actual
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_sets_json_content_type() {
        let request =
            test_utils::build_request("POST", "/predict", Some("{}".to_string())).unwrap();
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(
            request.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_build_request_without_body_has_no_content_type() {
        let request = test_utils::build_request("GET", "/health", None).unwrap();
        assert!(request.headers().get("Content-Type").is_none());
        assert_eq!(request.body(), "");
    }

    #[test]
    fn test_check_status_code_mismatch() {
        let result =
            test_utils::check_status_code(http::StatusCode::OK, http::StatusCode::BAD_REQUEST);
        assert!(result.is_err());
    }
}
