//! Workflow Errors
//!
//! The two failure kinds of every operation: local validation, and request
//! failures (non-OK status or transport error).

use serde_json::Value;
use thiserror::Error;

/// Result alias for workflow operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Local form validation failures. Block the request entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name for the menu item")]
    MissingName,
    #[error("Please enter a valid price greater than 0")]
    InvalidPrice,
    /// Positive, but too large or too finely divided for a decimal price
    #[error("Price is outside the supported range")]
    PriceOutOfRange,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please enter both username and password")]
    MissingCredentials,
}

/// A request that did not produce a usable OK response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// `fetch` itself failed (network down, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),
    /// OK response whose body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Build a status error, pulling `detail` out of the body when it is JSON.
    pub fn from_status(status: u16, body: &str) -> Self {
        RequestError::Status {
            status,
            detail: extract_detail(body),
        }
    }

    /// Message to show the user, or `fallback` when the server gave none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            RequestError::Status { detail: Some(detail), .. } => detail.clone(),
            RequestError::Network(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Anything a workflow operation can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Pull a human readable `detail` from an error body.
///
/// Accepts `{"detail": "..."}` and the FastAPI validation shape
/// `{"detail": [{"msg": "...", ...}]}`. Anything else yields `None`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(entries) => entries
            .iter()
            .find_map(|e| e.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_detail() {
        let detail = extract_detail(r#"{"detail":"Not enough permissions"}"#);
        assert_eq!(detail.as_deref(), Some("Not enough permissions"));
    }

    #[test]
    fn test_extract_validation_list_detail() {
        let body = r#"{"detail":[{"loc":["body","price"],"msg":"Input should be greater than or equal to 0","type":"greater_than_equal"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("Input should be greater than or equal to 0")
        );
    }

    #[test]
    fn test_non_json_body_has_no_detail() {
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
        assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
    }

    #[test]
    fn test_user_message_fallbacks() {
        let err = RequestError::from_status(500, "Internal Server Error");
        assert_eq!(err.user_message("Failed to add menu item"), "Failed to add menu item");

        let err = RequestError::from_status(403, r#"{"detail":"Not enough permissions"}"#);
        assert_eq!(err.user_message("Failed to add menu item"), "Not enough permissions");

        let err = RequestError::Network("Failed to fetch".into());
        assert_eq!(err.user_message("Login failed"), "Failed to fetch");

        let err = RequestError::Network(String::new());
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }
}
