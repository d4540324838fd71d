//! Error types for Walmart IO API calls.
//!
//! # Error Handling
//!
//! - [`InvalidParameterError`]: Caller input rejected before any I/O
//! - [`HttpResponseError`]: Non-success HTTP status from the API
//! - [`QuotaExceededError`]: The daily call budget is exhausted
//! - [`WalmartError`]: Unified error type returned by every endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use walmart_io::WalmartError;
//!
//! match walmart.search("ipa", RequestOptions::new()).send().await {
//!     Ok(search) => println!("{} results", search.total_results().unwrap_or_default()),
//!     Err(WalmartError::Response(e)) => println!("API error {}: {}", e.code, e.phrase),
//!     Err(WalmartError::QuotaExceeded(e)) => println!("Out of calls until {}", e.resets_at),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::clients::http_response::status_phrase;

/// Error returned when the API answers with a status other than 200 or 201.
///
/// # Example
///
/// ```rust
/// use walmart_io::clients::HttpResponseError;
///
/// let error = HttpResponseError::new(400, Some("Invalid ids".to_string()));
/// assert_eq!(
///     error.to_string(),
///     "[Request failed] Walmart server answered with the following error: \
///      Bad Request - Invalid ids. Status code: 400"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("[Request failed] Walmart server answered with the following error: {phrase}. Status code: {code}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human readable description of the status, including the detail for 400.
    pub phrase: String,
    /// The `errors[0].message` value of a 400 response body, if any.
    pub detail: Option<String>,
}

impl HttpResponseError {
    /// Creates the error for a status code and optional 400 detail.
    #[must_use]
    pub fn new(code: u16, detail: Option<String>) -> Self {
        let phrase = status_phrase(code, detail.as_deref());
        Self {
            code,
            phrase,
            detail,
        }
    }
}

/// Error returned when caller input cannot form a valid request.
///
/// Raised before the quota is charged and before any network I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid parameter: {message}")]
pub struct InvalidParameterError {
    /// What was wrong with the input.
    pub message: String,
}

impl InvalidParameterError {
    /// Creates a new error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error returned when the daily call budget is exhausted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Too many calls in one day ({daily_limit} allowed, next reset at {resets_at}). If this is incorrect, try increasing `daily_calls`")]
pub struct QuotaExceededError {
    /// The configured daily call budget.
    pub daily_limit: u32,
    /// When the budget is restored.
    pub resets_at: DateTime<Utc>,
}

/// Unified error type for Walmart IO API calls.
#[derive(Debug, Error)]
pub enum WalmartError {
    /// Caller input was rejected before sending.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// The API answered with a non-success status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The daily call budget is exhausted.
    #[error(transparent)]
    QuotaExceeded(#[from] QuotaExceededError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response did not contain valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request headers could not be signed.
    #[error("Failed to sign request headers: {0}")]
    Signing(#[from] rsa::Error),
}

impl WalmartError {
    /// Returns the HTTP status code for [`WalmartError::Response`].
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(error) => Some(error.code),
            _ => None,
        }
    }

    /// Returns `true` for failures a bulk lookup may retry: API responses,
    /// network errors and undecodable bodies.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Response(_) | Self::Network(_) | Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_response_error_message_format() {
        let error = HttpResponseError::new(404, None);
        assert_eq!(
            error.to_string(),
            "[Request failed] Walmart server answered with the following error: Wrong endpoint. Status code: 404"
        );
    }

    #[test]
    fn test_response_error_keeps_400_detail() {
        let error = HttpResponseError::new(400, Some("Invalid itemId".to_string()));
        assert_eq!(error.phrase, "Bad Request - Invalid itemId");
        assert_eq!(error.detail.as_deref(), Some("Invalid itemId"));
        assert!(error.to_string().contains("Status code: 400"));
    }

    #[test]
    fn test_quota_exceeded_message_mentions_daily_calls() {
        let error = QuotaExceededError {
            daily_limit: 5000,
            resets_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        };
        let message = error.to_string();
        assert!(message.contains("5000"));
        assert!(message.contains("daily_calls"));
    }

    #[test]
    fn test_walmart_error_wraps_transparently() {
        let error: WalmartError = InvalidParameterError::new("Missing lat & lon OR zip parameter").into();
        assert_eq!(
            error.to_string(),
            "Invalid parameter: Missing lat & lon OR zip parameter"
        );
        assert!(!error.is_retryable());
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_retryable_classification() {
        let response: WalmartError = HttpResponseError::new(503, None).into();
        assert!(response.is_retryable());
        assert_eq!(response.status_code(), Some(503));

        let decode: WalmartError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(decode.is_retryable());

        let quota: WalmartError = QuotaExceededError {
            daily_limit: 1,
            resets_at: Utc::now(),
        }
        .into();
        assert!(!quota.is_retryable());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response: &dyn std::error::Error = &HttpResponseError::new(500, None);
        let _ = response;

        let invalid: &dyn std::error::Error = &InvalidParameterError::new("x");
        let _ = invalid;
    }
}
