//! Response classification for the Walmart IO API.
//!
//! Only 200 and 201 are treated as success. Every other status becomes an
//! [`HttpResponseError`] carrying a fixed phrase; for 400 the phrase also
//! includes the `errors[0].message` detail from the body when present.

use serde_json::Value;

use crate::clients::errors::{HttpResponseError, WalmartError};

/// A successful API response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code (200 or 201).
    pub code: u16,
    /// The parsed JSON body.
    pub body: Value,
}

impl HttpResponse {
    /// Classifies a raw status code and body.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::Response`] for non-success statuses and
    /// [`WalmartError::Decode`] when a success body is not JSON.
    pub fn from_parts(code: u16, body: &str) -> Result<Self, WalmartError> {
        if !is_success(code) {
            let detail = if code == 400 { error_detail(body) } else { None };
            return Err(HttpResponseError::new(code, detail).into());
        }

        let body = serde_json::from_str(body)?;
        Ok(Self { code, body })
    }

    /// Returns `true` for 200 and 201.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        is_success(self.code)
    }
}

/// Returns `true` if `code` is a success status for the API.
#[must_use]
pub const fn is_success(code: u16) -> bool {
    matches!(code, 200 | 201)
}

/// Returns the fixed description of a status code.
///
/// A 400 with a detail reads `Bad Request - {detail}`.
#[must_use]
pub fn status_phrase(code: u16, detail: Option<&str>) -> String {
    let phrase = match code {
        400 => match detail.filter(|d| !d.is_empty()) {
            Some(detail) => return format!("Bad Request - {detail}"),
            None => "Bad Request",
        },
        403 => "Forbidden",
        404 => "Wrong endpoint",
        414 => "Request URI too long",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable/ API maintenance",
        504 => "Gateway Timeout",
        _ => "Error",
    };
    phrase.to_string()
}

/// Extracts `errors[0].message` from an error body.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("errors")?
        .get(0)?
        .get("message")?
        .as_str()
        .map(ToString::to_string)
}
