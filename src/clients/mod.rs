//! HTTP transport types for Walmart IO API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The GET transport, async and blocking
//! - [`ApiRequest`]: An endpoint URL plus composed query parameters
//! - [`HttpResponse`]: A classified success response
//! - [`WalmartError`]: The error type returned by every API call
//!
//! # Status handling
//!
//! Only 200 and 201 count as success. There is no automatic retry and no
//! timeout configuration; bulk lookups implement their own per-chunk retry
//! on top of this layer.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpResponseError, InvalidParameterError, QuotaExceededError, WalmartError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::ApiRequest;
pub use http_response::{is_success, status_phrase, HttpResponse};
