//! A single prepared API call.

use std::fmt;

use serde_json::Value;

use crate::clients::{ApiRequest, InvalidParameterError, WalmartError};
use crate::WalmartIo;

/// A prepared request to one endpoint, with the view its body decodes into.
///
/// Nothing is sent and no quota is spent until [`Call::send`] or
/// [`Call::send_blocking`] runs. Argument validation happens when the call is
/// prepared; an invalid call fails on send without touching the network.
///
/// # Example
///
/// ```rust,no_run
/// # use walmart_io::{RequestOptions, WalmartIo};
/// # fn run(walmart: &WalmartIo) -> Result<(), walmart_io::WalmartError> {
/// let stores = walmart
///     .stores(RequestOptions::new().with("zip", "72712"))
///     .send_blocking()?;
/// println!("{} stores nearby", stores.len());
/// # Ok(())
/// # }
/// ```
#[must_use = "a call does nothing until it is sent"]
pub struct Call<'a, T> {
    client: &'a WalmartIo,
    request: Result<ApiRequest, InvalidParameterError>,
    decode: fn(Value) -> T,
}

impl<'a, T> Call<'a, T> {
    pub(crate) const fn new(
        client: &'a WalmartIo,
        request: Result<ApiRequest, InvalidParameterError>,
        decode: fn(Value) -> T,
    ) -> Self {
        Self {
            client,
            request,
            decode,
        }
    }

    /// Returns the prepared request, or `None` if the arguments were invalid.
    #[must_use]
    pub fn request(&self) -> Option<&ApiRequest> {
        self.request.as_ref().ok()
    }

    /// Sends the request and decodes the body.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::InvalidParameter`] for invalid arguments,
    /// [`WalmartError::QuotaExceeded`] when the daily budget is spent under
    /// the failing policy, and the transport, status and decoding errors of
    /// the request itself.
    pub async fn send(self) -> Result<T, WalmartError> {
        let request = self.request?;
        let body = self.client.execute(&request).await?;
        Ok((self.decode)(body))
    }

    /// Sends the request on the calling thread and decodes the body.
    ///
    /// Must not be called from within an async runtime.
    ///
    /// # Errors
    ///
    /// Same as [`Call::send`].
    pub fn send_blocking(self) -> Result<T, WalmartError> {
        let request = self.request?;
        let body = self.client.execute_blocking(&request)?;
        Ok((self.decode)(body))
    }
}

impl<T> fmt::Debug for Call<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
