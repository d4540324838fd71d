//! HTTP transport for Walmart IO API communication.
//!
//! This module provides the [`HttpClient`] type, which sends signed GET
//! requests either asynchronously or on the calling thread.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::auth::SignedHeaders;
use crate::clients::errors::WalmartError;
use crate::clients::http_request::ApiRequest;
use crate::clients::http_response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET transport shared by every endpoint.
///
/// The async `reqwest::Client` is created with the transport. The blocking
/// client is created on first use of [`HttpClient::get_blocking`], so a
/// transport that is only used asynchronously never starts one.
///
/// Both paths send the same headers and classify responses the same way:
/// - Default headers: `User-Agent` and `Accept: application/json`
/// - The four signed authentication headers
/// - 200/201 parsed as JSON, everything else a typed error
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal async reqwest client.
    client: reqwest::Client,
    /// Lazily created blocking reqwest client.
    blocking: OnceLock<reqwest::blocking::Client>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(user_agent_prefix: Option<&str>) -> Self {
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Walmart IO Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            blocking: OnceLock::new(),
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request asynchronously.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::Network`] on connection failures,
    /// [`WalmartError::Response`] for non-success statuses and
    /// [`WalmartError::Decode`] when a success body is not JSON.
    pub async fn get(
        &self,
        request: &ApiRequest,
        auth: &SignedHeaders,
    ) -> Result<HttpResponse, WalmartError> {
        tracing::debug!("Making connection to {}", request.url());

        let mut req_builder = self
            .client
            .get(request.url().clone())
            .query(request.params());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        for (name, value) in auth.iter() {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let body_text = res.text().await?;

        HttpResponse::from_parts(code, &body_text)
    }

    /// Sends a GET request on the calling thread.
    ///
    /// Must not be called from within an async runtime.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    ///
    /// # Panics
    ///
    /// Panics if the blocking reqwest client cannot be created on first use.
    pub fn get_blocking(
        &self,
        request: &ApiRequest,
        auth: &SignedHeaders,
    ) -> Result<HttpResponse, WalmartError> {
        tracing::debug!("Making connection to {}", request.url());

        let client = self.blocking.get_or_init(|| {
            reqwest::blocking::Client::builder()
                .use_rustls_tls()
                .build()
                .expect("Failed to create blocking HTTP client")
        });

        let mut req_builder = client.get(request.url().clone()).query(request.params());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        for (name, value) in auth.iter() {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send()?;
        let code = res.status().as_u16();
        let body_text = res.text()?;

        HttpResponse::from_parts(code, &body_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_includes_sdk_version() {
        let client = HttpClient::new(None);
        let user_agent = &client.default_headers()["User-Agent"];
        assert!(user_agent.starts_with("Walmart IO Library v"));
        assert!(user_agent.contains(SDK_VERSION));
    }

    #[test]
    fn test_user_agent_prefix() {
        let client = HttpClient::new(Some("MyApp/1.0"));
        let user_agent = &client.default_headers()["User-Agent"];
        assert!(user_agent.starts_with("MyApp/1.0 | Walmart IO Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(None);
        assert_eq!(client.default_headers()["Accept"], "application/json");
    }

    #[test]
    fn test_blocking_client_is_lazy() {
        let client = HttpClient::new(None);
        assert!(client.blocking.get().is_none());
    }
}
