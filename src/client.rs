//! The Walmart IO client.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::auth::{HeaderSigner, SignedHeaders};
use crate::clients::{ApiRequest, HttpClient, QuotaExceededError, WalmartError};
use crate::config::WalmartConfig;
use crate::params::{compose, RequestOptions};
use crate::quota::{QuotaGate, QuotaPolicy};

/// A connection to the Walmart IO affiliate API.
///
/// The client owns the signing identity, the header cache and the daily
/// quota. Endpoint methods (see the [`endpoints`](crate::endpoints) module)
/// return request values that are executed with `send().await` or
/// `send_blocking()`; both paths share this state.
///
/// # Thread Safety
///
/// `WalmartIo` is `Send + Sync`. Share it behind an `Arc` to use it from
/// several tasks or threads; the quota is counted across all of them.
///
/// # Example
///
/// ```rust,no_run
/// use walmart_io::{ConsumerId, RequestOptions, WalmartConfig, WalmartIo};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WalmartConfig::builder()
///     .consumer_id(ConsumerId::new("XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX")?)
///     .private_key_path("./WM_IO_private_key.pem")
///     .build()?;
/// let walmart = WalmartIo::new(config);
///
/// let search = walmart
///     .search("ipa", RequestOptions::new().with("numItems", 10))
///     .send()
///     .await?;
/// for item in search.items() {
///     println!("{:?}", item.name());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WalmartIo {
    config: WalmartConfig,
    signer: HeaderSigner,
    quota: Mutex<QuotaGate>,
    http: HttpClient,
}

// Verify WalmartIo is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WalmartIo>();
};

impl WalmartIo {
    /// Creates a client from a validated configuration.
    ///
    /// The daily quota window starts now, according to the configured clock.
    #[must_use]
    pub fn new(config: WalmartConfig) -> Self {
        let now = config.clock().now();
        let signer = HeaderSigner::new(config.identity().clone());
        let quota = Mutex::new(QuotaGate::new(config.daily_calls(), now));
        let http = HttpClient::new(config.user_agent_prefix());

        tracing::info!(
            "Walmart IO connection with consumer id ending in {}",
            config.consumer_id().suffix()
        );

        Self {
            config,
            signer,
            quota,
            http,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &WalmartConfig {
        &self.config
    }

    /// Returns the configured daily call budget.
    #[must_use]
    pub const fn daily_calls(&self) -> u32 {
        self.config.daily_calls()
    }

    /// Returns how many calls are left today.
    ///
    /// Once the window has passed this reports the full budget, even before
    /// the next call resets the counter.
    #[must_use]
    pub fn remaining_calls(&self) -> u32 {
        let gate = self.quota_gate();
        if self.config.clock().now() > gate.resets_at() {
            gate.daily_limit()
        } else {
            gate.remaining()
        }
    }

    /// Returns when the current quota window ends.
    ///
    /// Once the window has passed this reports the end of a window starting
    /// now, matching what the next call would open.
    #[must_use]
    pub fn quota_resets_at(&self) -> DateTime<Utc> {
        let gate = self.quota_gate();
        let now = self.config.clock().now();
        if now > gate.resets_at() {
            now + QuotaGate::window()
        } else {
            gate.resets_at()
        }
    }

    /// Builds a request for an endpoint path with normalized options.
    pub(crate) fn compose_request(&self, path: &str, options: RequestOptions) -> ApiRequest {
        ApiRequest::new(
            self.config.endpoint().endpoint_url(path),
            compose(options, self.config.publisher_id()),
        )
    }

    /// Charges one call against the quota and returns fresh auth headers.
    fn authorize(&self) -> Result<SignedHeaders, WalmartError> {
        let now = self.config.clock().now();
        let denied = {
            let mut gate = self.quota_gate();
            if gate.admit(now) {
                None
            } else {
                Some(QuotaExceededError {
                    daily_limit: gate.daily_limit(),
                    resets_at: gate.resets_at(),
                })
            }
        };

        if let Some(error) = denied {
            match self.config.quota_policy() {
                QuotaPolicy::Fail => return Err(error.into()),
                QuotaPolicy::WarnAndProceed => {
                    tracing::warn!(
                        "Daily budget of {} calls exhausted until {}, sending request anyway",
                        error.daily_limit,
                        error.resets_at
                    );
                }
            }
        }

        Ok(self.signer.headers(now)?)
    }

    /// Sends a request asynchronously and returns the JSON body.
    pub(crate) async fn execute(&self, request: &ApiRequest) -> Result<Value, WalmartError> {
        let headers = self.authorize()?;
        let response = self.http.get(request, &headers).await?;
        Ok(response.body)
    }

    /// Sends a request on the calling thread and returns the JSON body.
    pub(crate) fn execute_blocking(&self, request: &ApiRequest) -> Result<Value, WalmartError> {
        let headers = self.authorize()?;
        let response = self.http.get_blocking(request, &headers)?;
        Ok(response.body)
    }

    fn quota_gate(&self) -> MutexGuard<'_, QuotaGate> {
        self.quota.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
