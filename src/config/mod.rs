//! Configuration types for the Walmart IO SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WalmartConfig`]: The validated client configuration
//! - [`WalmartConfigBuilder`]: A builder for constructing [`WalmartConfig`] instances
//! - [`ConsumerId`]: A validated consumer id newtype
//! - [`KeyVersion`]: A validated private key version
//! - [`PublisherId`]: A validated Impact Radius publisher id
//! - [`ApiEndpoint`]: A validated API base URL
//!
//! The private key is loaded and parsed when the configuration is built, so
//! a [`WalmartConfig`] always holds a usable signing identity.
//!
//! # Example
//!
//! ```rust,no_run
//! use walmart_io::{ConsumerId, PublisherId, QuotaPolicy, WalmartConfig};
//!
//! let config = WalmartConfig::builder()
//!     .consumer_id(ConsumerId::new("XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX").unwrap())
//!     .private_key_path("./WM_IO_private_key.pem")
//!     .publisher_id(PublisherId::new("XXXXXXX").unwrap())
//!     .on_quota_exceeded(QuotaPolicy::WarnAndProceed)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiEndpoint, ConsumerId, KeyVersion, PublisherId, DEFAULT_ENDPOINT};

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::Identity;
use crate::clock::{Clock, SystemClock};
use crate::error::ConfigError;
use crate::quota::{QuotaPolicy, DEFAULT_DAILY_CALLS};

/// Configuration for a [`WalmartIo`](crate::WalmartIo) client.
///
/// # Thread Safety
///
/// `WalmartConfig` is `Clone`, `Send`, and `Sync`. Cloning shares the clock.
///
/// # Example
///
/// ```rust,no_run
/// use walmart_io::{ConsumerId, WalmartConfig};
///
/// let config = WalmartConfig::builder()
///     .consumer_id(ConsumerId::new("consumer-id").unwrap())
///     .private_key_path("./WM_IO_private_key.pem")
///     .daily_calls(1000)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.daily_calls(), 1000);
/// ```
#[derive(Clone, Debug)]
pub struct WalmartConfig {
    identity: Identity,
    daily_calls: u32,
    publisher_id: Option<PublisherId>,
    quota_policy: QuotaPolicy,
    endpoint: ApiEndpoint,
    user_agent_prefix: Option<String>,
    clock: Arc<dyn Clock>,
}

impl WalmartConfig {
    /// Creates a new builder for constructing a `WalmartConfig`.
    #[must_use]
    pub fn builder() -> WalmartConfigBuilder {
        WalmartConfigBuilder::new()
    }

    /// Returns the signing identity.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns the consumer id.
    #[must_use]
    pub const fn consumer_id(&self) -> &ConsumerId {
        self.identity.consumer_id()
    }

    /// Returns the private key version.
    #[must_use]
    pub const fn key_version(&self) -> &KeyVersion {
        self.identity.key_version()
    }

    /// Returns the daily call budget.
    #[must_use]
    pub const fn daily_calls(&self) -> u32 {
        self.daily_calls
    }

    /// Returns the default publisher id, if configured.
    #[must_use]
    pub const fn publisher_id(&self) -> Option<&PublisherId> {
        self.publisher_id.as_ref()
    }

    /// Returns what happens when the daily budget is exhausted.
    #[must_use]
    pub const fn quota_policy(&self) -> QuotaPolicy {
        self.quota_policy
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the clock used for quota accounting and signing.
    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

// Verify WalmartConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WalmartConfig>();
};

/// Where the builder reads the private key from.
#[derive(Clone)]
enum KeySource {
    File(PathBuf),
    Pem(String),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Pem(_) => f.debug_tuple("Pem").field(&"*****").finish(),
        }
    }
}

/// Builder for constructing [`WalmartConfig`] instances.
///
/// Required fields are `consumer_id` and one private key source
/// (`private_key_path` or `private_key_pem`; the last one set wins).
///
/// # Defaults
///
/// - `key_version`: `"1"`
/// - `daily_calls`: 5000
/// - `publisher_id`: `None`
/// - `on_quota_exceeded`: [`QuotaPolicy::Fail`]
/// - `endpoint`: [`DEFAULT_ENDPOINT`]
/// - `user_agent_prefix`: `None`
/// - `clock`: [`SystemClock`]
#[derive(Debug, Default)]
pub struct WalmartConfigBuilder {
    consumer_id: Option<ConsumerId>,
    private_key: Option<KeySource>,
    key_version: Option<KeyVersion>,
    daily_calls: Option<u32>,
    publisher_id: Option<PublisherId>,
    quota_policy: Option<QuotaPolicy>,
    endpoint: Option<ApiEndpoint>,
    user_agent_prefix: Option<String>,
    clock: Option<Arc<dyn Clock>>,
}

impl WalmartConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consumer id (required).
    #[must_use]
    pub fn consumer_id(mut self, id: ConsumerId) -> Self {
        self.consumer_id = Some(id);
        self
    }

    /// Reads the private key from a PEM file when the config is built.
    #[must_use]
    pub fn private_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.private_key = Some(KeySource::File(path.into()));
        self
    }

    /// Uses PEM encoded key material directly.
    #[must_use]
    pub fn private_key_pem(mut self, pem: impl Into<String>) -> Self {
        self.private_key = Some(KeySource::Pem(pem.into()));
        self
    }

    /// Sets the private key version.
    #[must_use]
    pub fn key_version(mut self, version: KeyVersion) -> Self {
        self.key_version = Some(version);
        self
    }

    /// Sets the daily call budget.
    #[must_use]
    pub const fn daily_calls(mut self, calls: u32) -> Self {
        self.daily_calls = Some(calls);
        self
    }

    /// Sets the publisher id injected into every request.
    #[must_use]
    pub fn publisher_id(mut self, id: PublisherId) -> Self {
        self.publisher_id = Some(id);
        self
    }

    /// Sets what happens when the daily budget is exhausted.
    #[must_use]
    pub const fn on_quota_exceeded(mut self, policy: QuotaPolicy) -> Self {
        self.quota_policy = Some(policy);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the clock used for quota accounting and signing.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the [`WalmartConfig`], loading and parsing the private key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `consumer_id` or the
    /// private key are not set, [`ConfigError::ZeroDailyCalls`] for a zero
    /// budget, and [`ConfigError::UnreadableKeyFile`] or
    /// [`ConfigError::InvalidPrivateKey`] if the key cannot be loaded.
    pub fn build(self) -> Result<WalmartConfig, ConfigError> {
        let consumer_id = self
            .consumer_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_id",
            })?;
        let private_key = self
            .private_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "private_key",
            })?;

        let daily_calls = self.daily_calls.unwrap_or(DEFAULT_DAILY_CALLS);
        if daily_calls == 0 {
            return Err(ConfigError::ZeroDailyCalls);
        }

        let key_version = self.key_version.unwrap_or_default();
        let identity = match private_key {
            KeySource::File(path) => Identity::from_file(consumer_id, key_version, path)?,
            KeySource::Pem(pem) => Identity::from_pem(consumer_id, key_version, &pem)?,
        };

        Ok(WalmartConfig {
            identity,
            daily_calls,
            publisher_id: self.publisher_id,
            quota_policy: self.quota_policy.unwrap_or_default(),
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{TimeZone, Utc};
    use rsa::pkcs8::{EncodePrivateKey, LineEnding};
    use rsa::RsaPrivateKey;

    fn test_pem() -> String {
        let key = RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
        key.to_pkcs8_pem(LineEnding::LF).unwrap().to_string()
    }

    #[test]
    fn test_builder_requires_consumer_id() {
        let result = WalmartConfigBuilder::new().private_key_pem(test_pem()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_id"
            })
        ));
    }

    #[test]
    fn test_builder_requires_private_key() {
        let result = WalmartConfigBuilder::new()
            .consumer_id(ConsumerId::new("consumer").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "private_key"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = WalmartConfig::builder()
            .consumer_id(ConsumerId::new("consumer").unwrap())
            .private_key_pem(test_pem())
            .build()
            .unwrap();

        assert_eq!(config.key_version().as_ref(), "1");
        assert_eq!(config.daily_calls(), 5000);
        assert_eq!(config.quota_policy(), QuotaPolicy::Fail);
        assert_eq!(config.endpoint(), &ApiEndpoint::default());
        assert!(config.publisher_id().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let config = WalmartConfig::builder()
            .consumer_id(ConsumerId::new("consumer").unwrap())
            .private_key_pem(test_pem())
            .key_version(KeyVersion::new("3").unwrap())
            .daily_calls(20)
            .publisher_id(PublisherId::new("pub").unwrap())
            .on_quota_exceeded(QuotaPolicy::WarnAndProceed)
            .endpoint(ApiEndpoint::new("http://localhost:9000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .clock(ManualClock::new(start))
            .build()
            .unwrap();

        assert_eq!(config.key_version().as_ref(), "3");
        assert_eq!(config.daily_calls(), 20);
        assert_eq!(config.publisher_id().map(|p| p.as_ref()), Some("pub"));
        assert_eq!(config.quota_policy(), QuotaPolicy::WarnAndProceed);
        assert_eq!(config.endpoint().as_url().port(), Some(9000));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.clock().now(), start);
    }

    #[test]
    fn test_builder_rejects_zero_daily_calls() {
        let result = WalmartConfig::builder()
            .consumer_id(ConsumerId::new("consumer").unwrap())
            .private_key_pem(test_pem())
            .daily_calls(0)
            .build();

        assert!(matches!(result, Err(ConfigError::ZeroDailyCalls)));
    }

    #[test]
    fn test_builder_surfaces_missing_key_file() {
        let result = WalmartConfig::builder()
            .consumer_id(ConsumerId::new("consumer").unwrap())
            .private_key_path("/nonexistent/key.pem")
            .build();

        assert!(matches!(result, Err(ConfigError::UnreadableKeyFile { .. })));
    }

    #[test]
    fn test_debug_never_prints_key_material() {
        let pem = test_pem();
        let builder = WalmartConfig::builder()
            .consumer_id(ConsumerId::new("consumer").unwrap())
            .private_key_pem(pem.clone());
        assert!(!format!("{builder:?}").contains("BEGIN PRIVATE KEY"));

        let config = builder.build().unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("WalmartConfig"));
        assert!(!debug_str.contains("BEGIN PRIVATE KEY"));
    }
}
