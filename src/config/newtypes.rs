//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The production Walmart IO affiliate API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://developer.api.walmart.com/api-proxy/service";

/// A validated Walmart IO consumer id.
///
/// The consumer id is the UUID issued for the client application. It is sent
/// with every request and is part of the signed message.
///
/// # Example
///
/// ```rust
/// use walmart_io::ConsumerId;
///
/// let id = ConsumerId::new("XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX").unwrap();
/// assert_eq!(id.as_ref(), "XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConsumerId(String);

impl ConsumerId {
    /// Creates a new validated consumer id. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyConsumerId);
        }
        Ok(Self(id))
    }

    /// Returns the last six characters of the id, for log output.
    #[must_use]
    pub fn suffix(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(5)
            .map_or(0, |(index, _)| index);
        &self.0[start..]
    }
}

impl AsRef<str> for ConsumerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsumerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated private key version.
///
/// Walmart IO tags each uploaded public key with a version; the version of
/// the key used for signing is sent with every request.
///
/// # Example
///
/// ```rust
/// use walmart_io::KeyVersion;
///
/// assert_eq!(KeyVersion::default().as_ref(), "1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyVersion(String);

impl KeyVersion {
    /// Creates a new validated key version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyKeyVersion`] if the version is empty.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into().trim().to_string();
        if version.is_empty() {
            return Err(ConfigError::EmptyKeyVersion);
        }
        Ok(Self(version))
    }
}

impl Default for KeyVersion {
    fn default() -> Self {
        Self("1".to_string())
    }
}

impl AsRef<str> for KeyVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Impact Radius publisher id.
///
/// When configured on the client, the publisher id is injected into every
/// request that does not carry its own `publisherId` option.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublisherId(String);

impl PublisherId {
    /// Creates a new validated publisher id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublisherId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyPublisherId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for PublisherId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for PublisherId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PublisherId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API base URL.
///
/// Endpoint paths such as `/affil/product/v2/items` are appended to this URL.
/// Continuation fragments returned by the API (`nextPage`) are resolved
/// against its origin.
///
/// # Example
///
/// ```rust
/// use walmart_io::ApiEndpoint;
///
/// let endpoint = ApiEndpoint::default();
/// assert_eq!(
///     endpoint.endpoint_url("/affil/product/v2/items").as_str(),
///     "https://developer.api.walmart.com/api-proxy/service/affil/product/v2/items"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Creates a new validated endpoint. A trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL cannot be parsed,
    /// is not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let invalid = || ConfigError::InvalidEndpoint { url: raw.clone() };

        let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid());
        }
        Ok(Self(parsed))
    }

    /// Returns the full URL of an endpoint path.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.0.clone();
        let base = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{base}/{}", path.trim_start_matches('/')));
        url
    }

    /// Resolves a server supplied relative fragment (such as `nextPage`)
    /// against the endpoint's origin.
    ///
    /// Returns `None` if the fragment is not a valid relative reference.
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> Option<Url> {
        self.0.join(fragment).ok()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"))
    }
}

impl AsRef<str> for ApiEndpoint {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_id_rejects_empty() {
        assert!(matches!(
            ConsumerId::new("   "),
            Err(ConfigError::EmptyConsumerId)
        ));
    }

    #[test]
    fn test_consumer_id_suffix_is_last_six_chars() {
        let id = ConsumerId::new("abcdef-123456").unwrap();
        assert_eq!(id.suffix(), "123456");

        let short = ConsumerId::new("abc").unwrap();
        assert_eq!(short.suffix(), "abc");
    }

    #[test]
    fn test_key_version_defaults_to_one() {
        assert_eq!(KeyVersion::default().as_ref(), "1");
        assert!(matches!(
            KeyVersion::new(""),
            Err(ConfigError::EmptyKeyVersion)
        ));
    }

    #[test]
    fn test_publisher_id_serde_round_trip_validates() {
        let id = PublisherId::new("pub-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""pub-42""#);

        let result: Result<PublisherId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let endpoint = ApiEndpoint::new("http://127.0.0.1:8080/api-proxy/service/").unwrap();
        assert_eq!(
            endpoint.endpoint_url("/affil/product/v2/search").as_str(),
            "http://127.0.0.1:8080/api-proxy/service/affil/product/v2/search"
        );
    }

    #[test]
    fn test_endpoint_without_path() {
        let endpoint = ApiEndpoint::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            endpoint.endpoint_url("/affil/product/v2/trends").as_str(),
            "http://127.0.0.1:8080/affil/product/v2/trends"
        );
    }

    #[test]
    fn test_endpoint_resolves_next_page_against_origin() {
        let endpoint = ApiEndpoint::default();
        let url = endpoint
            .resolve("/api-proxy/service/affil/product/v2/paginated/items?category=3944&nextPage=abc")
            .unwrap();
        assert_eq!(url.host_str(), Some("developer.api.walmart.com"));
        assert_eq!(
            url.path(),
            "/api-proxy/service/affil/product/v2/paginated/items"
        );
        assert_eq!(url.query(), Some("category=3944&nextPage=abc"));
    }

    #[test]
    fn test_endpoint_rejects_invalid_urls() {
        assert!(ApiEndpoint::new("not a url").is_err());
        assert!(ApiEndpoint::new("ftp://example.com").is_err());
        assert!(ApiEndpoint::new("https://example.com/?a=b").is_err());
    }
}
