//! Signed header sets and their time-bucketed cache.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use lru::LruCache;

use crate::auth::Identity;

/// Header carrying the consumer id.
pub const CONSUMER_ID_HEADER: &str = "WM_CONSUMER.ID";

/// Header carrying the key version.
pub const KEY_VERSION_HEADER: &str = "WM_SEC.KEY_VERSION";

/// Header carrying the signing timestamp in epoch milliseconds.
pub const TIMESTAMP_HEADER: &str = "WM_CONSUMER.INTIMESTAMP";

/// Header carrying the base64 RSA signature.
pub const AUTH_SIGNATURE_HEADER: &str = "WM_SEC.AUTH_SIGNATURE";

/// Width of a signature bucket. Signatures expire after 180 seconds, so a
/// header set is never reused for longer than 170.
pub const SIGNATURE_TTL_SECS: i64 = 170;

/// Number of buckets kept by the header cache.
pub const HEADER_CACHE_CAPACITY: usize = 2;

/// The four authentication headers for one timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedHeaders {
    consumer_id: String,
    key_version: String,
    timestamp_ms: i64,
    signature: String,
}

impl SignedHeaders {
    pub(crate) fn new(
        consumer_id: &str,
        key_version: &str,
        timestamp_ms: i64,
        signature: String,
    ) -> Self {
        Self {
            consumer_id: consumer_id.to_string(),
            key_version: key_version.to_string(),
            timestamp_ms,
            signature,
        }
    }

    /// Returns the timestamp the headers were signed for.
    #[must_use]
    pub const fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    /// Returns the base64 encoded signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Iterates over `(header name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        [
            (CONSUMER_ID_HEADER, self.consumer_id.clone()),
            (KEY_VERSION_HEADER, self.key_version.clone()),
            (TIMESTAMP_HEADER, self.timestamp_ms.to_string()),
            (AUTH_SIGNATURE_HEADER, self.signature.clone()),
        ]
        .into_iter()
    }

    /// Returns the headers as a name to value map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.iter().collect()
    }
}

/// A bounded cache of header sets keyed by time bucket.
///
/// A bucket is `epoch_ms / (ttl_secs * 1000)`. The first header set computed
/// in a bucket is returned for every later lookup in that bucket. When the
/// cache is full the least recently used bucket is evicted.
#[derive(Debug)]
pub struct HeaderCache {
    ttl_ms: i64,
    entries: LruCache<i64, SignedHeaders>,
}

impl HeaderCache {
    /// Creates an empty cache. A capacity of zero is treated as one.
    #[must_use]
    pub fn new(ttl_secs: i64, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            ttl_ms: ttl_secs.max(1) * 1000,
            entries: LruCache::new(capacity),
        }
    }

    /// Returns the bucket that `timestamp_ms` falls into.
    #[must_use]
    pub const fn bucket(&self, timestamp_ms: i64) -> i64 {
        timestamp_ms.div_euclid(self.ttl_ms)
    }

    /// Returns the cached headers for the bucket of `timestamp_ms`, or
    /// computes, stores and returns them.
    ///
    /// # Errors
    ///
    /// Propagates the error from `compute`. Nothing is stored in that case.
    pub fn get_or_try_insert<E>(
        &mut self,
        timestamp_ms: i64,
        compute: impl FnOnce() -> Result<SignedHeaders, E>,
    ) -> Result<SignedHeaders, E> {
        let bucket = self.bucket(timestamp_ms);
        if let Some(headers) = self.entries.get(&bucket) {
            return Ok(headers.clone());
        }

        let headers = compute()?;
        self.entries.put(bucket, headers.clone());
        Ok(headers)
    }

    /// Returns the number of cached buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Produces authentication headers for the current time.
///
/// The signer is shared by every request a client makes. The cache lock is
/// held only while looking up or storing a header set, never across I/O.
#[derive(Debug)]
pub struct HeaderSigner {
    identity: Identity,
    cache: Mutex<HeaderCache>,
}

impl HeaderSigner {
    /// Creates a signer with the default bucket width and cache size.
    #[must_use]
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            cache: Mutex::new(HeaderCache::new(SIGNATURE_TTL_SECS, HEADER_CACHE_CAPACITY)),
        }
    }

    /// Returns the signing identity.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns the headers for `now`, signing a fresh set when `now` falls
    /// into a bucket that has not been seen yet.
    ///
    /// # Errors
    ///
    /// Returns the [`rsa::Error`] raised while signing.
    pub fn headers(&self, now: DateTime<Utc>) -> Result<SignedHeaders, rsa::Error> {
        let timestamp_ms = now.timestamp_millis();
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get_or_try_insert(timestamp_ms, || {
            tracing::debug!("Signing request headers for timestamp {timestamp_ms}");
            self.identity.sign(timestamp_ms)
        })
    }

    /// Returns the number of header sets currently cached.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

// Verify HeaderSigner is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HeaderSigner>();
};
