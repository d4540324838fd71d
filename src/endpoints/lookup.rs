//! Multi-id product lookups.
//!
//! The items endpoint accepts at most [`MAX_CHUNK_SIZE`] ids per request, so
//! longer id lists are split into chunks and sent one request per chunk.
//!
//! - [`ProductLookup`] is strict: the first failing chunk fails the lookup.
//! - [`BulkLookup`] is resilient: it yields one batch of products per
//!   successful chunk and records failed chunks instead of stopping.
//!
//! [`MAX_CHUNK_SIZE`]: crate::params::MAX_CHUNK_SIZE

use std::collections::VecDeque;

use serde_json::Value;

use crate::clients::{ApiRequest, WalmartError};
use crate::params::{clamp_chunk_size, ItemIds, ITEM_IDS, LARGE_LOOKUP_THRESHOLD, MAX_CHUNK_SIZE};
use crate::responses::{list_of, WalmartProduct};
use crate::WalmartIo;

/// Reads the `items` array of an items endpoint body.
pub(crate) fn items_of(body: &Value) -> Vec<WalmartProduct> {
    body.get("items").map_or_else(Vec::new, list_of)
}

/// A strict lookup of one or more items by id.
///
/// Created by [`WalmartIo::product_lookup`].
#[derive(Debug)]
#[must_use = "a lookup does nothing until it is sent"]
pub struct ProductLookup<'a> {
    client: &'a WalmartIo,
    requests: Result<Vec<ApiRequest>, WalmartError>,
}

impl<'a> ProductLookup<'a> {
    pub(crate) fn new(
        client: &'a WalmartIo,
        base: ApiRequest,
        ids: impl Into<ItemIds>,
    ) -> Self {
        let requests = ids
            .into()
            .require_non_empty()
            .map(|ids| {
                if ids.len() > LARGE_LOOKUP_THRESHOLD {
                    tracing::debug!(
                        "For large id lists, try using bulk_product_lookup. \
                         It will continue to run even if one chunk of ids raises an error"
                    );
                }
                ids.chunks(MAX_CHUNK_SIZE)
                    .map(|chunk| base.with_param(ITEM_IDS, chunk))
                    .collect()
            })
            .map_err(WalmartError::from);

        Self { client, requests }
    }

    /// Returns the number of requests the lookup will send.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.as_ref().map_or(0, Vec::len)
    }

    /// Sends every chunk in order and returns all products.
    ///
    /// # Errors
    ///
    /// Returns [`WalmartError::InvalidParameter`] if no ids were given, or the
    /// first error any chunk request produced. Products of earlier chunks are
    /// discarded in that case.
    pub async fn send(self) -> Result<Vec<WalmartProduct>, WalmartError> {
        let mut products = Vec::new();
        for request in self.requests? {
            let body = self.client.execute(&request).await?;
            products.extend(items_of(&body));
        }
        Ok(products)
    }

    /// Sends every chunk on the calling thread and returns all products.
    ///
    /// # Errors
    ///
    /// Same as [`ProductLookup::send`].
    pub fn send_blocking(self) -> Result<Vec<WalmartProduct>, WalmartError> {
        let mut products = Vec::new();
        for request in self.requests? {
            let body = self.client.execute_blocking(&request)?;
            products.extend(items_of(&body));
        }
        Ok(products)
    }
}

/// A chunk of a [`BulkLookup`] that failed on every attempt.
#[derive(Debug)]
pub struct FailedChunk {
    /// The ids of the chunk.
    pub ids: Vec<String>,
    /// The error of the last attempt.
    pub error: WalmartError,
}

/// A resilient lookup that yields products chunk by chunk.
///
/// Each chunk is attempted `1 + retries` times. Only errors for which
/// [`WalmartError::is_retryable`] holds are retried; a chunk that still fails
/// is logged, recorded in [`BulkLookup::failures`] and skipped.
///
/// Use [`BulkLookup::next_chunk`] from async code. The blocking path is the
/// [`Iterator`] implementation.
///
/// # Example
///
/// ```rust,no_run
/// # use walmart_io::{RequestOptions, WalmartIo};
/// # async fn run(walmart: &WalmartIo, ids: Vec<String>) -> Result<(), walmart_io::WalmartError> {
/// let mut lookup = walmart
///     .bulk_product_lookup(ids, RequestOptions::new())?
///     .chunk_size(10)
///     .retries(1);
///
/// while let Some(products) = lookup.next_chunk().await {
///     for product in products {
///         println!("{:?}", product.name());
///     }
/// }
/// for failed in lookup.failures() {
///     eprintln!("{:?}: {}", failed.ids, failed.error);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct BulkLookup<'a> {
    client: &'a WalmartIo,
    base: ApiRequest,
    ids: ItemIds,
    chunk_size: usize,
    retries: u32,
    pending: Option<VecDeque<Vec<String>>>,
    failures: Vec<FailedChunk>,
}

impl<'a> BulkLookup<'a> {
    /// Default number of ids per request.
    pub const DEFAULT_CHUNK_SIZE: usize = MAX_CHUNK_SIZE;

    pub(crate) fn new(
        client: &'a WalmartIo,
        base: ApiRequest,
        ids: impl Into<ItemIds>,
    ) -> Result<Self, WalmartError> {
        let ids = ids.into().require_non_empty()?;
        Ok(Self {
            client,
            base,
            ids,
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            retries: 0,
            pending: None,
            failures: Vec::new(),
        })
    }

    /// Sets the number of ids per request, clamped to `[1, 20]`.
    ///
    /// Has no effect once the first chunk was requested.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = clamp_chunk_size(size);
        self
    }

    /// Sets how many extra attempts a failing chunk gets.
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Returns the chunks that failed so far.
    #[must_use]
    pub fn failures(&self) -> &[FailedChunk] {
        &self.failures
    }

    /// Consumes the lookup and returns its failed chunks.
    #[must_use]
    pub fn into_failures(self) -> Vec<FailedChunk> {
        self.failures
    }

    /// Returns the number of chunks not requested yet.
    #[must_use]
    pub fn remaining_chunks(&self) -> usize {
        self.pending.as_ref().map_or_else(
            || (self.ids.len() + self.chunk_size - 1) / self.chunk_size,
            VecDeque::len,
        )
    }

    /// Fetches the next chunk that succeeds.
    ///
    /// Returns `None` once every chunk was attempted.
    ///
    /// # Cancel safety
    ///
    /// A chunk leaves the queue only once it succeeded or was recorded as
    /// failed. If the future is dropped mid-request, the next call requests
    /// the same chunk again. The dropped attempt may already have used a
    /// call from the daily budget.
    pub async fn next_chunk(&mut self) -> Option<Vec<WalmartProduct>> {
        while let Some(chunk) = self.front_chunk() {
            let request = self.base.with_param(ITEM_IDS, chunk.join(","));
            let mut attempt = 0;
            loop {
                match self.client.execute(&request).await {
                    Ok(body) => {
                        self.complete_chunk();
                        return Some(items_of(&body));
                    }
                    Err(error) => {
                        if !self.should_retry(&error, attempt) {
                            self.complete_chunk();
                            self.record_failure(chunk, error, attempt + 1);
                            break;
                        }
                        attempt += 1;
                    }
                }
            }
        }
        None
    }

    fn front_chunk(&mut self) -> Option<Vec<String>> {
        let size = self.chunk_size;
        let ids = &self.ids;
        self.pending
            .get_or_insert_with(|| {
                ids.as_slice()
                    .chunks(size)
                    .map(<[String]>::to_vec)
                    .collect()
            })
            .front()
            .cloned()
    }

    fn complete_chunk(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.pop_front();
        }
    }

    fn should_retry(&self, error: &WalmartError, attempt: u32) -> bool {
        tracing::debug!("Bulk lookup attempt {} failed: {error}", attempt + 1);
        error.is_retryable() && attempt < self.retries
    }

    fn record_failure(&mut self, ids: Vec<String>, error: WalmartError, attempts: u32) {
        tracing::warn!(
            "Bulk lookup chunk of {} ids failed after {attempts} attempt(s): {error}",
            ids.len()
        );
        self.failures.push(FailedChunk { ids, error });
    }
}

impl Iterator for BulkLookup<'_> {
    type Item = Vec<WalmartProduct>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(chunk) = self.front_chunk() {
            let request = self.base.with_param(ITEM_IDS, chunk.join(","));
            let mut attempt = 0;
            loop {
                match self.client.execute_blocking(&request) {
                    Ok(body) => {
                        self.complete_chunk();
                        return Some(items_of(&body));
                    }
                    Err(error) => {
                        if !self.should_retry(&error, attempt) {
                            self.complete_chunk();
                            self.record_failure(chunk, error, attempt + 1);
                            break;
                        }
                        attempt += 1;
                    }
                }
            }
        }
        None
    }
}
