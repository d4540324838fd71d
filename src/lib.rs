//! # Walmart IO Rust SDK
//!
//! A Rust SDK for the Walmart IO affiliate product API, providing signed
//! requests, daily quota pacing, and tolerant typed views over the JSON the
//! API returns.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WalmartConfig`] and [`WalmartConfigBuilder`]
//! - Validated newtypes for credentials and endpoint values
//! - Per-request RSA signatures with a short-lived header cache
//! - A daily call budget with a configurable [`QuotaPolicy`]
//! - Async and blocking execution of every endpoint
//! - Chunked multi-id lookups, strict or resilient
//! - Typed response views that never fail on unexpected payloads
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use walmart_io::{ConsumerId, PublisherId, RequestOptions, WalmartConfig, WalmartIo};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WalmartConfig::builder()
//!     .consumer_id(ConsumerId::new("XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX")?)
//!     .private_key_path("./WM_IO_private_key.pem")
//!     .publisher_id(PublisherId::new("my-publisher")?)
//!     .build()?;
//! let walmart = WalmartIo::new(config);
//!
//! let products = walmart
//!     .product_lookup("33093101,54518466", RequestOptions::new())
//!     .send()
//!     .await?;
//! for product in &products {
//!     println!("{:?} {:?}", product.name(), product.sale_price());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Calls
//!
//! Every call can also run on the current thread, outside any async runtime:
//!
//! ```rust,no_run
//! # use walmart_io::{RequestOptions, WalmartIo};
//! # fn run(walmart: &WalmartIo) -> Result<(), walmart_io::WalmartError> {
//! let taxonomy = walmart.taxonomy(RequestOptions::new()).send_blocking()?;
//! for department in taxonomy.categories() {
//!     println!("{:?}", department.name());
//! }
//!
//! for batch in walmart.bulk_product_lookup(vec!["1", "2", "3"], RequestOptions::new())? {
//!     println!("{} products", batch.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Typed Views
//!
//! Responses are kept as raw JSON behind typed accessors. Missing fields are
//! `None`, numeric fields that do not parse are handed back raw through
//! [`Lenient`], and anything the accessors do not cover stays reachable with
//! [`WalmartResponse::get_attr`].
//!
//! ## Logging
//!
//! The SDK logs through [`tracing`] and never installs a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: quota and header cache live in the [`WalmartIo`] value
//! - **Fail-fast validation**: configuration is validated on construction
//! - **Thread-safe**: [`WalmartIo`] is `Send + Sync`
//! - **Lazy calls**: nothing is sent or counted until a call is executed

pub mod auth;
pub mod client;
pub mod clients;
pub mod clock;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod quota;
pub mod responses;

// Re-export public types at crate root for convenience
pub use client::WalmartIo;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    ApiEndpoint, ConsumerId, KeyVersion, PublisherId, WalmartConfig, WalmartConfigBuilder,
};
pub use endpoints::{BulkLookup, Call, FailedChunk, ProductLookup};
pub use error::ConfigError;
pub use params::{ItemIds, OptionValue, RequestOptions};
pub use quota::QuotaPolicy;

// Re-export error types
pub use clients::{HttpResponseError, InvalidParameterError, QuotaExceededError, WalmartError};

// Re-export response views
pub use responses::{
    Lenient, OverallRating, RatingDistribution, ResponseView, ReviewStatistics, WalmartCatalog,
    WalmartProduct, WalmartResponse, WalmartReview, WalmartReviewResponse, WalmartSearch,
    WalmartStore, WalmartTaxonomy,
};
