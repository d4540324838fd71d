//! Request authentication for the Walmart IO API.
//!
//! Every call to the affiliate API must carry four headers: the consumer id,
//! the key version, a millisecond timestamp, and an RSA signature over those
//! three values. The API proxy rejects signatures older than 180 seconds.
//!
//! # Overview
//!
//! - [`Identity`]: The consumer id, key version and RSA private key
//! - [`SignedHeaders`]: The header set produced for one timestamp
//! - [`HeaderSigner`]: Produces headers for "now", reusing one signature per
//!   170 second time bucket
//!
//! # Example
//!
//! ```rust,ignore
//! use walmart_io::auth::{HeaderSigner, Identity};
//! use walmart_io::{ConsumerId, KeyVersion};
//!
//! let identity = Identity::from_file(
//!     ConsumerId::new("XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX")?,
//!     KeyVersion::default(),
//!     "./WM_IO_private_key.pem",
//! )?;
//! let signer = HeaderSigner::new(identity);
//!
//! let headers = signer.headers(chrono::Utc::now())?;
//! for (name, value) in headers.iter() {
//!     println!("{name}: {value}");
//! }
//! ```

mod headers;
mod identity;

pub use headers::{
    HeaderCache, HeaderSigner, SignedHeaders, AUTH_SIGNATURE_HEADER, CONSUMER_ID_HEADER,
    HEADER_CACHE_CAPACITY, KEY_VERSION_HEADER, SIGNATURE_TTL_SECS, TIMESTAMP_HEADER,
};
pub use identity::Identity;
