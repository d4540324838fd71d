//! Error types for the Walmart IO SDK.
//!
//! This module contains the error type used while configuring the SDK and
//! constructing a client. These failures are fatal: a client cannot be built
//! until the configuration is corrected.
//!
//! Errors raised while making API calls live in [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use walmart_io::{ConsumerId, ConfigError};
//!
//! let result = ConsumerId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer id cannot be empty.
    #[error("Consumer id cannot be empty. Please provide the consumer id issued by Walmart IO.")]
    EmptyConsumerId,

    /// Key version cannot be empty.
    #[error("Private key version cannot be empty. Walmart IO issues versions such as '1'.")]
    EmptyKeyVersion,

    /// Publisher id cannot be empty.
    #[error("Publisher id cannot be empty. Omit it instead of passing an empty value.")]
    EmptyPublisherId,

    /// The daily call budget must allow at least one call.
    #[error("Daily call budget must be greater than zero.")]
    ZeroDailyCalls,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The private key file could not be read.
    #[error("Unable to read private key file '{path}': {reason}")]
    UnreadableKeyFile {
        /// The path that was provided.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },

    /// The private key material could not be parsed.
    #[error("Invalid private key: {reason}. Expected a PEM encoded RSA key (PKCS#8 or PKCS#1).")]
    InvalidPrivateKey {
        /// The reason the key was rejected.
        reason: String,
    },

    /// The API base URL is invalid.
    #[error("Invalid API endpoint '{url}'. Please provide an absolute http(s) URL.")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },
}
