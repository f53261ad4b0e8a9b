//! Error types for the ForkTales core.
//!
//! This module defines the centralized error type [`ForkTalesError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! # Taxonomy
//!
//! Remote failures are split two ways: [`Transport`](ForkTalesError::Transport) for
//! connectivity and timeout problems, [`Protocol`](ForkTalesError::Protocol) for
//! non-2xx responses and malformed or empty payloads. The view-model layer collapses
//! both into the same `Error` UI state; the distinction exists for logging and tests.
//! A favorites lookup that finds no row is *not* an error anywhere in this crate —
//! point lookups return `Option` instead.

use thiserror::Error;

/// The main error type for ForkTales core operations.
///
/// This enum consolidates all error conditions that can occur in the client core,
/// from remote API calls to the local favorites store and configuration loading.
///
/// # Examples
///
/// ```
/// use forktales::domain::ForkTalesError;
///
/// fn validate_config() -> Result<(), ForkTalesError> {
///     Err(ForkTalesError::Config("missing base URL".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ForkTalesError {
    /// The remote API could not be reached.
    ///
    /// Covers connection refusal, DNS failure, and request timeouts. Converted
    /// automatically from the transport-layer half of `reqwest::Error`.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote API answered, but not with a usable response.
    ///
    /// Covers non-2xx status codes, undecodable bodies, and envelope contract
    /// violations such as an empty `meals` array on a by-id lookup.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Favorites store operation failed.
    ///
    /// Occurs when reading from or writing to the persistence backend fails.
    /// The string contains a description of what went wrong.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ForkTalesError {
    /// Classifies a `reqwest` failure into the transport/protocol taxonomy.
    ///
    /// Connectivity problems and timeouts become [`Transport`](Self::Transport);
    /// everything that happened after a connection was established (status
    /// handling, body decoding) becomes [`Protocol`](Self::Protocol).
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            Self::Transport(err.to_string())
        } else {
            Self::Protocol(err.to_string())
        }
    }
}

impl From<rusqlite::Error> for ForkTalesError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// A specialized `Result` type for ForkTales operations.
///
/// This is a type alias for `std::result::Result<T, ForkTalesError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ForkTalesError>;
