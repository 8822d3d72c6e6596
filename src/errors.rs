//! Unified error types and result handling.

use thiserror::Error;

/// Errors raised by the record gateway and the form client.
#[derive(Debug, Error)]
pub enum Error {
    /// A required form field was missing or empty. Detected before any
    /// remote call is made; the spreadsheet is never contacted.
    #[error("campo obrigatório ausente: {field}")]
    Validation {
        /// Wire name of the first field that failed the presence check.
        field: &'static str,
    },

    /// The remote spreadsheet service failed: network, auth, quota, or a
    /// malformed response. Carries the underlying message for the caller.
    #[error("{message}")]
    RemoteStore {
        /// Text of the underlying failure.
        message: String,
    },

    /// Startup-time configuration or credential loading failure. Terminates
    /// startup and never surfaces on the wire.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration.
        message: String,
    },

    /// Form-client-side failure talking to the gateway, carrying the
    /// server-provided text for display.
    #[error("{message}")]
    Gateway {
        /// Server-provided or transport-level failure text.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
