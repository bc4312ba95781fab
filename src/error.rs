//! Error types for biome-tint operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in biome-tint operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The winning (or fallback) category has no entry in the color lookup.
    ///
    /// The category table and the color table are out of sync; emitting any
    /// color here would silently be wrong.
    #[error("no map color for category '{category}'")]
    UnknownCategory {
        /// Label of the category that failed to resolve.
        category: String,
    },

    /// A color channel lies outside its nominal range (strict mode only).
    #[error("channel '{channel}' out of range: {value} not in [0, {max}]")]
    ChannelOutOfRange {
        /// Channel name (`r`, `g`, `b`, `a`, `h`, `s`, `l`).
        channel: &'static str,
        /// Offending value.
        value: f64,
        /// Upper bound of the nominal range.
        max: f64,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
