//! Storefront error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by storefront operations.
///
/// Read failures never surface here: unreadable or malformed stored data degrades to defaults.
pub enum StorefrontError {
    /// Writing a durable preference failed (storage unavailable or quota exceeded).
    #[error("durable write for `{key}` failed: {message}")]
    DurableWrite {
        /// Preference key being written.
        key: String,
        /// Host-reported failure.
        message: String,
    },
    /// Writing a session value failed.
    #[error("session write for `{key}` failed: {message}")]
    SessionWrite {
        /// Session key being written.
        key: String,
        /// Host-reported failure.
        message: String,
    },
    /// The supplied configuration was rejected.
    #[error("invalid storefront config: {0}")]
    InvalidConfig(String),
}
