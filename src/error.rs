//! Library-wide error definitions.

use thiserror::Error;

/// Errors surfaced synchronously to callers of the registration and query
/// APIs.
///
/// Checker-originated failures (timeouts, panics) are never represented
/// here: they are absorbed into an `error`-status [`CheckResult`] and
/// reported to the scoreboard like any other outcome.
///
/// [`CheckResult`]: crate::check::CheckResult
#[derive(Debug, Error)]
pub enum Error {
    /// The spec handed to `add`/`start_check` violates the registration
    /// contract. Nothing is started.
    #[error("contract violation: {0}")]
    Contract(String),

    /// The scoreboard actor is no longer running. Only observable during
    /// process teardown.
    #[error("scoreboard unavailable")]
    BoardUnavailable,

    /// Config file could not be read.
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but failed semantic validation.
    #[error("config validation failed: {0}")]
    Validation(String),
}
