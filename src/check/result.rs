//! Check execution outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::time::Instant;

/// Coarse outcome classification for one check execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warn,
    Error,
}

impl Status {
    /// True only for [`Status::Ok`]; `warn` already counts as unhealthy.
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Warn => write!(f, "warn"),
            Status::Error => write!(f, "error"),
        }
    }
}

/// Capture time of a result: a monotonic instant for interval math plus
/// the wall-clock UTC time for reporting.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    instant: Instant,
    wall: DateTime<Utc>,
}

impl Timestamp {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Utc::now(),
        }
    }

    /// Absolute UTC capture time.
    pub fn utc(&self) -> DateTime<Utc> {
        self.wall
    }

    /// Monotonic capture instant.
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// RFC 3339 rendering of the capture time, seconds precision.
    pub fn to_rfc3339(&self) -> String {
        self.wall
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

/// The outcome of one check execution. Immutable; every field is always
/// populated, including for synthesized timeout/crash results.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
    pub timestamp: Timestamp,
}

impl CheckResult {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            timestamp: Timestamp::now(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Status::Ok, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Status::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Status::Error, message)
    }

    /// Coarse boolean health derived from the status.
    pub fn is_healthy(&self) -> bool {
        self.status.is_ok()
    }
}
