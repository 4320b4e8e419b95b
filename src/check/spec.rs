//! Check specifications.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Check severity for report annotation. 1 is critical, 3 informational.
/// Never influences scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const CRITICAL: Severity = Severity(1);
    pub const DEGRADED: Severity = Severity(2);
    pub const INFORMATIONAL: Severity = Severity(3);

    /// Construct a severity, rejecting values outside 1..=3.
    pub fn new(level: u8) -> Option<Self> {
        (1..=3).contains(&level).then_some(Self(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Severity::new(level).ok_or_else(|| format!("severity must be 1..=3, got {}", level))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::INFORMATIONAL
    }
}

/// Immutable description of one registered check.
///
/// Created once at registration, never mutated. `id` is the identity key
/// on the scoreboard. The three `*_ms` fields override the global defaults
/// from [`HealthConfig`](crate::config::HealthConfig) when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSpec {
    /// Unique identifier among currently registered checks.
    pub id: String,

    /// Human-readable check name.
    pub name: String,

    /// What this check verifies.
    #[serde(default)]
    pub description: String,

    /// Report-annotation severity.
    #[serde(default)]
    pub severity: Severity,

    /// Runbook to consult when this check fails.
    #[serde(default)]
    pub panic_guide_url: String,

    /// What breaks for users when this check fails.
    #[serde(default)]
    pub business_impact: String,

    /// What the check technically probes.
    #[serde(default)]
    pub technical_summary: String,

    /// Delay before the first execution; global default when absent.
    #[serde(default)]
    pub initial_delay_ms: Option<u64>,

    /// Gap between one execution's termination and the next launch;
    /// global default when absent.
    #[serde(default)]
    pub period_ms: Option<u64>,

    /// Execution deadline; global default when absent.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl CheckSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            severity: Severity::default(),
            panic_guide_url: String::new(),
            business_impact: String::new(),
            technical_summary: String::new(),
            initial_delay_ms: None,
            period_ms: None,
            timeout_ms: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_panic_guide_url(mut self, url: impl Into<String>) -> Self {
        self.panic_guide_url = url.into();
        self
    }

    pub fn with_business_impact(mut self, impact: impl Into<String>) -> Self {
        self.business_impact = impact.into();
        self
    }

    pub fn with_technical_summary(mut self, summary: impl Into<String>) -> Self {
        self.technical_summary = summary.into();
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay_ms = Some(delay.as_millis() as u64);
        self
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period_ms = Some(period.as_millis() as u64);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Registration-contract check. Severity and duration ranges are
    /// already enforced by their types; only the identity fields remain.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("check id must not be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err(format!("check '{}' has an empty name", self.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_range_enforced() {
        assert!(Severity::new(0).is_none());
        assert!(Severity::new(4).is_none());
        assert_eq!(Severity::new(1), Some(Severity::CRITICAL));
    }

    #[test]
    fn severity_rejects_out_of_range_on_deserialize() {
        let err = serde_json::from_str::<Severity>("5");
        assert!(err.is_err());
    }

    #[test]
    fn spec_validation() {
        assert!(CheckSpec::new("db", "Database ping").validate().is_ok());
        assert!(CheckSpec::new("", "Database ping").validate().is_err());
        assert!(CheckSpec::new("db", "  ").validate().is_err());
    }

    #[test]
    fn spec_serializes_camel_case() {
        let spec = CheckSpec::new("db", "Database ping")
            .with_panic_guide_url("https://runbooks.example/db");
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["panicGuideUrl"], "https://runbooks.example/db");
        assert_eq!(value["severity"], 3);
    }
}
