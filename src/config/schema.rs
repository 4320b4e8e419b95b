//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Global health-check configuration.
///
/// The three duration defaults apply to every check whose spec does not
/// override them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    /// System name, surfaced in the rendered report.
    pub name: String,

    /// System description, surfaced in the rendered report.
    pub description: String,

    /// Default delay before a check's first execution.
    pub initial_delay_ms: u64,

    /// Default gap between one execution's termination and the next launch.
    pub period_ms: u64,

    /// Default execution deadline.
    pub timeout_ms: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            name: "healthcheck".to_string(),
            description: String::new(),
            initial_delay_ms: 0,
            period_ms: 30_000,
            timeout_ms: 5_000,
        }
    }
}

impl HealthConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_minimal_config() {
        let config: HealthConfig = toml::from_str("name = \"api\"").unwrap();
        assert_eq!(config.name, "api");
        assert_eq!(config.period(), Duration::from_millis(30_000));
        assert_eq!(config.timeout(), Duration::from_millis(5_000));
        assert_eq!(config.initial_delay(), Duration::ZERO);
    }
}
