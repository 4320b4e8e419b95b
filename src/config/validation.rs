//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and flag self-defeating combinations
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: HealthConfig → Result<(), Vec<String>>
//! - Runs before a config is accepted into the system

use crate::config::schema::HealthConfig;

/// Validate a parsed configuration.
pub fn validate_config(config: &HealthConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if config.timeout_ms == 0 {
        errors.push("timeout_ms must be greater than zero".to_string());
    }

    // A zero period is legal (back-to-back execution) but a timeout above
    // the period means every slow cycle overlaps its own deadline window.
    if config.period_ms > 0 && config.timeout_ms > config.period_ms {
        tracing::warn!(
            period_ms = config.period_ms,
            timeout_ms = config.timeout_ms,
            "timeout exceeds period; slow checks will dominate the schedule"
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&HealthConfig::default()).is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = HealthConfig {
            timeout_ms: 0,
            ..HealthConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("timeout_ms"));
    }

    #[test]
    fn empty_name_rejected() {
        let config = HealthConfig {
            name: "  ".to_string(),
            ..HealthConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
