//! Report rendering subsystem.
//!
//! # Data Flow
//! ```text
//! scoreboard snapshot [(spec, result)]
//!     → ReportSchema::to_report (pluggable, global or per-query)
//!     → serde_json::Value handed to the host
//! ```
//!
//! # Design Decisions
//! - The transform is a trait so hosts can plug their own wire format
//! - The shipped StandardSchema follows the FT health-check JSON shape
//! - Rendering is pure: the snapshot is already consistent

use serde_json::{json, Value};

use crate::check::{CheckResult, CheckSpec};
use crate::config::HealthConfig;

/// Pluggable transform from aggregated results to a wire-format report.
pub trait ReportSchema: Send + Sync {
    fn to_report(&self, config: &HealthConfig, entries: &[(CheckSpec, CheckResult)]) -> Value;
}

/// FT-health-check-style JSON: system metadata plus one object per check.
pub struct StandardSchema;

impl ReportSchema for StandardSchema {
    fn to_report(&self, config: &HealthConfig, entries: &[(CheckSpec, CheckResult)]) -> Value {
        let checks: Vec<Value> = entries
            .iter()
            .map(|(spec, result)| {
                json!({
                    "id": spec.id,
                    "name": spec.name,
                    "ok": result.is_healthy(),
                    "status": result.status,
                    "severity": spec.severity,
                    "checkOutput": result.message,
                    "lastUpdated": result.timestamp.to_rfc3339(),
                    "panicGuideUrl": spec.panic_guide_url,
                    "businessImpact": spec.business_impact,
                    "technicalSummary": spec.technical_summary,
                })
            })
            .collect();

        json!({
            "schemaVersion": 1,
            "name": config.name,
            "description": config.description,
            "ok": entries.iter().all(|(_, result)| result.is_healthy()),
            "checks": checks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Severity;

    #[test]
    fn standard_schema_shape() {
        let config = HealthConfig {
            name: "api".to_string(),
            description: "public API".to_string(),
            ..HealthConfig::default()
        };
        let spec = CheckSpec::new("db", "Database ping")
            .with_severity(Severity::CRITICAL)
            .with_business_impact("signups fail");
        let entries = vec![(spec, CheckResult::error("Timeout"))];

        let report = StandardSchema.to_report(&config, &entries);
        assert_eq!(report["schemaVersion"], 1);
        assert_eq!(report["name"], "api");
        assert_eq!(report["ok"], false);
        assert_eq!(report["checks"][0]["id"], "db");
        assert_eq!(report["checks"][0]["ok"], false);
        assert_eq!(report["checks"][0]["status"], "error");
        assert_eq!(report["checks"][0]["severity"], 1);
        assert_eq!(report["checks"][0]["checkOutput"], "Timeout");
        assert_eq!(report["checks"][0]["businessImpact"], "signups fail");
    }

    #[test]
    fn empty_board_reports_ok() {
        let report = StandardSchema.to_report(&HealthConfig::default(), &[]);
        assert_eq!(report["ok"], true);
        assert_eq!(report["checks"].as_array().unwrap().len(), 0);
    }
}
