//! Per-check runner subsystem.
//!
//! # Data Flow
//! ```text
//! Idle: sleep(initial_delay | period), selected against shutdown
//!     → Executing: spawn checker task, arm deadline
//!     → result  → thread state, report CheckResult
//!     → deadline → abort task, report error("Timeout"),
//!                  await the killed task's termination
//!     → panic   → report error("Check died: <reason>")
//!     → Idle (period anchored to termination, not launch)
//! ```
//!
//! # Design Decisions
//! - Each execution runs in its own spawned task: a panic is contained
//!   and the deadline can abort it
//! - Exactly one report per cycle; the abort notification never re-reports
//! - Nothing a checker does ends the loop; only shutdown does
//! - Per-check overrides are resolved against global defaults once, at
//!   construction

use std::sync::Arc;
use std::time::Duration;
use tokio::time;

use crate::board::ScoreBoard;
use crate::check::{CheckResult, CheckSpec, Checker, CheckerState};
use crate::config::HealthConfig;
use crate::lifecycle::ShutdownSignal;

/// Effective timing for one check: spec overrides falling back to the
/// global defaults.
#[derive(Debug, Clone, Copy)]
pub struct RunnerSettings {
    pub initial_delay: Duration,
    pub period: Duration,
    pub timeout: Duration,
}

impl RunnerSettings {
    pub fn resolve(spec: &CheckSpec, config: &HealthConfig) -> Self {
        Self {
            initial_delay: spec
                .initial_delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.initial_delay()),
            period: spec
                .period_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.period()),
            timeout: spec
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.timeout()),
        }
    }
}

/// State machine driving one check on a fixed cadence.
///
/// Owns the checker state exclusively; shares nothing with sibling runners
/// except the scoreboard handle.
pub struct Runner {
    id: String,
    checker: Arc<dyn Checker>,
    state: CheckerState,
    board: ScoreBoard,
    settings: RunnerSettings,
}

impl Runner {
    pub(crate) fn new(
        id: String,
        checker: Arc<dyn Checker>,
        state: CheckerState,
        board: ScoreBoard,
        settings: RunnerSettings,
    ) -> Self {
        Self {
            id,
            checker,
            state,
            board,
            settings,
        }
    }

    /// Drive the check until shutdown. Infinite and self-healing: every
    /// failure mode of the checker degrades to an `error` result.
    pub(crate) async fn run(mut self, mut shutdown: ShutdownSignal) {
        tracing::info!(
            check = %self.id,
            period_ms = self.settings.period.as_millis() as u64,
            timeout_ms = self.settings.timeout.as_millis() as u64,
            "runner starting"
        );

        let mut delay = self.settings.initial_delay;
        loop {
            if shutdown.is_triggered() {
                break;
            }
            tokio::select! {
                _ = time::sleep(delay) => {}
                _ = shutdown.recv() => break,
            }

            self.execute_once().await;

            // Period measures termination-to-launch, bounding the maximum
            // execution rate however long the check itself takes.
            delay = self.settings.period;
        }

        tracing::info!(check = %self.id, "runner stopped");
    }

    /// One Executing cycle: launch, await result-or-deadline, report once.
    async fn execute_once(&mut self) {
        let mut handle = tokio::spawn(self.checker.check(self.state.clone()));

        match time::timeout(self.settings.timeout, &mut handle).await {
            Ok(Ok(outcome)) => {
                let (result, next_state) = outcome.into_parts();
                if let Some(state) = next_state {
                    self.state = state;
                }
                self.board.report_result(&self.id, result);
            }
            Ok(Err(join_err)) => {
                let reason = termination_reason(join_err);
                tracing::warn!(check = %self.id, reason = %reason, "check crashed");
                self.board
                    .report_result(&self.id, CheckResult::error(format!("Check died: {}", reason)));
            }
            Err(_) => {
                handle.abort();
                tracing::warn!(
                    check = %self.id,
                    timeout_ms = self.settings.timeout.as_millis() as u64,
                    "check timed out"
                );
                self.board.report_result(&self.id, CheckResult::error("Timeout"));
                // The killed execution's termination carries no result of
                // its own; the next wake-up waits until it is observed.
                let _ = handle.await;
            }
        }
    }
}

/// Human-readable reason for an abnormal execution-task termination.
pub(crate) fn termination_reason(err: tokio::task::JoinError) -> String {
    if err.is_panic() {
        let payload = err.into_panic();
        if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic".to_string()
        }
    } else {
        "cancelled".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fall_back_to_global_defaults() {
        let config = HealthConfig {
            initial_delay_ms: 100,
            period_ms: 200,
            timeout_ms: 300,
            ..HealthConfig::default()
        };
        let spec = CheckSpec::new("db", "Database ping").with_timeout(Duration::from_millis(50));

        let settings = RunnerSettings::resolve(&spec, &config);
        assert_eq!(settings.initial_delay, Duration::from_millis(100));
        assert_eq!(settings.period, Duration::from_millis(200));
        assert_eq!(settings.timeout, Duration::from_millis(50));
    }

    #[tokio::test]
    async fn termination_reason_extracts_panic_payload() {
        let err = tokio::spawn(async { panic!("disk on fire") })
            .await
            .unwrap_err();
        assert_eq!(termination_reason(err), "disk on fire");

        let message = String::from("formatted reason 42");
        let err = tokio::spawn(async move { panic!("{}", message) })
            .await
            .unwrap_err();
        assert_eq!(termination_reason(err), "formatted reason 42");
    }

    #[tokio::test]
    async fn termination_reason_for_aborted_task() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let err = handle.await.unwrap_err();
        assert_eq!(termination_reason(err), "cancelled");
    }
}
