//! Host-facing service facade.
//!
//! # Data Flow
//! ```text
//! HealthService::new(config)
//!     → spawns the scoreboard actor, builds the runner pool
//!
//! add(spec, checker, args)     → pool.start_check
//! report(schema_override?)     → board.snapshot → schema.to_report
//! is_healthy / check_count     → board queries
//! shutdown                     → pool.shutdown
//! ```
//!
//! # Design Decisions
//! - The facade owns the wiring; collaborators receive explicit handles,
//!   no global registry
//! - The default report schema is set at construction, overridable
//!   per-query

use std::sync::Arc;

use crate::board::ScoreBoard;
use crate::check::{CheckResult, CheckSpec, Checker, CheckerState};
use crate::config::HealthConfig;
use crate::error::Error;
use crate::pool::RunnerPool;
use crate::report::{ReportSchema, StandardSchema};

/// The embedded health-check system: one scoreboard, one runner pool.
///
/// Construction spawns the scoreboard actor, so a `HealthService` must be
/// built inside a running tokio runtime.
pub struct HealthService {
    config: Arc<HealthConfig>,
    board: ScoreBoard,
    pool: RunnerPool,
    schema: Box<dyn ReportSchema>,
}

impl HealthService {
    /// Build the service with the shipped [`StandardSchema`].
    pub fn new(config: HealthConfig) -> Self {
        Self::with_schema(config, Box::new(StandardSchema))
    }

    /// Build the service with a custom default report schema.
    pub fn with_schema(config: HealthConfig, schema: Box<dyn ReportSchema>) -> Self {
        let config = Arc::new(config);
        let board = ScoreBoard::spawn();
        let pool = RunnerPool::new(board.clone(), Arc::clone(&config));
        Self {
            config,
            board,
            pool,
            schema,
        }
    }

    /// Register a new check and start running it.
    ///
    /// `args` seed the checker's state via its `init`. Fails with
    /// [`Error::Contract`] when the spec is invalid; nothing is started.
    pub async fn add(
        &self,
        spec: CheckSpec,
        checker: Arc<dyn Checker>,
        args: CheckerState,
    ) -> Result<(), Error> {
        self.pool.start_check(spec, checker, args).await
    }

    /// Render the current results, with an optional per-query schema.
    pub async fn report(
        &self,
        schema_override: Option<&dyn ReportSchema>,
    ) -> Result<serde_json::Value, Error> {
        let entries = self.board.snapshot().await?;
        let schema = schema_override.unwrap_or(self.schema.as_ref());
        Ok(schema.to_report(&self.config, &entries))
    }

    /// Consistent view of every registered (spec, latest result) pair.
    pub async fn snapshot(&self) -> Result<Vec<(CheckSpec, CheckResult)>, Error> {
        self.board.snapshot().await
    }

    /// True iff every registered check's latest result is `ok`.
    pub async fn is_healthy(&self) -> Result<bool, Error> {
        self.board.is_healthy().await
    }

    /// Number of registered checks.
    pub async fn check_count(&self) -> Result<usize, Error> {
        self.board.count().await
    }

    /// Number of currently active runners.
    pub fn runner_count(&self) -> usize {
        self.pool.count()
    }

    /// Stop every runner. In-flight executions may be abandoned.
    pub fn shutdown(&self) {
        self.pool.shutdown();
    }
}
