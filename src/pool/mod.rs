//! Runner pool subsystem.
//!
//! # Data Flow
//! ```text
//! start_check(spec, checker, args)
//!     → validate spec (ContractError on violation, nothing started)
//!     → register spec on the scoreboard ("Not run yet")
//!     → spawn supervisor task
//!         → supervisor spawns the runner, restarts it fresh on panic
//! ```
//!
//! # Design Decisions
//! - Validate before start: an invalid check never reaches the scoreboard
//! - Independent restart: one runner's panic restarts only that runner,
//!   with its checker state rebuilt via `init` (accumulated state is lost)
//! - `init` runs in its own task: a panicking init reports an error result
//!   and retries after the period, like any other checker failure
//! - Shutdown is pool-wide; in-flight executions may be abandoned

use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio::time;

use crate::board::ScoreBoard;
use crate::check::{CheckResult, CheckSpec, Checker, CheckerState};
use crate::config::HealthConfig;
use crate::error::Error;
use crate::lifecycle::Shutdown;
use crate::runner::{termination_reason, Runner, RunnerSettings};

struct RunnerSlot {
    id: String,
    supervisor: JoinHandle<()>,
}

/// Owns the set of active runners: dynamic registration, introspection,
/// restart-on-panic supervision.
pub struct RunnerPool {
    board: ScoreBoard,
    config: Arc<HealthConfig>,
    shutdown: Shutdown,
    runners: Mutex<Vec<RunnerSlot>>,
}

impl RunnerPool {
    pub fn new(board: ScoreBoard, config: Arc<HealthConfig>) -> Self {
        Self {
            board,
            config,
            shutdown: Shutdown::new(),
            runners: Mutex::new(Vec::new()),
        }
    }

    /// Validate and start a new supervised runner for `spec`.
    ///
    /// The scoreboard entry exists before this returns, so a snapshot taken
    /// immediately afterward already contains the "Not run yet" result.
    pub async fn start_check(
        &self,
        spec: CheckSpec,
        checker: Arc<dyn Checker>,
        args: CheckerState,
    ) -> Result<(), Error> {
        spec.validate().map_err(Error::Contract)?;

        let settings = RunnerSettings::resolve(&spec, &self.config);
        let id = self.board.register(spec).await?;

        let supervisor = tokio::spawn(supervise(
            id.clone(),
            checker,
            args,
            settings,
            self.board.clone(),
            self.shutdown.clone(),
        ));

        let mut runners = self.runners.lock().expect("runner list poisoned");
        runners.push(RunnerSlot { id, supervisor });
        Ok(())
    }

    /// Number of currently active runners.
    pub fn count(&self) -> usize {
        let mut runners = self.runners.lock().expect("runner list poisoned");
        runners.retain(|slot| !slot.supervisor.is_finished());
        runners.len()
    }

    /// Signal every runner to stop. In-flight check executions are not
    /// awaited.
    pub fn shutdown(&self) {
        tracing::info!("runner pool shutting down");
        self.shutdown.trigger();
    }
}

impl Drop for RunnerPool {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Keep one runner alive until shutdown, restarting it fresh if it panics.
async fn supervise(
    id: String,
    checker: Arc<dyn Checker>,
    args: CheckerState,
    settings: RunnerSettings,
    board: ScoreBoard,
    shutdown: Shutdown,
) {
    loop {
        if shutdown.is_triggered() {
            break;
        }

        // init is contained the same way check is: a panic degrades to an
        // error result on the scoreboard and a retry after the period,
        // never to a dead supervisor.
        let init_checker = Arc::clone(&checker);
        let init_args = args.clone();
        let state = match tokio::spawn(async move { init_checker.init(init_args) }).await {
            Ok(state) => state,
            Err(err) => {
                let reason = termination_reason(err);
                tracing::error!(check = %id, reason = %reason, "checker init panicked");
                board.report_result(&id, CheckResult::error(format!("Check died: {}", reason)));

                let mut signal = shutdown.subscribe();
                tokio::select! {
                    _ = time::sleep(settings.period) => {}
                    _ = signal.recv() => break,
                }
                continue;
            }
        };

        let runner = Runner::new(
            id.clone(),
            Arc::clone(&checker),
            state,
            board.clone(),
            settings,
        );
        let signal = shutdown.subscribe();
        let task = tokio::spawn(runner.run(signal));

        match task.await {
            // Clean exit: the runner observed shutdown.
            Ok(()) => break,
            Err(err) if err.is_panic() => {
                tracing::error!(check = %id, "runner panicked; restarting fresh");
            }
            Err(_) => break,
        }
    }
}
