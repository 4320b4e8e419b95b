//! Scoreboard aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Runner result reports (fire-and-forget)
//!     → request channel
//!     → single actor task owning the entry list
//!     → snapshot / health / count replies via oneshot
//! ```
//!
//! # Design Decisions
//! - One consumer task owns the map: every request is applied atomically
//!   and in arrival order, so callers need no locks
//! - Entries keep insertion order for deterministic report ordering
//! - A result for an unregistered id is an invariant violation; it is
//!   logged and dropped rather than killing the actor
//! - The actor exits when the last handle is dropped

use tokio::sync::{mpsc, oneshot};

use crate::check::{CheckResult, CheckSpec};
use crate::error::Error;

/// One registered check and its latest result.
#[derive(Debug, Clone)]
struct BoardEntry {
    spec: CheckSpec,
    result: CheckResult,
}

enum BoardRequest {
    Register {
        spec: CheckSpec,
        reply: oneshot::Sender<String>,
    },
    Report {
        id: String,
        result: CheckResult,
    },
    Snapshot {
        reply: oneshot::Sender<Vec<(CheckSpec, CheckResult)>>,
    },
    IsHealthy {
        reply: oneshot::Sender<bool>,
    },
    Count {
        reply: oneshot::Sender<usize>,
    },
}

/// Handle to the scoreboard actor. Cheap to clone; every runner holds one.
#[derive(Clone)]
pub struct ScoreBoard {
    tx: mpsc::UnboundedSender<BoardRequest>,
}

impl ScoreBoard {
    /// Spawn the actor task and return a handle to it. Must be called
    /// inside a running tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_board(rx));
        Self { tx }
    }

    /// Register a check, seeding its entry with an `ok` "Not run yet"
    /// result. Re-registering an existing id replaces its entry in place.
    pub async fn register(&self, spec: CheckSpec) -> Result<String, Error> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Register { spec, reply })
            .map_err(|_| Error::BoardUnavailable)?;
        rx.await.map_err(|_| Error::BoardUnavailable)
    }

    /// Replace the stored result for `id`. Fire-and-forget: runners never
    /// wait on the scoreboard.
    pub fn report_result(&self, id: &str, result: CheckResult) {
        let request = BoardRequest::Report {
            id: id.to_string(),
            result,
        };
        if self.tx.send(request).is_err() {
            tracing::debug!(check = %id, "scoreboard gone, result dropped");
        }
    }

    /// Consistent, insertion-ordered copy of every (spec, result) pair.
    pub async fn snapshot(&self) -> Result<Vec<(CheckSpec, CheckResult)>, Error> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Snapshot { reply })
            .map_err(|_| Error::BoardUnavailable)?;
        rx.await.map_err(|_| Error::BoardUnavailable)
    }

    /// True iff every stored result has `status == ok`.
    pub async fn is_healthy(&self) -> Result<bool, Error> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::IsHealthy { reply })
            .map_err(|_| Error::BoardUnavailable)?;
        rx.await.map_err(|_| Error::BoardUnavailable)
    }

    /// Number of registered checks.
    pub async fn count(&self) -> Result<usize, Error> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Count { reply })
            .map_err(|_| Error::BoardUnavailable)?;
        rx.await.map_err(|_| Error::BoardUnavailable)
    }
}

async fn run_board(mut rx: mpsc::UnboundedReceiver<BoardRequest>) {
    // Vec keeps insertion order; check counts are small enough that the
    // linear id lookup never matters.
    let mut entries: Vec<BoardEntry> = Vec::new();

    while let Some(request) = rx.recv().await {
        match request {
            BoardRequest::Register { spec, reply } => {
                let id = spec.id.clone();
                let entry = BoardEntry {
                    spec,
                    result: CheckResult::ok("Not run yet"),
                };
                match entries.iter_mut().find(|e| e.spec.id == id) {
                    Some(existing) => {
                        // Two registrations sharing an id is usually a
                        // config bug; the last one wins, loudly.
                        tracing::warn!(check = %id, "duplicate registration replaces existing entry");
                        *existing = entry;
                    }
                    None => entries.push(entry),
                }
                let _ = reply.send(id);
            }
            BoardRequest::Report { id, result } => {
                match entries.iter_mut().find(|e| e.spec.id == id) {
                    Some(entry) => entry.result = result,
                    None => {
                        tracing::error!(
                            check = %id,
                            "result for unregistered check dropped (register-before-report invariant violated)"
                        );
                    }
                }
            }
            BoardRequest::Snapshot { reply } => {
                let view = entries
                    .iter()
                    .map(|e| (e.spec.clone(), e.result.clone()))
                    .collect();
                let _ = reply.send(view);
            }
            BoardRequest::IsHealthy { reply } => {
                let healthy = entries.iter().all(|e| e.result.is_healthy());
                let _ = reply.send(healthy);
            }
            BoardRequest::Count { reply } => {
                let _ = reply.send(entries.len());
            }
        }
    }
}
