//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Host triggers shutdown
//!     → broadcast to every runner and supervisor task
//!     → tasks exit at their next suspension point
//! ```
//!
//! # Design Decisions
//! - One broadcast channel, many subscribers
//! - A triggered flag covers subscribers that arrive after the signal
//! - In-flight check executions may be abandoned, not awaited

pub mod shutdown;

pub use shutdown::{Shutdown, ShutdownSignal};
