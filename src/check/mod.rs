//! Shared check capability types.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     CheckSpec (spec.rs) + Checker capability (checker.rs)
//!     → validated by the pool
//!     → spec stored on the scoreboard, checker owned by a runner
//!
//! Execution:
//!     Runner passes CheckerState into Checker::check
//!     → CheckOutcome (result, optionally new state)
//!     → CheckResult (result.rs) reported to the scoreboard
//! ```
//!
//! # Design Decisions
//! - These types carry no behavior beyond construction and accessors
//! - CheckerState is opaque: the runner threads it, never inspects it
//! - The dual-shape checker return is an explicit enum, not runtime
//!   shape inspection

pub mod checker;
pub mod result;
pub mod spec;

pub use checker::{CheckOutcome, Checker, CheckerState, FnChecker};
pub use result::{CheckResult, Status, Timestamp};
pub use spec::{CheckSpec, Severity};
