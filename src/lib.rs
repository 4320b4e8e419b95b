//! Embedded periodic health-check library.
//!
//! Runs user-supplied check functions on independent cadences, isolates
//! their failures (panics, hangs, timeouts), and aggregates the latest
//! result per check into a consistent, queryable scoreboard.

pub mod board;
pub mod check;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod pool;
pub mod report;
pub mod runner;
pub mod service;

pub use check::{
    CheckOutcome, CheckResult, CheckSpec, Checker, CheckerState, FnChecker, Severity, Status,
};
pub use config::HealthConfig;
pub use error::Error;
pub use report::{ReportSchema, StandardSchema};
pub use service::HealthService;
