//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → HealthConfig (validated, immutable)
//!     → shared via Arc with the pool and every runner
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults so `HealthConfig::default()` is usable as-is
//! - Validation separates syntactic (serde) from semantic checks
//! - Per-check overrides live on the spec, not here

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::HealthConfig;
