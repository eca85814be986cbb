//! Health self-assessment rule engine.
//!
//! [`assessments`] holds the pure scoring catalogue and its dispatcher,
//! [`sessions`] keeps per-user result collections on top of a pluggable store.

pub mod assessments;
pub mod config;
pub mod error;
pub mod sessions;
pub mod telemetry;
