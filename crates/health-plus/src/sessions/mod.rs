//! Per-session result collections: submit, review, reset, and sample mode.
//!
//! The store is a trait so callers choose the persistence mechanism; the
//! service only decides what gets written and when.

pub mod sample;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use sample::sample_assessments;
pub use service::{AssessmentSessionService, OverviewEntry, SessionOverview, SessionServiceError};
pub use store::{ResultStore, SessionId, StoreError, StoredAssessment};
