//! Assessment rule catalogue: keys, input shapes, scoring rules, and the
//! dispatcher that turns raw form fields into scored results.
//!
//! Every rule is a pure function of its input record. Callers that hold raw
//! field values go through [`evaluate`]; callers that already hold a typed
//! record can use [`AssessmentInput::evaluate`] or the functions in [`rules`].

pub mod catalogue;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod inputs;
pub mod key;
pub mod outcome;
pub mod report;
pub mod rules;

#[cfg(test)]
mod tests;

pub use catalogue::{catalogue, spec, AssessmentSpec, FieldKind, FieldRequirement, FieldSpec};
pub use dispatch::{evaluate, evaluate_key, AssessmentInput};
pub use error::AssessmentError;
pub use fields::{AssessmentFields, FieldValue};
pub use key::AssessmentKey;
pub use outcome::{AssessmentResult, RiskLevel, ScreeningOutcome};
pub use report::report_text;
