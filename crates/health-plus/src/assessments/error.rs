use super::key::AssessmentKey;

/// Caller-input failures detected before any scoring runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("unknown assessment: {0}")]
    UnknownAssessment(String),
    #[error("{assessment}: missing required field '{field}'")]
    MissingField {
        assessment: AssessmentKey,
        field: &'static str,
    },
    #[error("{assessment}: field '{field}' has invalid value '{value}' ({reason})")]
    InvalidField {
        assessment: AssessmentKey,
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl AssessmentError {
    /// Name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AssessmentError::UnknownAssessment(_) => None,
            AssessmentError::MissingField { field, .. }
            | AssessmentError::InvalidField { field, .. } => Some(field),
        }
    }
}
