use crate::assessments::AssessmentError;
use crate::config::ConfigError;
use crate::sessions::SessionServiceError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Assessment(AssessmentError),
    Session(SessionServiceError),
    Encode(serde_json::Error),
}

impl AppError {
    /// Caller-input failures, as opposed to environment or storage faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Assessment(_) | AppError::Session(SessionServiceError::Assessment(_))
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Assessment(err) => write!(f, "assessment error: {}", err),
            AppError::Session(err) => write!(f, "session error: {}", err),
            AppError::Encode(err) => write!(f, "encoding error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Assessment(err) => Some(err),
            AppError::Session(err) => Some(err),
            AppError::Encode(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<SessionServiceError> for AppError {
    fn from(value: SessionServiceError) -> Self {
        Self::Session(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::AssessmentKey;
    use std::error::Error;

    #[test]
    fn assessment_errors_are_user_errors() {
        let err = AppError::from(AssessmentError::MissingField {
            assessment: AssessmentKey::Bmi,
            field: "weight",
        });
        assert!(err.is_user_error());
        assert_eq!(
            err.to_string(),
            "assessment error: bmi: missing required field 'weight'"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn configuration_errors_are_not_user_errors() {
        let err = AppError::from(ConfigError::InvalidOutputFormat("yaml".to_string()));
        assert!(!err.is_user_error());
    }
}
