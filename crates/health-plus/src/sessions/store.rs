use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessments::{report_text, AssessmentKey, AssessmentResult};

/// Opaque identifier for one user's collection of results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scored result as kept in a session, at most one per assessment key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub key: AssessmentKey,
    pub result: AssessmentResult,
    pub recorded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl StoredAssessment {
    pub fn new(result: AssessmentResult, recorded_at: DateTime<Utc>) -> Self {
        let report = report_text(Some(&result));
        Self {
            key: result.key(),
            result,
            recorded_at,
            report: Some(report),
        }
    }
}

/// Session-scoped result storage so the service can be exercised in isolation.
///
/// `put` replaces any entry already held for the same key. `clear` drops the
/// entries and the sample flag together.
pub trait ResultStore: Send + Sync {
    fn put(&self, session: &SessionId, entry: StoredAssessment) -> Result<(), StoreError>;
    fn get(
        &self,
        session: &SessionId,
        key: AssessmentKey,
    ) -> Result<Option<StoredAssessment>, StoreError>;
    fn list(&self, session: &SessionId) -> Result<Vec<StoredAssessment>, StoreError>;
    fn clear(&self, session: &SessionId) -> Result<(), StoreError>;
    fn replace_all(
        &self,
        session: &SessionId,
        entries: Vec<StoredAssessment>,
    ) -> Result<(), StoreError>;
    fn set_sample(&self, session: &SessionId, sample: bool) -> Result<(), StoreError>;
    fn is_sample(&self, session: &SessionId) -> Result<bool, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}
