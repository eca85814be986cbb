use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::sample::sample_assessments;
use super::store::{ResultStore, SessionId, StoreError, StoredAssessment};
use crate::assessments::{evaluate, AssessmentError, AssessmentFields, AssessmentKey};

/// Service composing the dispatcher with a session-scoped result store.
pub struct AssessmentSessionService<S> {
    store: Arc<S>,
}

impl<S> AssessmentSessionService<S>
where
    S: ResultStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Score a submission and keep it, replacing any earlier result for the
    /// same assessment. A real submission ends sample mode.
    pub fn submit(
        &self,
        session: &SessionId,
        assessment_key: &str,
        fields: &AssessmentFields,
    ) -> Result<StoredAssessment, SessionServiceError> {
        let result = evaluate(assessment_key, fields).map_err(|err| {
            warn!(%session, assessment = assessment_key, error = %err, "submission rejected");
            err
        })?;
        let entry = StoredAssessment::new(result, Utc::now());

        self.store.put(session, entry.clone())?;
        self.store.set_sample(session, false)?;

        info!(
            %session,
            assessment = %entry.key,
            classification = entry.result.classification(),
            "assessment recorded"
        );
        Ok(entry)
    }

    pub fn get(
        &self,
        session: &SessionId,
        key: AssessmentKey,
    ) -> Result<Option<StoredAssessment>, SessionServiceError> {
        Ok(self.store.get(session, key)?)
    }

    /// Every assessment in catalogue order, with its result when one exists.
    pub fn overview(&self, session: &SessionId) -> Result<SessionOverview, SessionServiceError> {
        let mut stored = self.store.list(session)?;
        let sample = self.store.is_sample(session)?;

        let entries = AssessmentKey::ALL
            .into_iter()
            .map(|key| {
                let position = stored.iter().position(|entry| entry.key == key);
                OverviewEntry {
                    key,
                    title: key.title(),
                    stored: position.map(|index| stored.swap_remove(index)),
                }
            })
            .collect();

        Ok(SessionOverview { entries, sample })
    }

    pub fn clear(&self, session: &SessionId) -> Result<(), SessionServiceError> {
        self.store.clear(session)?;
        info!(%session, "session results cleared");
        Ok(())
    }

    /// Replace the whole session with the canned demonstration set.
    pub fn load_sample(&self, session: &SessionId) -> Result<usize, SessionServiceError> {
        let entries = sample_assessments(Utc::now());
        let count = entries.len();

        self.store.replace_all(session, entries)?;
        self.store.set_sample(session, true)?;

        debug!(%session, count, "sample results loaded");
        Ok(count)
    }
}

/// Results page view of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOverview {
    pub entries: Vec<OverviewEntry>,
    /// Set while the session holds the canned sample rather than real submissions.
    pub sample: bool,
}

impl SessionOverview {
    pub fn completed(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.stored.is_some())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewEntry {
    pub key: AssessmentKey,
    pub title: &'static str,
    pub stored: Option<StoredAssessment>,
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
