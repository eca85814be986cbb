use health_plus::assessments::AssessmentKey;
use health_plus::config::OutputFormat;
use health_plus::sessions::{ResultStore, SessionId, StoreError, StoredAssessment};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct SessionSlot {
    entries: BTreeMap<AssessmentKey, StoredAssessment>,
    sample: bool,
}

/// Process-local result store; every session lives until the process exits.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResultStore {
    sessions: Arc<Mutex<HashMap<SessionId, SessionSlot>>>,
}

impl InMemoryResultStore {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SessionSlot>>, StoreError> {
        self.sessions
            .lock()
            .map_err(|_| StoreError::Unavailable("result store mutex poisoned".to_string()))
    }
}

impl ResultStore for InMemoryResultStore {
    fn put(&self, session: &SessionId, entry: StoredAssessment) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        guard
            .entry(session.clone())
            .or_default()
            .entries
            .insert(entry.key, entry);
        Ok(())
    }

    fn get(
        &self,
        session: &SessionId,
        key: AssessmentKey,
    ) -> Result<Option<StoredAssessment>, StoreError> {
        let guard = self.lock()?;
        Ok(guard
            .get(session)
            .and_then(|slot| slot.entries.get(&key))
            .cloned())
    }

    fn list(&self, session: &SessionId) -> Result<Vec<StoredAssessment>, StoreError> {
        let guard = self.lock()?;
        Ok(guard
            .get(session)
            .map(|slot| slot.entries.values().cloned().collect())
            .unwrap_or_default())
    }

    fn clear(&self, session: &SessionId) -> Result<(), StoreError> {
        self.lock()?.remove(session);
        Ok(())
    }

    fn replace_all(
        &self,
        session: &SessionId,
        entries: Vec<StoredAssessment>,
    ) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        let slot = guard.entry(session.clone()).or_default();
        slot.entries = entries
            .into_iter()
            .map(|entry| (entry.key, entry))
            .collect();
        Ok(())
    }

    fn set_sample(&self, session: &SessionId, sample: bool) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        match guard.get_mut(session) {
            Some(slot) => slot.sample = sample,
            None if sample => {
                guard.insert(
                    session.clone(),
                    SessionSlot {
                        sample,
                        ..SessionSlot::default()
                    },
                );
            }
            None => {}
        }
        Ok(())
    }

    fn is_sample(&self, session: &SessionId) -> Result<bool, StoreError> {
        let guard = self.lock()?;
        Ok(guard.get(session).is_some_and(|slot| slot.sample))
    }
}

pub(crate) fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("field name missing in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

pub(crate) fn parse_output(raw: &str) -> Result<OutputFormat, String> {
    raw.parse::<OutputFormat>().map_err(|err| err.to_string())
}
