use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use crate::assessments::{AssessmentFields, AssessmentKey};
use crate::sessions::store::{ResultStore, SessionId, StoreError, StoredAssessment};

#[derive(Default)]
pub(super) struct MemoryStore {
    entries: Mutex<HashMap<SessionId, BTreeMap<AssessmentKey, StoredAssessment>>>,
    samples: Mutex<HashSet<SessionId>>,
}

impl ResultStore for MemoryStore {
    fn put(&self, session: &SessionId, entry: StoredAssessment) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().expect("store mutex poisoned");
        guard
            .entry(session.clone())
            .or_default()
            .insert(entry.key, entry);
        Ok(())
    }

    fn get(
        &self,
        session: &SessionId,
        key: AssessmentKey,
    ) -> Result<Option<StoredAssessment>, StoreError> {
        let guard = self.entries.lock().expect("store mutex poisoned");
        Ok(guard
            .get(session)
            .and_then(|entries| entries.get(&key))
            .cloned())
    }

    fn list(&self, session: &SessionId) -> Result<Vec<StoredAssessment>, StoreError> {
        let guard = self.entries.lock().expect("store mutex poisoned");
        Ok(guard
            .get(session)
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default())
    }

    fn clear(&self, session: &SessionId) -> Result<(), StoreError> {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .remove(session);
        self.samples
            .lock()
            .expect("sample mutex poisoned")
            .remove(session);
        Ok(())
    }

    fn replace_all(
        &self,
        session: &SessionId,
        entries: Vec<StoredAssessment>,
    ) -> Result<(), StoreError> {
        let replacement = entries.into_iter().map(|entry| (entry.key, entry)).collect();
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .insert(session.clone(), replacement);
        Ok(())
    }

    fn set_sample(&self, session: &SessionId, sample: bool) -> Result<(), StoreError> {
        let mut guard = self.samples.lock().expect("sample mutex poisoned");
        if sample {
            guard.insert(session.clone());
        } else {
            guard.remove(session);
        }
        Ok(())
    }

    fn is_sample(&self, session: &SessionId) -> Result<bool, StoreError> {
        Ok(self
            .samples
            .lock()
            .expect("sample mutex poisoned")
            .contains(session))
    }
}

/// Store that refuses every call, for error propagation checks.
pub(super) struct OfflineStore;

impl ResultStore for OfflineStore {
    fn put(&self, _session: &SessionId, _entry: StoredAssessment) -> Result<(), StoreError> {
        Err(offline())
    }

    fn get(
        &self,
        _session: &SessionId,
        _key: AssessmentKey,
    ) -> Result<Option<StoredAssessment>, StoreError> {
        Err(offline())
    }

    fn list(&self, _session: &SessionId) -> Result<Vec<StoredAssessment>, StoreError> {
        Err(offline())
    }

    fn clear(&self, _session: &SessionId) -> Result<(), StoreError> {
        Err(offline())
    }

    fn replace_all(
        &self,
        _session: &SessionId,
        _entries: Vec<StoredAssessment>,
    ) -> Result<(), StoreError> {
        Err(offline())
    }

    fn set_sample(&self, _session: &SessionId, _sample: bool) -> Result<(), StoreError> {
        Err(offline())
    }

    fn is_sample(&self, _session: &SessionId) -> Result<bool, StoreError> {
        Err(offline())
    }
}

/// Store that accepts everything except new results.
#[derive(Default)]
pub(super) struct FrozenStore {
    pub(super) inner: MemoryStore,
}

impl ResultStore for FrozenStore {
    fn put(&self, _session: &SessionId, _entry: StoredAssessment) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("frozen".to_string()))
    }

    fn get(
        &self,
        session: &SessionId,
        key: AssessmentKey,
    ) -> Result<Option<StoredAssessment>, StoreError> {
        self.inner.get(session, key)
    }

    fn list(&self, session: &SessionId) -> Result<Vec<StoredAssessment>, StoreError> {
        self.inner.list(session)
    }

    fn clear(&self, session: &SessionId) -> Result<(), StoreError> {
        self.inner.clear(session)
    }

    fn replace_all(
        &self,
        session: &SessionId,
        entries: Vec<StoredAssessment>,
    ) -> Result<(), StoreError> {
        self.inner.replace_all(session, entries)
    }

    fn set_sample(&self, session: &SessionId, sample: bool) -> Result<(), StoreError> {
        self.inner.set_sample(session, sample)
    }

    fn is_sample(&self, session: &SessionId) -> Result<bool, StoreError> {
        self.inner.is_sample(session)
    }
}

fn offline() -> StoreError {
    StoreError::Unavailable("offline".to_string())
}

pub(super) fn session(name: &str) -> SessionId {
    SessionId(name.to_string())
}

pub(super) fn blood_pressure(systolic: &str, diastolic: &str) -> AssessmentFields {
    AssessmentFields::new()
        .with("systolic", systolic)
        .with("diastolic", diastolic)
}
