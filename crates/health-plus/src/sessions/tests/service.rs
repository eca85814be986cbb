use std::sync::Arc;

use chrono::Utc;

use super::common::*;
use crate::assessments::{AssessmentError, AssessmentFields, AssessmentKey};
use crate::sessions::service::{AssessmentSessionService, SessionServiceError};
use crate::sessions::store::{ResultStore, StoreError};

#[test]
fn submit_stores_result_with_timestamp_and_report() {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentSessionService::new(store.clone());
    let session = session("alice");

    let before = Utc::now();
    let entry = service
        .submit(&session, "cardiovascular", &blood_pressure("135", "85"))
        .expect("submission succeeds");

    assert_eq!(entry.key, AssessmentKey::Cardiovascular);
    assert!(entry.recorded_at >= before);
    assert!(entry
        .report
        .as_deref()
        .is_some_and(|report| report.starts_with("Cardiovascular Health")));

    let stored = store
        .get(&session, AssessmentKey::Cardiovascular)
        .expect("store reachable")
        .expect("entry present");
    assert_eq!(stored, entry);
}

#[test]
fn resubmission_replaces_the_previous_entry() {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentSessionService::new(store.clone());
    let session = session("bob");

    service
        .submit(&session, "cardiovascular", &blood_pressure("145", "95"))
        .expect("first submission");
    service
        .submit(&session, "cardiovascular", &blood_pressure("115", "75"))
        .expect("second submission");

    let entries = store.list(&session).expect("store reachable");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].result.classification(), "Normal");
}

#[test]
fn failed_submission_leaves_session_untouched() {
    let store = Arc::new(MemoryStore::default());
    let service = AssessmentSessionService::new(store.clone());
    let session = session("carol");
    service.load_sample(&session).expect("sample loads");

    match service.submit(&session, "cardiovascular", &AssessmentFields::new()) {
        Err(SessionServiceError::Assessment(AssessmentError::MissingField {
            field: "systolic",
            ..
        })) => {}
        other => panic!("expected missing field, got {other:?}"),
    }

    assert!(store.is_sample(&session).expect("store reachable"));
    assert_eq!(
        store.list(&session).expect("store reachable").len(),
        AssessmentKey::ALL.len()
    );
}

#[test]
fn unknown_assessment_is_reported() {
    let service = AssessmentSessionService::new(Arc::new(MemoryStore::default()));
    match service.submit(&session("dave"), "blood-sugar", &AssessmentFields::new()) {
        Err(SessionServiceError::Assessment(AssessmentError::UnknownAssessment(key))) => {
            assert_eq!(key, "blood-sugar")
        }
        other => panic!("expected unknown assessment, got {other:?}"),
    }
}

#[test]
fn overview_lists_every_assessment_in_order() {
    let service = AssessmentSessionService::new(Arc::new(MemoryStore::default()));
    let session = session("erin");
    service
        .submit(
            &session,
            "respiratory",
            &AssessmentFields::new().with("spo2", 97),
        )
        .expect("submission succeeds");

    let overview = service.overview(&session).expect("overview");
    assert_eq!(overview.entries.len(), AssessmentKey::ALL.len());
    assert_eq!(overview.completed(), 1);
    assert!(!overview.sample);

    let keys: Vec<AssessmentKey> = overview.entries.iter().map(|entry| entry.key).collect();
    assert_eq!(keys, AssessmentKey::ALL.to_vec());

    let respiratory = &overview.entries[4];
    assert_eq!(respiratory.key, AssessmentKey::Respiratory);
    assert!(respiratory.stored.is_some());
    assert!(overview.entries[0].stored.is_none());
}

#[test]
fn sample_mode_ends_on_real_submission() {
    let service = AssessmentSessionService::new(Arc::new(MemoryStore::default()));
    let session = session("frank");

    let loaded = service.load_sample(&session).expect("sample loads");
    assert_eq!(loaded, AssessmentKey::ALL.len());

    let overview = service.overview(&session).expect("overview");
    assert!(overview.sample);
    assert_eq!(overview.completed(), AssessmentKey::ALL.len());

    service
        .submit(&session, "cardiovascular", &blood_pressure("118", "76"))
        .expect("submission succeeds");
    let overview = service.overview(&session).expect("overview");
    assert!(!overview.sample);
    assert_eq!(overview.completed(), AssessmentKey::ALL.len());
}

#[test]
fn clear_drops_results_and_sample_flag() {
    let service = AssessmentSessionService::new(Arc::new(MemoryStore::default()));
    let session = session("grace");
    service.load_sample(&session).expect("sample loads");

    service.clear(&session).expect("clear succeeds");

    let overview = service.overview(&session).expect("overview");
    assert_eq!(overview.completed(), 0);
    assert!(!overview.sample);
}

#[test]
fn sessions_are_isolated() {
    let service = AssessmentSessionService::new(Arc::new(MemoryStore::default()));
    service.load_sample(&session("heidi")).expect("sample loads");

    let other = service.overview(&session("ivan")).expect("overview");
    assert_eq!(other.completed(), 0);
    assert!(!other.sample);
}

#[test]
fn store_failures_propagate() {
    let service = AssessmentSessionService::new(Arc::new(OfflineStore));
    match service.submit(&session("judy"), "cardiovascular", &blood_pressure("120", "80")) {
        Err(SessionServiceError::Store(StoreError::Unavailable(reason))) => {
            assert_eq!(reason, "offline")
        }
        other => panic!("expected store error, got {other:?}"),
    }
    assert!(matches!(
        service.overview(&session("judy")),
        Err(SessionServiceError::Store(_))
    ));
}

#[test]
fn failed_store_write_keeps_sample_mode() {
    let service = AssessmentSessionService::new(Arc::new(FrozenStore::default()));
    let session = session("mallory");
    service.load_sample(&session).expect("sample loads");

    match service.submit(&session, "cardiovascular", &blood_pressure("150", "95")) {
        Err(SessionServiceError::Store(StoreError::Unavailable(reason))) => {
            assert_eq!(reason, "frozen")
        }
        other => panic!("expected store error, got {other:?}"),
    }

    let overview = service.overview(&session).expect("overview");
    assert!(overview.sample);
    assert_eq!(overview.completed(), AssessmentKey::ALL.len());
}
