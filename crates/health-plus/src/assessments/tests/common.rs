use crate::assessments::catalogue::spec;
use crate::assessments::fields::AssessmentFields;
use crate::assessments::key::AssessmentKey;

pub(super) fn fields(pairs: &[(&str, &str)]) -> AssessmentFields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Every field of the assessment's schema filled with its documented example.
pub(super) fn example_fields(key: AssessmentKey) -> AssessmentFields {
    spec(key)
        .fields
        .iter()
        .map(|field| (field.name, field.example))
        .collect()
}

pub(super) fn without(fields: &AssessmentFields, removed: &str) -> AssessmentFields {
    fields
        .iter()
        .filter(|(name, _)| *name != removed)
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
