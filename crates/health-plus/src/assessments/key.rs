use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::AssessmentError;

/// Closed set of supported assessments, in the order results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKey {
    Bmi,
    Cardiovascular,
    StrokeRisk,
    Metabolic,
    Respiratory,
    Fitness,
    BodyComposition,
    Posture,
    MentalHealth,
    Temperature,
    GripStrength,
    Lifestyle,
    Vision,
    Hearing,
    Prostate,
    Hiv,
    Pregnancy,
    BreastCancer,
    Tuberculosis,
    Covid19,
    Malaria,
    LiverProblem,
    HepatitisB,
    Diabetes,
    Hydration,
}

impl AssessmentKey {
    pub const ALL: [AssessmentKey; 25] = [
        AssessmentKey::Bmi,
        AssessmentKey::Cardiovascular,
        AssessmentKey::StrokeRisk,
        AssessmentKey::Metabolic,
        AssessmentKey::Respiratory,
        AssessmentKey::Fitness,
        AssessmentKey::BodyComposition,
        AssessmentKey::Posture,
        AssessmentKey::MentalHealth,
        AssessmentKey::Temperature,
        AssessmentKey::GripStrength,
        AssessmentKey::Lifestyle,
        AssessmentKey::Vision,
        AssessmentKey::Hearing,
        AssessmentKey::Prostate,
        AssessmentKey::Hiv,
        AssessmentKey::Pregnancy,
        AssessmentKey::BreastCancer,
        AssessmentKey::Tuberculosis,
        AssessmentKey::Covid19,
        AssessmentKey::Malaria,
        AssessmentKey::LiverProblem,
        AssessmentKey::HepatitisB,
        AssessmentKey::Diabetes,
        AssessmentKey::Hydration,
    ];

    /// Slug used on the wire and in form routes (e.g. `stroke-risk`).
    pub fn slug(self) -> &'static str {
        match self {
            AssessmentKey::Bmi => "bmi",
            AssessmentKey::Cardiovascular => "cardiovascular",
            AssessmentKey::StrokeRisk => "stroke-risk",
            AssessmentKey::Metabolic => "metabolic",
            AssessmentKey::Respiratory => "respiratory",
            AssessmentKey::Fitness => "fitness",
            AssessmentKey::BodyComposition => "body-composition",
            AssessmentKey::Posture => "posture",
            AssessmentKey::MentalHealth => "mental-health",
            AssessmentKey::Temperature => "temperature",
            AssessmentKey::GripStrength => "grip-strength",
            AssessmentKey::Lifestyle => "lifestyle",
            AssessmentKey::Vision => "vision",
            AssessmentKey::Hearing => "hearing",
            AssessmentKey::Prostate => "prostate",
            AssessmentKey::Hiv => "hiv",
            AssessmentKey::Pregnancy => "pregnancy",
            AssessmentKey::BreastCancer => "breast-cancer",
            AssessmentKey::Tuberculosis => "tuberculosis",
            AssessmentKey::Covid19 => "covid19",
            AssessmentKey::Malaria => "malaria",
            AssessmentKey::LiverProblem => "liver-problem",
            AssessmentKey::HepatitisB => "hepatitis-b",
            AssessmentKey::Diabetes => "diabetes",
            AssessmentKey::Hydration => "hydration",
        }
    }

    /// Human-readable title for listings and report headings.
    pub fn title(self) -> &'static str {
        match self {
            AssessmentKey::Bmi => "Body Mass Index",
            AssessmentKey::Cardiovascular => "Cardiovascular Health",
            AssessmentKey::StrokeRisk => "Stroke Risk",
            AssessmentKey::Metabolic => "Metabolic Health",
            AssessmentKey::Respiratory => "Respiratory Health",
            AssessmentKey::Fitness => "Physical Fitness",
            AssessmentKey::BodyComposition => "Body Composition",
            AssessmentKey::Posture => "Posture & Balance",
            AssessmentKey::MentalHealth => "Mental Health (PHQ-9)",
            AssessmentKey::Temperature => "Body Temperature",
            AssessmentKey::GripStrength => "Grip Strength",
            AssessmentKey::Lifestyle => "Lifestyle Risk",
            AssessmentKey::Vision => "Vision Screening",
            AssessmentKey::Hearing => "Hearing Screening",
            AssessmentKey::Prostate => "Prostate Health",
            AssessmentKey::Hiv => "HIV Risk",
            AssessmentKey::Pregnancy => "Pregnancy Check",
            AssessmentKey::BreastCancer => "Breast Cancer Risk",
            AssessmentKey::Tuberculosis => "Tuberculosis Screening",
            AssessmentKey::Covid19 => "COVID-19 Screening",
            AssessmentKey::Malaria => "Malaria Screening",
            AssessmentKey::LiverProblem => "Liver Health",
            AssessmentKey::HepatitisB => "Hepatitis B Risk",
            AssessmentKey::Diabetes => "Diabetes Risk",
            AssessmentKey::Hydration => "Hydration Status",
        }
    }
}

impl fmt::Display for AssessmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AssessmentKey {
    type Err = AssessmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        AssessmentKey::ALL
            .into_iter()
            .find(|key| key.slug() == normalized)
            .ok_or_else(|| AssessmentError::UnknownAssessment(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for key in AssessmentKey::ALL {
            assert_eq!(key.slug().parse::<AssessmentKey>().expect("known slug"), key);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        let key: AssessmentKey = " Stroke-Risk ".parse().expect("slug parses");
        assert_eq!(key, AssessmentKey::StrokeRisk);
    }

    #[test]
    fn unknown_slug_is_rejected() {
        match "blood-sugar".parse::<AssessmentKey>() {
            Err(AssessmentError::UnknownAssessment(raw)) => assert_eq!(raw, "blood-sugar"),
            other => panic!("expected unknown assessment, got {other:?}"),
        }
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&AssessmentKey::HepatitisB).expect("serializes");
        assert_eq!(json, "\"hepatitis-b\"");
        let key: AssessmentKey = serde_json::from_str("\"covid19\"").expect("deserializes");
        assert_eq!(key, AssessmentKey::Covid19);
    }
}
