use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::AssessmentKey;

/// Declares a classification vocabulary whose serialized form is its display label.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum! {
    /// Shared risk vocabulary, declared from least to most severe.
    RiskLevel {
        Low => "Low",
        Moderate => "Moderate",
        Medium => "Medium",
        MediumHigh => "Medium-High",
        High => "High",
    }
}

labelled_enum! {
    BmiCategory {
        Underweight => "Underweight",
        NormalWeight => "Normal weight",
        Overweight => "Overweight",
        Obese => "Obese",
    }
}

labelled_enum! {
    BloodPressureStatus {
        Normal => "Normal",
        Elevated => "Elevated",
        Stage1Hypertension => "Stage 1 Hypertension",
        Stage2Hypertension => "Stage 2 Hypertension",
    }
}

labelled_enum! {
    MetabolicStatus {
        Healthy => "Healthy",
        AtRisk => "At Risk",
        MetabolicSyndromeRisk => "Metabolic Syndrome Risk",
    }
}

labelled_enum! {
    RespiratoryStatus {
        Normal => "Normal",
        MildHypoxemia => "Mild Hypoxemia",
        SevereHypoxemia => "Severe Hypoxemia - Seek Medical Attention",
    }
}

labelled_enum! {
    FitnessStatus {
        AthleteLevel => "Athlete Level",
        Excellent => "Excellent",
        Good => "Good",
        Average => "Average",
        BelowAverage => "Below Average",
    }
}

labelled_enum! {
    BodyCompositionStatus {
        EssentialFat => "Essential Fat",
        Athletes => "Athletes",
        Fitness => "Fitness",
        Average => "Average",
        Obese => "Obese",
    }
}

labelled_enum! {
    PostureStatus {
        Excellent => "Excellent Posture",
        Good => "Good Posture",
        Fair => "Fair - Needs Improvement",
        Poor => "Poor - Consult Professional",
    }
}

labelled_enum! {
    /// PHQ-9 severity bands.
    DepressionSeverity {
        MinimalOrNone => "Minimal or None",
        Mild => "Mild",
        Moderate => "Moderate",
        ModeratelySevere => "Moderately Severe",
        Severe => "Severe",
    }
}

labelled_enum! {
    TemperatureStatus {
        Normal => "Normal",
        HypothermiaRisk => "Hypothermia Risk",
        LowGradeFever => "Low-Grade Fever",
        Fever => "Fever - Seek Medical Attention",
    }
}

labelled_enum! {
    GripStrengthStatus {
        Excellent => "Excellent",
        Good => "Good",
        Average => "Average",
        BelowAverage => "Below Average",
    }
}

labelled_enum! {
    LifestyleStatus {
        LowRisk => "Low Risk Lifestyle",
        ModerateRisk => "Moderate Risk Lifestyle",
        HighRisk => "High Risk Lifestyle",
    }
}

labelled_enum! {
    VisionStatus {
        Normal => "Normal Vision (20/20)",
        MildImpairment => "Mild Vision Impairment",
        ModerateImpairment => "Moderate Vision Impairment",
        SevereImpairment => "Severe Vision Impairment - Consult Eye Care Professional",
    }
}

labelled_enum! {
    HearingStatus {
        Normal => "Normal Hearing",
        MildLoss => "Mild Hearing Loss",
        ModerateLoss => "Moderate Hearing Loss",
        SignificantLoss => "Significant Hearing Loss - Consult Audiologist",
    }
}

labelled_enum! {
    Trimester {
        First => "First Trimester",
        Second => "Second Trimester",
        Third => "Third Trimester",
    }
}

labelled_enum! {
    PregnancyStatus {
        Normal => "Normal",
        MonitorBloodPressure => "Monitor Blood Pressure",
    }
}

labelled_enum! {
    HydrationStatus {
        WellHydrated => "Well Hydrated",
        MildlyDehydrated => "Mildly Dehydrated",
        Dehydrated => "Dehydrated",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardiovascularResult {
    pub status: BloodPressureStatus,
    pub risk: RiskLevel,
}

/// Outcome of an additive weighted risk screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub risk_score: i32,
    pub risk: RiskLevel,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetabolicResult {
    pub factors: u8,
    pub status: MetabolicStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespiratoryResult {
    pub status: RespiratoryStatus,
    pub spo2: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessResult {
    pub status: FitnessStatus,
    /// Resting rate as a share of the age-predicted maximum, e.g. `"37% of max"`.
    pub hr_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionResult {
    pub status: BodyCompositionStatus,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureResult {
    pub status: PostureStatus,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalHealthResult {
    pub severity: DepressionSeverity,
    pub score: i64,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResult {
    pub status: TemperatureStatus,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GripStrengthResult {
    pub status: GripStrengthStatus,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleResult {
    pub status: LifestyleStatus,
    pub risk_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionResult {
    pub status: VisionStatus,
    /// Snellen notation, e.g. `"20/40"`.
    pub acuity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingResult {
    pub status: HearingStatus,
    pub normal_frequencies: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyResult {
    pub trimester: Trimester,
    pub weeks: i32,
    pub status: PregnancyStatus,
    pub risk: RiskLevel,
    pub risk_factors: i32,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationResult {
    pub status: HydrationStatus,
    pub hydration_score: i32,
    pub recommendation: String,
}

/// Result of one assessment, tagged by the assessment that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assessment", rename_all = "kebab-case")]
pub enum AssessmentResult {
    Bmi(BmiResult),
    Cardiovascular(CardiovascularResult),
    StrokeRisk(ScreeningOutcome),
    Metabolic(MetabolicResult),
    Respiratory(RespiratoryResult),
    Fitness(FitnessResult),
    BodyComposition(BodyCompositionResult),
    Posture(PostureResult),
    MentalHealth(MentalHealthResult),
    Temperature(TemperatureResult),
    GripStrength(GripStrengthResult),
    Lifestyle(LifestyleResult),
    Vision(VisionResult),
    Hearing(HearingResult),
    Prostate(ScreeningOutcome),
    Hiv(ScreeningOutcome),
    Pregnancy(PregnancyResult),
    BreastCancer(ScreeningOutcome),
    Tuberculosis(ScreeningOutcome),
    Covid19(ScreeningOutcome),
    Malaria(ScreeningOutcome),
    LiverProblem(ScreeningOutcome),
    HepatitisB(ScreeningOutcome),
    Diabetes(ScreeningOutcome),
    Hydration(HydrationResult),
}

impl AssessmentResult {
    pub fn key(&self) -> AssessmentKey {
        match self {
            AssessmentResult::Bmi(_) => AssessmentKey::Bmi,
            AssessmentResult::Cardiovascular(_) => AssessmentKey::Cardiovascular,
            AssessmentResult::StrokeRisk(_) => AssessmentKey::StrokeRisk,
            AssessmentResult::Metabolic(_) => AssessmentKey::Metabolic,
            AssessmentResult::Respiratory(_) => AssessmentKey::Respiratory,
            AssessmentResult::Fitness(_) => AssessmentKey::Fitness,
            AssessmentResult::BodyComposition(_) => AssessmentKey::BodyComposition,
            AssessmentResult::Posture(_) => AssessmentKey::Posture,
            AssessmentResult::MentalHealth(_) => AssessmentKey::MentalHealth,
            AssessmentResult::Temperature(_) => AssessmentKey::Temperature,
            AssessmentResult::GripStrength(_) => AssessmentKey::GripStrength,
            AssessmentResult::Lifestyle(_) => AssessmentKey::Lifestyle,
            AssessmentResult::Vision(_) => AssessmentKey::Vision,
            AssessmentResult::Hearing(_) => AssessmentKey::Hearing,
            AssessmentResult::Prostate(_) => AssessmentKey::Prostate,
            AssessmentResult::Hiv(_) => AssessmentKey::Hiv,
            AssessmentResult::Pregnancy(_) => AssessmentKey::Pregnancy,
            AssessmentResult::BreastCancer(_) => AssessmentKey::BreastCancer,
            AssessmentResult::Tuberculosis(_) => AssessmentKey::Tuberculosis,
            AssessmentResult::Covid19(_) => AssessmentKey::Covid19,
            AssessmentResult::Malaria(_) => AssessmentKey::Malaria,
            AssessmentResult::LiverProblem(_) => AssessmentKey::LiverProblem,
            AssessmentResult::HepatitisB(_) => AssessmentKey::HepatitisB,
            AssessmentResult::Diabetes(_) => AssessmentKey::Diabetes,
            AssessmentResult::Hydration(_) => AssessmentKey::Hydration,
        }
    }

    /// Primary classification label (category, status, severity or risk).
    pub fn classification(&self) -> &'static str {
        match self {
            AssessmentResult::Bmi(result) => result.category.label(),
            AssessmentResult::Cardiovascular(result) => result.status.label(),
            AssessmentResult::Metabolic(result) => result.status.label(),
            AssessmentResult::Respiratory(result) => result.status.label(),
            AssessmentResult::Fitness(result) => result.status.label(),
            AssessmentResult::BodyComposition(result) => result.status.label(),
            AssessmentResult::Posture(result) => result.status.label(),
            AssessmentResult::MentalHealth(result) => result.severity.label(),
            AssessmentResult::Temperature(result) => result.status.label(),
            AssessmentResult::GripStrength(result) => result.status.label(),
            AssessmentResult::Lifestyle(result) => result.status.label(),
            AssessmentResult::Vision(result) => result.status.label(),
            AssessmentResult::Hearing(result) => result.status.label(),
            AssessmentResult::Pregnancy(result) => result.risk.label(),
            AssessmentResult::Hydration(result) => result.status.label(),
            AssessmentResult::StrokeRisk(outcome)
            | AssessmentResult::Prostate(outcome)
            | AssessmentResult::Hiv(outcome)
            | AssessmentResult::BreastCancer(outcome)
            | AssessmentResult::Tuberculosis(outcome)
            | AssessmentResult::Covid19(outcome)
            | AssessmentResult::Malaria(outcome)
            | AssessmentResult::LiverProblem(outcome)
            | AssessmentResult::HepatitisB(outcome)
            | AssessmentResult::Diabetes(outcome) => outcome.risk.label(),
        }
    }

    pub fn recommendation(&self) -> Option<&str> {
        match self {
            AssessmentResult::MentalHealth(result) => Some(&result.recommendation),
            AssessmentResult::Pregnancy(result) => Some(&result.recommendation),
            AssessmentResult::Hydration(result) => Some(&result.recommendation),
            other => other.screening().map(|outcome| outcome.recommendation.as_str()),
        }
    }

    /// The additive screening outcome, for the assessments that produce one.
    pub fn screening(&self) -> Option<&ScreeningOutcome> {
        match self {
            AssessmentResult::StrokeRisk(outcome)
            | AssessmentResult::Prostate(outcome)
            | AssessmentResult::Hiv(outcome)
            | AssessmentResult::BreastCancer(outcome)
            | AssessmentResult::Tuberculosis(outcome)
            | AssessmentResult::Covid19(outcome)
            | AssessmentResult::Malaria(outcome)
            | AssessmentResult::LiverProblem(outcome)
            | AssessmentResult::HepatitisB(outcome)
            | AssessmentResult::Diabetes(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Medium < RiskLevel::MediumHigh);
        assert!(RiskLevel::MediumHigh < RiskLevel::High);
    }

    #[test]
    fn results_serialize_with_assessment_tag_and_labels() {
        let result = AssessmentResult::Cardiovascular(CardiovascularResult {
            status: BloodPressureStatus::Stage1Hypertension,
            risk: RiskLevel::MediumHigh,
        });

        let value = serde_json::to_value(&result).expect("serializes");
        assert_eq!(value["assessment"], "cardiovascular");
        assert_eq!(value["status"], "Stage 1 Hypertension");
        assert_eq!(value["risk"], "Medium-High");

        let decoded: AssessmentResult = serde_json::from_value(value).expect("deserializes");
        assert_eq!(decoded, result);
    }

    #[test]
    fn screening_results_expose_recommendation() {
        let result = AssessmentResult::Malaria(ScreeningOutcome {
            risk_score: 8,
            risk: RiskLevel::High,
            recommendation: "Get tested".to_string(),
        });
        assert_eq!(result.key(), AssessmentKey::Malaria);
        assert_eq!(result.classification(), "High");
        assert_eq!(result.recommendation(), Some("Get tested"));

        let bmi = AssessmentResult::Bmi(BmiResult {
            value: 22.0,
            category: BmiCategory::NormalWeight,
        });
        assert_eq!(bmi.recommendation(), None);
    }
}
