//! Typed input records, one shape per assessment.
//!
//! Records are plain data. Numeric domains are not validated here: a negative
//! age scores however the threshold ladders treat it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Two-way split used by the sex-specific reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Other,
}

impl Sex {
    /// `male` in any case selects the male tables, everything else the other branch.
    pub fn from_label(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("male") {
            Sex::Male
        } else {
            Sex::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    Current,
    Former,
    Never,
}

impl SmokingStatus {
    /// Unrecognised answers count as never having smoked.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "current" => SmokingStatus::Current,
            "former" => SmokingStatus::Former,
            _ => SmokingStatus::Never,
        }
    }
}

/// Number of close relatives with a prostate cancer diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeCount {
    None,
    One,
    Multiple,
}

impl RelativeCount {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(RelativeCount::None),
            "one" => Some(RelativeCount::One),
            "multiple" => Some(RelativeCount::Multiple),
            _ => None,
        }
    }
}

/// Closest degree of relation with a breast cancer diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDegree {
    None,
    SecondDegree,
    FirstDegree,
}

impl RelativeDegree {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(RelativeDegree::None),
            "second_degree" | "second-degree" => Some(RelativeDegree::SecondDegree),
            "first_degree" | "first-degree" => Some(RelativeDegree::FirstDegree),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrineColor {
    Pale,
    Light,
    Yellow,
    Dark,
}

impl UrineColor {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pale" => Some(UrineColor::Pale),
            "light" => Some(UrineColor::Light),
            "yellow" => Some(UrineColor::Yellow),
            "dark" => Some(UrineColor::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_m: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressureInput {
    pub systolic: i32,
    pub diastolic: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeRiskInput {
    pub age: i32,
    pub systolic: i32,
    pub smoking: bool,
    pub diabetes: bool,
    pub heart_disease: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetabolicInput {
    pub waist_cm: f64,
    pub sex: Sex,
    pub systolic: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespiratoryInput {
    pub spo2: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessInput {
    pub resting_hr: i32,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionInput {
    pub body_fat_percentage: f64,
    pub sex: Sex,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureInput {
    pub alignment: i32,
    pub balance: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalHealthInput {
    /// Sum of the nine item answers.
    pub phq9_score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInput {
    pub celsius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GripStrengthInput {
    pub grip_kg: f64,
    pub sex: Sex,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleInput {
    pub smoking: SmokingStatus,
    pub activity_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionInput {
    /// Bottom number of the Snellen fraction (20 for 20/20, 40 for 20/40).
    pub acuity_denominator: f64,
}

/// Pure-tone thresholds in dB HL keyed by frequency label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingInput {
    pub thresholds: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProstateInput {
    pub age: i32,
    pub family_history: RelativeCount,
    pub african_ancestry: bool,
    pub urinary_symptoms: bool,
    /// ng/mL; `None` when no PSA test has been taken.
    pub psa_level: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HivInput {
    pub unprotected_sex: bool,
    pub multiple_partners: bool,
    pub shared_needles: bool,
    pub sti_history: bool,
    pub partner_positive: bool,
    pub symptoms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreastCancerInput {
    pub age: i32,
    pub family_history: RelativeDegree,
    pub brca_mutation: bool,
    pub previous_biopsy: bool,
    pub early_menstruation: bool,
    pub breast_changes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuberculosisInput {
    pub persistent_cough: bool,
    pub coughing_blood: bool,
    pub night_sweats: bool,
    pub weight_loss: bool,
    pub fever: bool,
    pub tb_contact: bool,
    pub weakened_immunity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Covid19Input {
    pub fever: bool,
    pub dry_cough: bool,
    pub loss_of_taste_smell: bool,
    pub breathing_difficulty: bool,
    pub fatigue: bool,
    pub known_contact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalariaInput {
    pub fever: bool,
    pub chills: bool,
    pub headache: bool,
    pub sweating: bool,
    pub nausea: bool,
    pub endemic_travel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiverProblemInput {
    pub alcohol_units_per_week: i32,
    pub jaundice: bool,
    pub abdominal_pain: bool,
    pub dark_urine: bool,
    pub fatigue: bool,
    pub hepatitis_history: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HepatitisBInput {
    pub unvaccinated: bool,
    pub household_contact: bool,
    pub unprotected_sex: bool,
    pub shared_needles: bool,
    pub needlestick_exposure: bool,
    pub jaundice: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiabetesInput {
    pub age: i32,
    pub bmi: f64,
    pub family_history: bool,
    pub physically_inactive: bool,
    pub high_blood_pressure: bool,
    pub gestational_diabetes: bool,
    pub excessive_thirst: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyInput {
    pub weeks: i32,
    pub systolic: i32,
    pub diastolic: i32,
    pub symptoms: bool,
    pub previous_complications: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationInput {
    pub water_litres: f64,
    pub urine_color: UrineColor,
    pub thirsty: bool,
    pub dizziness: bool,
    pub hot_climate: bool,
    pub exercise_minutes: i32,
}
