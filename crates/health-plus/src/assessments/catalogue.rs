//! Input schemas for every assessment, used by form builders and the CLI.

use serde::Serialize;

use super::key::AssessmentKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    /// Yes/no answer; an absent value reads as "no".
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "default")]
pub enum FieldRequirement {
    Required,
    /// Absent or blank values fall back to the documented default.
    Optional(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub requirement: FieldRequirement,
    pub description: &'static str,
    /// A value that passes coercion, for prompts and smoke checks.
    pub example: &'static str,
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.requirement == FieldRequirement::Required
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssessmentSpec {
    pub key: AssessmentKey,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn required(
    name: &'static str,
    kind: FieldKind,
    description: &'static str,
    example: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        requirement: FieldRequirement::Required,
        description,
        example,
    }
}

const fn optional(
    name: &'static str,
    kind: FieldKind,
    default: &'static str,
    description: &'static str,
    example: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        requirement: FieldRequirement::Optional(default),
        description,
        example,
    }
}

const fn flag(name: &'static str, description: &'static str) -> FieldSpec {
    optional(name, FieldKind::Flag, "no", description, "yes")
}

const BMI: &[FieldSpec] = &[
    required("weight", FieldKind::Float, "Body weight in kilograms", "75"),
    required("height", FieldKind::Float, "Height in centimetres", "175"),
];

const CARDIOVASCULAR: &[FieldSpec] = &[
    required("systolic", FieldKind::Integer, "Systolic blood pressure (mmHg)", "118"),
    required("diastolic", FieldKind::Integer, "Diastolic blood pressure (mmHg)", "76"),
];

const STROKE_RISK: &[FieldSpec] = &[
    required("age", FieldKind::Integer, "Age in years", "58"),
    required("systolic", FieldKind::Integer, "Systolic blood pressure (mmHg)", "132"),
    flag("smoking", "Currently smokes"),
    flag("diabetes", "Diagnosed with diabetes"),
    flag("heart_disease", "Diagnosed heart disease or atrial fibrillation"),
];

const METABOLIC: &[FieldSpec] = &[
    required("waist", FieldKind::Float, "Waist circumference in centimetres", "90"),
    required("gender", FieldKind::Text, "male or female", "female"),
    required("systolic", FieldKind::Integer, "Systolic blood pressure (mmHg)", "125"),
];

const RESPIRATORY: &[FieldSpec] = &[required(
    "spo2",
    FieldKind::Integer,
    "Blood oxygen saturation (%)",
    "97",
)];

const FITNESS: &[FieldSpec] = &[
    required("resting_hr", FieldKind::Integer, "Resting heart rate (bpm)", "68"),
    required("age", FieldKind::Integer, "Age in years", "35"),
];

const BODY_COMPOSITION: &[FieldSpec] = &[
    required("bf_percentage", FieldKind::Float, "Body fat percentage from a BIA scale", "22"),
    required("gender", FieldKind::Text, "male or female", "male"),
    required("age", FieldKind::Integer, "Age in years", "35"),
];

const POSTURE: &[FieldSpec] = &[
    required("alignment", FieldKind::Integer, "Wall-alignment self score (0-5)", "4"),
    required("balance", FieldKind::Integer, "Single-leg balance self score (0-5)", "3"),
];

const MENTAL_HEALTH: &[FieldSpec] = &[
    required("q1", FieldKind::Integer, "Little interest or pleasure in doing things (0-3)", "1"),
    required("q2", FieldKind::Integer, "Feeling down, depressed, or hopeless (0-3)", "1"),
    required("q3", FieldKind::Integer, "Trouble sleeping, or sleeping too much (0-3)", "1"),
    required("q4", FieldKind::Integer, "Feeling tired or having little energy (0-3)", "1"),
    required("q5", FieldKind::Integer, "Poor appetite or overeating (0-3)", "0"),
    required("q6", FieldKind::Integer, "Feeling bad about yourself (0-3)", "0"),
    required("q7", FieldKind::Integer, "Trouble concentrating (0-3)", "1"),
    required("q8", FieldKind::Integer, "Moving or speaking slowly, or being restless (0-3)", "0"),
    required("q9", FieldKind::Integer, "Thoughts of self-harm (0-3)", "0"),
];

const TEMPERATURE: &[FieldSpec] = &[required(
    "temperature",
    FieldKind::Float,
    "Body temperature in degrees Celsius",
    "36.8",
)];

const GRIP_STRENGTH: &[FieldSpec] = &[
    required("grip_strength", FieldKind::Float, "Dynamometer grip strength (kg)", "42"),
    required("gender", FieldKind::Text, "male or female", "male"),
    required("age", FieldKind::Integer, "Age in years", "35"),
];

const LIFESTYLE: &[FieldSpec] = &[
    required("smoking_status", FieldKind::Text, "never, former or current", "never"),
    optional(
        "physical_activity",
        FieldKind::Integer,
        "0",
        "Minutes of moderate activity per week",
        "180",
    ),
];

const VISION: &[FieldSpec] = &[required(
    "acuity",
    FieldKind::Float,
    "Snellen denominator read at 20 feet (20 for 20/20)",
    "20",
)];

const HEARING: &[FieldSpec] = &[
    optional("freq_250", FieldKind::Integer, "0", "Threshold at 250 Hz (dB HL)", "15"),
    optional("freq_500", FieldKind::Integer, "0", "Threshold at 500 Hz (dB HL)", "18"),
    optional("freq_1000", FieldKind::Integer, "0", "Threshold at 1000 Hz (dB HL)", "20"),
    optional("freq_2000", FieldKind::Integer, "0", "Threshold at 2000 Hz (dB HL)", "22"),
    optional("freq_4000", FieldKind::Integer, "0", "Threshold at 4000 Hz (dB HL)", "25"),
];

const PROSTATE: &[FieldSpec] = &[
    required("age", FieldKind::Integer, "Age in years", "55"),
    required(
        "family_history",
        FieldKind::Text,
        "Relatives diagnosed with prostate cancer: none, one or multiple",
        "none",
    ),
    flag("african_ancestry", "African or Caribbean ancestry"),
    flag("urinary_symptoms", "Frequent or weak urination"),
    optional(
        "psa_level",
        FieldKind::Float,
        "not tested",
        "Most recent PSA level (ng/mL)",
        "1.8",
    ),
];

const HIV: &[FieldSpec] = &[
    flag("unprotected_sex", "Unprotected sex in the last six months"),
    flag("multiple_partners", "More than one sexual partner in the last six months"),
    flag("shared_needles", "Shared needles or injection equipment"),
    flag("sti_history", "Diagnosed with another sexually transmitted infection"),
    flag("partner_positive", "Partner living with HIV or of unknown status"),
    flag("symptoms", "Unexplained fever, rash or swollen glands"),
];

const BREAST_CANCER: &[FieldSpec] = &[
    required("age", FieldKind::Integer, "Age in years", "45"),
    required(
        "family_history",
        FieldKind::Text,
        "Closest relative with breast cancer: none, second_degree or first_degree",
        "none",
    ),
    flag("brca_mutation", "Known BRCA1 or BRCA2 mutation"),
    flag("previous_biopsy", "Previous breast biopsy"),
    flag("early_menstruation", "First period before age 12"),
    flag("breast_changes", "New lump, skin dimpling or nipple discharge"),
];

const TUBERCULOSIS: &[FieldSpec] = &[
    flag("persistent_cough", "Cough lasting three weeks or more"),
    flag("coughing_blood", "Coughing up blood"),
    flag("night_sweats", "Drenching night sweats"),
    flag("weight_loss", "Unexplained weight loss"),
    flag("fever", "Recurring fever"),
    flag("tb_contact", "Close contact with someone with tuberculosis"),
    flag("weakened_immunity", "HIV, diabetes or immunosuppressive treatment"),
];

const COVID19: &[FieldSpec] = &[
    flag("fever", "Fever or chills"),
    flag("dry_cough", "New continuous dry cough"),
    flag("loss_of_taste_smell", "Loss of taste or smell"),
    flag("breathing_difficulty", "Shortness of breath"),
    flag("fatigue", "Unusual tiredness"),
    flag("known_contact", "Contact with a confirmed case in the last 14 days"),
];

const MALARIA: &[FieldSpec] = &[
    flag("fever", "Fever in the last 48 hours"),
    flag("chills", "Shaking chills"),
    flag("headache", "Headache"),
    flag("sweating", "Heavy sweating"),
    flag("nausea", "Nausea or vomiting"),
    flag("endemic_travel", "Lives in or recently travelled to a malaria area"),
];

const LIVER_PROBLEM: &[FieldSpec] = &[
    optional(
        "alcohol_units",
        FieldKind::Integer,
        "0",
        "Units of alcohol per week",
        "6",
    ),
    flag("jaundice", "Yellowing of the skin or eyes"),
    flag("abdominal_pain", "Pain in the upper right abdomen"),
    flag("dark_urine", "Dark urine or pale stools"),
    flag("fatigue", "Persistent tiredness"),
    flag("hepatitis_history", "Previous hepatitis infection"),
];

const HEPATITIS_B: &[FieldSpec] = &[
    flag("unvaccinated", "Not vaccinated against hepatitis B"),
    flag("household_contact", "Lives with someone who has hepatitis B"),
    flag("unprotected_sex", "Unprotected sex with a new partner"),
    flag("shared_needles", "Shared needles, razors or toothbrushes"),
    flag("needlestick_exposure", "Needlestick or blood exposure at work"),
    flag("jaundice", "Yellowing of the skin or eyes"),
];

const DIABETES: &[FieldSpec] = &[
    required("age", FieldKind::Integer, "Age in years", "40"),
    required("bmi", FieldKind::Float, "Body mass index", "24.5"),
    flag("family_history", "Parent or sibling with diabetes"),
    flag("physically_inactive", "Less than 150 minutes of activity per week"),
    flag("high_blood_pressure", "Diagnosed high blood pressure"),
    flag("gestational_diabetes", "Diabetes during a previous pregnancy"),
    flag("excessive_thirst", "Unusual thirst or frequent urination"),
];

const PREGNANCY: &[FieldSpec] = &[
    required("weeks", FieldKind::Integer, "Weeks since the last menstrual period", "20"),
    required("systolic", FieldKind::Integer, "Systolic blood pressure (mmHg)", "115"),
    required("diastolic", FieldKind::Integer, "Diastolic blood pressure (mmHg)", "75"),
    flag("symptoms", "Bleeding, severe headache, blurred vision or swelling"),
    flag("previous_complications", "Complications in a previous pregnancy"),
];

const HYDRATION: &[FieldSpec] = &[
    required("water_intake", FieldKind::Float, "Litres of fluid per day", "2"),
    required("urine_color", FieldKind::Text, "pale, light, yellow or dark", "light"),
    flag("thirsty", "Feeling thirsty most of the day"),
    flag("dizziness", "Dizziness or headache"),
    flag("hot_climate", "Hot weather or heated workplace"),
    optional(
        "exercise_minutes",
        FieldKind::Integer,
        "0",
        "Minutes of exercise today",
        "30",
    ),
];

/// Schema and title for one assessment.
pub fn spec(key: AssessmentKey) -> AssessmentSpec {
    let fields = match key {
        AssessmentKey::Bmi => BMI,
        AssessmentKey::Cardiovascular => CARDIOVASCULAR,
        AssessmentKey::StrokeRisk => STROKE_RISK,
        AssessmentKey::Metabolic => METABOLIC,
        AssessmentKey::Respiratory => RESPIRATORY,
        AssessmentKey::Fitness => FITNESS,
        AssessmentKey::BodyComposition => BODY_COMPOSITION,
        AssessmentKey::Posture => POSTURE,
        AssessmentKey::MentalHealth => MENTAL_HEALTH,
        AssessmentKey::Temperature => TEMPERATURE,
        AssessmentKey::GripStrength => GRIP_STRENGTH,
        AssessmentKey::Lifestyle => LIFESTYLE,
        AssessmentKey::Vision => VISION,
        AssessmentKey::Hearing => HEARING,
        AssessmentKey::Prostate => PROSTATE,
        AssessmentKey::Hiv => HIV,
        AssessmentKey::Pregnancy => PREGNANCY,
        AssessmentKey::BreastCancer => BREAST_CANCER,
        AssessmentKey::Tuberculosis => TUBERCULOSIS,
        AssessmentKey::Covid19 => COVID19,
        AssessmentKey::Malaria => MALARIA,
        AssessmentKey::LiverProblem => LIVER_PROBLEM,
        AssessmentKey::HepatitisB => HEPATITIS_B,
        AssessmentKey::Diabetes => DIABETES,
        AssessmentKey::Hydration => HYDRATION,
    };

    AssessmentSpec {
        key,
        title: key.title(),
        fields,
    }
}

/// Every assessment in presentation order.
pub fn catalogue() -> Vec<AssessmentSpec> {
    AssessmentKey::ALL.into_iter().map(spec).collect()
}
