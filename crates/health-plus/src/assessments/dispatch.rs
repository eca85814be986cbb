use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::AssessmentError;
use super::fields::{AssessmentFields, FieldReader, FieldValue};
use super::inputs::{
    BloodPressureInput, BmiInput, BodyCompositionInput, BreastCancerInput, Covid19Input,
    DiabetesInput, FitnessInput, GripStrengthInput, HearingInput, HepatitisBInput, HivInput,
    HydrationInput, LifestyleInput, LiverProblemInput, MalariaInput, MentalHealthInput,
    MetabolicInput, PostureInput, PregnancyInput, ProstateInput, RelativeCount, RelativeDegree,
    RespiratoryInput, Sex, SmokingStatus, StrokeRiskInput, TemperatureInput, TuberculosisInput,
    UrineColor, VisionInput,
};
use super::key::AssessmentKey;
use super::outcome::AssessmentResult;
use super::rules;

const HEARING_FREQUENCIES: [(&str, &str); 5] = [
    ("freq_250", "250"),
    ("freq_500", "500"),
    ("freq_1000", "1000"),
    ("freq_2000", "2000"),
    ("freq_4000", "4000"),
];

const PHQ9_ITEMS: [&str; 9] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9"];

/// Validated input for one assessment, ready to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assessment", rename_all = "kebab-case")]
pub enum AssessmentInput {
    Bmi(BmiInput),
    Cardiovascular(BloodPressureInput),
    StrokeRisk(StrokeRiskInput),
    Metabolic(MetabolicInput),
    Respiratory(RespiratoryInput),
    Fitness(FitnessInput),
    BodyComposition(BodyCompositionInput),
    Posture(PostureInput),
    MentalHealth(MentalHealthInput),
    Temperature(TemperatureInput),
    GripStrength(GripStrengthInput),
    Lifestyle(LifestyleInput),
    Vision(VisionInput),
    Hearing(HearingInput),
    Prostate(ProstateInput),
    Hiv(HivInput),
    Pregnancy(PregnancyInput),
    BreastCancer(BreastCancerInput),
    Tuberculosis(TuberculosisInput),
    Covid19(Covid19Input),
    Malaria(MalariaInput),
    LiverProblem(LiverProblemInput),
    HepatitisB(HepatitisBInput),
    Diabetes(DiabetesInput),
    Hydration(HydrationInput),
}

impl AssessmentInput {
    /// Coerce raw field values into the record shape `key` expects.
    pub fn from_fields(
        key: AssessmentKey,
        fields: &AssessmentFields,
    ) -> Result<Self, AssessmentError> {
        let reader = FieldReader::new(key, fields);

        let input = match key {
            AssessmentKey::Bmi => {
                let weight_kg = reader.float("weight")?;
                let height_cm = reader.float("height")?;
                if height_cm <= 0.0 {
                    return Err(reader.invalid(
                        "height",
                        &FieldValue::Float(height_cm),
                        "height must be greater than zero",
                    ));
                }
                AssessmentInput::Bmi(BmiInput {
                    weight_kg,
                    height_m: height_cm / 100.0,
                })
            }
            AssessmentKey::Cardiovascular => AssessmentInput::Cardiovascular(BloodPressureInput {
                systolic: reader.integer("systolic")?,
                diastolic: reader.integer("diastolic")?,
            }),
            AssessmentKey::StrokeRisk => AssessmentInput::StrokeRisk(StrokeRiskInput {
                age: reader.integer("age")?,
                systolic: reader.integer("systolic")?,
                smoking: reader.flag("smoking")?,
                diabetes: reader.flag("diabetes")?,
                heart_disease: reader.flag("heart_disease")?,
            }),
            AssessmentKey::Metabolic => AssessmentInput::Metabolic(MetabolicInput {
                waist_cm: reader.float("waist")?,
                sex: Sex::from_label(&reader.text("gender")?),
                systolic: reader.integer("systolic")?,
            }),
            AssessmentKey::Respiratory => AssessmentInput::Respiratory(RespiratoryInput {
                spo2: reader.integer("spo2")?,
            }),
            AssessmentKey::Fitness => AssessmentInput::Fitness(FitnessInput {
                resting_hr: reader.integer("resting_hr")?,
                age: reader.integer("age")?,
            }),
            AssessmentKey::BodyComposition => {
                AssessmentInput::BodyComposition(BodyCompositionInput {
                    body_fat_percentage: reader.float("bf_percentage")?,
                    sex: Sex::from_label(&reader.text("gender")?),
                    age: reader.integer("age")?,
                })
            }
            AssessmentKey::Posture => AssessmentInput::Posture(PostureInput {
                alignment: reader.integer("alignment")?,
                balance: reader.integer("balance")?,
            }),
            AssessmentKey::MentalHealth => {
                let mut phq9_score = 0i64;
                for item in PHQ9_ITEMS {
                    phq9_score += i64::from(reader.integer(item)?);
                }
                AssessmentInput::MentalHealth(MentalHealthInput { phq9_score })
            }
            AssessmentKey::Temperature => AssessmentInput::Temperature(TemperatureInput {
                celsius: reader.float("temperature")?,
            }),
            AssessmentKey::GripStrength => AssessmentInput::GripStrength(GripStrengthInput {
                grip_kg: reader.float("grip_strength")?,
                sex: Sex::from_label(&reader.text("gender")?),
                age: reader.integer("age")?,
            }),
            AssessmentKey::Lifestyle => AssessmentInput::Lifestyle(LifestyleInput {
                smoking: SmokingStatus::from_label(&reader.text("smoking_status")?),
                activity_minutes: reader.integer_or("physical_activity", 0)?,
            }),
            AssessmentKey::Vision => AssessmentInput::Vision(VisionInput {
                acuity_denominator: reader.float("acuity")?,
            }),
            AssessmentKey::Hearing => {
                let mut thresholds = BTreeMap::new();
                for (field, frequency) in HEARING_FREQUENCIES {
                    thresholds.insert(frequency.to_string(), reader.integer_or(field, 0)?);
                }
                AssessmentInput::Hearing(HearingInput { thresholds })
            }
            AssessmentKey::Prostate => AssessmentInput::Prostate(ProstateInput {
                age: reader.integer("age")?,
                family_history: category(&reader, "family_history", RelativeCount::parse)?,
                african_ancestry: reader.flag("african_ancestry")?,
                urinary_symptoms: reader.flag("urinary_symptoms")?,
                psa_level: reader.optional_float("psa_level")?,
            }),
            AssessmentKey::Hiv => AssessmentInput::Hiv(HivInput {
                unprotected_sex: reader.flag("unprotected_sex")?,
                multiple_partners: reader.flag("multiple_partners")?,
                shared_needles: reader.flag("shared_needles")?,
                sti_history: reader.flag("sti_history")?,
                partner_positive: reader.flag("partner_positive")?,
                symptoms: reader.flag("symptoms")?,
            }),
            AssessmentKey::Pregnancy => AssessmentInput::Pregnancy(PregnancyInput {
                weeks: reader.integer("weeks")?,
                systolic: reader.integer("systolic")?,
                diastolic: reader.integer("diastolic")?,
                symptoms: reader.flag("symptoms")?,
                previous_complications: reader.flag("previous_complications")?,
            }),
            AssessmentKey::BreastCancer => AssessmentInput::BreastCancer(BreastCancerInput {
                age: reader.integer("age")?,
                family_history: category(&reader, "family_history", RelativeDegree::parse)?,
                brca_mutation: reader.flag("brca_mutation")?,
                previous_biopsy: reader.flag("previous_biopsy")?,
                early_menstruation: reader.flag("early_menstruation")?,
                breast_changes: reader.flag("breast_changes")?,
            }),
            AssessmentKey::Tuberculosis => AssessmentInput::Tuberculosis(TuberculosisInput {
                persistent_cough: reader.flag("persistent_cough")?,
                coughing_blood: reader.flag("coughing_blood")?,
                night_sweats: reader.flag("night_sweats")?,
                weight_loss: reader.flag("weight_loss")?,
                fever: reader.flag("fever")?,
                tb_contact: reader.flag("tb_contact")?,
                weakened_immunity: reader.flag("weakened_immunity")?,
            }),
            AssessmentKey::Covid19 => AssessmentInput::Covid19(Covid19Input {
                fever: reader.flag("fever")?,
                dry_cough: reader.flag("dry_cough")?,
                loss_of_taste_smell: reader.flag("loss_of_taste_smell")?,
                breathing_difficulty: reader.flag("breathing_difficulty")?,
                fatigue: reader.flag("fatigue")?,
                known_contact: reader.flag("known_contact")?,
            }),
            AssessmentKey::Malaria => AssessmentInput::Malaria(MalariaInput {
                fever: reader.flag("fever")?,
                chills: reader.flag("chills")?,
                headache: reader.flag("headache")?,
                sweating: reader.flag("sweating")?,
                nausea: reader.flag("nausea")?,
                endemic_travel: reader.flag("endemic_travel")?,
            }),
            AssessmentKey::LiverProblem => AssessmentInput::LiverProblem(LiverProblemInput {
                alcohol_units_per_week: reader.integer_or("alcohol_units", 0)?,
                jaundice: reader.flag("jaundice")?,
                abdominal_pain: reader.flag("abdominal_pain")?,
                dark_urine: reader.flag("dark_urine")?,
                fatigue: reader.flag("fatigue")?,
                hepatitis_history: reader.flag("hepatitis_history")?,
            }),
            AssessmentKey::HepatitisB => AssessmentInput::HepatitisB(HepatitisBInput {
                unvaccinated: reader.flag("unvaccinated")?,
                household_contact: reader.flag("household_contact")?,
                unprotected_sex: reader.flag("unprotected_sex")?,
                shared_needles: reader.flag("shared_needles")?,
                needlestick_exposure: reader.flag("needlestick_exposure")?,
                jaundice: reader.flag("jaundice")?,
            }),
            AssessmentKey::Diabetes => AssessmentInput::Diabetes(DiabetesInput {
                age: reader.integer("age")?,
                bmi: reader.float("bmi")?,
                family_history: reader.flag("family_history")?,
                physically_inactive: reader.flag("physically_inactive")?,
                high_blood_pressure: reader.flag("high_blood_pressure")?,
                gestational_diabetes: reader.flag("gestational_diabetes")?,
                excessive_thirst: reader.flag("excessive_thirst")?,
            }),
            AssessmentKey::Hydration => AssessmentInput::Hydration(HydrationInput {
                water_litres: reader.float("water_intake")?,
                urine_color: category(&reader, "urine_color", UrineColor::parse)?,
                thirsty: reader.flag("thirsty")?,
                dizziness: reader.flag("dizziness")?,
                hot_climate: reader.flag("hot_climate")?,
                exercise_minutes: reader.integer_or("exercise_minutes", 0)?,
            }),
        };

        Ok(input)
    }

    pub fn key(&self) -> AssessmentKey {
        match self {
            AssessmentInput::Bmi(_) => AssessmentKey::Bmi,
            AssessmentInput::Cardiovascular(_) => AssessmentKey::Cardiovascular,
            AssessmentInput::StrokeRisk(_) => AssessmentKey::StrokeRisk,
            AssessmentInput::Metabolic(_) => AssessmentKey::Metabolic,
            AssessmentInput::Respiratory(_) => AssessmentKey::Respiratory,
            AssessmentInput::Fitness(_) => AssessmentKey::Fitness,
            AssessmentInput::BodyComposition(_) => AssessmentKey::BodyComposition,
            AssessmentInput::Posture(_) => AssessmentKey::Posture,
            AssessmentInput::MentalHealth(_) => AssessmentKey::MentalHealth,
            AssessmentInput::Temperature(_) => AssessmentKey::Temperature,
            AssessmentInput::GripStrength(_) => AssessmentKey::GripStrength,
            AssessmentInput::Lifestyle(_) => AssessmentKey::Lifestyle,
            AssessmentInput::Vision(_) => AssessmentKey::Vision,
            AssessmentInput::Hearing(_) => AssessmentKey::Hearing,
            AssessmentInput::Prostate(_) => AssessmentKey::Prostate,
            AssessmentInput::Hiv(_) => AssessmentKey::Hiv,
            AssessmentInput::Pregnancy(_) => AssessmentKey::Pregnancy,
            AssessmentInput::BreastCancer(_) => AssessmentKey::BreastCancer,
            AssessmentInput::Tuberculosis(_) => AssessmentKey::Tuberculosis,
            AssessmentInput::Covid19(_) => AssessmentKey::Covid19,
            AssessmentInput::Malaria(_) => AssessmentKey::Malaria,
            AssessmentInput::LiverProblem(_) => AssessmentKey::LiverProblem,
            AssessmentInput::HepatitisB(_) => AssessmentKey::HepatitisB,
            AssessmentInput::Diabetes(_) => AssessmentKey::Diabetes,
            AssessmentInput::Hydration(_) => AssessmentKey::Hydration,
        }
    }

    /// Run the scoring rule that belongs to this input.
    pub fn evaluate(&self) -> AssessmentResult {
        match self {
            AssessmentInput::Bmi(input) => AssessmentResult::Bmi(rules::calculate_bmi(input)),
            AssessmentInput::Cardiovascular(input) => {
                AssessmentResult::Cardiovascular(rules::assess_cardiovascular(input))
            }
            AssessmentInput::StrokeRisk(input) => {
                AssessmentResult::StrokeRisk(rules::assess_stroke_risk(input))
            }
            AssessmentInput::Metabolic(input) => {
                AssessmentResult::Metabolic(rules::assess_metabolic(input))
            }
            AssessmentInput::Respiratory(input) => {
                AssessmentResult::Respiratory(rules::assess_respiratory(input))
            }
            AssessmentInput::Fitness(input) => {
                AssessmentResult::Fitness(rules::assess_fitness(input))
            }
            AssessmentInput::BodyComposition(input) => {
                AssessmentResult::BodyComposition(rules::assess_body_composition(input))
            }
            AssessmentInput::Posture(input) => {
                AssessmentResult::Posture(rules::assess_posture(input))
            }
            AssessmentInput::MentalHealth(input) => {
                AssessmentResult::MentalHealth(rules::assess_mental_health(input))
            }
            AssessmentInput::Temperature(input) => {
                AssessmentResult::Temperature(rules::assess_temperature(input))
            }
            AssessmentInput::GripStrength(input) => {
                AssessmentResult::GripStrength(rules::assess_grip_strength(input))
            }
            AssessmentInput::Lifestyle(input) => {
                AssessmentResult::Lifestyle(rules::assess_lifestyle(input))
            }
            AssessmentInput::Vision(input) => {
                AssessmentResult::Vision(rules::assess_vision(input))
            }
            AssessmentInput::Hearing(input) => {
                AssessmentResult::Hearing(rules::assess_hearing(input))
            }
            AssessmentInput::Prostate(input) => {
                AssessmentResult::Prostate(rules::assess_prostate(input))
            }
            AssessmentInput::Hiv(input) => AssessmentResult::Hiv(rules::assess_hiv(input)),
            AssessmentInput::Pregnancy(input) => {
                AssessmentResult::Pregnancy(rules::assess_pregnancy(input))
            }
            AssessmentInput::BreastCancer(input) => {
                AssessmentResult::BreastCancer(rules::assess_breast_cancer(input))
            }
            AssessmentInput::Tuberculosis(input) => {
                AssessmentResult::Tuberculosis(rules::assess_tuberculosis(input))
            }
            AssessmentInput::Covid19(input) => {
                AssessmentResult::Covid19(rules::assess_covid19(input))
            }
            AssessmentInput::Malaria(input) => {
                AssessmentResult::Malaria(rules::assess_malaria(input))
            }
            AssessmentInput::LiverProblem(input) => {
                AssessmentResult::LiverProblem(rules::assess_liver_problem(input))
            }
            AssessmentInput::HepatitisB(input) => {
                AssessmentResult::HepatitisB(rules::assess_hepatitis_b(input))
            }
            AssessmentInput::Diabetes(input) => {
                AssessmentResult::Diabetes(rules::assess_diabetes(input))
            }
            AssessmentInput::Hydration(input) => {
                AssessmentResult::Hydration(rules::assess_hydration(input))
            }
        }
    }
}

/// Coerce and score in one step for an already-parsed key.
pub fn evaluate_key(
    key: AssessmentKey,
    fields: &AssessmentFields,
) -> Result<AssessmentResult, AssessmentError> {
    Ok(AssessmentInput::from_fields(key, fields)?.evaluate())
}

/// Resolve an assessment slug, coerce its fields, and score it.
pub fn evaluate(
    assessment_key: &str,
    fields: &AssessmentFields,
) -> Result<AssessmentResult, AssessmentError> {
    let key: AssessmentKey = assessment_key.parse()?;
    evaluate_key(key, fields)
}

fn category<T>(
    reader: &FieldReader<'_>,
    name: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, AssessmentError> {
    let raw = reader.text(name)?;
    parse(&raw).ok_or_else(|| {
        reader.invalid(name, &FieldValue::Text(raw.clone()), "not one of the listed options")
    })
}
