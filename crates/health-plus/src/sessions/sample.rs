//! Canned demonstration results covering every assessment.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use super::store::StoredAssessment;
use crate::assessments::inputs::{
    BloodPressureInput, BmiInput, BodyCompositionInput, BreastCancerInput, Covid19Input,
    DiabetesInput, FitnessInput, GripStrengthInput, HearingInput, HepatitisBInput, HivInput,
    HydrationInput, LifestyleInput, LiverProblemInput, MalariaInput, MentalHealthInput,
    MetabolicInput, PostureInput, PregnancyInput, ProstateInput, RelativeCount, RelativeDegree,
    RespiratoryInput, Sex, SmokingStatus, StrokeRiskInput, TemperatureInput, TuberculosisInput,
    UrineColor, VisionInput,
};
use crate::assessments::AssessmentInput;

/// Sample results stamped relative to `now`, in catalogue order.
pub fn sample_assessments(now: DateTime<Utc>) -> Vec<StoredAssessment> {
    sample_inputs()
        .into_iter()
        .map(|(input, days_ago)| {
            StoredAssessment::new(input.evaluate(), now - Duration::days(days_ago))
        })
        .collect()
}

fn sample_inputs() -> Vec<(AssessmentInput, i64)> {
    let hearing = [("250", 15), ("500", 18), ("1000", 20), ("2000", 22), ("4000", 25)]
        .into_iter()
        .map(|(frequency, threshold)| (frequency.to_string(), threshold))
        .collect::<BTreeMap<_, _>>();

    vec![
        (
            AssessmentInput::Bmi(BmiInput {
                weight_kg: 75.0,
                height_m: 1.75,
            }),
            1,
        ),
        (
            AssessmentInput::Cardiovascular(BloodPressureInput {
                systolic: 125,
                diastolic: 82,
            }),
            1,
        ),
        (
            AssessmentInput::StrokeRisk(StrokeRiskInput {
                age: 45,
                systolic: 125,
                smoking: false,
                diabetes: false,
                heart_disease: false,
            }),
            2,
        ),
        (
            AssessmentInput::Metabolic(MetabolicInput {
                waist_cm: 88.0,
                sex: Sex::Male,
                systolic: 125,
            }),
            1,
        ),
        (AssessmentInput::Respiratory(RespiratoryInput { spo2: 98 }), 0),
        (
            AssessmentInput::Fitness(FitnessInput {
                resting_hr: 68,
                age: 35,
            }),
            1,
        ),
        (
            AssessmentInput::BodyComposition(BodyCompositionInput {
                body_fat_percentage: 18.0,
                sex: Sex::Male,
                age: 35,
            }),
            2,
        ),
        (
            AssessmentInput::Posture(PostureInput {
                alignment: 4,
                balance: 4,
            }),
            3,
        ),
        (
            AssessmentInput::MentalHealth(MentalHealthInput { phq9_score: 6 }),
            0,
        ),
        (
            AssessmentInput::Temperature(TemperatureInput { celsius: 36.8 }),
            0,
        ),
        (
            AssessmentInput::GripStrength(GripStrengthInput {
                grip_kg: 42.0,
                sex: Sex::Male,
                age: 35,
            }),
            1,
        ),
        (
            AssessmentInput::Lifestyle(LifestyleInput {
                smoking: SmokingStatus::Never,
                activity_minutes: 180,
            }),
            2,
        ),
        (
            AssessmentInput::Vision(VisionInput {
                acuity_denominator: 20.0,
            }),
            6,
        ),
        (
            AssessmentInput::Hearing(HearingInput {
                thresholds: hearing,
            }),
            6,
        ),
        (
            AssessmentInput::Prostate(ProstateInput {
                age: 52,
                family_history: RelativeCount::None,
                african_ancestry: false,
                urinary_symptoms: false,
                psa_level: Some(1.2),
            }),
            10,
        ),
        (
            AssessmentInput::Hiv(HivInput {
                unprotected_sex: false,
                multiple_partners: false,
                shared_needles: false,
                sti_history: false,
                partner_positive: false,
                symptoms: false,
            }),
            14,
        ),
        (
            AssessmentInput::Pregnancy(PregnancyInput {
                weeks: 20,
                systolic: 115,
                diastolic: 75,
                symptoms: false,
                previous_complications: false,
            }),
            4,
        ),
        (
            AssessmentInput::BreastCancer(BreastCancerInput {
                age: 45,
                family_history: RelativeDegree::SecondDegree,
                brca_mutation: false,
                previous_biopsy: false,
                early_menstruation: false,
                breast_changes: false,
            }),
            9,
        ),
        (
            AssessmentInput::Tuberculosis(TuberculosisInput {
                persistent_cough: false,
                coughing_blood: false,
                night_sweats: false,
                weight_loss: false,
                fever: false,
                tb_contact: false,
                weakened_immunity: false,
            }),
            5,
        ),
        (
            AssessmentInput::Covid19(Covid19Input {
                fever: false,
                dry_cough: true,
                loss_of_taste_smell: false,
                breathing_difficulty: false,
                fatigue: true,
                known_contact: false,
            }),
            3,
        ),
        (
            AssessmentInput::Malaria(MalariaInput {
                fever: false,
                chills: false,
                headache: true,
                sweating: false,
                nausea: false,
                endemic_travel: false,
            }),
            3,
        ),
        (
            AssessmentInput::LiverProblem(LiverProblemInput {
                alcohol_units_per_week: 8,
                jaundice: false,
                abdominal_pain: false,
                dark_urine: false,
                fatigue: false,
                hepatitis_history: false,
            }),
            7,
        ),
        (
            AssessmentInput::HepatitisB(HepatitisBInput {
                unvaccinated: false,
                household_contact: false,
                unprotected_sex: false,
                shared_needles: false,
                needlestick_exposure: false,
                jaundice: false,
            }),
            7,
        ),
        (
            AssessmentInput::Diabetes(DiabetesInput {
                age: 40,
                bmi: 24.5,
                family_history: true,
                physically_inactive: false,
                high_blood_pressure: false,
                gestational_diabetes: false,
                excessive_thirst: false,
            }),
            2,
        ),
        (
            AssessmentInput::Hydration(HydrationInput {
                water_litres: 2.0,
                urine_color: UrineColor::Light,
                thirsty: false,
                dizziness: false,
                hot_climate: false,
                exercise_minutes: 30,
            }),
            0,
        ),
    ]
}
