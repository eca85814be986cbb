use super::super::inputs::{
    BmiInput, BodyCompositionInput, FitnessInput, GripStrengthInput, MetabolicInput, PostureInput,
    Sex,
};
use super::super::outcome::{
    BmiCategory, BmiResult, BodyCompositionResult, BodyCompositionStatus, FitnessResult,
    FitnessStatus, GripStrengthResult, GripStrengthStatus, MetabolicResult, MetabolicStatus,
    PostureResult, PostureStatus,
};
use super::Tally;

/// Age at which the adult reference tables switch to the older cohort.
const AGE_COHORT_CUTOFF: i32 = 30;

/// Classification uses the unrounded index; the reported value has one decimal.
pub fn calculate_bmi(input: &BmiInput) -> BmiResult {
    let bmi = input.weight_kg / (input.height_m * input.height_m);

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    BmiResult {
        value: (bmi * 10.0).round_ties_even() / 10.0,
        category,
    }
}

pub fn assess_metabolic(input: &MetabolicInput) -> MetabolicResult {
    let mut tally = Tally::default();

    let waist_limit = match input.sex {
        Sex::Male => 102.0,
        Sex::Other => 88.0,
    };
    tally.add_if(input.waist_cm >= waist_limit, 1);
    tally.add_if(input.systolic >= 130, 1);

    let status = match tally.score() {
        0 => MetabolicStatus::Healthy,
        1 => MetabolicStatus::AtRisk,
        _ => MetabolicStatus::MetabolicSyndromeRisk,
    };

    MetabolicResult {
        factors: tally.score() as u8,
        status,
    }
}

/// Resting heart rate ladder plus the share of the age-predicted maximum (220 - age).
pub fn assess_fitness(input: &FitnessInput) -> FitnessResult {
    let status = if input.resting_hr < 60 {
        FitnessStatus::AthleteLevel
    } else if input.resting_hr < 70 {
        FitnessStatus::Excellent
    } else if input.resting_hr < 80 {
        FitnessStatus::Good
    } else if input.resting_hr < 90 {
        FitnessStatus::Average
    } else {
        FitnessStatus::BelowAverage
    };

    let max_hr = 220.0 - f64::from(input.age);
    let percent = (f64::from(input.resting_hr) / max_hr * 100.0).round_ties_even();

    FitnessResult {
        status,
        hr_zone: format!("{percent}% of max"),
    }
}

pub fn assess_body_composition(input: &BodyCompositionInput) -> BodyCompositionResult {
    // Upper bounds (exclusive) for essential fat, athletes, fitness and average.
    let bounds: [f64; 4] = match (input.sex, input.age < AGE_COHORT_CUTOFF) {
        (Sex::Male, true) => [8.0, 14.0, 18.0, 25.0],
        (Sex::Male, false) => [11.0, 17.0, 22.0, 28.0],
        (Sex::Other, true) => [16.0, 20.0, 24.0, 31.0],
        (Sex::Other, false) => [20.0, 25.0, 29.0, 36.0],
    };

    let fat = input.body_fat_percentage;
    let status = if fat < bounds[0] {
        BodyCompositionStatus::EssentialFat
    } else if fat < bounds[1] {
        BodyCompositionStatus::Athletes
    } else if fat < bounds[2] {
        BodyCompositionStatus::Fitness
    } else if fat < bounds[3] {
        BodyCompositionStatus::Average
    } else {
        BodyCompositionStatus::Obese
    };

    BodyCompositionResult {
        status,
        percentage: fat,
    }
}

pub fn assess_grip_strength(input: &GripStrengthInput) -> GripStrengthResult {
    // Lower bounds (inclusive) for excellent, good and average.
    let bounds: [f64; 3] = match (input.sex, input.age < AGE_COHORT_CUTOFF) {
        (Sex::Male, true) => [50.0, 40.0, 30.0],
        (Sex::Male, false) => [45.0, 35.0, 25.0],
        (Sex::Other, true) => [30.0, 25.0, 20.0],
        (Sex::Other, false) => [28.0, 22.0, 18.0],
    };

    let grip = input.grip_kg;
    let status = if grip >= bounds[0] {
        GripStrengthStatus::Excellent
    } else if grip >= bounds[1] {
        GripStrengthStatus::Good
    } else if grip >= bounds[2] {
        GripStrengthStatus::Average
    } else {
        GripStrengthStatus::BelowAverage
    };

    GripStrengthResult {
        status,
        strength: grip,
    }
}

pub fn assess_posture(input: &PostureInput) -> PostureResult {
    let score = i64::from(input.alignment) + i64::from(input.balance);

    let status = if score >= 8 {
        PostureStatus::Excellent
    } else if score >= 6 {
        PostureStatus::Good
    } else if score >= 4 {
        PostureStatus::Fair
    } else {
        PostureStatus::Poor
    };

    PostureResult { status, score }
}
