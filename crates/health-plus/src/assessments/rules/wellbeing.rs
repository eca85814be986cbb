use super::super::inputs::{
    HydrationInput, LifestyleInput, MentalHealthInput, SmokingStatus, UrineColor,
};
use super::super::outcome::{
    DepressionSeverity, HydrationResult, HydrationStatus, LifestyleResult, LifestyleStatus,
    MentalHealthResult,
};
use super::Tally;

/// PHQ-9 depression screening. Scores above 19 fall into the open-ended top band.
pub fn assess_mental_health(input: &MentalHealthInput) -> MentalHealthResult {
    let score = input.phq9_score;

    let (severity, recommendation) = if score <= 4 {
        (DepressionSeverity::MinimalOrNone, "Continue monitoring")
    } else if score <= 9 {
        (DepressionSeverity::Mild, "Consider self-care strategies")
    } else if score <= 14 {
        (DepressionSeverity::Moderate, "Consider professional consultation")
    } else if score <= 19 {
        (DepressionSeverity::ModeratelySevere, "Seek professional help")
    } else {
        (
            DepressionSeverity::Severe,
            "Immediate professional consultation recommended",
        )
    };

    MentalHealthResult {
        severity,
        score,
        recommendation: recommendation.to_string(),
    }
}

/// Weekly activity targets: under 150 minutes scores 2, under 300 scores 1.
pub fn assess_lifestyle(input: &LifestyleInput) -> LifestyleResult {
    let mut tally = Tally::default();

    tally.add(match input.smoking {
        SmokingStatus::Current => 3,
        SmokingStatus::Former => 1,
        SmokingStatus::Never => 0,
    });

    if input.activity_minutes < 150 {
        tally.add(2);
    } else if input.activity_minutes < 300 {
        tally.add(1);
    }

    let risk_score = tally.score();
    let status = match risk_score {
        0 => LifestyleStatus::LowRisk,
        1..=2 => LifestyleStatus::ModerateRisk,
        _ => LifestyleStatus::HighRisk,
    };

    LifestyleResult { status, risk_score }
}

/// Signed accumulator: good habits add points, dehydration signs subtract.
/// The status is derived once from the final score.
pub fn assess_hydration(input: &HydrationInput) -> HydrationResult {
    let mut tally = Tally::default();

    if input.water_litres >= 2.5 {
        tally.add(2);
    } else if input.water_litres >= 1.5 {
        tally.add(1);
    } else if input.water_litres < 1.0 {
        tally.add(-2);
    }

    tally.add(match input.urine_color {
        UrineColor::Pale => 2,
        UrineColor::Light => 1,
        UrineColor::Yellow => 0,
        UrineColor::Dark => -2,
    });

    tally.add_if(input.thirsty, -1);
    tally.add_if(input.dizziness, -2);
    tally.add_if(input.hot_climate, -1);
    tally.add_if(input.exercise_minutes >= 60, -1);

    let hydration_score = tally.score();
    let (status, recommendation) = if hydration_score >= 3 {
        (
            HydrationStatus::WellHydrated,
            "Keep up your current fluid intake",
        )
    } else if hydration_score >= 0 {
        (
            HydrationStatus::MildlyDehydrated,
            "Drink more water through the day, especially around exercise and heat",
        )
    } else {
        (
            HydrationStatus::Dehydrated,
            "Rehydrate now with water or oral rehydration salts and seek care if dizziness persists",
        )
    };

    HydrationResult {
        status,
        hydration_score,
        recommendation: recommendation.to_string(),
    }
}
