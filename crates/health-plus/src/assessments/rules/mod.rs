//! Scoring rules. Every function here is pure and total over its input record.

mod body;
mod pregnancy;
mod screening;
mod vitals;
mod wellbeing;

pub use body::{
    assess_body_composition, assess_fitness, assess_grip_strength, assess_metabolic,
    assess_posture, calculate_bmi,
};
pub use pregnancy::assess_pregnancy;
pub use screening::{
    assess_breast_cancer, assess_covid19, assess_diabetes, assess_hepatitis_b, assess_hiv,
    assess_liver_problem, assess_malaria, assess_prostate, assess_stroke_risk,
    assess_tuberculosis,
};
pub use vitals::{
    assess_cardiovascular, assess_hearing, assess_respiratory, assess_temperature, assess_vision,
};
pub use wellbeing::{assess_hydration, assess_lifestyle, assess_mental_health};

use super::outcome::{RiskLevel, ScreeningOutcome};

/// Running total of weighted risk points.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    score: i32,
}

impl Tally {
    pub(crate) fn add(&mut self, points: i32) {
        self.score += points;
    }

    pub(crate) fn add_if(&mut self, present: bool, points: i32) {
        if present {
            self.score += points;
        }
    }

    pub(crate) fn score(&self) -> i32 {
        self.score
    }
}

/// Recommendation attached to each tier of a screening.
pub(crate) struct TierAdvice {
    pub(crate) high: &'static str,
    pub(crate) elevated: &'static str,
    pub(crate) low: &'static str,
}

/// Cut points for a three-tier screening. Scores at or above `high_from` are
/// High, at or above `elevated_from` take the `elevated` level, the rest Low.
pub(crate) struct ScreeningScale {
    pub(crate) high_from: i32,
    pub(crate) elevated_from: i32,
    pub(crate) elevated: RiskLevel,
    pub(crate) advice: TierAdvice,
}

impl ScreeningScale {
    pub(crate) fn classify(&self, risk_score: i32) -> ScreeningOutcome {
        let (risk, recommendation) = if risk_score >= self.high_from {
            (RiskLevel::High, self.advice.high)
        } else if risk_score >= self.elevated_from {
            (self.elevated, self.advice.elevated)
        } else {
            (RiskLevel::Low, self.advice.low)
        };

        ScreeningOutcome {
            risk_score,
            risk,
            recommendation: recommendation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: ScreeningScale = ScreeningScale {
        high_from: 7,
        elevated_from: 4,
        elevated: RiskLevel::Moderate,
        advice: TierAdvice {
            high: "high",
            elevated: "elevated",
            low: "low",
        },
    };

    #[test]
    fn scale_boundaries_are_inclusive() {
        assert_eq!(SCALE.classify(3).risk, RiskLevel::Low);
        assert_eq!(SCALE.classify(4).risk, RiskLevel::Moderate);
        assert_eq!(SCALE.classify(6).recommendation, "elevated");
        assert_eq!(SCALE.classify(7).risk, RiskLevel::High);
    }

    #[test]
    fn tally_only_counts_present_factors() {
        let mut tally = Tally::default();
        tally.add_if(true, 3);
        tally.add_if(false, 4);
        tally.add(-1);
        assert_eq!(tally.score(), 2);
    }
}
