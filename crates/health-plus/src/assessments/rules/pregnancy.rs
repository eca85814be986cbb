use super::super::inputs::PregnancyInput;
use super::super::outcome::{PregnancyResult, PregnancyStatus, RiskLevel, Trimester};
use super::Tally;

/// Trimester and risk are independent: the trimester depends only on the
/// week count, the risk only on blood pressure and history.
pub fn assess_pregnancy(input: &PregnancyInput) -> PregnancyResult {
    let trimester = if input.weeks < 12 {
        Trimester::First
    } else if input.weeks < 28 {
        Trimester::Second
    } else {
        Trimester::Third
    };

    let mut tally = Tally::default();
    let mut status = PregnancyStatus::Normal;

    if input.systolic >= 140 || input.diastolic >= 90 {
        tally.add(2);
        status = PregnancyStatus::MonitorBloodPressure;
    } else if input.systolic >= 130 || input.diastolic >= 85 {
        tally.add(1);
    }

    tally.add_if(input.symptoms, 1);
    tally.add_if(input.previous_complications, 2);

    let risk_factors = tally.score();
    let (risk, recommendation) = if risk_factors >= 3 {
        (
            RiskLevel::High,
            "Contact your midwife or obstetrician promptly for a review",
        )
    } else if risk_factors >= 1 {
        (
            RiskLevel::Moderate,
            "Mention these findings at your next antenatal appointment",
        )
    } else {
        (RiskLevel::Low, "Continue routine antenatal care")
    };

    PregnancyResult {
        trimester,
        weeks: input.weeks,
        status,
        risk,
        risk_factors,
        recommendation: recommendation.to_string(),
    }
}
