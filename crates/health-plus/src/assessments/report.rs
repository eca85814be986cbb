//! Canned explanatory paragraphs shown next to a stored result.

use super::outcome::{
    AssessmentResult, BloodPressureStatus, BmiCategory, BodyCompositionStatus, DepressionSeverity,
    FitnessStatus, GripStrengthStatus, HearingStatus, HydrationStatus, LifestyleStatus,
    MetabolicStatus, PostureStatus, RespiratoryStatus, RiskLevel, ScreeningOutcome,
    TemperatureStatus, VisionStatus,
};

/// Human-readable summary of a result. Returns an empty string when there is
/// no result to describe.
pub fn report_text(result: Option<&AssessmentResult>) -> String {
    let Some(result) = result else {
        return String::new();
    };

    let paragraph = match result {
        AssessmentResult::Bmi(bmi) => match bmi.category {
            BmiCategory::NormalWeight => format!(
                "Your BMI of {} sits in the healthy range. Keep a balanced diet and regular activity to stay there.",
                bmi.value
            ),
            BmiCategory::Underweight => format!(
                "Your BMI of {} is below the healthy range. A nutrition review can help rule out underlying causes.",
                bmi.value
            ),
            BmiCategory::Overweight | BmiCategory::Obese => format!(
                "Your BMI of {} is above the healthy range, which raises long-term cardiovascular and metabolic risk. Gradual changes to diet and activity are the usual first step.",
                bmi.value
            ),
        },
        AssessmentResult::Cardiovascular(cardio) => match cardio.status {
            BloodPressureStatus::Normal => {
                "Your blood pressure is in the normal range. Recheck it at least once a year.".to_string()
            }
            BloodPressureStatus::Elevated => {
                "Your systolic reading is slightly raised. Reducing salt, staying active and limiting alcohol often bring it back down.".to_string()
            }
            BloodPressureStatus::Stage1Hypertension
            | BloodPressureStatus::Stage2Hypertension => format!(
                "Your readings fall in the hypertension range ({} risk). Repeat the measurement and discuss the results with a clinician.",
                cardio.risk
            ),
        },
        AssessmentResult::Metabolic(metabolic) => match metabolic.status {
            MetabolicStatus::Healthy => {
                "No metabolic risk factors were found in the measurements provided.".to_string()
            }
            MetabolicStatus::AtRisk => {
                "One metabolic risk factor was found. Waist size and blood pressure both respond well to lifestyle changes.".to_string()
            }
            MetabolicStatus::MetabolicSyndromeRisk => format!(
                "{} metabolic risk factors were found. A blood test for glucose and lipids would complete the picture.",
                metabolic.factors
            ),
        },
        AssessmentResult::Respiratory(respiratory) => match respiratory.status {
            RespiratoryStatus::Normal => format!(
                "An oxygen saturation of {}% is within the normal range.",
                respiratory.spo2
            ),
            RespiratoryStatus::MildHypoxemia => format!(
                "An oxygen saturation of {}% is slightly low. Recheck at rest and seek advice if it stays below 95%.",
                respiratory.spo2
            ),
            RespiratoryStatus::SevereHypoxemia => format!(
                "An oxygen saturation of {}% is dangerously low. Seek medical attention now.",
                respiratory.spo2
            ),
        },
        AssessmentResult::Fitness(fitness) => match fitness.status {
            FitnessStatus::AthleteLevel | FitnessStatus::Excellent | FitnessStatus::Good => format!(
                "Your resting heart rate ({}) points to good cardiovascular fitness.",
                fitness.hr_zone
            ),
            FitnessStatus::Average | FitnessStatus::BelowAverage => format!(
                "Your resting heart rate ({}) leaves room for improvement. Regular aerobic exercise lowers it over a few weeks.",
                fitness.hr_zone
            ),
        },
        AssessmentResult::BodyComposition(body) => match body.status {
            BodyCompositionStatus::EssentialFat => format!(
                "A body fat level of {}% is at the essential minimum. Very low levels can affect hormone balance.",
                body.percentage
            ),
            BodyCompositionStatus::Athletes | BodyCompositionStatus::Fitness => format!(
                "A body fat level of {}% is typical of an active, fit person.",
                body.percentage
            ),
            BodyCompositionStatus::Average | BodyCompositionStatus::Obese => format!(
                "A body fat level of {}% is at or above the average for your group. Strength training and diet changes reduce it steadily.",
                body.percentage
            ),
        },
        AssessmentResult::Posture(posture) => match posture.status {
            PostureStatus::Excellent | PostureStatus::Good => format!(
                "A posture score of {} shows good alignment and balance.",
                posture.score
            ),
            PostureStatus::Fair => format!(
                "A posture score of {} suggests some imbalance. Core and back exercises usually help.",
                posture.score
            ),
            PostureStatus::Poor => format!(
                "A posture score of {} is low. A physiotherapist can assess the cause.",
                posture.score
            ),
        },
        AssessmentResult::MentalHealth(mental) => match mental.severity {
            DepressionSeverity::MinimalOrNone | DepressionSeverity::Mild => format!(
                "A PHQ-9 score of {} shows few depressive symptoms. {}.",
                mental.score, mental.recommendation
            ),
            DepressionSeverity::Moderate => format!(
                "A PHQ-9 score of {} indicates moderate symptoms. {}.",
                mental.score, mental.recommendation
            ),
            DepressionSeverity::ModeratelySevere | DepressionSeverity::Severe => format!(
                "A PHQ-9 score of {} indicates significant symptoms. {}. If you have thoughts of self-harm, contact emergency services.",
                mental.score, mental.recommendation
            ),
        },
        AssessmentResult::Temperature(temperature) => match temperature.status {
            TemperatureStatus::Normal => format!(
                "A temperature of {}°C is normal.",
                temperature.temperature
            ),
            TemperatureStatus::HypothermiaRisk => format!(
                "A temperature of {}°C is below normal. Warm up and recheck; seek help if it keeps falling.",
                temperature.temperature
            ),
            TemperatureStatus::LowGradeFever | TemperatureStatus::Fever => format!(
                "A temperature of {}°C is raised. Rest, drink fluids and seek care if it climbs or lasts more than three days.",
                temperature.temperature
            ),
        },
        AssessmentResult::GripStrength(grip) => match grip.status {
            GripStrengthStatus::Excellent | GripStrengthStatus::Good => format!(
                "A grip of {} kg is strong for your age and sex.",
                grip.strength
            ),
            GripStrengthStatus::Average | GripStrengthStatus::BelowAverage => format!(
                "A grip of {} kg is at or below average. Resistance training builds overall strength.",
                grip.strength
            ),
        },
        AssessmentResult::Lifestyle(lifestyle) => match lifestyle.status {
            LifestyleStatus::LowRisk => {
                "Your smoking and activity habits carry little risk.".to_string()
            }
            LifestyleStatus::ModerateRisk => format!(
                "Your habits score {} risk points. More weekly activity is the easiest gain.",
                lifestyle.risk_score
            ),
            LifestyleStatus::HighRisk => format!(
                "Your habits score {} risk points. Stopping smoking and reaching 150 active minutes a week make the biggest difference.",
                lifestyle.risk_score
            ),
        },
        AssessmentResult::Vision(vision) => match vision.status {
            VisionStatus::Normal => format!("Visual acuity of {} is normal.", vision.acuity),
            VisionStatus::MildImpairment | VisionStatus::ModerateImpairment => format!(
                "Visual acuity of {} is below normal. An eye test will show whether glasses would help.",
                vision.acuity
            ),
            VisionStatus::SevereImpairment => format!(
                "Visual acuity of {} is well below normal. Book an appointment with an eye care professional.",
                vision.acuity
            ),
        },
        AssessmentResult::Hearing(hearing) => match hearing.status {
            HearingStatus::Normal => {
                "All tested frequencies were heard within normal limits.".to_string()
            }
            HearingStatus::MildLoss | HearingStatus::ModerateLoss => format!(
                "{} tested frequencies were within normal limits. A formal hearing test can confirm the pattern.",
                hearing.normal_frequencies
            ),
            HearingStatus::SignificantLoss => format!(
                "Only {} tested frequencies were within normal limits. An audiologist should review your hearing.",
                hearing.normal_frequencies
            ),
        },
        AssessmentResult::Pregnancy(pregnancy) => format!(
            "At {} weeks you are in the {}. {}.",
            pregnancy.weeks,
            pregnancy.trimester.label().to_lowercase(),
            pregnancy.recommendation
        ),
        AssessmentResult::Hydration(hydration) => match hydration.status {
            HydrationStatus::WellHydrated => format!("{}.", hydration.recommendation),
            HydrationStatus::MildlyDehydrated | HydrationStatus::Dehydrated => format!(
                "Your answers show signs of low fluid intake. {}.",
                hydration.recommendation
            ),
        },
        AssessmentResult::StrokeRisk(outcome)
        | AssessmentResult::Prostate(outcome)
        | AssessmentResult::Hiv(outcome)
        | AssessmentResult::BreastCancer(outcome)
        | AssessmentResult::Tuberculosis(outcome)
        | AssessmentResult::Covid19(outcome)
        | AssessmentResult::Malaria(outcome)
        | AssessmentResult::LiverProblem(outcome)
        | AssessmentResult::HepatitisB(outcome)
        | AssessmentResult::Diabetes(outcome) => screening_paragraph(outcome),
    };

    format!(
        "{}: {}. {}",
        result.key().title(),
        result.classification(),
        paragraph
    )
}

fn screening_paragraph(outcome: &ScreeningOutcome) -> String {
    match outcome.risk {
        RiskLevel::High => format!(
            "Your answers add up to {} risk points, which is high. {}.",
            outcome.risk_score, outcome.recommendation
        ),
        RiskLevel::Low => format!(
            "Your answers add up to {} risk points, which is low. {}.",
            outcome.risk_score, outcome.recommendation
        ),
        _ => format!(
            "Your answers add up to {} risk points, a raised but not high level. {}.",
            outcome.risk_score, outcome.recommendation
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::outcome::{BmiResult, HearingResult};

    #[test]
    fn no_result_yields_empty_text() {
        assert!(report_text(None).is_empty());
    }

    #[test]
    fn report_starts_with_title_and_classification() {
        let result = AssessmentResult::Bmi(BmiResult {
            value: 24.5,
            category: BmiCategory::NormalWeight,
        });
        let text = report_text(Some(&result));
        assert!(text.starts_with("Body Mass Index: Normal weight."), "{text}");
        assert!(text.contains("24.5"));
    }

    #[test]
    fn paragraph_follows_classification() {
        let normal = AssessmentResult::Hearing(HearingResult {
            status: HearingStatus::Normal,
            normal_frequencies: 5,
        });
        let significant = AssessmentResult::Hearing(HearingResult {
            status: HearingStatus::SignificantLoss,
            normal_frequencies: 1,
        });
        assert_ne!(report_text(Some(&normal)), report_text(Some(&significant)));
        assert!(report_text(Some(&significant)).contains("audiologist"));
    }

    #[test]
    fn screening_reports_include_recommendation() {
        let result = AssessmentResult::Tuberculosis(ScreeningOutcome {
            risk_score: 9,
            risk: RiskLevel::High,
            recommendation: "Arrange a chest X-ray".to_string(),
        });
        let text = report_text(Some(&result));
        assert!(text.contains("9 risk points"));
        assert!(text.contains("Arrange a chest X-ray"));
    }
}
