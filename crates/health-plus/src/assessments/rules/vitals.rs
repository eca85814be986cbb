use super::super::inputs::{
    BloodPressureInput, HearingInput, RespiratoryInput, TemperatureInput, VisionInput,
};
use super::super::outcome::{
    BloodPressureStatus, CardiovascularResult, HearingResult, HearingStatus, RespiratoryResult,
    RespiratoryStatus, RiskLevel, TemperatureResult, TemperatureStatus, VisionResult, VisionStatus,
};

/// Highest pure-tone threshold (dB HL) still counted as normal hearing.
const NORMAL_HEARING_THRESHOLD: i32 = 25;

/// Blood pressure staging. The stage 1 branch fires when either reading is
/// below its stage 2 limit, so the ladder order matters.
pub fn assess_cardiovascular(input: &BloodPressureInput) -> CardiovascularResult {
    let BloodPressureInput {
        systolic,
        diastolic,
    } = *input;

    let (status, risk) = if systolic < 120 && diastolic < 80 {
        (BloodPressureStatus::Normal, RiskLevel::Low)
    } else if systolic < 130 && diastolic < 80 {
        (BloodPressureStatus::Elevated, RiskLevel::Medium)
    } else if systolic < 140 || diastolic < 90 {
        (BloodPressureStatus::Stage1Hypertension, RiskLevel::MediumHigh)
    } else {
        (BloodPressureStatus::Stage2Hypertension, RiskLevel::High)
    };

    CardiovascularResult { status, risk }
}

pub fn assess_respiratory(input: &RespiratoryInput) -> RespiratoryResult {
    let status = if input.spo2 >= 95 {
        RespiratoryStatus::Normal
    } else if input.spo2 >= 90 {
        RespiratoryStatus::MildHypoxemia
    } else {
        RespiratoryStatus::SevereHypoxemia
    };

    RespiratoryResult {
        status,
        spo2: input.spo2,
    }
}

/// The normal band 36.1..=37.2 is checked before the colder and warmer branches.
pub fn assess_temperature(input: &TemperatureInput) -> TemperatureResult {
    let celsius = input.celsius;

    let status = if (36.1..=37.2).contains(&celsius) {
        TemperatureStatus::Normal
    } else if celsius < 36.1 {
        TemperatureStatus::HypothermiaRisk
    } else if celsius <= 38.0 {
        TemperatureStatus::LowGradeFever
    } else {
        TemperatureStatus::Fever
    };

    TemperatureResult {
        status,
        temperature: celsius,
    }
}

/// Snellen screening; a smaller denominator means sharper vision.
pub fn assess_vision(input: &VisionInput) -> VisionResult {
    let denominator = input.acuity_denominator;

    let status = if denominator <= 20.0 {
        VisionStatus::Normal
    } else if denominator <= 30.0 {
        VisionStatus::MildImpairment
    } else if denominator <= 60.0 {
        VisionStatus::ModerateImpairment
    } else {
        VisionStatus::SevereImpairment
    };

    VisionResult {
        status,
        acuity: format!("20/{}", denominator.trunc() as i64),
    }
}

/// Ratios are taken against the number of readings supplied, not a fixed five.
pub fn assess_hearing(input: &HearingInput) -> HearingResult {
    let total = input.thresholds.len();
    let normal = input
        .thresholds
        .values()
        .filter(|threshold| **threshold <= NORMAL_HEARING_THRESHOLD)
        .count();

    let (count, size) = (normal as f64, total as f64);
    let status = if normal == total {
        HearingStatus::Normal
    } else if count >= size * 0.7 {
        HearingStatus::MildLoss
    } else if count >= size * 0.5 {
        HearingStatus::ModerateLoss
    } else {
        HearingStatus::SignificantLoss
    };

    HearingResult {
        status,
        normal_frequencies: normal,
    }
}
