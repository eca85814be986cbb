//! Additive weighted risk screenings.
//!
//! Each present factor adds a fixed number of points; the total is then
//! bucketed by the assessment's [`ScreeningScale`].

use super::super::inputs::{
    BreastCancerInput, Covid19Input, DiabetesInput, HepatitisBInput, HivInput, LiverProblemInput,
    MalariaInput, ProstateInput, RelativeCount, RelativeDegree, StrokeRiskInput,
    TuberculosisInput,
};
use super::super::outcome::{RiskLevel, ScreeningOutcome};
use super::{ScreeningScale, Tally, TierAdvice};

const STROKE_SCALE: ScreeningScale = ScreeningScale {
    high_from: 7,
    elevated_from: 4,
    elevated: RiskLevel::Medium,
    advice: TierAdvice {
        high: "Consult a healthcare provider promptly about stroke prevention",
        elevated: "Discuss blood pressure control and lifestyle changes with your doctor",
        low: "Maintain a healthy lifestyle and check your blood pressure regularly",
    },
};

const PROSTATE_SCALE: ScreeningScale = ScreeningScale {
    high_from: 7,
    elevated_from: 4,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Schedule a urology consultation and a PSA follow-up",
        elevated: "Discuss PSA screening with your doctor",
        low: "Continue routine check-ups",
    },
};

const HIV_SCALE: ScreeningScale = ScreeningScale {
    high_from: 6,
    elevated_from: 3,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Get an HIV test as soon as possible and ask about PEP or PrEP",
        elevated: "Get tested and consider PrEP and consistent condom use",
        low: "Keep practising safer sex and test periodically",
    },
};

const BREAST_CANCER_SCALE: ScreeningScale = ScreeningScale {
    high_from: 7,
    elevated_from: 4,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Book a clinical breast examination and discuss mammography or genetic counselling",
        elevated: "Discuss a screening schedule with your doctor",
        low: "Continue monthly self-examination and routine screening",
    },
};

const TUBERCULOSIS_SCALE: ScreeningScale = ScreeningScale {
    high_from: 8,
    elevated_from: 4,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Visit a clinic promptly for a sputum test and chest X-ray",
        elevated: "See a doctor for tuberculosis screening",
        low: "No strong tuberculosis indicators; see a doctor if a cough persists",
    },
};

const COVID19_SCALE: ScreeningScale = ScreeningScale {
    high_from: 7,
    elevated_from: 4,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Isolate, take a COVID-19 test and seek care if breathing worsens",
        elevated: "Take a COVID-19 test and limit contact with others",
        low: "Low likelihood of COVID-19; keep monitoring your symptoms",
    },
};

const MALARIA_SCALE: ScreeningScale = ScreeningScale {
    high_from: 7,
    elevated_from: 4,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Get a malaria blood test today",
        elevated: "See a healthcare provider for a malaria test",
        low: "Use mosquito protection and watch for fever",
    },
};

const LIVER_SCALE: ScreeningScale = ScreeningScale {
    high_from: 7,
    elevated_from: 4,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "See a doctor for liver function tests",
        elevated: "Reduce alcohol intake and consider a liver check-up",
        low: "Keep up a liver-friendly lifestyle",
    },
};

const HEPATITIS_B_SCALE: ScreeningScale = ScreeningScale {
    high_from: 7,
    elevated_from: 4,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Get tested for hepatitis B and speak to a doctor",
        elevated: "Consider hepatitis B testing and vaccination",
        low: "Keep your vaccinations up to date",
    },
};

const DIABETES_SCALE: ScreeningScale = ScreeningScale {
    high_from: 9,
    elevated_from: 5,
    elevated: RiskLevel::Moderate,
    advice: TierAdvice {
        high: "Get a blood glucose or HbA1c test soon",
        elevated: "Discuss diabetes screening and lifestyle changes with your doctor",
        low: "Keep a balanced diet and stay active",
    },
};

/// Non-laboratory stroke risk screening.
pub fn assess_stroke_risk(input: &StrokeRiskInput) -> ScreeningOutcome {
    let mut tally = Tally::default();

    if input.age >= 75 {
        tally.add(4);
    } else if input.age >= 65 {
        tally.add(2);
    }

    if input.systolic >= 140 {
        tally.add(2);
    } else if input.systolic >= 130 {
        tally.add(1);
    }

    tally.add_if(input.smoking, 2);
    tally.add_if(input.diabetes, 2);
    tally.add_if(input.heart_disease, 3);

    STROKE_SCALE.classify(tally.score())
}

pub fn assess_prostate(input: &ProstateInput) -> ScreeningOutcome {
    let mut tally = Tally::default();

    if input.age >= 70 {
        tally.add(3);
    } else if input.age >= 60 {
        tally.add(2);
    } else if input.age >= 50 {
        tally.add(1);
    }

    tally.add(match input.family_history {
        RelativeCount::None => 0,
        RelativeCount::One => 2,
        RelativeCount::Multiple => 3,
    });
    tally.add_if(input.african_ancestry, 2);
    tally.add_if(input.urinary_symptoms, 1);

    if let Some(psa) = input.psa_level {
        if psa >= 10.0 {
            tally.add(4);
        } else if psa >= 4.0 {
            tally.add(2);
        } else if psa >= 2.5 {
            tally.add(1);
        }
    }

    PROSTATE_SCALE.classify(tally.score())
}

pub fn assess_hiv(input: &HivInput) -> ScreeningOutcome {
    let mut tally = Tally::default();
    tally.add_if(input.unprotected_sex, 3);
    tally.add_if(input.multiple_partners, 2);
    tally.add_if(input.shared_needles, 4);
    tally.add_if(input.sti_history, 2);
    tally.add_if(input.partner_positive, 4);
    tally.add_if(input.symptoms, 1);

    HIV_SCALE.classify(tally.score())
}

pub fn assess_breast_cancer(input: &BreastCancerInput) -> ScreeningOutcome {
    let mut tally = Tally::default();

    if input.age >= 50 {
        tally.add(2);
    } else if input.age >= 40 {
        tally.add(1);
    }

    tally.add(match input.family_history {
        RelativeDegree::None => 0,
        RelativeDegree::SecondDegree => 1,
        RelativeDegree::FirstDegree => 3,
    });
    tally.add_if(input.brca_mutation, 4);
    tally.add_if(input.previous_biopsy, 1);
    tally.add_if(input.early_menstruation, 1);
    tally.add_if(input.breast_changes, 3);

    BREAST_CANCER_SCALE.classify(tally.score())
}

pub fn assess_tuberculosis(input: &TuberculosisInput) -> ScreeningOutcome {
    let mut tally = Tally::default();
    tally.add_if(input.persistent_cough, 3);
    tally.add_if(input.coughing_blood, 4);
    tally.add_if(input.night_sweats, 2);
    tally.add_if(input.weight_loss, 2);
    tally.add_if(input.fever, 1);
    tally.add_if(input.tb_contact, 3);
    tally.add_if(input.weakened_immunity, 2);

    TUBERCULOSIS_SCALE.classify(tally.score())
}

pub fn assess_covid19(input: &Covid19Input) -> ScreeningOutcome {
    let mut tally = Tally::default();
    tally.add_if(input.fever, 2);
    tally.add_if(input.dry_cough, 2);
    tally.add_if(input.loss_of_taste_smell, 3);
    tally.add_if(input.breathing_difficulty, 3);
    tally.add_if(input.fatigue, 1);
    tally.add_if(input.known_contact, 3);

    COVID19_SCALE.classify(tally.score())
}

pub fn assess_malaria(input: &MalariaInput) -> ScreeningOutcome {
    let mut tally = Tally::default();
    tally.add_if(input.fever, 3);
    tally.add_if(input.chills, 2);
    tally.add_if(input.headache, 1);
    tally.add_if(input.sweating, 1);
    tally.add_if(input.nausea, 1);
    tally.add_if(input.endemic_travel, 4);

    MALARIA_SCALE.classify(tally.score())
}

pub fn assess_liver_problem(input: &LiverProblemInput) -> ScreeningOutcome {
    let mut tally = Tally::default();

    if input.alcohol_units_per_week >= 21 {
        tally.add(3);
    } else if input.alcohol_units_per_week >= 14 {
        tally.add(2);
    }

    tally.add_if(input.jaundice, 4);
    tally.add_if(input.abdominal_pain, 2);
    tally.add_if(input.dark_urine, 2);
    tally.add_if(input.fatigue, 1);
    tally.add_if(input.hepatitis_history, 3);

    LIVER_SCALE.classify(tally.score())
}

pub fn assess_hepatitis_b(input: &HepatitisBInput) -> ScreeningOutcome {
    let mut tally = Tally::default();
    tally.add_if(input.unvaccinated, 2);
    tally.add_if(input.household_contact, 3);
    tally.add_if(input.unprotected_sex, 2);
    tally.add_if(input.shared_needles, 4);
    tally.add_if(input.needlestick_exposure, 2);
    tally.add_if(input.jaundice, 3);

    HEPATITIS_B_SCALE.classify(tally.score())
}

pub fn assess_diabetes(input: &DiabetesInput) -> ScreeningOutcome {
    let mut tally = Tally::default();

    if input.age >= 45 {
        tally.add(2);
    } else if input.age >= 35 {
        tally.add(1);
    }

    if input.bmi >= 30.0 {
        tally.add(3);
    } else if input.bmi >= 25.0 {
        tally.add(2);
    }

    tally.add_if(input.family_history, 2);
    tally.add_if(input.physically_inactive, 1);
    tally.add_if(input.high_blood_pressure, 2);
    tally.add_if(input.gestational_diabetes, 1);
    tally.add_if(input.excessive_thirst, 2);

    DIABETES_SCALE.classify(tally.score())
}
