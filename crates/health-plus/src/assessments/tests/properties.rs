use proptest::prelude::*;

use super::common::example_fields;
use crate::assessments::catalogue::{spec, FieldKind};
use crate::assessments::dispatch::{evaluate, evaluate_key};
use crate::assessments::fields::AssessmentFields;
use crate::assessments::inputs::{BmiInput, HearingInput, StrokeRiskInput};
use crate::assessments::key::AssessmentKey;
use crate::assessments::outcome::BmiCategory;
use crate::assessments::report::report_text;
use crate::assessments::rules::{assess_hearing, assess_stroke_risk, calculate_bmi};

/// Assessments scored as an additive factor screening.
fn screening_keys() -> Vec<AssessmentKey> {
    AssessmentKey::ALL
        .into_iter()
        .filter(|key| {
            evaluate_key(*key, &example_fields(*key))
                .map(|result| result.screening().is_some())
                .unwrap_or(false)
        })
        .collect()
}

fn flag_names(key: AssessmentKey) -> Vec<&'static str> {
    spec(key)
        .fields
        .iter()
        .filter(|field| field.kind == FieldKind::Flag)
        .map(|field| field.name)
        .collect()
}

fn yes_no(answer: bool) -> &'static str {
    if answer {
        "yes"
    } else {
        "no"
    }
}

#[test]
fn every_screening_has_flags_to_vary() {
    let keys = screening_keys();
    assert_eq!(keys.len(), 10);
    for key in keys {
        assert!(!flag_names(key).is_empty(), "{key} has no yes/no factors");
    }
}

proptest! {
    /// Adding a risk factor never lowers the stroke score or its tier.
    #[test]
    fn stroke_factors_only_raise_risk(
        age in 18..100i32,
        systolic in 90..200i32,
        diabetes in any::<bool>(),
        heart_disease in any::<bool>(),
    ) {
        let without = assess_stroke_risk(&StrokeRiskInput {
            age,
            systolic,
            smoking: false,
            diabetes,
            heart_disease,
        });
        let with = assess_stroke_risk(&StrokeRiskInput {
            age,
            systolic,
            smoking: true,
            diabetes,
            heart_disease,
        });

        prop_assert_eq!(with.risk_score, without.risk_score + 2);
        prop_assert!(with.risk >= without.risk);
    }

    /// Answering "yes" to any factor of any screening never lowers its score or tier.
    #[test]
    fn screening_flags_only_raise_risk(
        key_index in 0..10usize,
        answers in any::<u32>(),
        toggled in 0..16usize,
    ) {
        let key = screening_keys()[key_index];
        let flags = flag_names(key);
        let toggled = flags[toggled % flags.len()];

        let mut base = example_fields(key);
        for (position, name) in flags.iter().enumerate() {
            base.insert(*name, yes_no((answers >> position) & 1 == 1));
        }

        let without = evaluate_key(key, &base.clone().with(toggled, "no")).expect("scores");
        let with = evaluate_key(key, &base.with(toggled, "yes")).expect("scores");
        let (without, with) = match (without.screening(), with.screening()) {
            (Some(without), Some(with)) => (without.clone(), with.clone()),
            other => panic!("expected screening outcomes for {key}, got {other:?}"),
        };

        prop_assert!(
            with.risk_score >= without.risk_score,
            "{} scored lower with {} answered yes",
            key,
            toggled
        );
        prop_assert!(with.risk >= without.risk);
    }

    /// The category follows the unrounded index even when rounding crosses a cut.
    #[test]
    fn bmi_category_uses_unrounded_value(weight_kg in 30.0..200.0f64, height_m in 1.2..2.2f64) {
        let raw = weight_kg / (height_m * height_m);
        let result = calculate_bmi(&BmiInput { weight_kg, height_m });

        let expected = if raw < 18.5 {
            BmiCategory::Underweight
        } else if raw < 25.0 {
            BmiCategory::NormalWeight
        } else if raw < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        };
        prop_assert_eq!(result.category, expected);
        prop_assert!((result.value - raw).abs() <= 0.05 + f64::EPSILON * raw);
    }

    #[test]
    fn hearing_never_counts_more_than_supplied(
        readings in proptest::collection::vec(-10..120i32, 1..8),
    ) {
        let thresholds = readings
            .iter()
            .enumerate()
            .map(|(index, reading)| (format!("f{index}"), *reading))
            .collect();
        let result = assess_hearing(&HearingInput { thresholds });
        prop_assert!(result.normal_frequencies <= readings.len());
    }

    /// Evaluation is a pure function of its fields.
    #[test]
    fn evaluation_is_repeatable_and_reported(systolic in 60..220i32, diastolic in 40..140i32) {
        let fields = AssessmentFields::new()
            .with("systolic", systolic)
            .with("diastolic", diastolic);

        let first = evaluate("cardiovascular", &fields).expect("scores");
        let second = evaluate("cardiovascular", &fields).expect("scores");
        prop_assert_eq!(&first, &second);
        prop_assert!(report_text(Some(&first)).starts_with("Cardiovascular Health"));
    }

    #[test]
    fn every_assessment_repeats_on_its_examples(key_index in 0..AssessmentKey::ALL.len()) {
        let key = AssessmentKey::ALL[key_index];
        let fields = example_fields(key);

        let first = evaluate(key.slug(), &fields).expect("scores");
        let second = evaluate(key.slug(), &fields).expect("scores");
        prop_assert_eq!(&first, &second);
        prop_assert!(report_text(Some(&first)).starts_with(key.title()));
    }
}
