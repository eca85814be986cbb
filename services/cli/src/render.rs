use health_plus::assessments::{
    report_text, AssessmentResult, AssessmentSpec, FieldKind, FieldRequirement,
};
use health_plus::config::OutputFormat;
use health_plus::error::AppError;
use health_plus::sessions::SessionOverview;
use serde_json::json;

pub(crate) fn catalogue(specs: &[AssessmentSpec], output: OutputFormat) -> Result<(), AppError> {
    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(specs)?);
        return Ok(());
    }

    for spec in specs {
        println!("{} ({})", spec.title, spec.key);
        for field in spec.fields {
            let requirement = match field.requirement {
                FieldRequirement::Required => "required".to_string(),
                FieldRequirement::Optional(default) => format!("optional, default {default}"),
            };
            println!(
                "  - {:<22} {:<8} {}; {}",
                field.name,
                kind_label(field.kind),
                requirement,
                field.description
            );
        }
    }
    Ok(())
}

pub(crate) fn result(result: &AssessmentResult, output: OutputFormat) -> Result<(), AppError> {
    let report = report_text(Some(result));

    if output == OutputFormat::Json {
        let body = json!({ "result": result, "report": report });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}: {}", result.key().title(), result.classification());
    if let Some(outcome) = result.screening() {
        println!("- risk score {} ({})", outcome.risk_score, outcome.risk);
    }
    if let Some(recommendation) = result.recommendation() {
        println!("- recommendation: {recommendation}");
    }
    println!("\n{report}");
    Ok(())
}

pub(crate) fn overview(overview: &SessionOverview, output: OutputFormat) -> Result<(), AppError> {
    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(overview)?);
        return Ok(());
    }

    let banner = if overview.sample { " [sample data]" } else { "" };
    println!(
        "Results: {}/{} assessments completed{banner}",
        overview.completed(),
        overview.entries.len()
    );
    for entry in &overview.entries {
        match &entry.stored {
            Some(stored) => println!(
                "  - {:<24} {} (recorded {})",
                entry.title,
                stored.result.classification(),
                stored.recorded_at.format("%Y-%m-%d %H:%M")
            ),
            None => println!("  - {:<24} not assessed", entry.title),
        }
    }
    Ok(())
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Integer => "integer",
        FieldKind::Float => "number",
        FieldKind::Text => "text",
        FieldKind::Flag => "yes/no",
    }
}
