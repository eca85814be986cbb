use crate::infra::InMemoryResultStore;
use crate::render;
use clap::Args;
use health_plus::assessments::AssessmentFields;
use health_plus::config::OutputFormat;
use health_plus::error::AppError;
use health_plus::sessions::{AssessmentSessionService, SessionId};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Session identifier used for the walkthrough.
    #[arg(long, default_value = "demo")]
    pub(crate) session: String,
    /// Skip loading the canned sample results.
    #[arg(long)]
    pub(crate) skip_sample: bool,
}

pub(crate) fn run_demo(args: DemoArgs, output: OutputFormat) -> Result<(), AppError> {
    let DemoArgs {
        session,
        skip_sample,
    } = args;

    let store = Arc::new(InMemoryResultStore::default());
    let service = AssessmentSessionService::new(store);
    let session = SessionId(session);
    let text = output == OutputFormat::Text;

    if text {
        println!("Health self-assessment demo (session {session})");
    }

    if !skip_sample {
        let loaded = service.load_sample(&session)?;
        if text {
            println!("\nLoaded {loaded} sample results");
        }
        render::overview(&service.overview(&session)?, output)?;
    }

    for (key, fields) in demo_submissions() {
        let entry = service.submit(&session, key, &fields)?;
        if text {
            println!(
                "\nSubmitted {}: {}",
                entry.key.title(),
                entry.result.classification()
            );
            if let Some(report) = &entry.report {
                println!("  {report}");
            }
        }
    }

    if text {
        println!();
    }
    render::overview(&service.overview(&session)?, output)?;

    service.clear(&session)?;
    if text {
        let remaining = service.overview(&session)?.completed();
        println!("\nSession cleared; {remaining} results remain");
    }

    Ok(())
}

fn demo_submissions() -> Vec<(&'static str, AssessmentFields)> {
    vec![
        (
            "bmi",
            AssessmentFields::new()
                .with("weight", "82")
                .with("height", "178"),
        ),
        (
            "stroke-risk",
            AssessmentFields::new()
                .with("age", "67")
                .with("systolic", "138")
                .with("smoking", "no")
                .with("diabetes", "yes"),
        ),
        (
            "hydration",
            AssessmentFields::new()
                .with("water_intake", "1.2")
                .with("urine_color", "yellow")
                .with("thirsty", "yes"),
        ),
    ]
}
