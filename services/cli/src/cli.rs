use crate::demo::{run_demo, DemoArgs};
use crate::infra::{parse_field, parse_output};
use crate::render;
use clap::{Args, Parser, Subcommand};
use health_plus::assessments::{self, AssessmentFields, AssessmentKey};
use health_plus::config::{AppConfig, OutputFormat};
use health_plus::error::AppError;
use health_plus::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "health-plus",
    about = "Score health self-assessments and review session results from the command line",
    version
)]
struct Cli {
    /// Output format (text or json). Overrides APP_OUTPUT.
    #[arg(long, global = true, value_parser = parse_output)]
    output: Option<OutputFormat>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every assessment with its input fields (default command)
    Catalogue(CatalogueArgs),
    /// Score one assessment from name=value fields
    Evaluate(EvaluateArgs),
    /// Walk through a session: sample results, a few submissions, and a reset
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogueArgs {
    /// Only describe this assessment (e.g. stroke-risk)
    pub(crate) key: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Assessment key, e.g. bmi or stroke-risk
    pub(crate) key: String,
    /// Field value as name=value; repeat for each field
    #[arg(long = "field", short = 'f', value_parser = parse_field)]
    pub(crate) fields: Vec<(String, String)>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let output = cli.output.unwrap_or(config.output);
    debug!(?config.environment, ?output, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Catalogue(CatalogueArgs::default()));

    match command {
        Command::Catalogue(args) => run_catalogue(args, output),
        Command::Evaluate(args) => run_evaluate(args, output),
        Command::Demo(args) => run_demo(args, output),
    }
}

fn run_catalogue(args: CatalogueArgs, output: OutputFormat) -> Result<(), AppError> {
    let specs = match args.key {
        Some(raw) => {
            let key: AssessmentKey = raw.parse()?;
            vec![assessments::spec(key)]
        }
        None => assessments::catalogue(),
    };

    render::catalogue(&specs, output)
}

fn run_evaluate(args: EvaluateArgs, output: OutputFormat) -> Result<(), AppError> {
    let fields: AssessmentFields = args.fields.into_iter().collect();
    let result = assessments::evaluate(&args.key, &fields)?;
    render::result(&result, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_the_default_command() {
        let cli = Cli::try_parse_from(["health-plus"]).expect("parses");
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn evaluate_collects_repeated_fields() {
        let cli = Cli::try_parse_from([
            "health-plus",
            "evaluate",
            "cardiovascular",
            "--field",
            "systolic=135",
            "-f",
            "diastolic=85",
            "--output",
            "json",
        ])
        .expect("parses");

        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.key, "cardiovascular");
                assert_eq!(
                    args.fields,
                    vec![
                        ("systolic".to_string(), "135".to_string()),
                        ("diastolic".to_string(), "85".to_string()),
                    ]
                );
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn malformed_field_is_rejected() {
        let parsed = Cli::try_parse_from(["health-plus", "evaluate", "bmi", "--field", "weight"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn demo_defaults_to_demo_session() {
        let cli = Cli::try_parse_from(["health-plus", "demo", "--skip-sample"]).expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.session, "demo");
                assert!(args.skip_sample);
            }
            other => panic!("expected demo command, got {other:?}"),
        }
    }
}
