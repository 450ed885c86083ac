mod telemetry;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;
use web_audit_score::input::{load_profile, load_snapshot};
use web_audit_score::pipeline::stage5_report::{Stage5Input, write_reports};
use web_audit_score::report::format_composite;
use web_audit_score::{AuditMode, InputError, ReportError, ScoringProfile, score_with_mode};

#[derive(Debug, Parser)]
#[command(
    name = "web-audit-score",
    version,
    about = "Score a website audit snapshot into health composites and reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a snapshot JSON file and write reports.
    Run(RunArgs),
    /// Print the default scoring profile as JSON.
    Profile,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = AuditMode::Standard)]
    mode: AuditMode,
    /// Scoring profile JSON; missing fields keep their defaults.
    #[arg(long)]
    profile: Option<PathBuf>,
    #[arg(long)]
    log_json: bool,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "run failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Run(args) => run_audit(&args),
        Command::Profile => {
            let json = serde_json::to_string_pretty(&ScoringProfile::default_v1())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn run_audit(args: &RunArgs) -> Result<(), CliError> {
    telemetry::init_tracing(args.log_json, telemetry::level_for(args.verbose));

    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => ScoringProfile::default_v1(),
    };
    let snapshot = load_snapshot(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        mode = args.mode.label(),
        "scoring snapshot"
    );

    let score = score_with_mode(&snapshot, args.mode, &profile);
    write_reports(
        &Stage5Input {
            score: &score,
            mode: args.mode,
        },
        &args.out,
    )?;

    println!("Overall health: {}", format_composite(&score.overall_health));
    println!(
        "Technical health: {}",
        format_composite(&score.technical_health)
    );
    println!("Reports written to {}", args.out.display());
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
