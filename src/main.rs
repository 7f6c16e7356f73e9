//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use futsal_minutes::{
    cli::{Commands, FutsalMinutes},
    commands::{
        analyze::{handle_analyze, AnalyzeParams},
        durations::handle_durations,
        timeline::handle_timeline,
    },
    AnalysisConfig,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = FutsalMinutes::parse();
    init_logging(app.verbose);

    let config = AnalysisConfig::resolve(app.config.as_deref())
        .context("Failed to load analysis configuration")?;

    match app.command {
        Commands::Analyze {
            input,
            periods,
            categories,
            all_categories,
            json,
        } => handle_analyze(AnalyzeParams {
            events: input.events,
            match_id: input.match_id,
            periods,
            categories,
            all_categories,
            as_json: json,
            config,
        })?,

        Commands::Timeline { input, json } => {
            handle_timeline(input.events, input.match_id, json, &config)?
        }

        Commands::Durations { input, json } => {
            handle_durations(input.events, input.match_id, json, &config)?
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose {
        "futsal_minutes=debug"
    } else {
        "futsal_minutes=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
