//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::minutes::BucketCategory;
use crate::timeline::ReportPeriod;
use types::MatchId;

/// Event-log input shared between commands
#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON file with the ordered event log (or set `FUTSAL_MINUTES_EVENTS`).
    #[clap(long, short)]
    pub events: Option<PathBuf>,

    /// Only analyze this match when the log holds several.
    #[clap(long, short)]
    pub match_id: Option<MatchId>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lineup minutes per period and category.
    ///
    /// Credits the time between consecutive events to the lineup reported
    /// by the later event, then reports `MM:SS` and share of the period.
    Analyze {
        #[clap(flatten)]
        input: InputArgs,

        /// Only print this period (repeatable): `-p total -p first-half`.
        #[clap(short = 'p', long = "period")]
        periods: Option<Vec<ReportPeriod>>,

        /// Only print these categories (repeatable): `-c unitOfFour -c pair`.
        /// Defaults to goalkeepers, players, units of four and five.
        #[clap(short = 'c', long = "category")]
        categories: Option<Vec<BucketCategory>>,

        /// Print every category instead of the default selection.
        #[clap(long, conflicts_with = "categories")]
        all_categories: bool,

        /// Output results as JSON instead of tables.
        #[clap(long)]
        json: bool,
    },

    /// Per-event period, real time and effective time.
    Timeline {
        #[clap(flatten)]
        input: InputArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Real-time duration of each half and of the match.
    Durations {
        #[clap(flatten)]
        input: InputArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "futsal-minutes", about = "Futsal match timeline and lineup minutes")]
pub struct FutsalMinutes {
    /// Analysis config file (or set `FUTSAL_MINUTES_CONFIG`).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
