//! Period durations command implementation

use serde::Serialize;
use std::path::PathBuf;

use super::common::{load_events, match_heading, select_matches};
use super::resolve_events_path;
use crate::{
    config::AnalysisConfig,
    timeline::{period_durations, MatchTimeline, PeriodDurations},
    MatchId, Result,
};

#[derive(Debug, Serialize)]
pub struct MatchDurations {
    pub match_id: Option<MatchId>,
    pub durations: PeriodDurations,
}

/// Handle the durations command
pub fn handle_durations(
    events: Option<PathBuf>,
    match_id: Option<MatchId>,
    as_json: bool,
    config: &AnalysisConfig,
) -> Result<()> {
    let path = resolve_events_path(events)?;
    let logs = select_matches(load_events(&path)?, match_id.as_ref())?;

    let results: Vec<MatchDurations> = logs
        .iter()
        .map(|log| MatchDurations {
            match_id: log.match_id.clone(),
            durations: period_durations(&MatchTimeline::build(&log.events, config)),
        })
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?); // tarpaulin::skip
        return Ok(());
    }

    for (log, result) in logs.iter().zip(&results) {
        // tarpaulin::skip - console output
        println!("{}", match_heading(log));
        for (label, mmss) in result.durations.rows() {
            println!("  {:<8} {}", label, mmss);
        }
    }

    Ok(())
}
