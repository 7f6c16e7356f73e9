//! Timeline command implementation

use serde::Serialize;
use std::path::PathBuf;

use super::common::{load_events, match_heading, select_matches};
use super::resolve_events_path;
use crate::{
    config::AnalysisConfig,
    models::{Event, MatchLog},
    timeline::{MatchTimeline, Period},
    MatchId, Result,
};

/// One event with its normalized times
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub index: usize,
    pub period: Period,
    pub event_type: String,
    pub team: Option<String>,
    /// `MM:SS` since the kickoff of the half, blank when unknown.
    pub real_time: String,
    /// `MM:SS` on the canonical match clock, blank when unknown.
    pub effective_time: String,
}

/// Build timeline rows for one match.
pub fn timeline_rows(events: &[Event], config: &AnalysisConfig) -> Vec<TimelineRow> {
    let timeline = MatchTimeline::build(events, config);

    events
        .iter()
        .zip(&timeline.timings)
        .enumerate()
        .map(|(index, (event, timing))| TimelineRow {
            index,
            period: timing.period,
            event_type: event.event_type.clone(),
            team: event.team.clone(),
            real_time: timing.real_clock(),
            effective_time: timing.effective_clock(),
        })
        .collect()
}

/// One match in JSON output
#[derive(Debug, Serialize)]
pub struct MatchTimelineRows {
    pub match_id: Option<MatchId>,
    pub rows: Vec<TimelineRow>,
}

/// Build timeline rows for every selected match.
pub fn match_timelines(logs: &[MatchLog], config: &AnalysisConfig) -> Vec<MatchTimelineRows> {
    logs.iter()
        .map(|log| MatchTimelineRows {
            match_id: log.match_id.clone(),
            rows: timeline_rows(&log.events, config),
        })
        .collect()
}

/// Handle the timeline command
pub fn handle_timeline(
    events: Option<PathBuf>,
    match_id: Option<MatchId>,
    as_json: bool,
    config: &AnalysisConfig,
) -> Result<()> {
    let path = resolve_events_path(events)?;
    let logs = select_matches(load_events(&path)?, match_id.as_ref())?;

    let results = match_timelines(&logs, config);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?); // tarpaulin::skip
        return Ok(());
    }

    for (log, result) in logs.iter().zip(&results) {
        // tarpaulin::skip - console output
        println!("{}", match_heading(log));
        for row in &result.rows {
            println!(
                "{:>5} {:<8} {:>6} {:>6}  {} {}",
                row.index,
                row.period.to_string(),
                row.real_time,
                row.effective_time,
                row.event_type,
                row.team.as_deref().unwrap_or(""),
            );
        }
    }

    Ok(())
}
