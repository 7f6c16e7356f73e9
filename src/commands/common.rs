//! Shared loading and match selection for the command handlers.

use std::fs;
use std::path::Path;

use crate::{
    models::{group_by_match, Event, MatchLog},
    MatchId, MinutesError, Result,
};

/// Read an event log from a JSON array file.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let contents = fs::read_to_string(path)?;
    let events = parse_events(&contents)?;
    tracing::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Parse an event log from JSON text.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    if events.is_empty() {
        return Err(MinutesError::EmptyEventLog);
    }
    Ok(events)
}

/// Split a log into matches, keeping only `match_id` when given.
pub fn select_matches(events: Vec<Event>, match_id: Option<&MatchId>) -> Result<Vec<MatchLog>> {
    let logs = group_by_match(events);

    let Some(wanted) = match_id else {
        return Ok(logs);
    };

    let selected: Vec<MatchLog> = logs
        .into_iter()
        .filter(|log| log.match_id.as_ref() == Some(wanted))
        .collect();

    if selected.is_empty() {
        return Err(MinutesError::MatchNotFound {
            match_id: wanted.to_string(),
        });
    }
    Ok(selected)
}

/// Heading used when printing a match.
pub fn match_heading(log: &MatchLog) -> String {
    match &log.match_id {
        Some(id) => format!("Match {} ({} events)", id, log.events.len()),
        None => format!("Match ({} events)", log.events.len()),
    }
}
