//! Input records: the ordered match event log.
//!
//! Events arrive from the hosted store export as a JSON array. Field names
//! follow either the English names used across this crate or the column
//! names of the source table (`posizione`, `evento`, `squadra`, `portiere`,
//! `quartetto` .. `quartetto_4`, `partita_id`).

use serde::Deserialize;
use serde_json::Value;

use crate::cli::types::MatchId;


/// Maximum number of movement-player slots carried by an event.
pub const MOVEMENT_SLOTS: usize = 5;

/// One record of the chronologically ordered event log.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    /// Raw clock text, `H:MM:SS[.fff]` or `MM:SS`.
    pub position: String,
    /// Free-text event type; only the period sentinels matter here.
    pub event_type: String,
    pub team: Option<String>,
    pub goalkeeper: Option<String>,
    /// Up to five movement-player slots, in source order.
    pub movement_slots: Vec<Option<String>>,
    pub match_id: Option<MatchId>,
}

impl Event {
    /// Create an event with a clock position and event type.
    pub fn new(position: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            event_type: event_type.into(),
            ..Self::default()
        }
    }

    /// Attach a goalkeeper.
    pub fn with_goalkeeper(mut self, goalkeeper: impl Into<String>) -> Self {
        self.goalkeeper = Some(goalkeeper.into());
        self
    }

    /// Fill the movement slots, keeping at most five.
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.movement_slots = players
            .into_iter()
            .take(MOVEMENT_SLOTS)
            .map(|p| Some(p.into()))
            .collect();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_match_id(mut self, match_id: MatchId) -> Self {
        self.match_id = Some(match_id);
        self
    }
}

/// Wire shape accepted for an event before slot columns are folded together.
#[derive(Debug, Default, Deserialize)]
struct RawEvent {
    #[serde(default, alias = "posizione")]
    position: Option<String>,
    #[serde(default, alias = "evento", alias = "eventType")]
    event_type: Option<String>,
    #[serde(default, alias = "squadra")]
    team: Option<String>,
    #[serde(default, alias = "portiere")]
    goalkeeper: Option<String>,
    #[serde(default, alias = "movementSlots")]
    movement_slots: Option<Vec<Option<String>>>,
    #[serde(default)]
    quartetto: Option<String>,
    #[serde(default)]
    quartetto_1: Option<String>,
    #[serde(default)]
    quartetto_2: Option<String>,
    #[serde(default)]
    quartetto_3: Option<String>,
    #[serde(default)]
    quartetto_4: Option<String>,
    #[serde(default, alias = "partita_id", alias = "matchId")]
    match_id: Option<Value>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let movement_slots = match raw.movement_slots {
            Some(slots) => slots.into_iter().take(MOVEMENT_SLOTS).collect(),
            None => vec![
                raw.quartetto,
                raw.quartetto_1,
                raw.quartetto_2,
                raw.quartetto_3,
                raw.quartetto_4,
            ],
        };

        let match_id = raw.match_id.and_then(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(MatchId::new(s)),
            Value::Number(n) => Some(MatchId::new(n.to_string())),
            _ => None,
        });

        Self {
            position: raw.position.unwrap_or_default(),
            event_type: raw.event_type.unwrap_or_default(),
            team: raw.team,
            goalkeeper: raw.goalkeeper,
            movement_slots,
            match_id,
        }
    }
}

/// The events of a single match, in log order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchLog {
    /// `None` for events that carry no match identifier.
    pub match_id: Option<MatchId>,
    pub events: Vec<Event>,
}

/// Partition a log into per-match sequences.
///
/// Matches appear in order of their first event; events keep their relative
/// order inside each match.
pub fn group_by_match(events: Vec<Event>) -> Vec<MatchLog> {
    let mut logs: Vec<MatchLog> = Vec::new();

    for event in events {
        match logs.iter_mut().find(|log| log.match_id == event.match_id) {
            Some(log) => log.events.push(event),
            None => logs.push(MatchLog {
                match_id: event.match_id.clone(),
                events: vec![event],
            }),
        }
    }

    logs
}
