//! Lineup extraction from per-event slot fields.

use std::collections::BTreeSet;

use crate::models::Event;


/// Players on the pitch as reported by one event.
///
/// `movement_players` is deduplicated and sorted, so the same unit is always
/// the same value regardless of slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LineupSnapshot {
    pub movement_players: Vec<String>,
    pub goalkeeper: Option<String>,
}

impl LineupSnapshot {
    /// Build a canonical snapshot from raw slot values.
    ///
    /// Values are trimmed; blanks are dropped. No roster check is made.
    pub fn new<I, S>(slots: I, goalkeeper: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let movement_players: BTreeSet<String> = slots
            .into_iter()
            .filter_map(|slot| clean_name(slot.as_ref()))
            .collect();

        Self {
            movement_players: movement_players.into_iter().collect(),
            goalkeeper: goalkeeper.and_then(clean_name),
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self::new(
            event.movement_slots.iter().flatten(),
            event.goalkeeper.as_deref(),
        )
    }

    /// Number of distinct movement players.
    pub fn len(&self) -> usize {
        self.movement_players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movement_players.is_empty()
    }
}

/// Snapshots for a whole event log, index-aligned with it.
pub fn extract_lineups(events: &[Event]) -> Vec<LineupSnapshot> {
    events.iter().map(LineupSnapshot::from_event).collect()
}

fn clean_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_string())
}
