//! Command implementations for the futsal minutes CLI

pub mod analyze;
pub mod common;
pub mod durations;
pub mod timeline;

use std::path::PathBuf;

use crate::{MinutesError, Result, EVENTS_ENV_VAR};

/// Resolve the events file from the CLI flag or the environment.
pub fn resolve_events_path(events: Option<PathBuf>) -> Result<PathBuf> {
    events
        .or_else(|| {
            std::env::var(EVENTS_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .ok_or_else(|| MinutesError::MissingEventsFile {
            env_var: EVENTS_ENV_VAR.to_string(),
        })
}
