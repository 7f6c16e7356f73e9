//! Error types for the futsal minutes analyzer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MinutesError>;

/// Errors raised at the I/O and configuration edges.
///
/// The timeline and accumulation core never fails on malformed rows; a bad
/// timestamp or lineup only removes that interval from the totals.
#[derive(Error, Debug)]
pub enum MinutesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Events file not provided and {env_var} environment variable not set")]
    MissingEventsFile { env_var: String },

    #[error("Event log is empty")]
    EmptyEventLog,

    #[error("Match not found in event log: {match_id}")]
    MatchNotFound { match_id: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid match ID: match IDs cannot be blank")]
    InvalidMatchId,

    #[error("Invalid period: {name}")]
    InvalidPeriod { name: String },

    #[error("Invalid bucket category: {name}")]
    InvalidCategory { name: String },
}
