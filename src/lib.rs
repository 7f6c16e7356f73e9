//! Futsal Match Minutes Library
//!
//! Normalizes a futsal match event log into per-half real and effective
//! time, and accumulates the minutes played by every lineup combination.
//!
//! ## Features
//!
//! - **Period Segmentation**: Locate halves and interval from sentinel events
//! - **Time Normalization**: Real time per half, effective time on a canonical 20' half
//! - **Lineup Minutes**: Goalkeepers, players, pairs, units of three, four and five
//! - **Period Reports**: `MM:SS` and share of the period, for total, 1T and 2T
//!
//! ## Quick Start
//!
//! ```rust
//! use futsal_minutes::{analyze_match, AnalysisConfig, BucketCategory, Event, ReportPeriod};
//!
//! let four = ["A", "B", "C", "D"];
//! let events = vec![
//!     Event::new("0:00:00", "Inizio").with_players(four).with_goalkeeper("G"),
//!     Event::new("0:05:00", "Tiro").with_players(four).with_goalkeeper("G"),
//!     Event::new("0:15:00", "Fine primo tempo").with_players(four).with_goalkeeper("G"),
//! ];
//!
//! let analysis = analyze_match(&events, &AnalysisConfig::default());
//! let first_half = analysis.report.period(ReportPeriod::FirstHalf).unwrap();
//! let unit = &first_half.rows(BucketCategory::UnitOfFour)[0];
//! assert_eq!(unit.minutes, "15:00");
//! assert_eq!(unit.percentage, 100);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FUTSAL_MINUTES_EVENTS=match.json
//! export FUTSAL_MINUTES_CONFIG=~/futsal.toml
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lineup;
pub mod minutes;
pub mod models;
pub mod timeline;

// Re-export commonly used types
pub use cli::types::MatchId;
pub use config::AnalysisConfig;
pub use error::{MinutesError, Result};
pub use lineup::LineupSnapshot;
pub use minutes::{analyze_match, BucketCategory, BucketKey, MatchAnalysis, MinutesReport};
pub use models::Event;
pub use timeline::{MatchTimeline, Period, ReportPeriod};

pub const EVENTS_ENV_VAR: &str = "FUTSAL_MINUTES_EVENTS";
pub const CONFIG_ENV_VAR: &str = "FUTSAL_MINUTES_CONFIG";
