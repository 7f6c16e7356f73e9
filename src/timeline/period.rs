//! Period segmentation from sentinel events.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::config::AnalysisConfig;
use crate::error::{MinutesError, Result};
use crate::models::Event;

/// Which part of the match an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    FirstHalf,
    /// Between the end of the first half and the second-half kickoff.
    Interval,
    SecondHalf,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::FirstHalf => write!(f, "1st half"),
            Period::Interval => write!(f, "Interval"),
            Period::SecondHalf => write!(f, "2nd half"),
        }
    }
}

/// Accumulation pool a report is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Total,
    FirstHalf,
    SecondHalf,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [
        ReportPeriod::Total,
        ReportPeriod::FirstHalf,
        ReportPeriod::SecondHalf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Total => "total",
            ReportPeriod::FirstHalf => "first-half",
            ReportPeriod::SecondHalf => "second-half",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportPeriod::Total => "Total",
            ReportPeriod::FirstHalf => "First half",
            ReportPeriod::SecondHalf => "Second half",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportPeriod {
    type Err = MinutesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "total" | "totale" => Ok(ReportPeriod::Total),
            "first-half" | "1t" | "primo-tempo" => Ok(ReportPeriod::FirstHalf),
            "second-half" | "2t" | "secondo-tempo" => Ok(ReportPeriod::SecondHalf),
            _ => Err(MinutesError::InvalidPeriod {
                name: s.to_string(),
            }),
        }
    }
}

/// Boundaries of the halves inside one match log, plus a period tag per
/// event index.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSegments {
    /// Index of the end-of-first-half sentinel; `None` in degraded mode.
    pub first_half_end: Option<usize>,
    /// First index of the second half; `None` when there is no second half.
    pub second_half_start: Option<usize>,
    /// Index of the end-of-match sentinel, or the last index as fallback.
    /// `None` only for an empty log.
    pub match_end: Option<usize>,
    tags: Vec<Period>,
}

impl PeriodSegments {
    /// Scan the ordered events for the period sentinels.
    ///
    /// Without an end-of-first-half sentinel the whole log is first half.
    /// Without an end-of-match sentinel the last event closes the match.
    pub fn segment(events: &[Event], config: &AnalysisConfig) -> Self {
        let len = events.len();

        let first_half_end = events
            .iter()
            .position(|e| config.is_first_half_end(&e.event_type));

        let match_end = events
            .iter()
            .position(|e| config.is_match_end(&e.event_type))
            .or_else(|| {
                if len > 0 {
                    tracing::warn!(
                        "No '{}' event found, using last event as end of match",
                        config.match_end
                    );
                }
                len.checked_sub(1)
            });

        let second_half_start = match first_half_end {
            Some(h) => {
                let kickoff = events
                    .iter()
                    .enumerate()
                    .skip(h + 1)
                    .find(|(_, e)| config.is_second_half_start(&e.event_type))
                    .map(|(i, _)| i);
                kickoff.or_else(|| (h + 1 < len).then_some(h + 1))
            }
            None => {
                if len > 0 {
                    tracing::warn!(
                        "No '{}' event found, treating the whole log as first half",
                        config.first_half_end
                    );
                }
                None
            }
        };

        let tags = (0..len)
            .map(|i| match (first_half_end, second_half_start) {
                (None, _) => Period::FirstHalf,
                (Some(h), _) if i <= h => Period::FirstHalf,
                (Some(_), Some(s)) if i >= s => Period::SecondHalf,
                _ => Period::Interval,
            })
            .collect();

        Self {
            first_half_end,
            second_half_start,
            match_end,
            tags,
        }
    }

    /// Number of events covered.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// True when the end-of-first-half sentinel was missing.
    pub fn is_degraded(&self) -> bool {
        self.first_half_end.is_none()
    }

    /// Period tag of an event; out-of-range indices have none.
    pub fn period_of(&self, index: usize) -> Option<Period> {
        self.tags.get(index).copied()
    }

    pub fn tags(&self) -> &[Period] {
        &self.tags
    }

    /// Index where the half containing `period` begins.
    pub fn half_start(&self, period: Period) -> Option<usize> {
        match period {
            Period::FirstHalf if !self.is_empty() => Some(0),
            Period::SecondHalf => self.second_half_start,
            _ => None,
        }
    }

    /// Index closing the first half: the sentinel, or the match end in
    /// degraded mode.
    pub fn first_half_close(&self) -> Option<usize> {
        self.first_half_end.or(self.match_end)
    }

    pub fn first_half_range(&self) -> Range<usize> {
        match self.first_half_end {
            Some(h) => 0..h + 1,
            None => 0..self.len(),
        }
    }

    pub fn second_half_range(&self) -> Range<usize> {
        match self.second_half_start {
            Some(s) => s..self.len(),
            None => self.len()..self.len(),
        }
    }

    /// Index range analyzed for a report period.
    pub fn window(&self, period: ReportPeriod) -> Range<usize> {
        match period {
            ReportPeriod::Total => 0..self.len(),
            ReportPeriod::FirstHalf => self.first_half_range(),
            ReportPeriod::SecondHalf => self.second_half_range(),
        }
    }
}
