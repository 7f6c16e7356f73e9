//! Lineup minutes: bucket keys, accumulation and period reports.
//!
//! - `bucket`: categories and structural keys
//! - `accumulator`: credits consecutive-event deltas into buckets
//! - `report`: sorted `MM:SS` / percentage tables per period

pub mod accumulator;
pub mod bucket;
pub mod report;

#[cfg(test)]
mod tests;

use rayon::prelude::*;

pub use accumulator::{Accumulation, MinutesAccumulator};
pub use bucket::{BucketCategory, BucketKey};
pub use report::{build_period_report, percentage, BucketRow, MinutesReport, PeriodReport};

use crate::config::AnalysisConfig;
use crate::lineup::extract_lineups;
use crate::models::Event;
use crate::timeline::{MatchTimeline, ReportPeriod};

/// Full analysis of one match: normalized timeline plus minute tables.
#[derive(Debug, Clone)]
pub struct MatchAnalysis {
    pub timeline: MatchTimeline,
    pub report: MinutesReport,
}

/// Segment, normalize and accumulate one match log.
///
/// The three report periods are independent runs, each with its own
/// accumulator, and are computed in parallel.
pub fn analyze_match(events: &[Event], config: &AnalysisConfig) -> MatchAnalysis {
    let timeline = MatchTimeline::build(events, config);
    let lineups = extract_lineups(events);
    let accumulator = MinutesAccumulator::new(config);

    let periods = ReportPeriod::ALL[..]
        .par_iter()
        .map(|&period| {
            let window = timeline.segments.window(period);
            let acc = accumulator.accumulate(&timeline.timings, &lineups, window);
            (period, build_period_report(&acc))
        })
        .collect();

    MatchAnalysis {
        timeline,
        report: MinutesReport { periods },
    }
}
