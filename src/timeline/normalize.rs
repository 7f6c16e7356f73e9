//! Real and effective time per event.
//!
//! Real time is the clock distance from the kickoff of the event's half.
//! Effective time remaps each half onto a canonical length so that matches
//! with different stoppage patterns line up: the first half covers
//! `[0, half]`, the second `[half, 2 * half]`.

use serde::Serialize;

use super::clock::{clock_difference, format_mmss, format_optional_mmss, parse_clock};
use super::period::{Period, PeriodSegments};
use crate::config::AnalysisConfig;
use crate::models::Event;

/// Normalized times of a single event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTiming {
    pub period: Period,
    /// Seconds since the kickoff of the event's half; `None` in the
    /// interval or when either clock is unreadable.
    pub real_seconds: Option<f64>,
    /// Canonical progress through the match; `None` in the interval or when
    /// the event clock is unreadable.
    pub effective_seconds: Option<f64>,
}

impl EventTiming {
    pub fn real_clock(&self) -> String {
        format_optional_mmss(self.real_seconds)
    }

    pub fn effective_clock(&self) -> String {
        format_optional_mmss(self.effective_seconds)
    }
}

/// Segmented and normalized view of one match log.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchTimeline {
    pub segments: PeriodSegments,
    pub timings: Vec<EventTiming>,
}

impl MatchTimeline {
    pub fn build(events: &[Event], config: &AnalysisConfig) -> Self {
        let segments = PeriodSegments::segment(events, config);
        let timings = normalize(events, &segments, config.half_length_secs);
        Self { segments, timings }
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    pub fn real_seconds(&self, index: usize) -> Option<f64> {
        self.timings.get(index).and_then(|t| t.real_seconds)
    }
}

/// Compute real and effective times for every event.
pub fn normalize(events: &[Event], segments: &PeriodSegments, half_length: f64) -> Vec<EventTiming> {
    let clock_at = |index: Option<usize>| index.and_then(|i| parse_clock(&events.get(i)?.position));

    let first_start = clock_at(segments.half_start(Period::FirstHalf));
    let first_close = clock_at(segments.first_half_close());
    let second_start = clock_at(segments.second_half_start);
    let match_close = clock_at(segments.match_end);

    events
        .iter()
        .zip(segments.tags())
        .map(|(event, &period)| {
            let kickoff = segments
                .half_start(period)
                .and_then(|i| events.get(i))
                .map(|e| e.position.as_str());

            let real_seconds = kickoff
                .and_then(|start| clock_difference(start, &event.position))
                .map(|secs| secs.max(0.0));

            let t = parse_clock(&event.position);
            let effective_seconds = match period {
                Period::FirstHalf => {
                    t.map(|t| progress(t, first_start, first_close).unwrap_or(0.0) * half_length)
                }
                Period::SecondHalf => t.map(|t| {
                    half_length
                        + progress(t, second_start, match_close).unwrap_or(0.0) * half_length
                }),
                Period::Interval => None,
            };

            EventTiming {
                period,
                real_seconds,
                effective_seconds,
            }
        })
        .collect()
}

/// Fraction of `[start, end]` covered at `t`, clamped into `[0, 1]`.
/// `None` when the span is undefined or empty.
fn progress(t: f64, start: Option<f64>, end: Option<f64>) -> Option<f64> {
    let (start, end) = (start?, end?);
    let span = end - start;
    if span <= 0.0 {
        return None;
    }
    Some(((t - start) / span).clamp(0.0, 1.0))
}

/// Real-time length of each half and of the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodDurations {
    pub first_half_secs: f64,
    pub second_half_secs: f64,
    pub total_secs: f64,
}

impl PeriodDurations {
    /// `(label, MM:SS)` rows in display order.
    pub fn rows(&self) -> [(&'static str, String); 3] {
        [
            ("1st half", format_mmss(self.first_half_secs)),
            ("2nd half", format_mmss(self.second_half_secs)),
            ("Total", format_mmss(self.total_secs)),
        ]
    }
}

/// Duration of the first half (kickoff to its closing event), the second
/// half (kickoff to end of match) and their sum.
pub fn period_durations(timeline: &MatchTimeline) -> PeriodDurations {
    let segments = &timeline.segments;

    let first_half_secs = segments
        .first_half_close()
        .and_then(|i| timeline.real_seconds(i))
        .unwrap_or(0.0);

    let second_half_secs = match segments.match_end {
        Some(end) if segments.period_of(end) == Some(Period::SecondHalf) => {
            timeline.real_seconds(end).unwrap_or(0.0)
        }
        _ => 0.0,
    };

    PeriodDurations {
        first_half_secs,
        second_half_secs,
        total_secs: first_half_secs + second_half_secs,
    }
}
