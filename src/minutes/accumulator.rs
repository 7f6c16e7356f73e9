//! Lineup-minutes accumulation over consecutive event pairs.
//!
//! The duration between two consecutive events is credited to the lineup
//! reported by the *arriving* event: a row describes who was on the pitch
//! during the stretch of play that led up to it.

use std::collections::HashMap;
use std::ops::Range;

use super::bucket::{BucketCategory, BucketKey};
use crate::config::AnalysisConfig;
use crate::lineup::LineupSnapshot;
use crate::timeline::EventTiming;

/// Seconds credited per bucket over one analysis window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulation {
    /// Sum of every valid positive delta in the window, independent of
    /// lineup size.
    pub total_seconds: f64,
    pub buckets: HashMap<BucketKey, f64>,
    pub credited_intervals: usize,
    pub skipped_intervals: usize,
}

impl Accumulation {
    pub fn seconds(&self, key: &BucketKey) -> f64 {
        self.buckets.get(key).copied().unwrap_or(0.0)
    }

    fn credit(&mut self, key: BucketKey, delta: f64) {
        *self.buckets.entry(key).or_insert(0.0) += delta;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinutesAccumulator {
    goalkeeper_solo_credit: bool,
}

impl MinutesAccumulator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            goalkeeper_solo_credit: config.goalkeeper_solo_credit,
        }
    }

    /// Walk consecutive pairs inside `window` and credit each positive
    /// real-time delta.
    ///
    /// `timings` and `lineups` are index-aligned with the event log. Pairs
    /// touching a missing real time, or with a non-positive delta, add
    /// nothing to any bucket or to the total.
    pub fn accumulate(
        &self,
        timings: &[EventTiming],
        lineups: &[LineupSnapshot],
        window: Range<usize>,
    ) -> Accumulation {
        let mut acc = Accumulation::default();
        let end = window.end.min(timings.len()).min(lineups.len());

        for i in window.start..end.saturating_sub(1) {
            let (Some(from), Some(to)) = (timings[i].real_seconds, timings[i + 1].real_seconds)
            else {
                tracing::trace!("Skipping interval {}->{}: missing real time", i, i + 1);
                acc.skipped_intervals += 1;
                continue;
            };

            let delta = to - from;
            if delta <= 0.0 {
                tracing::trace!("Skipping interval {}->{}: delta {}", i, i + 1, delta);
                acc.skipped_intervals += 1;
                continue;
            }

            acc.total_seconds += delta;
            acc.credited_intervals += 1;
            self.credit_interval(&mut acc, delta, &lineups[i + 1]);
        }

        tracing::debug!(
            "Accumulated {:.1}s over {} intervals ({} skipped), {} buckets",
            acc.total_seconds,
            acc.credited_intervals,
            acc.skipped_intervals,
            acc.buckets.len()
        );

        acc
    }

    /// Credit one interval to every bucket the lineup participates in.
    pub fn credit_interval(&self, acc: &mut Accumulation, delta: f64, lineup: &LineupSnapshot) {
        let players = &lineup.movement_players;
        let goalkeeper = lineup.goalkeeper.as_deref();

        if players.is_empty() {
            if let (true, Some(g)) = (self.goalkeeper_solo_credit, goalkeeper) {
                acc.credit(BucketKey::goalkeeper(g), delta);
            }
            return;
        }

        if let Some(g) = goalkeeper {
            acc.credit(BucketKey::goalkeeper(g), delta);
        }

        for p in players {
            acc.credit(BucketKey::single(p), delta);
            if let Some(g) = goalkeeper {
                acc.credit(
                    BucketKey::new(BucketCategory::PlayerPairWithGoalkeeper, Some(g), &[p]),
                    delta,
                );
            }
        }

        match players.len() {
            4 => {
                for (a, p) in players.iter().enumerate() {
                    for q in &players[a + 1..] {
                        let pair = [p, q];
                        acc.credit(BucketKey::new(BucketCategory::Pair, None, &pair), delta);
                        if let Some(g) = goalkeeper {
                            acc.credit(
                                BucketKey::new(BucketCategory::PairWithGoalkeeper, Some(g), &pair),
                                delta,
                            );
                        }
                    }
                }

                acc.credit(BucketKey::new(BucketCategory::UnitOfFour, None, players), delta);
                if let Some(g) = goalkeeper {
                    acc.credit(
                        BucketKey::new(BucketCategory::UnitOfFourWithGoalkeeper, Some(g), players),
                        delta,
                    );
                }
            }
            3 => {
                let category = if goalkeeper.is_some() {
                    BucketCategory::TrioWithGoalkeeper
                } else {
                    BucketCategory::TrioWithoutGoalkeeper
                };
                acc.credit(BucketKey::new(category, None, players), delta);
            }
            5 if goalkeeper.is_none() => {
                acc.credit(
                    BucketKey::new(BucketCategory::UnitOfFiveNoGoalkeeper, None, players),
                    delta,
                );
            }
            _ => {}
        }
    }
}
