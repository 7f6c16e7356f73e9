//! Per-period minute tables built from accumulated buckets.

use serde::Serialize;
use std::collections::BTreeMap;

use super::accumulator::Accumulation;
use super::bucket::BucketCategory;
use crate::timeline::{format_mmss, ReportPeriod};

/// One line of a category table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goalkeeper: Option<String>,
    pub players: Vec<String>,
    pub seconds: f64,
    /// `MM:SS` of `seconds`.
    pub minutes: String,
    /// Integer share of the period total, in `[0, 100]`.
    pub percentage: u32,
}

impl BucketRow {
    /// Identities joined for display, goalkeeper first.
    pub fn label(&self) -> String {
        match &self.goalkeeper {
            Some(g) if self.players.is_empty() => g.clone(),
            Some(g) => format!("{} | {}", g, self.players.join(", ")),
            None => self.players.join(", "),
        }
    }
}

/// Tables for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodReport {
    pub total_seconds: f64,
    pub total_minutes: String,
    /// Only categories with at least one credited bucket appear.
    pub categories: BTreeMap<BucketCategory, Vec<BucketRow>>,
}

impl PeriodReport {
    pub fn rows(&self, category: BucketCategory) -> &[BucketRow] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Tables for every period of one match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MinutesReport {
    pub periods: BTreeMap<ReportPeriod, PeriodReport>,
}

impl MinutesReport {
    pub fn period(&self, period: ReportPeriod) -> Option<&PeriodReport> {
        self.periods.get(&period)
    }
}

/// `round(100 * seconds / total)`, clamped into `[0, 100]`; 0 when the
/// total is not positive.
pub fn percentage(seconds: f64, total: f64) -> u32 {
    if total.is_nan() || total <= 0.0 || !seconds.is_finite() {
        return 0;
    }
    (100.0 * seconds / total).round().clamp(0.0, 100.0) as u32
}

/// Format an accumulation into sorted category tables.
///
/// Rows are ordered by descending seconds, ties by identities.
pub fn build_period_report(acc: &Accumulation) -> PeriodReport {
    let total = acc.total_seconds;
    if total <= 0.0 {
        tracing::warn!("Period has no elapsed time, percentages reported as 0");
    }

    let mut categories: BTreeMap<BucketCategory, Vec<BucketRow>> = BTreeMap::new();
    for (key, &seconds) in &acc.buckets {
        categories.entry(key.category).or_default().push(BucketRow {
            goalkeeper: key.goalkeeper.clone(),
            players: key.players.clone(),
            seconds,
            minutes: format_mmss(seconds),
            percentage: percentage(seconds, total),
        });
    }

    for rows in categories.values_mut() {
        rows.sort_by(|a, b| {
            b.seconds
                .partial_cmp(&a.seconds)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.goalkeeper.cmp(&b.goalkeeper))
                .then_with(|| a.players.cmp(&b.players))
        });
    }

    PeriodReport {
        total_seconds: total,
        total_minutes: format_mmss(total),
        categories,
    }
}
