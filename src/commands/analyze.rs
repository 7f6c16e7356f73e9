//! Lineup minutes command implementation

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use super::common::{load_events, match_heading, select_matches};
use super::resolve_events_path;
use crate::{
    config::AnalysisConfig,
    minutes::{analyze_match, BucketCategory, MinutesReport},
    timeline::ReportPeriod,
    MatchId, Result,
};

/// Parameters for the analyze command
#[derive(Debug, Clone)]
pub struct AnalyzeParams {
    pub events: Option<PathBuf>,
    pub match_id: Option<MatchId>,
    pub periods: Option<Vec<ReportPeriod>>,
    pub categories: Option<Vec<BucketCategory>>,
    pub all_categories: bool,
    pub as_json: bool,
    pub config: AnalysisConfig,
}

impl AnalyzeParams {
    /// Categories to print: explicit selection, everything, or the dashboard set.
    pub fn selected_categories(&self) -> Vec<BucketCategory> {
        match (&self.categories, self.all_categories) {
            (Some(categories), _) => categories.clone(),
            (None, true) => BucketCategory::ALL.to_vec(),
            (None, false) => BucketCategory::DASHBOARD.to_vec(),
        }
    }

    pub fn selected_periods(&self) -> Vec<ReportPeriod> {
        self.periods
            .clone()
            .unwrap_or_else(|| ReportPeriod::ALL.to_vec())
    }
}

/// One match in JSON output
#[derive(Debug, Serialize)]
pub struct MatchMinutes {
    pub match_id: Option<MatchId>,
    pub report: MinutesReport,
}

/// Handle the analyze command
pub fn handle_analyze(params: AnalyzeParams) -> Result<()> {
    let path = resolve_events_path(params.events.clone())?;
    let events = load_events(&path)?;
    let logs = select_matches(events, params.match_id.as_ref())?;

    let periods = params.selected_periods();
    let categories = params.selected_categories();

    let results: Vec<MatchMinutes> = logs
        .iter()
        .map(|log| {
            let analysis = analyze_match(&log.events, &params.config);
            MatchMinutes {
                match_id: log.match_id.clone(),
                report: filter_report(&analysis.report, &periods, &categories),
            }
        })
        .collect();

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&results)?); // tarpaulin::skip
    } else {
        for (log, result) in logs.iter().zip(&results) {
            // tarpaulin::skip - console output
            println!("{}", match_heading(log));
            print!("{}", render_report(&result.report));
        }
    }

    Ok(())
}

/// Keep only the requested periods and categories.
pub fn filter_report(
    report: &MinutesReport,
    periods: &[ReportPeriod],
    categories: &[BucketCategory],
) -> MinutesReport {
    let periods = report
        .periods
        .iter()
        .filter(|(period, _)| periods.contains(period))
        .map(|(period, period_report)| {
            let mut filtered = period_report.clone();
            filtered
                .categories
                .retain(|category, _| categories.contains(category));
            (*period, filtered)
        })
        .collect();

    MinutesReport { periods }
}

/// Render a report as plain-text tables.
pub fn render_report(report: &MinutesReport) -> String {
    let mut out = String::new();

    for (period, period_report) in &report.periods {
        let _ = writeln!(
            out,
            "== {} ({}) ==",
            period.title(),
            period_report.total_minutes
        );

        if period_report.is_empty() {
            let _ = writeln!(out, "  (no lineup minutes)");
            continue;
        }

        for (category, rows) in &period_report.categories {
            let _ = writeln!(out, "  {}", category.title());
            for row in rows {
                let _ = writeln!(
                    out,
                    "    {:<48} {:>6} {:>4}%",
                    row.label(),
                    row.minutes,
                    row.percentage
                );
            }
        }
    }

    out
}
