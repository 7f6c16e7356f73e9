//! Unit tests for bucket keys, accumulation and period reports

use super::*;
use crate::lineup::LineupSnapshot;
use crate::timeline::{EventTiming, Period};

const FIRST_HALF_END: &str = "Fine primo tempo";
const MATCH_END: &str = "Fine partita";

fn play(position: &str, event_type: &str, players: &[&str], goalkeeper: Option<&str>) -> Event {
    let event = Event::new(position, event_type).with_players(players.iter().copied());
    match goalkeeper {
        Some(g) => event.with_goalkeeper(g),
        None => event,
    }
}

fn timing(real: Option<f64>) -> EventTiming {
    EventTiming {
        period: Period::FirstHalf,
        real_seconds: real,
        effective_seconds: None,
    }
}

fn quartet_half() -> Vec<Event> {
    let four = ["A", "B", "C", "D"];
    vec![
        play("0:00:00", "Inizio", &four, Some("G")),
        play("0:05:00", "Tiro", &four, Some("G")),
        play("0:15:00", FIRST_HALF_END, &four, Some("G")),
    ]
}

#[cfg(test)]
mod bucket_tests {
    use super::*;

    #[test]
    fn test_category_parse_variants() {
        assert_eq!(
            "unitOfFour".parse::<BucketCategory>().unwrap(),
            BucketCategory::UnitOfFour
        );
        assert_eq!(
            "unit-of-four".parse::<BucketCategory>().unwrap(),
            BucketCategory::UnitOfFour
        );
        assert_eq!(
            "TRIO_WITH_GOALKEEPER".parse::<BucketCategory>().unwrap(),
            BucketCategory::TrioWithGoalkeeper
        );
        assert!("quintet".parse::<BucketCategory>().is_err());
    }

    #[test]
    fn test_category_round_trips_through_display() {
        for category in BucketCategory::ALL {
            assert_eq!(category.to_string().parse::<BucketCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_serializes_camel_case() {
        let json = serde_json::to_string(&BucketCategory::UnitOfFiveNoGoalkeeper).unwrap();
        assert_eq!(json, "\"unitOfFiveNoGoalkeeper\"");
    }

    #[test]
    fn test_bucket_key_sorts_players() {
        let a = BucketKey::new(BucketCategory::Pair, None, &["Z", "A"]);
        let b = BucketKey::new(BucketCategory::Pair, None, &["A", "Z"]);
        assert_eq!(a, b);
        assert_eq!(a.players, vec!["A", "Z"]);
    }

    #[test]
    fn test_bucket_key_identities_goalkeeper_first() {
        let key = BucketKey::new(BucketCategory::PairWithGoalkeeper, Some("G"), &["B", "A"]);
        assert_eq!(key.identities(), vec!["G", "A", "B"]);
        assert_eq!(BucketKey::goalkeeper("G").identities(), vec!["G"]);
    }

    #[test]
    fn test_keyed_by_goalkeeper() {
        assert!(BucketCategory::Goalkeeper.keyed_by_goalkeeper());
        assert!(BucketCategory::UnitOfFourWithGoalkeeper.keyed_by_goalkeeper());
        assert!(!BucketCategory::TrioWithGoalkeeper.keyed_by_goalkeeper());
        assert!(!BucketCategory::SinglePlayer.keyed_by_goalkeeper());
    }
}

#[cfg(test)]
mod accumulator_tests {
    use super::*;

    fn accumulator() -> MinutesAccumulator {
        MinutesAccumulator::new(&AnalysisConfig::default())
    }

    #[test]
    fn test_arriving_lineup_receives_credit() {
        let timings = vec![timing(Some(0.0)), timing(Some(60.0))];
        let lineups = vec![
            LineupSnapshot::new(["X"], None),
            LineupSnapshot::new(["Y"], None),
        ];

        let acc = accumulator().accumulate(&timings, &lineups, 0..2);
        assert_eq!(acc.seconds(&BucketKey::single("Y")), 60.0);
        assert_eq!(acc.seconds(&BucketKey::single("X")), 0.0);
    }

    #[test]
    fn test_unit_of_four_full_breakdown() {
        let mut acc = Accumulation::default();
        let lineup = LineupSnapshot::new(["D", "B", "A", "C"], Some("G"));
        accumulator().credit_interval(&mut acc, 30.0, &lineup);

        let count = |category: BucketCategory| {
            acc.buckets.keys().filter(|k| k.category == category).count()
        };
        assert_eq!(count(BucketCategory::Goalkeeper), 1);
        assert_eq!(count(BucketCategory::SinglePlayer), 4);
        assert_eq!(count(BucketCategory::PlayerPairWithGoalkeeper), 4);
        assert_eq!(count(BucketCategory::Pair), 6);
        assert_eq!(count(BucketCategory::PairWithGoalkeeper), 6);
        assert_eq!(count(BucketCategory::UnitOfFour), 1);
        assert_eq!(count(BucketCategory::UnitOfFourWithGoalkeeper), 1);
        assert_eq!(count(BucketCategory::TrioWithGoalkeeper), 0);

        let unit = BucketKey::new(
            BucketCategory::UnitOfFourWithGoalkeeper,
            Some("G"),
            &["A", "B", "C", "D"],
        );
        assert_eq!(acc.seconds(&unit), 30.0);
        // Accumulation totals are advanced by `accumulate`, not per credit.
        assert_eq!(acc.total_seconds, 0.0);
    }

    #[test]
    fn test_unit_of_four_without_goalkeeper() {
        let mut acc = Accumulation::default();
        let lineup = LineupSnapshot::new(["A", "B", "C", "D"], None);
        accumulator().credit_interval(&mut acc, 10.0, &lineup);

        assert!(acc.buckets.keys().all(|k| k.goalkeeper.is_none()));
        assert_eq!(acc.buckets.len(), 4 + 6 + 1);
    }

    #[test]
    fn test_trio_buckets() {
        let mut acc = Accumulation::default();
        accumulator().credit_interval(&mut acc, 5.0, &LineupSnapshot::new(["A", "B", "C"], Some("G")));
        accumulator().credit_interval(&mut acc, 7.0, &LineupSnapshot::new(["A", "B", "C"], None));

        let trio = ["A", "B", "C"];
        assert_eq!(
            acc.seconds(&BucketKey::new(BucketCategory::TrioWithGoalkeeper, None, &trio)),
            5.0
        );
        assert_eq!(
            acc.seconds(&BucketKey::new(BucketCategory::TrioWithoutGoalkeeper, None, &trio)),
            7.0
        );
        assert_eq!(acc.seconds(&BucketKey::single("A")), 12.0);
        assert!(!acc.buckets.keys().any(|k| k.category == BucketCategory::Pair));
    }

    #[test]
    fn test_five_players_with_goalkeeper_gets_no_unit_credit() {
        let mut acc = Accumulation::default();
        let lineup = LineupSnapshot::new(["A", "B", "C", "D", "E"], Some("G"));
        accumulator().credit_interval(&mut acc, 10.0, &lineup);

        assert!(!acc
            .buckets
            .keys()
            .any(|k| k.category == BucketCategory::UnitOfFiveNoGoalkeeper));
        assert_eq!(acc.seconds(&BucketKey::goalkeeper("G")), 10.0);
        assert_eq!(acc.seconds(&BucketKey::single("E")), 10.0);
    }

    #[test]
    fn test_pair_only_gets_singles() {
        let mut acc = Accumulation::default();
        accumulator().credit_interval(&mut acc, 10.0, &LineupSnapshot::new(["A", "B"], None));
        assert_eq!(acc.buckets.len(), 2);
    }

    #[test]
    fn test_goalkeeper_alone_not_credited_by_default() {
        let mut acc = Accumulation::default();
        accumulator().credit_interval(&mut acc, 10.0, &LineupSnapshot::new(Vec::<&str>::new(), Some("G")));
        assert!(acc.buckets.is_empty());
    }

    #[test]
    fn test_goalkeeper_solo_credit_switch() {
        let config = AnalysisConfig {
            goalkeeper_solo_credit: true,
            ..AnalysisConfig::default()
        };
        let timings = vec![timing(Some(0.0)), timing(Some(45.0))];
        let lineups = vec![
            LineupSnapshot::default(),
            LineupSnapshot::new(Vec::<&str>::new(), Some("G")),
        ];

        let acc = MinutesAccumulator::new(&config).accumulate(&timings, &lineups, 0..2);
        assert_eq!(acc.seconds(&BucketKey::goalkeeper("G")), 45.0);
        assert_eq!(acc.total_seconds, 45.0);
        assert_eq!(acc.buckets.len(), 1);
    }

    #[test]
    fn test_invalid_and_non_positive_deltas_skipped() {
        let timings = vec![
            timing(Some(0.0)),
            timing(Some(100.0)),
            timing(None),
            timing(Some(200.0)),
            timing(Some(150.0)),
            timing(Some(150.0)),
            timing(Some(170.0)),
        ];
        let lineups = vec![LineupSnapshot::new(["A"], None); timings.len()];

        let acc = accumulator().accumulate(&timings, &lineups, 0..timings.len());
        // 0->100 and 150->170 are the only valid positive intervals.
        assert_eq!(acc.total_seconds, 120.0);
        assert_eq!(acc.seconds(&BucketKey::single("A")), 120.0);
        assert_eq!(acc.credited_intervals, 2);
        assert_eq!(acc.skipped_intervals, 4);
    }

    #[test]
    fn test_window_bounds_respected() {
        let timings: Vec<EventTiming> = [0.0, 10.0, 30.0, 60.0].iter().map(|t| timing(Some(*t))).collect();
        let lineups = vec![LineupSnapshot::new(["A"], None); 4];

        let acc = accumulator().accumulate(&timings, &lineups, 1..3);
        assert_eq!(acc.total_seconds, 20.0);

        let acc = accumulator().accumulate(&timings, &lineups, 2..100);
        assert_eq!(acc.total_seconds, 30.0);

        let acc = accumulator().accumulate(&timings, &lineups, 4..4);
        assert_eq!(acc.total_seconds, 0.0);
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(450.0, 900.0), 50);
        assert_eq!(percentage(900.0, 900.0), 100);
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(2.0, 3.0), 67);
        assert_eq!(percentage(10.0, 0.0), 0);
        assert_eq!(percentage(10.0, f64::NAN), 0);
        assert_eq!(percentage(1000.0, 900.0), 100);
    }

    #[test]
    fn test_rows_sorted_by_descending_seconds() {
        let mut acc = Accumulation {
            total_seconds: 100.0,
            ..Accumulation::default()
        };
        acc.buckets.insert(BucketKey::single("B"), 40.0);
        acc.buckets.insert(BucketKey::single("A"), 40.0);
        acc.buckets.insert(BucketKey::single("C"), 90.0);

        let report = build_period_report(&acc);
        let rows = report.rows(BucketCategory::SinglePlayer);
        let names: Vec<String> = rows.iter().map(BucketRow::label).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(rows[0].minutes, "01:30");
        assert_eq!(rows[0].percentage, 90);
        assert_eq!(report.total_minutes, "01:40");
        assert!(report.rows(BucketCategory::Pair).is_empty());
    }

    #[test]
    fn test_row_label() {
        let row = BucketRow {
            goalkeeper: Some("G".to_string()),
            players: vec!["A".to_string(), "B".to_string()],
            seconds: 1.0,
            minutes: "00:01".to_string(),
            percentage: 1,
        };
        assert_eq!(row.label(), "G | A, B");

        let keeper_only = BucketRow {
            players: Vec::new(),
            ..row.clone()
        };
        assert_eq!(keeper_only.label(), "G");
    }

    #[test]
    fn test_empty_accumulation_report() {
        let report = build_period_report(&Accumulation::default());
        assert!(report.is_empty());
        assert_eq!(report.total_seconds, 0.0);
        assert_eq!(report.total_minutes, "00:00");
    }
}

#[cfg(test)]
mod analysis_tests {
    use super::*;

    #[test]
    fn test_quartet_full_first_half() {
        let analysis = analyze_match(&quartet_half(), &AnalysisConfig::default());
        let first = analysis.report.period(ReportPeriod::FirstHalf).unwrap();

        assert_eq!(first.total_seconds, 900.0);
        let unit = &first.rows(BucketCategory::UnitOfFour)[0];
        assert_eq!(unit.players, vec!["A", "B", "C", "D"]);
        assert_eq!(unit.seconds, 900.0);
        assert_eq!(unit.minutes, "15:00");
        assert_eq!(unit.percentage, 100);

        let keeper = &first.rows(BucketCategory::Goalkeeper)[0];
        assert_eq!(keeper.goalkeeper.as_deref(), Some("G"));
        assert_eq!(keeper.percentage, 100);

        for row in first.rows(BucketCategory::SinglePlayer) {
            assert_eq!(row.seconds, 900.0);
        }

        let second = analysis.report.period(ReportPeriod::SecondHalf).unwrap();
        assert!(second.is_empty());
        assert_eq!(second.total_seconds, 0.0);
    }

    #[test]
    fn test_trio_on_arriving_event() {
        let four = ["A", "B", "C", "D"];
        let events = vec![
            play("0:00:00", "Inizio", &four, Some("G")),
            play("0:05:00", "Tiro", &four, Some("G")),
            play("0:15:00", FIRST_HALF_END, &["A", "B", "C"], Some("G")),
        ];
        let analysis = analyze_match(&events, &AnalysisConfig::default());
        let first = analysis.report.period(ReportPeriod::FirstHalf).unwrap();

        let trio = &first.rows(BucketCategory::TrioWithGoalkeeper)[0];
        assert_eq!(trio.seconds, 600.0);
        assert_eq!(trio.percentage, 67);
        assert_eq!(first.rows(BucketCategory::UnitOfFour)[0].seconds, 300.0);

        let singles: Vec<(String, f64)> = first
            .rows(BucketCategory::SinglePlayer)
            .iter()
            .map(|r| (r.label(), r.seconds))
            .collect();
        assert_eq!(
            singles,
            vec![
                ("A".to_string(), 900.0),
                ("B".to_string(), 900.0),
                ("C".to_string(), 900.0),
                ("D".to_string(), 300.0),
            ]
        );
    }

    #[test]
    fn test_missing_half_sentinel_degrades_to_first_half() {
        let four = ["A", "B", "C", "D"];
        let events = vec![
            play("0:00:00", "Inizio", &four, Some("G")),
            play("0:04:00", "Tiro", &four, Some("G")),
            play("0:09:00", "Fallo", &four, Some("G")),
        ];
        let analysis = analyze_match(&events, &AnalysisConfig::default());

        let total = analysis.report.period(ReportPeriod::Total).unwrap();
        let first = analysis.report.period(ReportPeriod::FirstHalf).unwrap();
        let second = analysis.report.period(ReportPeriod::SecondHalf).unwrap();

        assert_eq!(total, first);
        assert!(second.is_empty());
        assert_eq!(total.total_seconds, 540.0);
    }

    #[test]
    fn test_identical_timestamps_only_pair() {
        let events = vec![
            play("0:10:00", "Inizio", &["A"], Some("G")),
            play("0:10:00", "Tiro", &["A"], Some("G")),
        ];
        let analysis = analyze_match(&events, &AnalysisConfig::default());

        for period in ReportPeriod::ALL {
            let report = analysis.report.period(period).unwrap();
            assert_eq!(report.total_seconds, 0.0);
            assert!(report.is_empty());
        }
    }

    #[test]
    fn test_five_movement_players_without_goalkeeper() {
        let five = ["A", "B", "C", "D", "E"];
        let events = vec![play("0:00:00", "Inizio", &five, None), play("0:02:00", "Tiro", &five, None)];
        let analysis = analyze_match(&events, &AnalysisConfig::default());
        let total = analysis.report.period(ReportPeriod::Total).unwrap();

        let unit = &total.rows(BucketCategory::UnitOfFiveNoGoalkeeper)[0];
        assert_eq!(unit.seconds, 120.0);
        assert_eq!(unit.players.len(), 5);
        assert!(total.rows(BucketCategory::UnitOfFour).is_empty());
        assert!(total.rows(BucketCategory::Pair).is_empty());
    }

    #[test]
    fn test_halves_split_and_interval_uncredited() {
        let four = ["A", "B", "C", "D"];
        let events = vec![
            play("0:00:00", "Inizio", &four, Some("G")),
            play("0:10:00", FIRST_HALF_END, &four, Some("G")),
            play("0:20:00", "Inizio secondo tempo", &four, Some("G")),
            play("0:26:00", "Tiro", &["A", "B", "C", "E"], Some("G")),
            play("0:30:00", MATCH_END, &["A", "B", "C", "E"], Some("G")),
        ];
        let analysis = analyze_match(&events, &AnalysisConfig::default());

        let first = analysis.report.period(ReportPeriod::FirstHalf).unwrap();
        let second = analysis.report.period(ReportPeriod::SecondHalf).unwrap();
        let total = analysis.report.period(ReportPeriod::Total).unwrap();

        assert_eq!(first.total_seconds, 600.0);
        assert_eq!(second.total_seconds, 600.0);
        assert_eq!(total.total_seconds, 1200.0);

        let e = total
            .rows(BucketCategory::SinglePlayer)
            .iter()
            .find(|r| r.label() == "E")
            .unwrap();
        assert_eq!(e.seconds, 600.0);
        assert_eq!(e.percentage, 50);
    }

    #[test]
    fn test_timeline_returned_with_report() {
        let analysis = analyze_match(&quartet_half(), &AnalysisConfig::default());
        assert_eq!(analysis.timeline.len(), 3);
        assert_eq!(analysis.timeline.real_seconds(2), Some(900.0));
    }
}
