//! Integration tests: scraped board document to sprint statistics.

use chrono::{NaiveDate, NaiveDateTime};
use indoc::indoc;
use scrumpy_core::board::aggregate_board;
use scrumpy_core::stats::DEFAULT_DATE_FORMAT;
use scrumpy_core::{Amount, Clock, FixedClock, ParamStore, Problem, RawBoard, SprintAnalysis, UserInput};

const BOARD: &str = indoc! {r#"
    {
        "name": "UI Team Sprint 6",
        "path": "/b/2aOkziAO/ui-team-sprint-6",
        "lists": [
            {
                "title": "To Do",
                "cards": [
                    { "title": "Search page (40)", "labels": ["ui"] },
                    { "title": "Settings screen (30)", "labels": ["ui", ""] },
                    { "title": "Typing a new ca", "composing": true }
                ]
            },
            {
                "title": "Doing",
                "cards": [
                    { "title": "Login API (20) {6}", "labels": ["api"] },
                    { "title": "Audit log", "labels": ["api"] }
                ]
            },
            {
                "title": "Done",
                "cards": [
                    { "title": "Fix login (4) {3}", "labels": ["ui"] },
                    { "title": "Signup flow (26) {21}", "labels": ["ui", "api"] },
                    { "title": "Prod outage {6}", "labels": ["Bug-Interference"] },
                    { "title": "Release notes (2)", "labels": [] }
                ]
            },
            {
                "title": "Backlog",
                "cards": [
                    { "title": "Dark mode (80)", "labels": ["ui"] }
                ]
            }
        ]
    }
"#};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn at(s: &str, hour: u32) -> NaiveDateTime {
    date(s).and_hms_opt(hour, 0, 0).unwrap()
}

fn board() -> RawBoard {
    serde_json::from_str(BOARD).unwrap()
}

#[test]
fn snapshot_totals_and_labels() {
    let snapshot = aggregate_board(&board()).unwrap();

    assert_eq!(snapshot.pending.len(), 2);
    assert_eq!(snapshot.pending.estimate, 70.0);
    assert_eq!(snapshot.inflight.estimate, 20.0);
    assert_eq!(snapshot.inflight.actual, 6.0);
    assert_eq!(snapshot.done.estimate, 32.0);
    assert_eq!(snapshot.done.actual, 30.0);
    assert_eq!(
        snapshot.labels.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["ui", "api", "Bug-Interference"]
    );

    for column in snapshot.columns() {
        let estimate: f64 = column.cards.iter().filter_map(|c| c.estimate.value()).sum();
        assert_eq!(column.estimate, estimate);
    }
}

#[test]
fn snapshot_roundtrips_through_json_with_none_markers() {
    let snapshot = aggregate_board(&board()).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["boardName"], "UI Team Sprint 6");
    assert_eq!(json["inflight"]["cards"][1]["estimate"], "none");

    let parsed: scrumpy_core::BoardSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.inflight.cards[1].estimate, Amount::Missing);
    assert_eq!(parsed, snapshot);
}

#[test]
fn mid_sprint_statistics() {
    let snapshot = aggregate_board(&board()).unwrap();
    let input = UserInput::new(date("2015-08-17"), 10, "Bug-Interference").unwrap();
    let clock = FixedClock(at("2015-08-21", 15));
    let analysis = SprintAnalysis::new(&snapshot, &input, clock.now());

    assert!(analysis.has_started());
    assert_eq!(analysis.elapsed_days(), 5);
    assert_eq!(analysis.report_date(), date("2015-08-21"));

    let derived = analysis.derived();
    assert_eq!(derived.done_planned.cards.len() + derived.done_interference.cards.len(), 4);
    assert_eq!(derived.done_planned.estimate, 32.0);
    assert_eq!(derived.done_planned.actual, 24.0);
    assert_eq!(derived.done_interference.actual, 6.0);

    // 70 pending + 20 in flight + 32 planned done
    assert_eq!(analysis.initial_estimate(), 122.0);
    // floor(32 / 24 * 100)
    assert_eq!(analysis.velocity(), Some(133));
    assert_eq!(analysis.amount_done().cards, 4);
    assert_eq!(analysis.amount_done().actual, 30.0);

    assert_eq!(
        analysis.problems(),
        vec![Problem::MissingEstimates, Problem::MissingActuals]
    );

    let burndown = analysis.burndown(DEFAULT_DATE_FORMAT);
    assert_eq!(burndown.labels[1], "17 Aug");
    assert_eq!(burndown.labels[6], "24 Aug");
    assert_eq!(burndown.labels[10], "28 Aug");
    assert_eq!(burndown.actual.len(), 6);
    assert_eq!(burndown.actual[5], 98.0);
    assert_eq!(burndown.interference[5], 6.0);
}

#[test]
fn statistics_before_the_sprint_starts() {
    let snapshot = aggregate_board(&board()).unwrap();
    let input = UserInput::new(date("2015-08-24"), 10, "").unwrap();
    let analysis = SprintAnalysis::new(&snapshot, &input, at("2015-08-21", 15));

    assert_eq!(analysis.elapsed_days(), 0);
    assert_eq!(analysis.velocity(), Some(0));
    assert_eq!(analysis.amount_done().cards, 0);
    assert_eq!(analysis.problems()[0], Problem::NotStarted);

    let stats = analysis.stats(DEFAULT_DATE_FORMAT);
    assert_eq!(stats.report_date, None);
    assert_eq!(stats.burndown.actual, vec![stats.initial_estimate]);
    assert_eq!(stats.burndown.interference, vec![0.0]);
}

#[test]
fn historic_sprint_reports_full_duration() {
    let snapshot = aggregate_board(&board()).unwrap();
    let input = UserInput::new(date("2014-08-11"), 10, "").unwrap();
    let analysis = SprintAnalysis::new(&snapshot, &input, at("2015-08-21", 9));

    assert_eq!(analysis.report_date(), date("2014-08-22"));
    assert_eq!(analysis.elapsed_days(), 10);
    let burndown = analysis.burndown(DEFAULT_DATE_FORMAT);
    assert_eq!(burndown.actual.len(), 11);
    assert_eq!(*burndown.estimate.last().unwrap(), 0.0);
}

#[test]
fn stored_parameters_drive_statistics() {
    let dir = tempfile::tempdir().unwrap();
    let raw = board();
    let board_id = raw.board_id().unwrap();

    let mut store = ParamStore::open_at(dir.path().join("params.json")).unwrap();
    store
        .set(board_id, UserInput::new(date("2015-08-20"), 10, "Bug-Interference").unwrap())
        .unwrap();

    let store = ParamStore::open_at(dir.path().join("params.json")).unwrap();
    let now = at("2015-08-22", 15);
    let input = store.get_or_default(board_id, now.date(), 10);
    let snapshot = aggregate_board(&raw).unwrap();
    let stats = SprintAnalysis::new(&snapshot, &input, now).stats(DEFAULT_DATE_FORMAT);

    assert_eq!(stats.report_date, Some(date("2015-08-21")));
    assert_eq!(stats.elapsed_days, 2);
    assert_eq!(stats.interference_label, "Bug-Interference");
}
