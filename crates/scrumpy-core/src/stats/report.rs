use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AmountDone, Burndown, DerivedSprintData};
use crate::board::format_amount;

/// Planned estimate against planned actual for the velocity bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityBars {
    pub estimate: f64,
    pub actual: f64,
}

/// Statistics handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintStats {
    pub title: String,
    pub board_name: String,
    pub start_date: NaiveDate,
    pub duration: u32,
    pub interference_label: String,
    pub started: bool,
    /// Day the figures are as of; absent before the sprint starts.
    pub report_date: Option<NaiveDate>,
    pub elapsed_days: u32,
    pub initial_estimate: f64,
    pub burndown: Burndown,
    /// Percentage; `None` when no time has been logged against planned work.
    pub velocity: Option<u32>,
    pub velocity_bars: VelocityBars,
    /// Done work split into `donePlanned` and `doneInterference`.
    #[serde(flatten)]
    pub derived: DerivedSprintData,
    pub amount_done: AmountDone,
    pub problems: Vec<String>,
}

/// Render the stats page as plain text.
pub fn render_summary(stats: &SprintStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", stats.title));
    output.push_str(&"=".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "Sprint of {} weekdays from {}",
        stats.duration, stats.start_date
    ));
    match stats.report_date {
        Some(date) => output.push_str(&format!(", day {} as of {}\n\n", stats.elapsed_days, date)),
        None => output.push_str(", not started\n\n"),
    }

    output.push_str(&format!(
        "{} tasks completed in {} hours this sprint.\n",
        stats.amount_done.cards,
        format_amount(stats.amount_done.actual)
    ));
    match stats.velocity {
        Some(velocity) => output.push_str(&format!(
            "Team is running at {velocity}% of estimated velocity this sprint.\n"
        )),
        None => output.push_str("Velocity is not available until planned work has actuals.\n"),
    }
    let interference = &stats.derived.done_interference;
    if !interference.cards.is_empty() {
        output.push_str(&format!(
            "{} interference tasks took {} hours.\n",
            interference.cards.len(),
            format_amount(interference.actual)
        ));
    }
    output.push_str(&format!(
        "Done this sprint: {} estimated, {} actual\n\n",
        format_amount(stats.velocity_bars.estimate),
        format_amount(stats.velocity_bars.actual)
    ));

    output.push_str("Burndown\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>14}\n",
        "Day", "Ideal", "Remaining", "Interference"
    ));
    let burndown = &stats.burndown;
    for (i, label) in burndown.labels.iter().enumerate() {
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>14}\n",
            label,
            cell(burndown.estimate.get(i)),
            cell(burndown.actual.get(i)),
            cell(burndown.interference.get(i)),
        ));
    }

    if !stats.problems.is_empty() {
        output.push_str("\nProblems:\n");
        for problem in &stats.problems {
            output.push_str(&format!("  - {problem}\n"));
        }
    }

    output
}

fn cell(value: Option<&f64>) -> String {
    value.map_or_else(String::new, |v| format_amount(*v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Amount, Card, ColumnSnapshot};
    use crate::stats::InterferenceSnapshot;

    fn card(labels: &[&str], estimate: f64, actual: f64) -> Card {
        Card {
            name: "card".to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            estimate: Amount::Value(estimate),
            actual: Amount::Value(actual),
        }
    }

    fn stats() -> SprintStats {
        SprintStats {
            title: "Stats for Foo Bar".to_string(),
            board_name: "Foo Bar".to_string(),
            start_date: NaiveDate::from_ymd_opt(2015, 8, 20).unwrap(),
            duration: 2,
            interference_label: String::new(),
            started: true,
            report_date: NaiveDate::from_ymd_opt(2015, 8, 20),
            elapsed_days: 1,
            initial_estimate: 10.0,
            burndown: Burndown {
                labels: vec!["Start".into(), "20 Aug".into(), "21 Aug".into()],
                estimate: vec![10.0, 5.0, 0.0],
                actual: vec![10.0, 2.0],
                interference: vec![0.0, 1.5],
            },
            velocity: Some(125),
            velocity_bars: VelocityBars { estimate: 10.0, actual: 8.0 },
            derived: DerivedSprintData {
                done_planned: ColumnSnapshot::from_cards(vec![card(&[], 10.0, 8.0)]),
                done_interference: InterferenceSnapshot {
                    actual: 1.5,
                    cards: vec![card(&["Bug"], 0.0, 1.5)],
                },
            },
            amount_done: AmountDone { cards: 3, actual: 9.5 },
            problems: vec!["Some cards didn't have estimates.".to_string()],
        }
    }

    #[test]
    fn summary_includes_headline_figures() {
        let text = render_summary(&stats());
        assert!(text.contains("Stats for Foo Bar"));
        assert!(text.contains("3 tasks completed in 9.5 hours this sprint."));
        assert!(text.contains("Team is running at 125% of estimated velocity this sprint."));
        assert!(text.contains("day 1 as of 2015-08-20"));
        assert!(text.contains("  - Some cards didn't have estimates."));
    }

    #[test]
    fn summary_table_leaves_future_days_blank() {
        let text = render_summary(&stats());
        let row = text.lines().find(|l| l.starts_with("21 Aug")).unwrap();
        assert_eq!(row.trim_end(), format!("{:<10} {:>12}", "21 Aug", "0"));
    }

    #[test]
    fn summary_without_velocity() {
        let mut s = stats();
        s.velocity = None;
        s.report_date = None;
        let text = render_summary(&s);
        assert!(text.contains("Velocity is not available"));
        assert!(text.contains("not started"));
    }

    #[test]
    fn stats_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(stats()).unwrap();
        assert_eq!(json["boardName"], "Foo Bar");
        assert_eq!(json["amountDone"]["cards"], 3);
        assert_eq!(json["velocityBars"]["actual"], 8.0);
        assert_eq!(json["reportDate"], "2015-08-20");
    }

    #[test]
    fn stats_carry_the_done_work_split() {
        let json = serde_json::to_value(stats()).unwrap();
        assert_eq!(json["donePlanned"]["actual"], 8.0);
        assert_eq!(json["donePlanned"]["cards"].as_array().unwrap().len(), 1);
        assert_eq!(json["doneInterference"]["actual"], 1.5);
        assert_eq!(json["doneInterference"]["cards"][0]["labels"][0], "Bug");
        assert!(json.get("derived").is_none());

        let parsed: SprintStats = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, stats());
    }

    #[test]
    fn summary_mentions_interference() {
        let text = render_summary(&stats());
        assert!(text.contains("1 interference tasks took 1.5 hours."));

        let mut s = stats();
        s.derived.done_interference = InterferenceSnapshot::default();
        assert!(!render_summary(&s).contains("interference tasks"));
    }
}
