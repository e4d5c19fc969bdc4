//! Sprint statistics engine.
//!
//! [`SprintAnalysis`] derives everything the stats page shows from a board
//! snapshot, the sprint parameters and an explicit `now`:
//!
//! - the planned / interference split of done work
//! - elapsed days and the report date
//! - burndown series, velocity, amount done
//! - data-quality problems
//!
//! Nothing here fails. Missing annotations surface as [`Problem`]s.

pub mod burndown;
mod partition;
mod report;

pub use burndown::{Burndown, DEFAULT_DATE_FORMAT};
pub use partition::{DerivedSprintData, InterferenceSnapshot};
pub use report::{render_summary, SprintStats, VelocityBars};

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::board::{BoardSnapshot, Card};
use crate::sprint::{calendar, UserInput};

/// Data-quality problem found while deriving statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    NotStarted,
    MissingEstimates,
    MissingActuals,
}

impl Problem {
    pub fn message(self) -> &'static str {
        match self {
            Problem::NotStarted => "Sprint hasn't started yet.",
            Problem::MissingEstimates => "Some cards didn't have estimates.",
            Problem::MissingActuals => "Some completed cards didn't have actuals.",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Completed work so far.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AmountDone {
    pub cards: usize,
    pub actual: f64,
}

/// Statistics for one sprint as of a given instant.
#[derive(Debug, Clone)]
pub struct SprintAnalysis<'a> {
    board: &'a BoardSnapshot,
    input: &'a UserInput,
    derived: DerivedSprintData,
    started: bool,
    report_date: NaiveDate,
    elapsed: u32,
}

impl<'a> SprintAnalysis<'a> {
    pub fn new(board: &'a BoardSnapshot, input: &'a UserInput, now: NaiveDateTime) -> Self {
        let derived = DerivedSprintData::partition(&board.done, &input.interference_label);
        let started = calendar::has_started(input.start_date, now);
        let report_date = calendar::report_date(input.start_date, input.duration, now);
        let elapsed = calendar::elapsed_days(input.start_date, input.duration, now);

        tracing::debug!(
            board = %board.board_name,
            start = %input.start_date,
            duration = input.duration,
            %now,
            started,
            %report_date,
            elapsed,
            planned = derived.done_planned.len(),
            interference = derived.done_interference.cards.len(),
            "derived sprint data"
        );

        Self {
            board,
            input,
            derived,
            started,
            report_date,
            elapsed,
        }
    }

    pub fn board(&self) -> &BoardSnapshot {
        self.board
    }

    pub fn input(&self) -> &UserInput {
        self.input
    }

    pub fn derived(&self) -> &DerivedSprintData {
        &self.derived
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    pub fn elapsed_days(&self) -> u32 {
        self.elapsed
    }

    /// Cards that were part of the plan: pending, in-flight and planned done.
    pub fn planned_cards(&self) -> impl Iterator<Item = &Card> {
        self.board
            .pending
            .cards
            .iter()
            .chain(&self.board.inflight.cards)
            .chain(&self.derived.done_planned.cards)
    }

    pub fn problems(&self) -> Vec<Problem> {
        let mut problems = Vec::new();

        if !self.started {
            problems.push(Problem::NotStarted);
        }
        if self.planned_cards().any(|card| card.estimate.is_missing()) {
            problems.push(Problem::MissingEstimates);
        }
        if self.board.done.cards.iter().any(|card| card.actual.is_missing()) {
            problems.push(Problem::MissingActuals);
        }

        problems
    }

    /// Planned work at the start of the sprint. Interference is excluded.
    pub fn initial_estimate(&self) -> f64 {
        self.board.pending.estimate + self.board.inflight.estimate + self.derived.done_planned.estimate
    }

    /// Planned estimate over planned actual of done work, as a floored percentage.
    ///
    /// Zero before the sprint starts. `None` once started while no time has
    /// been logged against planned work, where the ratio is undefined.
    pub fn velocity(&self) -> Option<u32> {
        if !self.started {
            return Some(0);
        }
        let planned = &self.derived.done_planned;
        if planned.actual <= 0.0 {
            return None;
        }
        Some((planned.estimate / planned.actual * 100.0).floor() as u32)
    }

    pub fn amount_done(&self) -> AmountDone {
        if !self.started {
            return AmountDone::default();
        }
        AmountDone {
            cards: self.board.done.len(),
            actual: self.board.done.actual,
        }
    }

    pub fn burndown(&self, date_format: &str) -> Burndown {
        let initial = self.initial_estimate();
        Burndown {
            labels: burndown::labels(self.input.start_date, self.input.duration, date_format),
            estimate: burndown::estimate_series(initial, self.input.duration),
            actual: burndown::actual_series(initial, self.derived.done_planned.actual, self.elapsed),
            interference: burndown::interference_series(
                self.derived.done_interference.actual,
                self.elapsed,
            ),
        }
    }

    /// Everything the stats page renders, in one serializable value.
    pub fn stats(&self, date_format: &str) -> SprintStats {
        SprintStats {
            title: format!("Stats for {}", self.board.board_name),
            board_name: self.board.board_name.clone(),
            start_date: self.input.start_date,
            duration: self.input.duration,
            interference_label: self.input.interference_label.clone(),
            started: self.started,
            report_date: self.started.then_some(self.report_date),
            elapsed_days: self.elapsed,
            initial_estimate: self.initial_estimate(),
            burndown: self.burndown(date_format),
            velocity: self.velocity(),
            velocity_bars: VelocityBars {
                estimate: self.derived.done_planned.estimate,
                actual: self.derived.done_planned.actual,
            },
            derived: self.derived.clone(),
            amount_done: self.amount_done(),
            problems: self.problems().iter().map(ToString::to_string).collect(),
        }
    }
}
