//! Burndown chart series.
//!
//! Index 0 of every series is the sprint start. The ideal line spans the
//! whole sprint; the actual and interference lines only cover elapsed days,
//! spreading the work done so far evenly across them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::sprint::sprint_days;

/// Label of the first point on the burndown axis.
pub const START_LABEL: &str = "Start";

/// Day label format, e.g. `17 Aug`.
pub const DEFAULT_DATE_FORMAT: &str = "%-d %b";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Burndown {
    pub labels: Vec<String>,
    /// Ideal line, `duration + 1` points.
    pub estimate: Vec<f64>,
    /// Remaining planned work, `elapsed + 1` points.
    pub actual: Vec<f64>,
    /// Cumulative interference work, `elapsed + 1` points.
    pub interference: Vec<f64>,
}

pub fn labels(start: NaiveDate, duration: u32, date_format: &str) -> Vec<String> {
    std::iter::once(START_LABEL.to_string())
        .chain(
            sprint_days(start)
                .take(usize::try_from(duration).unwrap_or(usize::MAX))
                .map(|day| day.format(date_format).to_string()),
        )
        .collect()
}

/// Straight line from `initial` down to zero over the sprint.
pub fn estimate_series(initial: f64, duration: u32) -> Vec<f64> {
    let duration_f = f64::from(duration);
    std::iter::once(initial)
        .chain((1..=duration).map(|day| initial - initial * (f64::from(day) / duration_f)))
        .collect()
}

/// `initial` minus the planned actuals, spread evenly over elapsed days.
pub fn actual_series(initial: f64, done_actual: f64, elapsed: u32) -> Vec<f64> {
    let elapsed_f = f64::from(elapsed);
    std::iter::once(initial)
        .chain((1..=elapsed).map(|day| initial - done_actual * (f64::from(day) / elapsed_f)))
        .collect()
}

/// Interference actuals accumulated evenly over elapsed days.
pub fn interference_series(interference_actual: f64, elapsed: u32) -> Vec<f64> {
    let elapsed_f = f64::from(elapsed);
    std::iter::once(0.0)
        .chain((1..=elapsed).map(|day| interference_actual * (f64::from(day) / elapsed_f)))
        .collect()
}
