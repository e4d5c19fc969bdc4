//! Weekday calendar arithmetic for sprints.
//!
//! Sprints are measured in weekdays. Stepping through a sprint skips
//! weekends entirely: a step that lands on Saturday or Sunday snaps to the
//! following Monday. All "now"-relative functions take the instant as an
//! argument.
//!
//! ## Report date
//!
//! Card updates for a day are only considered in once the morning is over,
//! so before noon statistics are reported as of the previous weekday.
//!
//! ```text
//! today ─▶ (morning? yesterday) ─▶ (weekend? Friday) ─▶ min(end date, ·)
//! ```

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};

/// Hour at which the morning cutover happens.
const NOON: u32 = 12;

pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() > 5
}

fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MIN)
}

/// Friday of the ISO week containing `date`.
pub fn last_friday(date: NaiveDate) -> NaiveDate {
    start_of_iso_week(date)
        .checked_add_days(Days::new(4))
        .unwrap_or(NaiveDate::MAX)
}

fn checked_next_monday(date: NaiveDate) -> Option<NaiveDate> {
    start_of_iso_week(date).checked_add_days(Days::new(7))
}

/// Monday of the ISO week after the one containing `date`.
///
/// Always advances into the next week, even when `date` is a Monday.
/// Saturates at the last representable date.
pub fn next_monday(date: NaiveDate) -> NaiveDate {
    checked_next_monday(date).unwrap_or(NaiveDate::MAX)
}

/// True strictly before 12:00:00.000 on `now`'s own day.
pub fn is_morning(now: NaiveDateTime) -> bool {
    now.hour() < NOON
}

/// The day after `date`, snapped to Monday if it falls on a weekend.
fn next_sprint_day(date: NaiveDate) -> Option<NaiveDate> {
    let next = date.checked_add_days(Days::new(1))?;
    if is_weekend(next) {
        checked_next_monday(next)
    } else {
        Some(next)
    }
}

/// Successive sprint days from `start`: `start` itself, then every following
/// weekday. Ends at the end of the calendar.
pub fn sprint_days(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |&date| next_sprint_day(date))
}

/// Calendar date of the `day`-th day of the sprint (1-indexed).
///
/// Day 1 is the start date itself; `day` 0 is treated as day 1.
pub fn sprint_day(start: NaiveDate, day: u32) -> NaiveDate {
    let index = usize::try_from(day.max(1) - 1).unwrap_or(usize::MAX);
    sprint_days(start).take(index.saturating_add(1)).last().unwrap_or(start)
}

/// Date of the last weekday of a sprint of `duration` weekdays.
///
/// The start date counts when it is a weekday; a weekend start counts from
/// the following Monday. The end date is therefore never on a weekend.
pub fn end_date(start: NaiveDate, duration: u32) -> NaiveDate {
    sprint_day(fix_start_date(start), duration)
}

/// Whether work on `date` counts as begun at `now`.
///
/// A sprint starting today has only started once the morning is over.
pub fn has_started(date: NaiveDate, now: NaiveDateTime) -> bool {
    let today = now.date();
    if date > today {
        false
    } else if date == today {
        !is_morning(now)
    } else {
        true
    }
}

/// The (inclusive) day statistics are reported as of.
pub fn report_date(start: NaiveDate, duration: u32, now: NaiveDateTime) -> NaiveDate {
    let mut report = now.date();
    if is_morning(now) {
        report = report.checked_sub_days(Days::new(1)).unwrap_or(report);
    }
    if is_weekend(report) {
        report = last_friday(report);
    }

    let end = end_date(start, duration);
    if end < report {
        end
    } else {
        report
    }
}

/// Weekdays of the sprint elapsed up to and including the report date.
///
/// Zero before the sprint has started, otherwise in `1..=duration`. The walk
/// stops at the first sprint day on or after the report date.
pub fn elapsed_days(start: NaiveDate, duration: u32, now: NaiveDateTime) -> u32 {
    if !has_started(start, now) {
        return 0;
    }

    let report = report_date(start, duration, now);
    let walked = usize::try_from(duration).unwrap_or(usize::MAX);
    sprint_days(start)
        .take(walked)
        .position(|date| date >= report)
        .and_then(|index| u32::try_from(index + 1).ok())
        .unwrap_or(duration)
}

/// Move a start date that falls on a weekend to the following Monday.
pub fn fix_start_date(date: NaiveDate) -> NaiveDate {
    if is_weekend(date) {
        next_monday(date)
    } else {
        date
    }
}
