//! Sprint parameters and weekday calendar.

pub mod calendar;
mod clock;
mod input;

pub use calendar::{
    elapsed_days, end_date, fix_start_date, has_started, is_morning, is_weekend, last_friday,
    next_monday, report_date, sprint_day, sprint_days,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use input::{UserInput, DEFAULT_DURATION, MAX_DURATION};
