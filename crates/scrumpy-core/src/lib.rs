//! # Scrumpy Core Library
//!
//! Sprint tracking on top of a three-column kanban board. Cards carry their
//! estimate as `(n)` and their actual time as `{n}` in the title; this crate
//! turns a scraped board into per-list totals and, given the sprint
//! parameters, into burndown and velocity statistics.
//!
//! ## Architecture
//!
//! - **Board**: title parsing and list aggregation into a [`BoardSnapshot`]
//! - **Sprint**: weekday calendar arithmetic, sprint parameters and an
//!   injectable [`Clock`]
//! - **Stats**: done-work partition, burndown series, velocity and problems,
//!   bundled as [`SprintStats`]
//! - **Storage**: TOML configuration and the per-board parameter store
//! - **Watcher**: poll-until-ready board refresh loop
//!
//! Everything under `sprint` and `stats` is a pure function of the board,
//! the parameters and an explicit `now`.

pub mod board;
pub mod sprint;
pub mod stats;
pub mod storage;
pub mod watcher;
pub mod error;

pub use board::{Amount, BoardSnapshot, Card, ColumnSnapshot, ListTotals, RawBoard, RawCard, RawList};
pub use sprint::{Clock, FixedClock, SystemClock, UserInput};
pub use stats::{AmountDone, Burndown, DerivedSprintData, Problem, SprintAnalysis, SprintStats};
pub use storage::{Config, ParamStore};
pub use watcher::{BoardSource, BoardWatcher, PollSchedule, WatchState};
pub use error::{CoreError, ConfigError, StoreError, ValidationError};
