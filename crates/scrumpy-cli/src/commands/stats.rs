use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use clap::Args;
use scrumpy_core::stats::render_summary;
use scrumpy_core::{board, Clock, Config, ParamStore, RawBoard, SprintAnalysis, SystemClock, UserInput};

#[derive(Args)]
pub struct StatsArgs {
    /// Scraped board JSON file
    pub board: PathBuf,
    /// Board identifier for stored parameters (defaults to the id in the board path)
    #[arg(long)]
    pub board_id: Option<String>,
    /// Sprint start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Sprint length in weekdays
    #[arg(long)]
    pub duration: Option<u32>,
    /// Label marking unplanned work among done cards
    #[arg(long)]
    pub interference: Option<String>,
    /// Report as of this local time instead of now
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,
    /// Do not remember the parameters for this board
    #[arg(long)]
    pub no_save: bool,
    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

/// Local time as RFC 3339, `YYYY-MM-DDTHH:MM[:SS]`, or a bare date (start of day).
fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| format!("invalid time '{value}', expected e.g. 2015-08-21T15:00:00"))
}

pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let now = args.now.unwrap_or_else(|| SystemClock.now());

    let raw = RawBoard::load(&args.board)?;
    let snapshot = board::aggregate_board(&raw)?;

    let board_id = args.board_id.clone().or_else(|| raw.board_id().map(str::to_string));
    let mut store = match &board_id {
        Some(_) => Some(ParamStore::open()?),
        None => None,
    };
    let stored = match (&store, &board_id) {
        (Some(store), Some(id)) => store.get_or_default(id, now.date(), config.sprint.default_duration),
        _ => UserInput::defaults(now.date(), config.sprint.default_duration),
    };

    let input = UserInput::new(
        args.start.unwrap_or(stored.start_date),
        args.duration.unwrap_or(stored.duration),
        args.interference.unwrap_or(stored.interference_label),
    )?;

    if let Some(label) = input.interference_label() {
        if !snapshot.labels.contains(label) {
            tracing::warn!(label, "interference label is not used on this board");
        }
    }

    if !args.no_save {
        if let (Some(store), Some(id)) = (store.as_mut(), board_id.as_deref()) {
            store.set(id, input.clone())?;
        }
    }

    let stats = SprintAnalysis::new(&snapshot, &input, now).stats(&config.display.date_format);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_summary(&stats));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_date_times() {
        let expected = NaiveDate::from_ymd_opt(2015, 8, 21)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        assert_eq!(parse_now("2015-08-21T15:00:00"), Ok(expected));
        assert_eq!(parse_now("2015-08-21 15:00"), Ok(expected));
    }

    #[test]
    fn bare_date_is_start_of_day() {
        let parsed = parse_now("2015-08-21").unwrap();
        assert_eq!(parsed.to_string(), "2015-08-21 00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_now("friday").is_err());
    }
}
