use std::future::Future;
use std::path::PathBuf;

use clap::Args;
use scrumpy_core::board::{self, ListTotals};
use scrumpy_core::watcher::{wait_for_board, BoardSource, BoardWatcher, PollSchedule};
use scrumpy_core::{Config, RawBoard};

#[derive(Args)]
pub struct WatchArgs {
    /// Scraped board JSON file, rewritten by the scraper as the board changes
    pub board: PathBuf,
}

/// A board file kept up to date by a scraper.
struct BoardFile {
    path: PathBuf,
    last: Option<Vec<ListTotals>>,
}

impl BoardSource for BoardFile {
    fn is_board(&mut self) -> bool {
        self.path.is_file()
    }

    fn ui_ready(&mut self) -> bool {
        std::fs::metadata(&self.path).is_ok_and(|m| m.len() > 0)
    }

    fn refresh(&mut self) -> scrumpy_core::error::Result<()> {
        let raw = RawBoard::load(&self.path)?;
        let totals = board::list_totals(&raw);
        if self.last.as_ref() != Some(&totals) {
            println!("{}", raw.name);
            for list in &totals {
                println!("  {}{}", list.title, list.annotation());
            }
            self.last = Some(totals);
        }
        Ok(())
    }
}

/// Watch `path` until `shutdown` resolves, returning its result.
async fn watch_until<F>(path: PathBuf, schedule: PollSchedule, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = std::io::Result<()>>,
{
    tokio::pin!(shutdown);
    tokio::select! {
        _ = wait_for_board(|| path.is_file(), schedule.idle_refresh) => {}
        result = &mut shutdown => return result,
    }
    tracing::info!(path = %path.display(), "watching board");

    let mut watcher = BoardWatcher::new(schedule);
    watcher.start(BoardFile { path, last: None });
    let result = shutdown.await;
    watcher.stop();
    result
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let schedule = PollSchedule::from(&config.polling);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(watch_until(args.board, schedule, tokio::signal::ctrl_c()))?;
    Ok(())
}
