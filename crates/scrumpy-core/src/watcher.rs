//! Board refresh loop.
//!
//! The board is only readable once its UI has rendered, and it keeps
//! changing while people work. The watcher polls until the board is ready,
//! re-aggregates on a fixed interval, and drops back to waiting whenever the
//! board disappears.
//!
//! ## State Transitions
//!
//! ```text
//! WaitingForUi --(ui ready)--> Ready --(not a board / ui gone)--> WaitingForUi
//! ```
//!
//! Each pass recomputes from scratch, so re-running is always safe. Starting
//! a watcher again supersedes the previous loop.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::Result;
use crate::storage::PollingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    WaitingForUi,
    Ready,
}

/// What the watcher polls.
pub trait BoardSource: Send + 'static {
    /// Whether the current page is a board at all.
    fn is_board(&mut self) -> bool;

    /// Whether the board UI can be read.
    fn ui_ready(&mut self) -> bool;

    /// Re-aggregate the board.
    fn refresh(&mut self) -> Result<()>;
}

/// Delays between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub ready_interval: Duration,
    pub board_refresh: Duration,
    pub idle_refresh: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::from(&PollingConfig::default())
    }
}

impl From<&PollingConfig> for PollSchedule {
    fn from(config: &PollingConfig) -> Self {
        Self {
            ready_interval: config.ready_interval(),
            board_refresh: config.board_refresh(),
            idle_refresh: config.idle_refresh(),
        }
    }
}

/// One poll: returns the next state and how long to wait before the next poll.
pub fn poll_once<S: BoardSource>(
    state: WatchState,
    source: &mut S,
    schedule: &PollSchedule,
) -> (WatchState, Duration) {
    if !source.is_board() {
        return (WatchState::WaitingForUi, schedule.idle_refresh);
    }
    if !source.ui_ready() {
        if state == WatchState::Ready {
            tracing::debug!("board ui went away, waiting");
        }
        return (WatchState::WaitingForUi, schedule.ready_interval);
    }

    if state == WatchState::WaitingForUi {
        tracing::debug!("board ui ready");
    }
    if let Err(e) = source.refresh() {
        tracing::warn!(error = %e, "board refresh failed");
    }
    (WatchState::Ready, schedule.board_refresh)
}

/// Poll `source` forever.
pub async fn watch_board<S: BoardSource>(mut source: S, schedule: PollSchedule) {
    let mut state = WatchState::WaitingForUi;
    loop {
        let (next, delay) = poll_once(state, &mut source, &schedule);
        state = next;
        tokio::time::sleep(delay).await;
    }
}

/// Resolve once `probe` reports ready, checking every `interval`.
pub async fn wait_for_board<F: FnMut() -> bool>(mut probe: F, interval: Duration) {
    while !probe() {
        tokio::time::sleep(interval).await;
    }
}

/// Owns the running refresh loop.
#[derive(Debug, Default)]
pub struct BoardWatcher {
    schedule: PollSchedule,
    handle: Option<JoinHandle<()>>,
}

impl BoardWatcher {
    pub fn new(schedule: PollSchedule) -> Self {
        Self {
            schedule,
            handle: None,
        }
    }

    /// Start watching `source`, replacing any loop already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<S: BoardSource>(&mut self, source: S) {
        self.stop();
        self.handle = Some(tokio::spawn(watch_board(source, self.schedule)));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for BoardWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
