use indexmap::IndexSet;

use super::{parse_card, BoardSnapshot, ColumnSnapshot, ListTotals, RawBoard, RawList};
use crate::error::ValidationError;

/// Number of lists a sprint board needs: pending, in-flight, done.
const SPRINT_LISTS: usize = 3;

/// Parse every committed card of a list and total it.
pub fn aggregate_list(list: &RawList) -> ColumnSnapshot {
    ColumnSnapshot::from_cards(list.cards.iter().filter_map(parse_card).collect())
}

/// Totals for every list on the board, in board order.
pub fn list_totals(board: &RawBoard) -> Vec<ListTotals> {
    board
        .lists
        .iter()
        .map(|list| {
            let column = aggregate_list(list);
            ListTotals {
                title: list.title.clone(),
                estimate: round_amount(column.estimate),
                actual: round_amount(column.actual),
            }
        })
        .collect()
}

/// Non-empty labels across the given columns, deduplicated in first-seen order.
pub fn collect_labels<'a>(columns: impl IntoIterator<Item = &'a ColumnSnapshot>) -> IndexSet<String> {
    columns
        .into_iter()
        .flat_map(|column| column.cards.iter())
        .flat_map(|card| card.labels.iter())
        .filter(|label| !label.is_empty())
        .cloned()
        .collect()
}

/// Snapshot the first three lists as pending, in-flight and done.
pub fn aggregate_board(board: &RawBoard) -> Result<BoardSnapshot, ValidationError> {
    let [pending, inflight, done] = match board.lists.as_slice() {
        [pending, inflight, done, ..] => [pending, inflight, done].map(aggregate_list),
        lists => return Err(ValidationError::TooFewLists { found: lists.len() }),
    };

    let labels = collect_labels([&pending, &inflight, &done]);
    tracing::debug!(
        board = %board.name,
        pending = pending.len(),
        inflight = inflight.len(),
        done = done.len(),
        labels = labels.len(),
        ignored_lists = board.lists.len() - SPRINT_LISTS,
        "aggregated board"
    );

    Ok(BoardSnapshot {
        board_name: board.name.clone(),
        labels,
        pending,
        inflight,
        done,
    })
}

/// Round to cents for display.
pub fn round_amount(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Display form of an amount: whole numbers without a fraction.
pub fn format_amount(value: f64) -> String {
    format!("{}", round_amount(value))
}
