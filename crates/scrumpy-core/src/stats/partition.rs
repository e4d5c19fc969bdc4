use serde::{Deserialize, Serialize};

use crate::board::{Card, ColumnSnapshot};

/// Done cards tagged with the interference label.
///
/// Unplanned work has no planned estimate, only time spent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterferenceSnapshot {
    pub actual: f64,
    pub cards: Vec<Card>,
}

/// Done work split into planned and interference work.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSprintData {
    pub done_planned: ColumnSnapshot,
    pub done_interference: InterferenceSnapshot,
}

impl DerivedSprintData {
    /// Partition the done column by label membership.
    ///
    /// A card is interference iff `interference_label` is non-empty and the
    /// card carries it. Missing amounts count as zero in the totals; cards
    /// are kept unchanged.
    pub fn partition(done: &ColumnSnapshot, interference_label: &str) -> Self {
        let mut derived = Self::default();

        for card in &done.cards {
            if !interference_label.is_empty() && card.has_label(interference_label) {
                derived.done_interference.actual += card.actual.or_zero();
                derived.done_interference.cards.push(card.clone());
            } else {
                derived.done_planned.estimate += card.estimate.or_zero();
                derived.done_planned.actual += card.actual.or_zero();
                derived.done_planned.cards.push(card.clone());
            }
        }

        derived
    }
}
