//! Board data model and aggregation.
//!
//! A [`RawBoard`] is what a scraper reads off the page: list titles and card
//! titles with their labels. Aggregation parses each title into a [`Card`]
//! and sums the lists into a [`BoardSnapshot`].

mod aggregator;
mod parser;

pub use aggregator::{aggregate_board, aggregate_list, collect_labels, format_amount, list_totals, round_amount};
pub use parser::{board_id_from_path, is_board_path, parse_actual, parse_card, parse_estimate, parse_name};

use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire marker for a value that was not annotated on the card.
const MISSING_MARKER: &str = "none";

/// An estimate or actual amount read from a card title.
///
/// `Missing` is distinct from zero: it means the title had no annotation.
/// On the wire it is the string `"none"`, values are plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Amount {
    Value(f64),
    #[default]
    Missing,
}

impl Amount {
    pub fn value(self) -> Option<f64> {
        match self {
            Amount::Value(v) => Some(v),
            Amount::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Amount::Missing)
    }

    /// Value used for summation: missing counts as zero.
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl From<Option<f64>> for Amount {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Amount::Missing, Amount::Value)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Value(v) => serializer.serialize_f64(*v),
            Amount::Missing => serializer.serialize_str(MISSING_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        // Numeric strings are accepted, anything else reads as missing.
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Amount::Value(v),
            Repr::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .into(),
        })
    }
}

/// A single card, immutable once extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub estimate: Amount,
    #[serde(default)]
    pub actual: Amount,
}

impl Card {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// One list of the board with its totals.
///
/// `estimate` and `actual` are sums over the non-missing values of `cards`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub estimate: f64,
    pub actual: f64,
    pub cards: Vec<Card>,
}

impl ColumnSnapshot {
    /// Build a column, computing totals from the cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let estimate = cards.iter().map(|c| c.estimate.or_zero()).sum();
        let actual = cards.iter().map(|c| c.actual.or_zero()).sum();
        Self { estimate, actual, cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The three sprint lists of a board plus every label in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub board_name: String,
    /// Non-empty labels across all three lists, first-seen order.
    pub labels: IndexSet<String>,
    pub pending: ColumnSnapshot,
    pub inflight: ColumnSnapshot,
    pub done: ColumnSnapshot,
}

impl BoardSnapshot {
    pub fn columns(&self) -> [&ColumnSnapshot; 3] {
        [&self.pending, &self.inflight, &self.done]
    }
}

/// A board as read from the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBoard {
    pub name: String,
    /// Location path of the board page, e.g. `/b/2aOkziAO/ui-team-sprint-6`.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub lists: Vec<RawList>,
}

impl RawBoard {
    /// Read a board document written by the scraper.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Board identifier taken from the page path, if the path is a board path.
    pub fn board_id(&self) -> Option<&str> {
        self.path.as_deref().and_then(board_id_from_path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawList {
    pub title: String,
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCard {
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Card is still being composed and has not been committed to the list.
    #[serde(default)]
    pub composing: bool,
}

/// Totals of a single list, as annotated next to the list title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTotals {
    pub title: String,
    pub estimate: f64,
    pub actual: f64,
}

impl ListTotals {
    /// Annotation appended to the list title: ` (estimate) {actual}`.
    pub fn annotation(&self) -> String {
        format!(" ({}) {{{}}}", format_amount(self.estimate), format_amount(self.actual))
    }
}
