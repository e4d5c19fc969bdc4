//! Card title and board path parsing.
//!
//! Titles carry the estimate in parentheses and the actual time in braces:
//! `Fix login (4) {3}`. The last annotation of each kind wins.

use std::sync::LazyLock;

use regex::Regex;

use super::{Amount, Card, RawCard};

static ESTIMATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+\((\d+(\.\d+)?)\)").expect("estimate pattern is valid"));

static ACTUAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+\{(\d+(\.\d+)?)\}").expect("actual pattern is valid"));

static ANNOTATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\d+(\.\d+)?\)|\{\d+(\.\d+)?\}").expect("annotation pattern is valid")
});

static BOARD_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/b/(\w*)/.*").expect("board path pattern is valid"));

fn capture_amount(pattern: &Regex, title: &str) -> Amount {
    pattern
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .into()
}

/// Estimate annotated as `(n)`, or missing.
pub fn parse_estimate(title: &str) -> Amount {
    capture_amount(&ESTIMATE_PATTERN, title)
}

/// Actual time annotated as `{n}`, or missing.
pub fn parse_actual(title: &str) -> Amount {
    capture_amount(&ACTUAL_PATTERN, title)
}

/// Title with every `(n)` and `{n}` annotation removed, trimmed.
pub fn parse_name(title: &str) -> String {
    ANNOTATION_PATTERN.replace_all(title, "").trim().to_string()
}

/// Parse a scraped card. Cards still being composed do not exist yet.
pub fn parse_card(raw: &RawCard) -> Option<Card> {
    if raw.composing {
        return None;
    }
    Some(Card {
        name: parse_name(&raw.title),
        labels: raw.labels.clone(),
        estimate: parse_estimate(&raw.title),
        actual: parse_actual(&raw.title),
    })
}

pub fn is_board_path(path: &str) -> bool {
    BOARD_PATH_PATTERN.is_match(path)
}

/// Board identifier from a `/b/<id>/<slug>` path.
pub fn board_id_from_path(path: &str) -> Option<&str> {
    BOARD_PATH_PATTERN
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
