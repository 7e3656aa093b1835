//! Numeric comparison and winner highlighting.
//!
//! Turns a validated [`ComparisonResult`] into display rows and summary
//! cards. Nothing here touches egui; the view only maps [`CellStyle`] to
//! colours.

use crate::catalog::tooltips::tooltip;
use crate::comparison::attributes::attributes;
use crate::models::{ComparisonResult, Slot, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Returned for values that cannot be ordered ("N/A", no digits).
pub const UNORDERABLE: f64 = -1.0;

static NUMERIC_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:\.\d+)?|\.\d+").expect("Invalid numeric run regex")
});

/// Magnitude of a free-text value, ignoring units and thousands separators.
///
/// `"5.7 GHz"` is 5.7, `"32MB"` is 32, `"1,234"` is 1234; text without
/// digits and the "N/A" sentinel are [`UNORDERABLE`].
pub fn numeric_text_value(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() || text == crate::models::NOT_AVAILABLE {
        return UNORDERABLE;
    }
    let cleaned = text.replace(',', "");
    NUMERIC_RUN
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(UNORDERABLE)
}

/// Magnitude of an attribute value (see [`numeric_text_value`])
pub fn numeric_value(value: &SpecValue) -> f64 {
    match value {
        SpecValue::Number(n) => n.as_f64().unwrap_or(UNORDERABLE),
        SpecValue::Text(s) => numeric_text_value(s),
        SpecValue::NotAvailable => UNORDERABLE,
    }
}

/// Decide which slot wins a row.
///
/// `higher_is_better == None` marks a non-ordinal attribute and never has a
/// winner; unorderable values and exact ties have none either.
pub fn row_winner(value1: &SpecValue, value2: &SpecValue, higher_is_better: Option<bool>) -> Option<Slot> {
    let higher_is_better = higher_is_better?;
    let n1 = numeric_value(value1);
    let n2 = numeric_value(value2);
    if n1 == UNORDERABLE || n2 == UNORDERABLE || n1 == n2 {
        return None;
    }
    let slot1_wins = if higher_is_better { n1 > n2 } else { n1 < n2 };
    Some(if slot1_wins { Slot::One } else { Slot::Two })
}

/// Visual treatment of one value cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Neutral,
    Winner,
    Loser,
}

pub fn cell_style(winner: Option<Slot>, slot: Slot) -> CellStyle {
    match winner {
        None => CellStyle::Neutral,
        Some(w) if w == slot => CellStyle::Winner,
        Some(_) => CellStyle::Loser,
    }
}

/// Label for a summary card.
///
/// Substring match on the slot discriminator: anything containing "1" names
/// slot 1, else anything containing "2" names slot 2, else "Tie". The parser
/// only lets canonical tokens through, so this never sees free text in
/// practice.
pub fn summary_winner_label(winner: &str, name1: &str, name2: &str) -> String {
    let winner = winner.to_lowercase();
    if winner.contains('1') {
        name1.to_string()
    } else if winner.contains('2') {
        name2.to_string()
    } else {
        "Tie".to_string()
    }
}

/// One row of the specification table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRow {
    pub key: &'static str,
    pub label: &'static str,
    pub tooltip: Option<&'static str>,
    pub values: [String; 2],
    pub winner: Option<Slot>,
}

impl SpecRow {
    pub fn style(&self, slot: Slot) -> CellStyle {
        cell_style(self.winner, slot)
    }
}

/// Build the specification table in display order
pub fn spec_rows(result: &ComparisonResult) -> Vec<SpecRow> {
    attributes(result.kind())
        .iter()
        .map(|attr| {
            let v1 = result.value(Slot::One, attr.key);
            let v2 = result.value(Slot::Two, attr.key);
            SpecRow {
                key: attr.key,
                label: attr.label,
                tooltip: tooltip(attr.key),
                values: [v1.display(), v2.display()],
                winner: row_winner(v1, v2, attr.higher_is_better),
            }
        })
        .collect()
}

/// A summary verdict ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub label: String,
    pub is_tie: bool,
}

/// Performance, gaming and value cards, in that order
pub fn summary_cards(result: &ComparisonResult) -> Vec<SummaryCard> {
    let kind = result.kind();
    let summary = result.summary();
    let name1 = result.model(Slot::One);
    let name2 = result.model(Slot::Two);

    [
        ("Performance Winner", summary.performance_winner),
        ("Gaming Winner", summary.gaming_winner),
        ("Best Value", summary.value_winner),
    ]
    .into_iter()
    .map(|(title, winner)| {
        let label = summary_winner_label(&winner.token(kind), name1, name2);
        let is_tie = label == "Tie";
        SummaryCard { title, label, is_tie }
    })
    .collect()
}
