//! Response parsing and shape validation.
//!
//! The collaborator may wrap its JSON in prose or markdown fences, so the
//! first fenced (or else bare) JSON object is located before decoding.
//! Missing leaves inside a hardware slot read as "N/A"; a missing slot,
//! summary or summary field is fatal.

use crate::error::ParseError;
use crate::models::{
    Comparison, ComparisonResult, CpuSpec, GpuSpec, HardwareKind, HardwareSpec, Slot, Summary,
    Winner, NOT_AVAILABLE,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:[A-Za-z]+)?\s*([\s\S]+?)\s*```").expect("Invalid fenced block regex")
});

/// Return the span of the first balanced `{...}` object in `text`,
/// honouring string literals and escapes.
fn find_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Every balanced object in `text`, left to right, skipping nested ones.
fn balanced_objects(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(object) = find_balanced_object(rest) {
        found.push(object);
        // the object always starts at the first brace of `rest`
        let end = rest.find('{').unwrap_or(0) + object.len();
        rest = &rest[end..];
    }
    found
}

fn is_json_object(text: &str) -> bool {
    matches!(serde_json::from_str::<Value>(text), Ok(Value::Object(_)))
}

/// Locate the JSON text inside a raw collaborator reply.
///
/// Fenced blocks are tried in order, then bare objects in the whole reply;
/// the first candidate that decodes to a JSON object wins. Without one, the
/// first balanced candidate or the text from the first `{` onward is returned
/// so decoding reports a useful error for truncated output.
pub fn extract_json(raw: &str) -> Option<&str> {
    let fenced = FENCED_BLOCK
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| balanced_objects(m.as_str()));
    let candidates: Vec<&str> = fenced.chain(balanced_objects(raw)).collect();

    if let Some(object) = candidates.iter().find(|c| is_json_object(c)) {
        return Some(*object);
    }
    if let Some(first) = candidates.first() {
        return Some(*first);
    }
    raw.find('{').map(|i| raw[i..].trim())
}

fn winner_field(
    summary: &Map<String, Value>,
    field: &'static str,
    kind: HardwareKind,
) -> Result<Winner, ParseError> {
    match summary.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingSummaryField(field)),
        Some(Value::String(token)) => {
            Winner::from_token(kind, token).ok_or_else(|| ParseError::InvalidWinner {
                field,
                value: token.clone(),
            })
        }
        Some(other) => Err(ParseError::InvalidWinner {
            field,
            value: other.to_string(),
        }),
    }
}

fn parse_summary(root: &Map<String, Value>, kind: HardwareKind) -> Result<Summary, ParseError> {
    let summary = root
        .get("summary")
        .and_then(Value::as_object)
        .ok_or(ParseError::MissingSummary)?;

    let performance_winner = winner_field(summary, "performanceWinner", kind)?;
    let value_winner = winner_field(summary, "valueWinner", kind)?;
    let gaming_winner = winner_field(summary, "gamingWinner", kind)?;
    let overall_recommendation = summary
        .get("overallRecommendation")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingSummaryField("overallRecommendation"))?
        .to_string();

    Ok(Summary {
        performance_winner,
        value_winner,
        gaming_winner,
        overall_recommendation,
    })
}

fn parse_slot<S>(root: &Map<String, Value>, kind: HardwareKind, slot: Slot) -> Result<S, ParseError>
where
    S: DeserializeOwned + HardwareSpec,
{
    let key = kind.slot_key(slot);
    let object = root
        .get(&key)
        .filter(|v| v.is_object())
        .ok_or_else(|| ParseError::MissingSlot(key.clone()))?;

    let mut spec: S = serde_json::from_value(object.clone())
        .map_err(|e| ParseError::InvalidJson(format!("{}: {}", key, e)))?;
    if spec.model().trim().is_empty() {
        spec.set_model(NOT_AVAILABLE.to_string());
    }
    Ok(spec)
}

fn parse_comparison<S>(root: &Map<String, Value>, kind: HardwareKind) -> Result<Comparison<S>, ParseError>
where
    S: DeserializeOwned + HardwareSpec,
{
    let slot1 = parse_slot(root, kind, Slot::One)?;
    let slot2 = parse_slot(root, kind, Slot::Two)?;
    let summary = parse_summary(root, kind)?;
    Ok(Comparison {
        slot1,
        slot2,
        summary,
    })
}

/// Parse a raw collaborator reply into a validated comparison of `kind`.
///
/// No partial result is ever produced: any structural defect yields an error.
pub fn parse_comparison_response(raw: &str, kind: HardwareKind) -> Result<ComparisonResult, ParseError> {
    let json_text = extract_json(raw).ok_or(ParseError::NoJson)?;
    let value: Value =
        serde_json::from_str(json_text).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    let root = value.as_object().ok_or(ParseError::WrongShape)?;

    let result = match kind {
        HardwareKind::Cpu => ComparisonResult::Cpu(parse_comparison::<CpuSpec>(root, kind)?),
        HardwareKind::Gpu => ComparisonResult::Gpu(parse_comparison::<GpuSpec>(root, kind)?),
    };
    Ok(result)
}
