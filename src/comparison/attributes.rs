//! Attribute tables per hardware kind.
//!
//! One table drives the prompt's field list, the declared response schema
//! and the rendered row order, so the three cannot drift apart.

use crate::models::HardwareKind;

/// How a value should be typed in the declared response schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Text,
}

/// A comparable hardware attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    /// Payload key (camelCase)
    pub key: &'static str,
    /// Row label
    pub label: &'static str,
    /// `Some(true)` higher wins, `Some(false)` lower wins, `None` non-ordinal
    pub higher_is_better: Option<bool>,
    pub value_type: ValueType,
    /// Format hint embedded in the prompt
    pub hint: &'static str,
}

const fn attr(
    key: &'static str,
    label: &'static str,
    higher_is_better: Option<bool>,
    value_type: ValueType,
    hint: &'static str,
) -> Attribute {
    Attribute {
        key,
        label,
        higher_is_better,
        value_type,
        hint,
    }
}

const CPU_ATTRIBUTES: &[Attribute] = &[
    attr("cores", "Cores", Some(true), ValueType::Integer, "number"),
    attr("threads", "Threads", Some(true), ValueType::Integer, "number"),
    attr("boostClock", "Boost Clock", Some(true), ValueType::Text, "string (e.g., '5.7 GHz')"),
    attr("baseClock", "Base Clock", Some(true), ValueType::Text, "string (e.g., '3.5 GHz')"),
    attr("l3Cache", "L3 Cache", Some(true), ValueType::Text, "string (e.g., '32MB')"),
    attr("tdp", "TDP", Some(false), ValueType::Text, "string (e.g., '125W')"),
    attr("idlePower", "Idle Power", Some(false), ValueType::Text, "string (e.g., '8W')"),
    attr("peakPower", "Peak Power", Some(false), ValueType::Text, "string (e.g., '253W')"),
    attr("cinebenchR23MultiCore", "Cinebench R23 Multi-Core", Some(true), ValueType::Text, "string (e.g., '38,000')"),
    attr("cinebenchR23SingleCore", "Cinebench R23 Single-Core", Some(true), ValueType::Text, "string (e.g., '2,200')"),
    attr("socket", "Socket", None, ValueType::Text, "string"),
    attr("integratedGraphics", "Integrated Graphics", None, ValueType::Text, "string"),
    attr("releaseDate", "Release Date", None, ValueType::Text, "string"),
];

const GPU_ATTRIBUTES: &[Attribute] = &[
    attr("vram", "VRAM", Some(true), ValueType::Text, "string (e.g., '16 GB')"),
    attr("memoryType", "Memory Type", None, ValueType::Text, "string (e.g., 'GDDR6X')"),
    attr("boostClock", "Boost Clock", Some(true), ValueType::Text, "string (e.g., '2520 MHz')"),
    attr("tdp", "TDP", Some(false), ValueType::Text, "string (e.g., '320W')"),
    attr("idlePower", "Idle Power", Some(false), ValueType::Text, "string (e.g., '15W')"),
    attr("peakPower", "Peak Power", Some(false), ValueType::Text, "string (e.g., '315W')"),
    attr("timeSpyGraphicsScore", "Time Spy Graphics", Some(true), ValueType::Text, "string (e.g., '19,500')"),
    attr("portRoyalRayTracingScore", "Port Royal Ray Tracing", Some(true), ValueType::Text, "string (e.g., '13,000')"),
    attr("architecture", "Architecture", None, ValueType::Text, "string"),
    attr("releaseDate", "Release Date", None, ValueType::Text, "string"),
];

/// Attributes of a kind in display order (the `model` field is not a row)
pub fn attributes(kind: HardwareKind) -> &'static [Attribute] {
    match kind {
        HardwareKind::Cpu => CPU_ATTRIBUTES,
        HardwareKind::Gpu => GPU_ATTRIBUTES,
    }
}
