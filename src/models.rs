//! Core data types for hwcompare.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Sentinel text for an attribute the collaborator could not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// The active comparison domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareKind {
    Cpu,
    Gpu,
}

impl HardwareKind {
    /// Lowercase key used in payload slot names ("cpu", "gpu")
    pub fn key(&self) -> &'static str {
        match self {
            HardwareKind::Cpu => "cpu",
            HardwareKind::Gpu => "gpu",
        }
    }

    /// Payload key of a hardware slot, e.g. `cpu1`
    pub fn slot_key(&self, slot: Slot) -> String {
        format!("{}{}", self.key(), slot.number())
    }

    /// Human label for a slot's input field
    pub fn slot_label(&self, slot: Slot) -> String {
        match self {
            HardwareKind::Cpu => format!("Processor {}", slot.number()),
            HardwareKind::Gpu => format!("Graphics Card {}", slot.number()),
        }
    }

    pub fn all() -> [HardwareKind; 2] {
        [HardwareKind::Cpu, HardwareKind::Gpu]
    }
}

impl fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareKind::Cpu => write!(f, "CPU"),
            HardwareKind::Gpu => write!(f, "GPU"),
        }
    }
}

impl FromStr for HardwareKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Ok(HardwareKind::Cpu),
            "gpu" => Ok(HardwareKind::Gpu),
            other => Err(format!("Unknown hardware kind: {}", other)),
        }
    }
}

/// One of the two compared hardware items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    pub fn number(&self) -> u8 {
        match self {
            Slot::One => 1,
            Slot::Two => 2,
        }
    }

    /// Zero-based index for per-slot arrays
    pub fn index(&self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
        }
    }

    pub fn other(&self) -> Slot {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }

    pub fn both() -> [Slot; 2] {
        [Slot::One, Slot::Two]
    }
}

/// A single attribute value as delivered by the collaborator.
///
/// Numbers keep their JSON representation so a parsed result serializes back
/// to the exact payload it came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpecValue {
    Number(serde_json::Number),
    Text(String),
    #[default]
    NotAvailable,
}

impl SpecValue {
    /// Build from an arbitrary JSON leaf
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => SpecValue::NotAvailable,
            Value::Number(n) => SpecValue::Number(n.clone()),
            Value::String(s) if s == NOT_AVAILABLE => SpecValue::NotAvailable,
            Value::String(s) => SpecValue::Text(s.clone()),
            Value::Bool(b) => SpecValue::Text(if *b { "Yes" } else { "No" }.to_string()),
            other => SpecValue::Text(other.to_string()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SpecValue::Number(n) => Value::Number(n.clone()),
            SpecValue::Text(s) => Value::String(s.clone()),
            SpecValue::NotAvailable => Value::String(NOT_AVAILABLE.to_string()),
        }
    }

    /// Text shown in a table cell
    pub fn display(&self) -> String {
        match self {
            SpecValue::Number(n) => n.to_string(),
            SpecValue::Text(s) => s.clone(),
            SpecValue::NotAvailable => NOT_AVAILABLE.to_string(),
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        SpecValue::from_json(&Value::String(s.to_string()))
    }
}

impl From<u64> for SpecValue {
    fn from(n: u64) -> Self {
        SpecValue::Number(n.into())
    }
}

impl Serialize for SpecValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpecValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(SpecValue::from_json(&value))
    }
}

/// Accepts any JSON leaf as a model display string.
fn deserialize_model<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SpecValue::deserialize(deserializer)?;
    Ok(value.display())
}

/// Common view over CPU and GPU attribute sets.
pub trait HardwareSpec {
    /// Display model string
    fn model(&self) -> &str;

    fn set_model(&mut self, model: String);

    /// Look up an attribute by its payload key (camelCase)
    fn value(&self, key: &str) -> Option<&SpecValue>;
}

/// Processor attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CpuSpec {
    #[serde(deserialize_with = "deserialize_model")]
    pub model: String,
    pub cores: SpecValue,
    pub threads: SpecValue,
    pub base_clock: SpecValue,
    pub boost_clock: SpecValue,
    pub tdp: SpecValue,
    pub idle_power: SpecValue,
    pub peak_power: SpecValue,
    pub l3_cache: SpecValue,
    pub socket: SpecValue,
    pub integrated_graphics: SpecValue,
    pub release_date: SpecValue,
    pub cinebench_r23_multi_core: SpecValue,
    pub cinebench_r23_single_core: SpecValue,
}

impl HardwareSpec for CpuSpec {
    fn model(&self) -> &str {
        &self.model
    }

    fn set_model(&mut self, model: String) {
        self.model = model;
    }

    fn value(&self, key: &str) -> Option<&SpecValue> {
        match key {
            "cores" => Some(&self.cores),
            "threads" => Some(&self.threads),
            "baseClock" => Some(&self.base_clock),
            "boostClock" => Some(&self.boost_clock),
            "tdp" => Some(&self.tdp),
            "idlePower" => Some(&self.idle_power),
            "peakPower" => Some(&self.peak_power),
            "l3Cache" => Some(&self.l3_cache),
            "socket" => Some(&self.socket),
            "integratedGraphics" => Some(&self.integrated_graphics),
            "releaseDate" => Some(&self.release_date),
            "cinebenchR23MultiCore" => Some(&self.cinebench_r23_multi_core),
            "cinebenchR23SingleCore" => Some(&self.cinebench_r23_single_core),
            _ => None,
        }
    }
}

/// Graphics card attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GpuSpec {
    #[serde(deserialize_with = "deserialize_model")]
    pub model: String,
    pub vram: SpecValue,
    pub memory_type: SpecValue,
    pub boost_clock: SpecValue,
    pub tdp: SpecValue,
    pub idle_power: SpecValue,
    pub peak_power: SpecValue,
    pub architecture: SpecValue,
    pub release_date: SpecValue,
    pub time_spy_graphics_score: SpecValue,
    pub port_royal_ray_tracing_score: SpecValue,
}

impl HardwareSpec for GpuSpec {
    fn model(&self) -> &str {
        &self.model
    }

    fn set_model(&mut self, model: String) {
        self.model = model;
    }

    fn value(&self, key: &str) -> Option<&SpecValue> {
        match key {
            "vram" => Some(&self.vram),
            "memoryType" => Some(&self.memory_type),
            "boostClock" => Some(&self.boost_clock),
            "tdp" => Some(&self.tdp),
            "idlePower" => Some(&self.idle_power),
            "peakPower" => Some(&self.peak_power),
            "architecture" => Some(&self.architecture),
            "releaseDate" => Some(&self.release_date),
            "timeSpyGraphicsScore" => Some(&self.time_spy_graphics_score),
            "portRoyalRayTracingScore" => Some(&self.port_royal_ray_tracing_score),
            _ => None,
        }
    }
}

/// Outcome of one summary verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Slot1,
    Slot2,
    Tie,
}

impl Winner {
    /// Canonical payload token for this outcome, e.g. `gpu2` or `tie`
    pub fn token(&self, kind: HardwareKind) -> String {
        match self {
            Winner::Slot1 => kind.slot_key(Slot::One),
            Winner::Slot2 => kind.slot_key(Slot::Two),
            Winner::Tie => "tie".to_string(),
        }
    }

    /// Strict parse of a payload token; anything outside the three
    /// enumerated outcomes is rejected.
    pub fn from_token(kind: HardwareKind, token: &str) -> Option<Self> {
        let token = token.trim();
        if token == kind.slot_key(Slot::One) {
            Some(Winner::Slot1)
        } else if token == kind.slot_key(Slot::Two) {
            Some(Winner::Slot2)
        } else if token == "tie" {
            Some(Winner::Tie)
        } else {
            None
        }
    }
}

/// Narrative verdicts attached to a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub performance_winner: Winner,
    pub value_winner: Winner,
    pub gaming_winner: Winner,
    pub overall_recommendation: String,
}

/// Two attribute sets of the same kind plus the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<S> {
    pub slot1: S,
    pub slot2: S,
    pub summary: Summary,
}

impl<S: HardwareSpec> Comparison<S> {
    pub fn spec(&self, slot: Slot) -> &S {
        match slot {
            Slot::One => &self.slot1,
            Slot::Two => &self.slot2,
        }
    }

    pub fn spec_mut(&mut self, slot: Slot) -> &mut S {
        match slot {
            Slot::One => &mut self.slot1,
            Slot::Two => &mut self.slot2,
        }
    }
}

/// A validated comparison, tagged with its kind once at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonResult {
    Cpu(Comparison<CpuSpec>),
    Gpu(Comparison<GpuSpec>),
}

impl ComparisonResult {
    pub fn kind(&self) -> HardwareKind {
        match self {
            ComparisonResult::Cpu(_) => HardwareKind::Cpu,
            ComparisonResult::Gpu(_) => HardwareKind::Gpu,
        }
    }

    pub fn summary(&self) -> &Summary {
        match self {
            ComparisonResult::Cpu(c) => &c.summary,
            ComparisonResult::Gpu(c) => &c.summary,
        }
    }

    pub fn model(&self, slot: Slot) -> &str {
        match self {
            ComparisonResult::Cpu(c) => c.spec(slot).model(),
            ComparisonResult::Gpu(c) => c.spec(slot).model(),
        }
    }

    /// Attribute of one slot; unknown keys read as unavailable
    pub fn value(&self, slot: Slot, key: &str) -> &SpecValue {
        static MISSING: SpecValue = SpecValue::NotAvailable;
        let found = match self {
            ComparisonResult::Cpu(c) => c.spec(slot).value(key),
            ComparisonResult::Gpu(c) => c.spec(slot).value(key),
        };
        found.unwrap_or(&MISSING)
    }

    pub(crate) fn set_model(&mut self, slot: Slot, model: String) {
        match self {
            ComparisonResult::Cpu(c) => c.spec_mut(slot).set_model(model),
            ComparisonResult::Gpu(c) => c.spec_mut(slot).set_model(model),
        }
    }

    /// Serialize back into the collaborator's payload shape
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let kind = self.kind();
        let (slot1, slot2) = match self {
            ComparisonResult::Cpu(c) => (serde_json::to_value(&c.slot1)?, serde_json::to_value(&c.slot2)?),
            ComparisonResult::Gpu(c) => (serde_json::to_value(&c.slot1)?, serde_json::to_value(&c.slot2)?),
        };
        let summary = self.summary();

        let mut summary_obj = Map::new();
        summary_obj.insert("performanceWinner".into(), Value::String(summary.performance_winner.token(kind)));
        summary_obj.insert("valueWinner".into(), Value::String(summary.value_winner.token(kind)));
        summary_obj.insert("gamingWinner".into(), Value::String(summary.gaming_winner.token(kind)));
        summary_obj.insert(
            "overallRecommendation".into(),
            Value::String(summary.overall_recommendation.clone()),
        );

        let mut root = Map::new();
        root.insert(kind.slot_key(Slot::One), slot1);
        root.insert(kind.slot_key(Slot::Two), slot2);
        root.insert("summary".into(), Value::Object(summary_obj));
        Ok(Value::Object(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hardware_kind_from_str() {
        assert_eq!("cpu".parse::<HardwareKind>().unwrap(), HardwareKind::Cpu);
        assert_eq!(" GPU ".parse::<HardwareKind>().unwrap(), HardwareKind::Gpu);
        assert!("tpu".parse::<HardwareKind>().is_err());
    }

    #[test]
    fn test_slot_keys() {
        assert_eq!(HardwareKind::Cpu.slot_key(Slot::One), "cpu1");
        assert_eq!(HardwareKind::Gpu.slot_key(Slot::Two), "gpu2");
        assert_eq!(Slot::One.other(), Slot::Two);
    }

    #[test]
    fn test_spec_value_from_json() {
        assert_eq!(SpecValue::from_json(&json!("N/A")), SpecValue::NotAvailable);
        assert_eq!(SpecValue::from_json(&Value::Null), SpecValue::NotAvailable);
        assert_eq!(SpecValue::from_json(&json!(16)), SpecValue::Number(16.into()));
        assert_eq!(
            SpecValue::from_json(&json!("5.7 GHz")),
            SpecValue::Text("5.7 GHz".to_string())
        );
        // Only the exact sentinel is unavailable; blank text is kept as-is
        assert_eq!(SpecValue::from_json(&json!("")), SpecValue::Text(String::new()));
        assert_eq!(SpecValue::from_json(&json!(" N/A ")).to_json(), json!(" N/A "));
        assert_eq!(
            SpecValue::from_json(&json!(true)),
            SpecValue::Text("Yes".to_string())
        );
    }

    #[test]
    fn test_spec_value_display() {
        assert_eq!(SpecValue::Number(24.into()).display(), "24");
        assert_eq!(SpecValue::NotAvailable.display(), "N/A");
        assert_eq!(SpecValue::from("125W").to_string(), "125W");
    }

    #[test]
    fn test_cpu_spec_missing_fields_default_to_not_available() {
        let spec: CpuSpec = serde_json::from_value(json!({
            "model": "AMD Ryzen 5 7600",
            "cores": 6
        }))
        .unwrap();
        assert_eq!(spec.model, "AMD Ryzen 5 7600");
        assert_eq!(spec.cores, SpecValue::Number(6.into()));
        assert_eq!(spec.l3_cache, SpecValue::NotAvailable);
        assert_eq!(spec.value("cinebenchR23SingleCore"), Some(&SpecValue::NotAvailable));
        assert_eq!(spec.value("vram"), None);
    }

    #[test]
    fn test_gpu_spec_camel_case_keys() {
        let spec: GpuSpec = serde_json::from_value(json!({
            "model": "AMD Radeon RX 7600",
            "timeSpyGraphicsScore": "10,812",
            "portRoyalRayTracingScore": "N/A"
        }))
        .unwrap();
        assert_eq!(spec.time_spy_graphics_score, SpecValue::Text("10,812".to_string()));
        assert_eq!(spec.port_royal_ray_tracing_score, SpecValue::NotAvailable);
    }

    #[test]
    fn test_winner_tokens_are_strict() {
        assert_eq!(Winner::from_token(HardwareKind::Cpu, "cpu1"), Some(Winner::Slot1));
        assert_eq!(Winner::from_token(HardwareKind::Cpu, " tie "), Some(Winner::Tie));
        assert_eq!(Winner::from_token(HardwareKind::Cpu, "gpu1"), None);
        assert_eq!(Winner::from_token(HardwareKind::Gpu, "GPU2"), None);
        assert_eq!(Winner::Slot2.token(HardwareKind::Gpu), "gpu2");
    }
}
