//! Prompt construction and the declared response schema.

use crate::comparison::attributes::{attributes, ValueType};
use crate::models::{HardwareKind, Slot};
use serde_json::{json, Map, Value};

const SUMMARY_WINNER_FIELDS: [&str; 3] = ["performanceWinner", "valueWinner", "gamingWinner"];

struct PromptFlavor {
    persona: &'static str,
    noun_plural: &'static str,
    benchmarks: &'static [&'static str],
    recommendation_scope: &'static str,
}

fn flavor(kind: HardwareKind) -> PromptFlavor {
    match kind {
        HardwareKind::Cpu => PromptFlavor {
            persona: "You are a CPU comparison expert.",
            noun_plural: "processors",
            benchmarks: &[
                "Cinebench R23 Multi-Core score",
                "Cinebench R23 Single-Core score",
                "Idle Power Consumption (in Watts)",
                "Peak Power Draw under load (in Watts)",
            ],
            recommendation_scope: "along with an overall recommendation",
        },
        HardwareKind::Gpu => PromptFlavor {
            persona: "You are a GPU comparison expert.",
            noun_plural: "graphics cards",
            benchmarks: &[
                "3DMark Time Spy Graphics score",
                "3DMark Port Royal Ray Tracing score",
                "Idle Power Consumption (in Watts)",
                "Peak Power Draw during gaming (in Watts)",
            ],
            recommendation_scope: "along with an overall recommendation for different resolutions",
        },
    }
}

/// The three allowed winner tokens for a kind, e.g. `["cpu1", "cpu2", "tie"]`
pub fn winner_tokens(kind: HardwareKind) -> [String; 3] {
    [
        kind.slot_key(Slot::One),
        kind.slot_key(Slot::Two),
        "tie".to_string(),
    ]
}

/// Human-readable JSON skeleton with per-field type hints
fn structure_sketch(kind: HardwareKind) -> String {
    let slot1 = kind.slot_key(Slot::One);
    let slot2 = kind.slot_key(Slot::Two);
    let [t1, t2, tie] = winner_tokens(kind);

    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!("  \"{}\": {{\n", slot1));
    out.push_str("    \"model\": \"string\",\n");
    let attrs = attributes(kind);
    for (i, a) in attrs.iter().enumerate() {
        let comma = if i + 1 < attrs.len() { "," } else { "" };
        out.push_str(&format!("    \"{}\": \"{}\"{}\n", a.key, a.hint, comma));
    }
    out.push_str("  },\n");
    out.push_str(&format!("  \"{}\": {{ ... same structure as {} ... }},\n", slot2, slot1));
    out.push_str("  \"summary\": {\n");
    for field in SUMMARY_WINNER_FIELDS {
        out.push_str(&format!(
            "    \"{}\": \"string ('{}', '{}', or '{}')\",\n",
            field, t1, t2, tie
        ));
    }
    out.push_str("    \"overallRecommendation\": \"string (detailed paragraph)\"\n");
    out.push_str("  }\n");
    out.push('}');
    out
}

/// Build the natural-language instruction for comparing two models.
///
/// Names are embedded verbatim inside double quotes; the caller validates
/// them beforehand.
pub fn build_prompt(kind: HardwareKind, name1: &str, name2: &str) -> String {
    let f = flavor(kind);
    let benchmarks: String = f
        .benchmarks
        .iter()
        .map(|b| format!("- {}\n", b))
        .collect();

    format!(
        "{persona} Use the most recent specifications and benchmark results you know of.\n\
         Compare the following two {noun}: \"{name1}\" and \"{name2}\".\n\
         \n\
         Find their technical specifications, power consumption, and the following figures:\n\
         {benchmarks}\
         \n\
         Decide which is better for performance, value, and gaming, {scope}.\n\
         \n\
         Respond ONLY with a single, valid JSON object that conforms to the structure below. \
         Do not include any other text, explanations, or markdown formatting.\n\
         If a value cannot be found, use \"N/A\".\n\
         \n\
         JSON structure:\n\
         {sketch}\n",
        persona = f.persona,
        noun = f.noun_plural,
        name1 = name1,
        name2 = name2,
        benchmarks = benchmarks,
        scope = f.recommendation_scope,
        sketch = structure_sketch(kind),
    )
}

fn slot_schema(kind: HardwareKind) -> Value {
    let mut properties = Map::new();
    let mut required = vec![Value::String("model".into())];
    properties.insert("model".into(), json!({ "type": "STRING" }));
    for a in attributes(kind) {
        let schema = match a.value_type {
            ValueType::Integer => json!({ "type": "INTEGER", "nullable": true }),
            ValueType::Text => json!({ "type": "STRING" }),
        };
        properties.insert(a.key.into(), schema);
        required.push(Value::String(a.key.into()));
    }
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// Declared response schema (Gemini OpenAPI subset) for structured output.
///
/// Every winner field is constrained to the kind's three tokens.
pub fn response_schema(kind: HardwareKind) -> Value {
    let tokens = winner_tokens(kind);
    let mut summary_props = Map::new();
    for field in SUMMARY_WINNER_FIELDS {
        summary_props.insert(
            field.into(),
            json!({ "type": "STRING", "enum": tokens }),
        );
    }
    summary_props.insert("overallRecommendation".into(), json!({ "type": "STRING" }));

    let slot1 = kind.slot_key(Slot::One);
    let slot2 = kind.slot_key(Slot::Two);
    let mut properties = Map::new();
    properties.insert(slot1.clone(), slot_schema(kind));
    properties.insert(slot2.clone(), slot_schema(kind));
    properties.insert(
        "summary".into(),
        json!({
            "type": "OBJECT",
            "properties": summary_props,
            "required": ["performanceWinner", "valueWinner", "gamingWinner", "overallRecommendation"],
        }),
    );

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": [slot1, slot2, "summary"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_both_models() {
        let prompt = build_prompt(HardwareKind::Cpu, "Intel Core i9-14900K", "AMD Ryzen 9 7950X");
        assert!(prompt.contains("\"Intel Core i9-14900K\""));
        assert!(prompt.contains("\"AMD Ryzen 9 7950X\""));
        assert!(prompt.contains("CPU comparison expert"));
    }

    #[test]
    fn test_prompt_enumerates_every_field() {
        for kind in HardwareKind::all() {
            let prompt = build_prompt(kind, "aaa", "bbb");
            for a in attributes(kind) {
                assert!(prompt.contains(&format!("\"{}\"", a.key)), "missing {}", a.key);
            }
            for field in SUMMARY_WINNER_FIELDS {
                assert!(prompt.contains(field));
            }
        }
    }

    #[test]
    fn test_gpu_prompt_winner_tokens() {
        let prompt = build_prompt(HardwareKind::Gpu, "RTX 4060", "RX 7600");
        assert!(prompt.contains("'gpu1', 'gpu2', or 'tie'"));
        assert!(!prompt.contains("cpu1"));
        assert!(prompt.contains("different resolutions"));
    }

    #[test]
    fn test_schema_constrains_winners() {
        let schema = response_schema(HardwareKind::Cpu);
        let perf = &schema["properties"]["summary"]["properties"]["performanceWinner"];
        assert_eq!(perf["enum"], json!(["cpu1", "cpu2", "tie"]));
        assert_eq!(schema["required"], json!(["cpu1", "cpu2", "summary"]));
    }

    #[test]
    fn test_schema_slot_fields() {
        let schema = response_schema(HardwareKind::Gpu);
        let slot = &schema["properties"]["gpu2"];
        assert_eq!(slot["properties"]["vram"]["type"], "STRING");
        assert_eq!(slot["required"].as_array().unwrap().len(), 1 + attributes(HardwareKind::Gpu).len());

        let cpu = response_schema(HardwareKind::Cpu);
        assert_eq!(cpu["properties"]["cpu1"]["properties"]["cores"]["type"], "INTEGER");
    }
}
