//! Static hardware catalog: known model names, example presets and
//! suggestion matching for the model-name inputs.

pub mod tooltips;

use crate::models::HardwareKind;

/// Maximum number of suggestions offered for one query.
pub const MAX_SUGGESTIONS: usize = 8;

pub const CPU_MODELS: &[&str] = &[
    // Intel 14th Gen
    "Intel Core i9-14900K",
    "Intel Core i7-14700K",
    "Intel Core i5-14600K",
    "Intel Core i3-14100",
    // Intel 13th Gen
    "Intel Core i9-13900K",
    "Intel Core i7-13700K",
    "Intel Core i5-13600K",
    "Intel Core i3-13100",
    // AMD Ryzen 7000
    "AMD Ryzen 9 7950X3D",
    "AMD Ryzen 9 7950X",
    "AMD Ryzen 9 7900X3D",
    "AMD Ryzen 9 7900X",
    "AMD Ryzen 7 7800X3D",
    "AMD Ryzen 7 7700X",
    "AMD Ryzen 5 7600X",
    "AMD Ryzen 5 7600",
    // AMD Ryzen 5000
    "AMD Ryzen 9 5950X",
    "AMD Ryzen 9 5900X",
    "AMD Ryzen 7 5800X3D",
    "AMD Ryzen 7 5800X",
    "AMD Ryzen 5 5600X",
];

pub const GPU_MODELS: &[&str] = &[
    // NVIDIA 40 Series
    "NVIDIA GeForce RTX 4090",
    "NVIDIA GeForce RTX 4080 Super",
    "NVIDIA GeForce RTX 4080",
    "NVIDIA GeForce RTX 4070 Ti Super",
    "NVIDIA GeForce RTX 4070 Ti",
    "NVIDIA GeForce RTX 4070 Super",
    "NVIDIA GeForce RTX 4070",
    "NVIDIA GeForce RTX 4060 Ti",
    "NVIDIA GeForce RTX 4060",
    // NVIDIA 30 Series
    "NVIDIA GeForce RTX 3090 Ti",
    "NVIDIA GeForce RTX 3090",
    "NVIDIA GeForce RTX 3080 Ti",
    "NVIDIA GeForce RTX 3080",
    "NVIDIA GeForce RTX 3070 Ti",
    "NVIDIA GeForce RTX 3070",
    "NVIDIA GeForce RTX 3060 Ti",
    "NVIDIA GeForce RTX 3060",
    // AMD 7000 Series
    "AMD Radeon RX 7900 XTX",
    "AMD Radeon RX 7900 XT",
    "AMD Radeon RX 7800 XT",
    "AMD Radeon RX 7700 XT",
    "AMD Radeon RX 7600",
    // AMD 6000 Series
    "AMD Radeon RX 6950 XT",
    "AMD Radeon RX 6900 XT",
    "AMD Radeon RX 6800 XT",
    "AMD Radeon RX 6800",
    "AMD Radeon RX 6700 XT",
    "AMD Radeon RX 6600 XT",
];

/// An example comparison the user can load with one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub name1: &'static str,
    pub name2: &'static str,
}

const CPU_PRESETS: &[Preset] = &[
    Preset {
        label: "i9-14900K vs 7950X",
        name1: "Intel Core i9-14900K",
        name2: "AMD Ryzen 9 7950X",
    },
    Preset {
        label: "i5-14600K vs 7800X3D",
        name1: "Intel Core i5-14600K",
        name2: "AMD Ryzen 7 7800X3D",
    },
    Preset {
        label: "i3-14100 vs 7600",
        name1: "Intel Core i3-14100",
        name2: "AMD Ryzen 5 7600",
    },
];

const GPU_PRESETS: &[Preset] = &[
    Preset {
        label: "RTX 4090 vs 7900 XTX",
        name1: "NVIDIA GeForce RTX 4090",
        name2: "AMD Radeon RX 7900 XTX",
    },
    Preset {
        label: "RTX 4070 Super vs 7800 XT",
        name1: "NVIDIA GeForce RTX 4070 Super",
        name2: "AMD Radeon RX 7800 XT",
    },
    Preset {
        label: "RTX 4060 vs 7600",
        name1: "NVIDIA GeForce RTX 4060",
        name2: "AMD Radeon RX 7600",
    },
];

/// Ordered list of known model names for a kind
pub fn model_names(kind: HardwareKind) -> &'static [&'static str] {
    match kind {
        HardwareKind::Cpu => CPU_MODELS,
        HardwareKind::Gpu => GPU_MODELS,
    }
}

pub fn presets(kind: HardwareKind) -> &'static [Preset] {
    match kind {
        HardwareKind::Cpu => CPU_PRESETS,
        HardwareKind::Gpu => GPU_PRESETS,
    }
}

/// The pair shown in the inputs before the user types anything
pub fn default_pair(kind: HardwareKind) -> (&'static str, &'static str) {
    let preset = presets(kind)[0];
    (preset.name1, preset.name2)
}

/// Case-insensitive substring match over the catalog, in catalog order,
/// capped at [`MAX_SUGGESTIONS`]. An empty query yields nothing.
pub fn suggestions(kind: HardwareKind, query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    model_names(kind)
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}
