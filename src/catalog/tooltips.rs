//! Explanatory hover text for comparison table rows.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TOOLTIPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    // CPU
    m.insert("cores", "The number of physical processing units. More cores generally mean better performance in multi-threaded tasks like video editing and 3D rendering.");
    m.insert("threads", "The number of independent processes a CPU can handle at once. Often double the core count with simultaneous multithreading.");
    m.insert("boostClock", "The maximum speed the chip reaches under load for short durations. Higher is better for gaming and responsive applications.");
    m.insert("baseClock", "The standard operating speed of the CPU when not under heavy load.");
    m.insert("l3Cache", "High-speed memory on the CPU that keeps frequently accessed data close. Larger L3 caches can significantly improve gaming performance.");
    m.insert("tdp", "Thermal Design Power. An indicator of heat output, closely related to power consumption. A lower TDP is more power-efficient.");
    m.insert("idlePower", "Power consumed when the component is not under significant load (e.g. at the desktop). Lower is better for energy efficiency.");
    m.insert("peakPower", "Maximum power consumed under heavy load such as gaming or stress testing. Relevant for sizing the power supply and cooling. Lower is more efficient.");
    m.insert("socket", "The physical connector on the motherboard. CPU and motherboard sockets must match.");
    m.insert("integratedGraphics", "A graphics processor built into the CPU, enough for basic display output and light tasks without a separate card.");
    m.insert("releaseDate", "The date when the part was first released to the market.");
    m.insert("cinebenchR23MultiCore", "Cinebench R23 multi-core rendering score. Higher means better performance for professional workloads.");
    m.insert("cinebenchR23SingleCore", "Cinebench R23 single-core score. Higher matters for gaming and general application responsiveness.");
    // GPU
    m.insert("vram", "Video RAM. Dedicated memory for textures and frame buffers. More is better for higher resolutions and detailed textures.");
    m.insert("memoryType", "The memory technology used by the GPU, such as GDDR6 or GDDR6X. Newer types generally offer more bandwidth.");
    m.insert("architecture", "The design generation of the GPU (e.g. NVIDIA Ada Lovelace, AMD RDNA 3).");
    m.insert("timeSpyGraphicsScore", "3DMark Time Spy graphics score, representing DirectX 12 gaming performance at 1440p. Higher is better.");
    m.insert("portRoyalRayTracingScore", "3DMark Port Royal score, representing real-time ray tracing performance. Higher is better.");
    m
});

/// Hover text for an attribute key, if one exists
pub fn tooltip(key: &str) -> Option<&'static str> {
    TOOLTIPS.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert!(tooltip("l3Cache").unwrap().contains("L3"));
        assert!(tooltip("portRoyalRayTracingScore").is_some());
        assert!(tooltip("model").is_none());
    }
}
