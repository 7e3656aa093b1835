//! Hardware comparison backend
//!
//! Compares two CPUs or two GPUs by asking a generative-AI collaborator for
//! their specifications and verdicts, validating the reply and rendering it
//! as a highlighted side-by-side table in an egui frontend.
//!
//! The system is organized into functional modules:
//! - **error**: error taxonomy (validation, request, parse, config)
//! - **models**: hardware kinds, slots, spec values and comparison results
//! - **catalog**: known model names, presets and attribute tooltips
//! - **comparison**: validator, prompt, requester, parser and renderer
//! - **collaborator**: the generative-AI service seam and its Gemini client
//! - **config**: persisted settings and credential lookup
//! - **ui**: view state machine, async controller and egui views

// Core foundational modules
pub mod error;
pub mod models;

pub mod catalog;
pub mod collaborator;
pub mod comparison;

pub mod config;

pub mod ui;

pub mod log_collector;

// Re-export the log crate for macro usage
pub use log;

pub use log_collector::{LogCollector, LogLine};

// ============================================================================
// PUBLIC RE-EXPORTS FOR CONVENIENCE
// ============================================================================

pub use error::{CompareError, ConfigError, ParseError, RequestError, Result, ValidationError};

pub use models::{
    Comparison, ComparisonResult, CpuSpec, GpuSpec, HardwareKind, Slot, SpecValue, Summary, Winner,
};

pub use collaborator::{Collaborator, GeminiClient, IntegrationMode};
pub use comparison::ComparisonRequester;
pub use config::{AppSettings, SettingsManager};
pub use ui::{AppController, AppUI, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_error_reexport() {
        let _: Result<i32> = Ok(42);
        let _ = ValidationError::EmptyName.message();
    }

    #[test]
    fn test_models_reexport() {
        assert_eq!(HardwareKind::Cpu.slot_key(Slot::Two), "cpu2");
        assert_eq!(Winner::Tie.token(HardwareKind::Gpu), "tie");
    }
}
