//! View state machine.
//!
//! `ViewState` is an immutable value: [`ViewState::apply`] takes an
//! [`Action`] and returns the next state plus, at most, one [`Effect`] for
//! the controller to run. Nothing here touches egui or the network, so every
//! transition is testable headless.
//!
//! ```text
//! Idle --submit(valid)--> Loading{token} --finished(token)--> Succeeded | Failed
//!  ^                          |                                   |
//!  +------ edit / mode -------+-----------------------------------+
//! ```

use crate::catalog;
use crate::comparison::validator::validate_pair;
use crate::error::ValidationError;
use crate::models::{ComparisonResult, HardwareKind, Slot};

/// Identifies one submitted comparison
pub type RequestToken = u64;

/// Lifecycle of the current comparison
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading { token: RequestToken },
    Succeeded(ComparisonResult),
    /// User-facing error message
    Failed(String),
}

/// User intents and request completions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectMode(HardwareKind),
    EditField(Slot, String),
    SelectSuggestion(Slot, String),
    LoadPreset(usize),
    SubmitCompare,
    RequestFinished {
        token: RequestToken,
        outcome: Result<ComparisonResult, String>,
    },
}

/// Work the controller must start after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartRequest {
        token: RequestToken,
        kind: HardwareKind,
        name1: String,
        name2: String,
    },
}

/// Result of [`ViewState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn pure(state: ViewState) -> Self {
        Transition { state, effect: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    mode: HardwareKind,
    cpu_inputs: [String; 2],
    gpu_inputs: [String; 2],
    field_errors: [Option<ValidationError>; 2],
    request: RequestState,
    next_token: RequestToken,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(HardwareKind::Cpu)
    }
}

impl ViewState {
    /// Fresh state in `mode`, both input pairs seeded with their defaults
    pub fn new(mode: HardwareKind) -> Self {
        let pair = |kind| {
            let (a, b) = catalog::default_pair(kind);
            [a.to_string(), b.to_string()]
        };
        ViewState {
            mode,
            cpu_inputs: pair(HardwareKind::Cpu),
            gpu_inputs: pair(HardwareKind::Gpu),
            field_errors: [None, None],
            request: RequestState::Idle,
            next_token: 1,
        }
    }

    pub fn mode(&self) -> HardwareKind {
        self.mode
    }

    /// Input pair for `kind`; pairs are kept per mode
    pub fn inputs_for(&self, kind: HardwareKind) -> &[String; 2] {
        match kind {
            HardwareKind::Cpu => &self.cpu_inputs,
            HardwareKind::Gpu => &self.gpu_inputs,
        }
    }

    fn inputs_mut(&mut self) -> &mut [String; 2] {
        match self.mode {
            HardwareKind::Cpu => &mut self.cpu_inputs,
            HardwareKind::Gpu => &mut self.gpu_inputs,
        }
    }

    pub fn input(&self, slot: Slot) -> &str {
        &self.inputs_for(self.mode)[slot.index()]
    }

    pub fn field_error(&self, slot: Slot) -> Option<ValidationError> {
        self.field_errors[slot.index()]
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading { .. })
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        match &self.request {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.request {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// UI-level guard: not loading and both fields non-blank.
    ///
    /// Looser than submit-time validation, which also checks length.
    pub fn can_compare(&self) -> bool {
        !self.is_loading() && Slot::both().iter().all(|&slot| !self.input(slot).trim().is_empty())
    }

    pub fn compare_caption(&self) -> String {
        if self.is_loading() {
            "Comparing...".to_string()
        } else {
            format!("Compare {}s", self.mode)
        }
    }

    /// Catalog matches for the text in `slot`, minus an exact match
    pub fn suggestions(&self, slot: Slot) -> Vec<&'static str> {
        let query = self.input(slot);
        catalog::suggestions(self.mode, query)
            .into_iter()
            .filter(|name| !name.eq_ignore_ascii_case(query.trim()))
            .collect()
    }

    /// Compute the next state
    pub fn apply(&self, action: Action) -> Transition {
        let mut next = self.clone();
        match action {
            Action::SelectMode(kind) => {
                if kind != self.mode {
                    next.mode = kind;
                    next.field_errors = [None, None];
                    next.request = RequestState::Idle;
                }
                Transition::pure(next)
            }
            Action::EditField(slot, text) | Action::SelectSuggestion(slot, text) => {
                next.field_errors[slot.index()] = None;
                if next.inputs_mut()[slot.index()] != text {
                    next.inputs_mut()[slot.index()] = text;
                    next.request = RequestState::Idle;
                }
                Transition::pure(next)
            }
            Action::LoadPreset(index) => {
                let Some(preset) = catalog::presets(self.mode).get(index) else {
                    log::warn!("[UI] No {} preset at index {}", self.mode, index);
                    return Transition::pure(next);
                };
                next.field_errors = [None, None];
                let pair = [preset.name1.to_string(), preset.name2.to_string()];
                if *next.inputs_mut() != pair {
                    *next.inputs_mut() = pair;
                    next.request = RequestState::Idle;
                }
                Transition::pure(next)
            }
            Action::SubmitCompare => {
                if self.is_loading() {
                    return Transition::pure(next);
                }
                let name1 = self.input(Slot::One).to_string();
                let name2 = self.input(Slot::Two).to_string();
                next.field_errors = validate_pair(&name1, &name2);
                if next.field_errors.iter().any(Option::is_some) {
                    return Transition::pure(next);
                }

                let token = self.next_token;
                next.next_token = token + 1;
                next.request = RequestState::Loading { token };
                Transition {
                    state: next,
                    effect: Some(Effect::StartRequest {
                        token,
                        kind: self.mode,
                        name1,
                        name2,
                    }),
                }
            }
            Action::RequestFinished { token, outcome } => {
                if self.request != (RequestState::Loading { token }) {
                    log::debug!("[UI] Discarding stale response for request #{}", token);
                    return Transition::pure(next);
                }
                next.request = match outcome {
                    Ok(result) => RequestState::Succeeded(result),
                    Err(message) => RequestState::Failed(message),
                };
                Transition::pure(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comparison, CpuSpec, Summary, Winner};

    fn cpu_result() -> ComparisonResult {
        ComparisonResult::Cpu(Comparison {
            slot1: CpuSpec {
                model: "Intel Core i9-14900K".into(),
                ..Default::default()
            },
            slot2: CpuSpec {
                model: "AMD Ryzen 9 7950X".into(),
                ..Default::default()
            },
            summary: Summary {
                performance_winner: Winner::Slot1,
                value_winner: Winner::Slot2,
                gaming_winner: Winner::Tie,
                overall_recommendation: "Either".into(),
            },
        })
    }

    fn submit(state: &ViewState) -> (ViewState, RequestToken) {
        let t = state.apply(Action::SubmitCompare);
        match t.effect {
            Some(Effect::StartRequest { token, .. }) => (t.state, token),
            None => panic!("expected a request"),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.mode(), HardwareKind::Cpu);
        assert_eq!(state.input(Slot::One), "Intel Core i9-14900K");
        assert_eq!(state.input(Slot::Two), "AMD Ryzen 9 7950X");
        assert_eq!(state.request(), &RequestState::Idle);
        assert!(state.can_compare());
        assert_eq!(state.compare_caption(), "Compare CPUs");
    }

    #[test]
    fn test_submit_with_short_name_issues_no_request() {
        let state = ViewState::default().apply(Action::EditField(Slot::One, "ab".into())).state;
        let t = state.apply(Action::SubmitCompare);

        assert!(t.effect.is_none());
        assert_eq!(t.state.field_error(Slot::One), Some(ValidationError::TooShort));
        assert_eq!(t.state.field_error(Slot::Two), None);
        assert_eq!(t.state.input(Slot::Two), "AMD Ryzen 9 7950X");
        assert_eq!(t.state.request(), &RequestState::Idle);
    }

    #[test]
    fn test_edit_clears_only_that_field_error() {
        let state = ViewState::default()
            .apply(Action::EditField(Slot::One, "".into()))
            .state
            .apply(Action::EditField(Slot::Two, "x".into()))
            .state
            .apply(Action::SubmitCompare)
            .state;
        assert_eq!(state.field_error(Slot::One), Some(ValidationError::EmptyName));
        assert_eq!(state.field_error(Slot::Two), Some(ValidationError::TooShort));

        let state = state.apply(Action::EditField(Slot::Two, "xy".into())).state;
        assert_eq!(state.field_error(Slot::One), Some(ValidationError::EmptyName));
        assert_eq!(state.field_error(Slot::Two), None);
    }

    #[test]
    fn test_successful_round_trip() {
        let (loading, token) = submit(&ViewState::default());
        assert!(loading.is_loading());
        assert!(!loading.can_compare());
        assert_eq!(loading.compare_caption(), "Comparing...");

        // A second submit while loading is ignored
        assert!(loading.apply(Action::SubmitCompare).effect.is_none());

        let done = loading
            .apply(Action::RequestFinished {
                token,
                outcome: Ok(cpu_result()),
            })
            .state;
        assert_eq!(done.result(), Some(&cpu_result()));
        assert!(done.can_compare());
    }

    #[test]
    fn test_failure_stores_message() {
        let (loading, token) = submit(&ViewState::default());
        let done = loading
            .apply(Action::RequestFinished {
                token,
                outcome: Err("Failed to get comparison data: boom".into()),
            })
            .state;
        assert_eq!(done.error_message(), Some("Failed to get comparison data: boom"));
        assert!(!done.is_loading());
    }

    #[test]
    fn test_stale_response_after_mode_switch_is_dropped() {
        let (loading, token) = submit(&ViewState::default());
        let switched = loading.apply(Action::SelectMode(HardwareKind::Gpu)).state;
        assert_eq!(switched.request(), &RequestState::Idle);

        let after = switched
            .apply(Action::RequestFinished {
                token,
                outcome: Ok(cpu_result()),
            })
            .state;
        assert_eq!(after, switched);
    }

    #[test]
    fn test_tokens_increase_per_submission() {
        let (loading, first) = submit(&ViewState::default());
        let idle = loading
            .apply(Action::RequestFinished {
                token: first,
                outcome: Err("x".into()),
            })
            .state;
        let (loading, second) = submit(&idle);
        assert!(second > first);

        // Late completion of the first request is ignored
        let after = loading
            .apply(Action::RequestFinished {
                token: first,
                outcome: Ok(cpu_result()),
            })
            .state;
        assert!(after.is_loading());
    }

    #[test]
    fn test_select_mode_keeps_other_pair() {
        let state = ViewState::default()
            .apply(Action::EditField(Slot::One, "Intel Core i3-14100".into()))
            .state
            .apply(Action::SelectMode(HardwareKind::Gpu))
            .state;
        assert_eq!(state.input(Slot::One), "NVIDIA GeForce RTX 4090");
        assert_eq!(state.compare_caption(), "Compare GPUs");

        let back = state.apply(Action::SelectMode(HardwareKind::Cpu)).state;
        assert_eq!(back.input(Slot::One), "Intel Core i3-14100");
    }

    #[test]
    fn test_select_same_mode_is_noop() {
        let (loading, _) = submit(&ViewState::default());
        let t = loading.apply(Action::SelectMode(HardwareKind::Cpu));
        assert_eq!(t.state, loading);
    }

    #[test]
    fn test_load_preset() {
        let (loading, token) = submit(&ViewState::default());
        let done = loading
            .apply(Action::RequestFinished {
                token,
                outcome: Ok(cpu_result()),
            })
            .state;

        // Same pair as the default: result kept
        let same = done.apply(Action::LoadPreset(0)).state;
        assert!(same.result().is_some());

        let other = done.apply(Action::LoadPreset(2)).state;
        assert_eq!(other.input(Slot::One), "Intel Core i3-14100");
        assert_eq!(other.input(Slot::Two), "AMD Ryzen 5 7600");
        assert_eq!(other.request(), &RequestState::Idle);

        let out_of_range = done.apply(Action::LoadPreset(99)).state;
        assert_eq!(out_of_range, done);
    }

    #[test]
    fn test_select_suggestion_clears_only_that_field_error() {
        let state = ViewState::default()
            .apply(Action::EditField(Slot::One, "7800".into()))
            .state
            .apply(Action::EditField(Slot::Two, "".into()))
            .state
            .apply(Action::SubmitCompare)
            .state;
        assert_eq!(state.field_error(Slot::Two), Some(ValidationError::EmptyName));

        let state = state
            .apply(Action::SelectSuggestion(Slot::Two, "AMD Ryzen 7 7800X3D".into()))
            .state;
        assert_eq!(state.input(Slot::Two), "AMD Ryzen 7 7800X3D");
        assert_eq!(state.field_error(Slot::Two), None);
        assert_eq!(state.input(Slot::One), "7800");
        assert_eq!(state.suggestions(Slot::Two), Vec::<&str>::new());
    }

    #[test]
    fn test_select_suggestion_resets_shown_result() {
        let (loading, token) = submit(&ViewState::default());
        let done = loading
            .apply(Action::RequestFinished {
                token,
                outcome: Ok(cpu_result()),
            })
            .state;

        // Picking the value already entered keeps the result
        let same = done
            .apply(Action::SelectSuggestion(Slot::One, "Intel Core i9-14900K".into()))
            .state;
        assert_eq!(same.result(), Some(&cpu_result()));

        let changed = done
            .apply(Action::SelectSuggestion(Slot::One, "AMD Ryzen 7 7800X3D".into()))
            .state;
        assert_eq!(changed.request(), &RequestState::Idle);
        assert_eq!(changed.input(Slot::One), "AMD Ryzen 7 7800X3D");
    }

    #[test]
    fn test_blank_field_disables_compare() {
        let state = ViewState::default().apply(Action::EditField(Slot::Two, "   ".into())).state;
        assert!(!state.can_compare());
    }

    #[test]
    fn test_suggestions_skip_exact_match() {
        let state = ViewState::default().apply(Action::EditField(Slot::One, "ryzen 9".into())).state;
        let suggestions = state.suggestions(Slot::One);
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().all(|s| s.to_lowercase().contains("ryzen 9")));

        let exact = ViewState::default();
        assert!(!exact.suggestions(Slot::One).contains(&"Intel Core i9-14900K"));
    }
}
