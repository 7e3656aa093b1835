//! UI Module - egui integration and AppController
//!
//! `state` is the headless state machine; `controller` runs its effects on
//! tokio; `app`, `comparison_view` and `widgets` draw it with egui.

pub mod app;
pub mod comparison_view;
pub mod controller;
pub mod state;
pub mod threading;
pub mod widgets;

pub use app::AppUI;
pub use controller::{AppController, CompareEvent};
pub use state::{Action, Effect, RequestState, ViewState};
