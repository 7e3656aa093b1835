//! Main app and frame loop
//!
//! `AppUI` owns the current [`ViewState`] and replaces it wholesale on
//! every action. Side effects go to the [`AppController`]; completions come
//! back as [`CompareEvent`]s drained at the top of each frame.

use eframe::egui;
use egui::RichText;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::comparison_view::render_comparison;
use super::controller::{AppController, CompareEvent};
use super::state::{Action, RequestState, ViewState};
use super::threading::drain_events;
use super::widgets::{self, ERROR_RED, NEUTRAL_GRAY};
use crate::catalog;
use crate::models::{HardwareKind, Slot};

pub struct AppUI {
    controller: Arc<AppController>,
    view: ViewState,
    event_rx: mpsc::Receiver<CompareEvent>,
    visuals_applied: bool,
}

impl AppUI {
    pub fn new(
        controller: Arc<AppController>,
        event_rx: mpsc::Receiver<CompareEvent>,
        initial_mode: HardwareKind,
    ) -> Self {
        Self {
            controller,
            view: ViewState::new(initial_mode),
            event_rx,
            visuals_applied: false,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Run one transition and start any effect it asks for
    pub fn apply(&mut self, action: Action) {
        let transition = self.view.apply(action);
        self.view = transition.state;
        if let Some(effect) = transition.effect {
            self.controller.dispatch(effect);
        }
    }

    /// Feed finished requests into the state machine
    fn process_compare_events(&mut self) {
        for event in drain_events(&mut self.event_rx) {
            match event {
                CompareEvent::Finished { token, outcome } => {
                    self.apply(Action::RequestFinished { token, outcome });
                }
            }
        }
    }

    /// Render the top navigation bar (mode selector)
    fn render_top_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Hardware Compare");
                ui.separator();

                for kind in HardwareKind::all() {
                    let selected = self.view.mode() == kind;
                    if ui.selectable_label(selected, format!("{}s", kind)).clicked() {
                        self.apply(Action::SelectMode(kind));
                    }
                }
            });
        });
    }

    /// Render the request error, if any
    fn render_messages(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.view.error_message() {
            let message = message.to_string();
            egui::TopBottomPanel::top("error_panel").show(ctx, |ui| {
                ui.colored_label(ERROR_RED, format!("Error: {}", message));
            });
        }
    }

    fn render_presets(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.view.is_loading();
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Try:").color(NEUTRAL_GRAY));
            for (index, preset) in catalog::presets(self.view.mode()).iter().enumerate() {
                if ui.add_enabled(enabled, egui::Button::new(preset.label).small()).clicked() {
                    self.apply(Action::LoadPreset(index));
                }
            }
        });
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        let kind = self.view.mode();
        let enabled = !self.view.is_loading();

        ui.columns(2, |columns| {
            for slot in Slot::both() {
                let ui = &mut columns[slot.index()];
                ui.label(RichText::new(kind.slot_label(slot)).strong());

                let error = self.view.field_error(slot).map(|e| e.message());
                let suggestions = self.view.suggestions(slot);
                let outcome = widgets::model_input(
                    ui,
                    egui::Id::new(("model_input", kind.key(), slot.number())),
                    self.view.input(slot),
                    &format!("e.g. {}", catalog::model_names(kind)[slot.index()]),
                    error,
                    &suggestions,
                    enabled,
                );

                if let Some(name) = outcome.picked {
                    self.apply(Action::SelectSuggestion(slot, name.to_string()));
                } else if let Some(text) = outcome.edited {
                    self.apply(Action::EditField(slot, text));
                }
            }
        });
    }

    fn render_compare_button(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button = egui::Button::new(RichText::new(self.view.compare_caption()).strong())
                .min_size(egui::vec2(160.0, 32.0));
            if ui.add_enabled(self.view.can_compare(), button).clicked() {
                self.apply(Action::SubmitCompare);
            }
            if self.view.is_loading() {
                ui.add(egui::Spinner::new());
            }
        });
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        match self.view.request() {
            RequestState::Succeeded(result) => render_comparison(ui, result),
            RequestState::Idle => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading("Ready to Compare?");
                    ui.label(
                        RichText::new(format!(
                            "Enter two {} models above, or pick an example, and press Compare.",
                            self.view.mode()
                        ))
                        .color(NEUTRAL_GRAY),
                    );
                });
            }
            RequestState::Loading { .. } | RequestState::Failed(_) => {}
        }
    }

    /// Render the central content
    fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                self.render_presets(ui);
                ui.add_space(8.0);
                self.render_inputs(ui);
                ui.add_space(8.0);
                self.render_compare_button(ui);
                ui.separator();
                self.render_results(ui);
            });
        });
    }

    fn create_visuals() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        let dark_bg = egui::Color32::from_rgb(0x11, 0x18, 0x27);
        visuals.panel_fill = dark_bg;
        visuals.window_fill = dark_bg;
        visuals.selection.bg_fill = egui::Color32::from_rgb(0x0f, 0x76, 0x6e);
        visuals.hyperlink_color = widgets::WINNER_TEAL;
        visuals
    }
}

impl eframe::App for AppUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.set_ui_context(ctx);

        if !self.visuals_applied {
            ctx.set_visuals(Self::create_visuals());
            self.visuals_applied = true;
        }

        self.process_compare_events();

        self.render_top_nav(ctx);
        self.render_messages(ctx);
        self.render_content(ctx);

        // Keep the spinner moving while a request is in flight
        if self.view.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
