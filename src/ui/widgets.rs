//! Custom egui widgets
//!
//! - `model_input`: single-line model-name field with catalog suggestions
//! - `summary_card`: framed verdict tile for the summary section

use eframe::egui;
use egui::{Color32, RichText, Stroke};

use crate::comparison::renderer::SummaryCard;

pub const ERROR_RED: Color32 = Color32::from_rgb(255, 100, 100);
pub const WINNER_TEAL: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf);
pub const LOSER_ROSE: Color32 = Color32::from_rgb(0xfb, 0x71, 0x85);
pub const TIE_YELLOW: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);
pub const NEUTRAL_GRAY: Color32 = Color32::from_gray(200);

/// What happened to a [`model_input`] this frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModelInputOutcome {
    /// New text typed by the user
    pub edited: Option<String>,
    /// Suggestion clicked in the dropdown
    pub picked: Option<&'static str>,
}

/// Draws a model-name text field with an autocomplete dropdown
///
/// The field edits a copy of `text`; changes come back through the outcome
/// so the caller can route them through its state machine.
pub fn model_input(
    ui: &mut egui::Ui,
    id: egui::Id,
    text: &str,
    hint: &str,
    error: Option<&str>,
    suggestions: &[&'static str],
    enabled: bool,
) -> ModelInputOutcome {
    let mut outcome = ModelInputOutcome::default();
    let mut buffer = text.to_string();

    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut buffer)
            .id_source(id)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );

    let popup_id = id.with("suggestions");
    if response.changed() {
        outcome.edited = Some(buffer);
        ui.memory_mut(|mem| mem.open_popup(popup_id));
    } else if response.gained_focus() && !suggestions.is_empty() {
        ui.memory_mut(|mem| mem.open_popup(popup_id));
    }

    if !suggestions.is_empty() {
        egui::popup_below_widget(ui, popup_id, &response, |ui| {
            ui.set_min_width(response.rect.width());
            for &name in suggestions {
                if ui.selectable_label(false, name).clicked() {
                    outcome.picked = Some(name);
                }
            }
        });
    }

    if outcome.picked.is_some() {
        ui.memory_mut(|mem| mem.close_popup());
    }

    if let Some(message) = error {
        ui.colored_label(ERROR_RED, message);
    }

    outcome
}

/// Draws one summary verdict; ties are yellow, named winners teal
pub fn summary_card(ui: &mut egui::Ui, card: &SummaryCard) {
    let color = if card.is_tie { TIE_YELLOW } else { WINNER_TEAL };
    egui::Frame::group(ui.style())
        .stroke(Stroke::new(1.0, color))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_min_width(180.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(card.title).small().color(NEUTRAL_GRAY));
                ui.label(RichText::new(&card.label).strong().size(16.0).color(color));
            });
        });
}
