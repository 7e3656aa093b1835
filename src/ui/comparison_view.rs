//! Results section: specification table, summary cards, recommendation.

use eframe::egui;
use egui::{Color32, RichText};

use super::widgets::{self, LOSER_ROSE, NEUTRAL_GRAY, WINNER_TEAL};
use crate::comparison::renderer::{spec_rows, summary_cards, CellStyle, SpecRow};
use crate::models::{ComparisonResult, Slot};

pub fn cell_color(style: CellStyle) -> Color32 {
    match style {
        CellStyle::Winner => WINNER_TEAL,
        CellStyle::Loser => LOSER_ROSE,
        CellStyle::Neutral => NEUTRAL_GRAY,
    }
}

fn render_cell(ui: &mut egui::Ui, row: &SpecRow, slot: Slot) {
    let style = row.style(slot);
    let text = RichText::new(&row.values[slot.index()]).color(cell_color(style));
    ui.label(if style == CellStyle::Winner { text.strong() } else { text });
}

/// Render a full comparison result
pub fn render_comparison(ui: &mut egui::Ui, result: &ComparisonResult) {
    let kind = result.kind();
    let name1 = result.model(Slot::One);
    let name2 = result.model(Slot::Two);

    ui.heading(format!("{} vs {}", name1, name2));
    ui.add_space(8.0);

    ui.label(RichText::new("Summary").strong());
    ui.horizontal_wrapped(|ui| {
        for card in summary_cards(result) {
            widgets::summary_card(ui, &card);
        }
    });
    ui.add_space(8.0);

    ui.label(RichText::new("Overall Recommendation").strong());
    ui.label(&result.summary().overall_recommendation);
    ui.add_space(12.0);

    ui.label(RichText::new("Specifications").strong());
    egui::Grid::new(("spec_table", kind.key()))
        .striped(true)
        .num_columns(3)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Specification").strong());
            ui.label(RichText::new(name1).strong());
            ui.label(RichText::new(name2).strong());
            ui.end_row();

            for row in spec_rows(result) {
                let label = ui.label(row.label);
                if let Some(tip) = row.tooltip {
                    label.on_hover_text(tip);
                }
                render_cell(ui, &row, Slot::One);
                render_cell(ui, &row, Slot::Two);
                ui.end_row();
            }
        });
}
