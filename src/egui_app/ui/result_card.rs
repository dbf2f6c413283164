use eframe::egui::{self, CornerRadius, Frame, Margin, ProgressBar, RichText};

use super::style;
use crate::egui_app::state::ResultState;
use crate::egui_app::view_model::{ResultTone, ResultView};

/// Draw the latest prediction, or the error from the last press.
pub(super) fn render(ui: &mut egui::Ui, result: &ResultState) {
    match result {
        ResultState::Empty => {}
        ResultState::Ready(view) => render_view(ui, view),
        ResultState::Error(message) => {
            ui.label(
                RichText::new(format!("Prediction failed: {message}"))
                    .color(style::palette().warning)
                    .strong(),
            );
        }
    }
}

fn render_view(ui: &mut egui::Ui, view: &ResultView) {
    let palette = style::palette();
    let (fill, bar) = match view.tone {
        ResultTone::Success => (palette.success_fill, palette.success_bar),
        ResultTone::Failure => (palette.failure_fill, palette.failure_bar),
    };
    Frame::new()
        .fill(palette.bg_card)
        .stroke(style::card_border())
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(15))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            Frame::new()
                .fill(fill)
                .stroke(style::card_border())
                .corner_radius(CornerRadius::same(10))
                .inner_margin(Margin::same(15))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(view.headline()).strong().size(18.0));
                    ui.label(RichText::new(view.probability_line()).strong());
                });
            ui.add_space(10.0);
            ui.add(
                ProgressBar::new(view.indicator)
                    .fill(bar)
                    .text(view.probability_text.as_str()),
            );
        });
}
