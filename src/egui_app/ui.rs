//! egui renderer for the CDSS form.

mod form_panel;
mod result_card;
pub mod style;

use crate::egui_app::controller::CdssController;
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText};

/// Renders the form, the trigger button and the latest result.
pub struct CdssApp {
    controller: CdssController,
    visuals_set: bool,
}

impl CdssApp {
    pub fn new(controller: CdssController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let variant = self.controller.variant();
        ctx.style_mut(|egui_style| {
            let mut visuals = egui::Visuals::light();
            style::apply_visuals(&mut visuals, variant);
            egui_style.visuals = visuals;
            style::apply_text_styles(egui_style);
        });
        self.visuals_set = true;
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let variant = self.controller.variant();
        Frame::new()
            .fill(palette.bg_card)
            .stroke(style::card_border())
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.heading(RichText::new(variant.title()).strong());
            });
        ui.add_space(10.0);
        ui.label(
            "Enter radiographic-derived features to estimate implant outcome and probability.",
        );
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        if !self.controller.variant().shows_footer() {
            return;
        }
        ui.add_space(25.0);
        ui.separator();
        ui.label(
            RichText::new(
                "Clinical Decision Support System Prototype for Dental Implant Outcome Prediction.",
            )
            .strong(),
        );
    }

    fn render_status(&self, ctx: &egui::Context) {
        let status = &self.controller.ui.status;
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_card).inner_margin(Margin::same(6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 7.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                });
            });
    }
}

impl eframe::App for CdssApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_header(ui);
                ui.add_space(12.0);
                form_panel::render_definitions(ui);
                ui.add_space(12.0);
                form_panel::render_inputs(ui, &mut self.controller.ui.form);
                ui.add_space(12.0);
                let label = self.controller.variant().button_label();
                let button = egui::Button::new(RichText::new(label).strong());
                if ui.add(button).clicked() {
                    self.controller.press_predict();
                }
                ui.add_space(12.0);
                result_card::render(ui, &self.controller.ui.result);
                self.render_footer(ui);
            });
        });
    }
}

/// Shown instead of the form when startup fails; no prediction is reachable.
pub struct StartupErrorApp {
    message: String,
}

impl StartupErrorApp {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl eframe::App for StartupErrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Dental Implant CDSS could not start");
                ui.add_space(12.0);
                ui.label(RichText::new(&self.message).color(style::palette().warning));
                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}
