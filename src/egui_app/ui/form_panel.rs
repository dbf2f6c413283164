use eframe::egui::{self, DragValue, RichText};

use crate::egui_app::state::{FIELD_SPECS, FLOAT_DECIMALS, FieldSpec, FormState};

/// Collapsible block describing each input.
pub(super) fn render_definitions(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new(RichText::new("Feature Definitions").strong())
        .default_open(false)
        .show(ui, |ui| {
            for spec in &FIELD_SPECS {
                ui.label(format!("{}: {}", spec.title, spec.definition));
                ui.add_space(4.0);
            }
        });
}

/// The five numeric inputs, edited in place.
pub(super) fn render_inputs(ui: &mut egui::Ui, form: &mut FormState) {
    let [count, width, height, y_center, ratio] = &FIELD_SPECS;
    field(ui, count, |ui| {
        ui.add(
            DragValue::new(&mut form.bbox_count)
                .range(0..=i64::from(u32::MAX))
                .speed(1.0),
        )
    });
    float_field(ui, width, &mut form.avg_width);
    float_field(ui, height, &mut form.avg_height);
    float_field(ui, y_center, &mut form.mean_y_center);
    float_field(ui, ratio, &mut form.failure_ratio);
}

fn float_field(ui: &mut egui::Ui, spec: &FieldSpec, value: &mut f64) {
    field(ui, spec, |ui| {
        ui.add(
            DragValue::new(value)
                .speed(0.001)
                .fixed_decimals(FLOAT_DECIMALS),
        )
    });
}

fn field(
    ui: &mut egui::Ui,
    spec: &FieldSpec,
    add_widget: impl FnOnce(&mut egui::Ui) -> egui::Response,
) {
    ui.label(RichText::new(spec.label).strong());
    add_widget(ui).on_hover_text(spec.definition);
    ui.add_space(8.0);
}
