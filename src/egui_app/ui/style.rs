use eframe::egui::{
    Color32, FontFamily, FontId, Stroke, Style, TextStyle, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::config::PresentationVariant;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_card: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub success_fill: Color32,
    pub failure_fill: Color32,
    pub success_bar: Color32,
    pub failure_bar: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(248, 248, 248),
        bg_card: Color32::WHITE,
        outline: Color32::BLACK,
        text_primary: Color32::BLACK,
        text_muted: Color32::from_rgb(60, 60, 60),
        success_fill: Color32::from_rgb(220, 252, 231),
        failure_fill: Color32::from_rgb(254, 226, 226),
        success_bar: Color32::from_rgb(34, 160, 84),
        failure_bar: Color32::from_rgb(200, 48, 48),
        warning: Color32::from_rgb(180, 70, 30),
    }
}

/// Badge tones for the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Done,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Done => "Done",
            Self::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Done => palette.success_bar,
        StatusTone::Error => palette.warning,
    }
}

/// High-contrast light theme: black text and outlines on white cards.
pub fn apply_visuals(visuals: &mut Visuals, variant: PresentationVariant) {
    let palette = palette();
    visuals.window_fill = palette.bg_card;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_card;
    visuals.faint_bg_color = palette.bg_primary;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.stroke = Stroke::new(1.0, palette.outline);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    let radius = match variant {
        PresentationVariant::Standard => CornerRadius::same(6),
        PresentationVariant::Compact => CornerRadius::ZERO,
    };
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        outline_widget(widget, palette, radius);
    }
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn outline_widget(vis: &mut WidgetVisuals, palette: Palette, radius: CornerRadius) {
    vis.corner_radius = radius;
    vis.bg_fill = palette.bg_card;
    vis.weak_bg_fill = palette.bg_card;
    vis.bg_stroke = Stroke::new(2.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.5, palette.text_primary);
}

/// Larger type scale so the form reads at a glance.
pub fn apply_text_styles(style: &mut Style) {
    style.text_styles = [
        (TextStyle::Heading, FontId::new(26.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(17.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(15.0, FontFamily::Monospace)),
        (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
    ]
    .into();
}

pub fn card_border() -> Stroke {
    Stroke::new(2.0, palette().outline)
}
