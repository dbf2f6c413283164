use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status shown before the first prediction.
    pub fn ready() -> Self {
        Self::with_tone(StatusTone::Idle, "Enter features and run a prediction")
    }

    /// Replace text and badge in one step.
    pub fn set(&mut self, tone: StatusTone, text: impl Into<String>) {
        *self = Self::with_tone(tone, text);
    }

    fn with_tone(tone: StatusTone, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge_label: tone.label().into(),
            badge_color: style::status_badge_color(tone),
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::ready()
    }
}
