//! Shared state types for the egui UI.

mod form;
mod result;
mod status;

pub use form::*;
pub use result::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Current values of the five input fields.
    pub form: FormState,
    /// Outcome of the most recent button press.
    pub result: ResultState,
    pub status: StatusBarState,
}
