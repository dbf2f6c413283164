use crate::egui_app::view_model::ResultView;

/// What the result card currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultState {
    /// No prediction has been requested yet.
    #[default]
    Empty,
    /// The last prediction succeeded.
    Ready(ResultView),
    /// The last prediction failed; the next press starts fresh.
    Error(String),
}

impl ResultState {
    pub fn view(&self) -> Option<&ResultView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }
}
