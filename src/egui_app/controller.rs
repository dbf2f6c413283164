//! Bridges the form state to the inference path.

use std::sync::Arc;

use crate::config::{AppSettings, PresentationVariant};
use crate::egui_app::state::{ResultState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model::ResultView;
use crate::inference::{self, InferenceError, PredictionResult};
use crate::ml::{LogisticModel, ModelHandle, ModelLoadError};

/// Maintains form state and runs predictions against the injected model.
pub struct CdssController {
    pub ui: UiState,
    model: ModelHandle,
    variant: PresentationVariant,
}

impl CdssController {
    /// The model handle is loaded by the caller and never replaced.
    pub fn new(model: ModelHandle, variant: PresentationVariant) -> Self {
        Self {
            ui: UiState::default(),
            model,
            variant,
        }
    }

    /// Load the configured model artifact and build the controller around it.
    ///
    /// On error no controller exists, so no prediction can be attempted.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, ModelLoadError> {
        let model = LogisticModel::load_json(&settings.model_path)?;
        Ok(Self::new(Arc::new(model), settings.variant))
    }

    pub fn variant(&self) -> PresentationVariant {
        self.variant
    }

    /// Button handler: score the form and show the outcome on the result card.
    pub fn press_predict(&mut self) {
        let outcome = self.score_form();
        self.show(&outcome);
    }

    /// Same as [`Self::press_predict`], also returning the outcome.
    ///
    /// Failures are shown for this press only; the form stays usable.
    pub fn run_prediction(&mut self) -> Result<PredictionResult, InferenceError> {
        let outcome = self.score_form();
        self.show(&outcome);
        outcome
    }

    fn score_form(&mut self) -> Result<PredictionResult, InferenceError> {
        self.ui.form.clamp_bbox_count();
        let features = self.ui.form.feature_vector();
        inference::run_inference(self.model.as_ref(), &features).inspect_err(|err| {
            tracing::warn!(error = %err, ?features, "Prediction failed");
        })
    }

    fn show(&mut self, outcome: &Result<PredictionResult, InferenceError>) {
        match outcome {
            Ok(result) => {
                let view = ResultView::from_result(result);
                self.ui.status.set(
                    StatusTone::Done,
                    format!("{} ({})", view.headline(), view.probability_text),
                );
                self.ui.result = ResultState::Ready(view);
            }
            Err(err) => {
                self.ui.status.set(StatusTone::Error, "Prediction failed");
                self.ui.result = ResultState::Error(err.to_string());
            }
        }
    }
}
