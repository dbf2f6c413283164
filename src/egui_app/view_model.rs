//! Helpers to convert prediction results into display-ready view structs.

use crate::inference::{Outcome, PredictionResult};

/// Which of the two result boxes to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTone {
    Success,
    Failure,
}

/// Text and indicator for one rendered prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub tone: ResultTone,
    /// `"SUCCESS"` or `"FAILURE"`.
    pub label: &'static str,
    /// Probability of the predicted outcome, two decimals.
    pub probability_text: String,
    /// Fill of the confidence bar, in `[0, 1]`.
    pub indicator: f32,
}

impl ResultView {
    /// Pick the presentation matching the predicted outcome.
    pub fn from_result(result: &PredictionResult) -> Self {
        let tone = match result.outcome {
            Outcome::Success => ResultTone::Success,
            Outcome::Failure => ResultTone::Failure,
        };
        let probability = result.outcome_probability();
        Self {
            tone,
            label: result.outcome.label(),
            probability_text: format!("{probability:.2}"),
            indicator: (probability as f32).clamp(0.0, 1.0),
        }
    }

    pub fn headline(&self) -> String {
        format!("Predicted Outcome: {}", self.label)
    }

    pub fn probability_line(&self) -> String {
        let noun = match self.tone {
            ResultTone::Success => Outcome::Success.noun(),
            ResultTone::Failure => Outcome::Failure.noun(),
        };
        format!("Probability of {noun}: {}", self.probability_text)
    }
}
