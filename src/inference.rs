//! One prediction: build the row, ask the classifier, derive the result.

use thiserror::Error;

use crate::features::FeatureVector;
use crate::ml::{BinaryClassifier, ClassifierError};

/// Predicted implant outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Class `0`.
    Success,
    /// Class `1`.
    Failure,
}

impl Outcome {
    /// Map a raw class label; anything other than `0`/`1` is rejected.
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Self::Success),
            1 => Some(Self::Failure),
            _ => None,
        }
    }

    /// Upper-case label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }

    /// Capitalized noun used in "Probability of ..." lines.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

/// Recoverable failures of a single prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    /// The classifier itself refused the row.
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    /// The classifier returned a label outside `{0, 1}`.
    #[error("Classifier returned unknown label {0}")]
    UnknownLabel(u8),
    /// The classifier returned a probability outside `[0, 1]`.
    #[error("Classifier returned probability {0} outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

/// Outcome plus the two complementary class probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub outcome: Outcome,
    pub prob_success: f64,
    pub prob_failure: f64,
}

impl PredictionResult {
    /// Derive the success probability as the complement of `prob_failure`.
    pub fn new(outcome: Outcome, prob_failure: f64) -> Self {
        Self {
            outcome,
            prob_success: 1.0 - prob_failure,
            prob_failure,
        }
    }

    /// Probability of the predicted outcome.
    pub fn outcome_probability(&self) -> f64 {
        match self.outcome {
            Outcome::Success => self.prob_success,
            Outcome::Failure => self.prob_failure,
        }
    }
}

/// Score one feature row with the loaded classifier.
pub fn run_inference(
    model: &dyn BinaryClassifier,
    features: &FeatureVector,
) -> Result<PredictionResult, InferenceError> {
    let label = model.predict(features)?;
    let outcome = Outcome::from_label(label).ok_or(InferenceError::UnknownLabel(label))?;
    let prob_failure = model.predict_probability(features)?;
    if !(0.0..=1.0).contains(&prob_failure) {
        return Err(InferenceError::ProbabilityOutOfRange(prob_failure));
    }
    let result = PredictionResult::new(outcome, prob_failure);
    tracing::debug!(
        outcome = outcome.label(),
        prob_failure,
        prob_success = result.prob_success,
        "Prediction complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedModel {
        label: u8,
        prob_failure: f64,
    }

    impl BinaryClassifier for FixedModel {
        fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
            Ok(self.label)
        }

        fn predict_probability(&self, _features: &FeatureVector) -> Result<f64, ClassifierError> {
            Ok(self.prob_failure)
        }
    }

    #[test]
    fn success_probability_is_the_complement() {
        let model = FixedModel {
            label: 0,
            prob_failure: 0.2,
        };
        let result = run_inference(&model, &FeatureVector::default()).unwrap();
        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.prob_failure, 0.2);
        assert!((result.prob_success - 0.8).abs() < 1e-12);
        assert!((result.outcome_probability() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let model = FixedModel {
            label: 2,
            prob_failure: 0.5,
        };
        assert_eq!(
            run_inference(&model, &FeatureVector::default()),
            Err(InferenceError::UnknownLabel(2))
        );
    }

    #[test]
    fn probability_outside_unit_interval_is_an_error() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let model = FixedModel {
                label: 1,
                prob_failure: bad,
            };
            assert!(matches!(
                run_inference(&model, &FeatureVector::default()),
                Err(InferenceError::ProbabilityOutOfRange(_))
            ));
        }
    }

    #[test]
    fn outcome_labels_are_exhaustive() {
        assert_eq!(Outcome::from_label(0).map(Outcome::label), Some("SUCCESS"));
        assert_eq!(Outcome::from_label(1).map(Outcome::label), Some("FAILURE"));
        assert!((2..=u8::MAX).all(|label| Outcome::from_label(label).is_none()));
    }
}
