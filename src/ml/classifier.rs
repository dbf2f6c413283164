use std::sync::Arc;

use thiserror::Error;

use crate::features::FeatureVector;

/// Shared read-only handle to the loaded classifier.
///
/// Built once by the composition root and cloned into whoever needs to
/// predict; nothing holds a mutable path to the model.
pub type ModelHandle = Arc<dyn BinaryClassifier>;

/// Failures raised by a classifier backend while scoring one row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// An input column was NaN or infinite.
    #[error("Feature {name} is not a finite number")]
    NonFiniteFeature { name: &'static str },
    /// The backend could not score the row for another reason.
    #[error("Classifier failed: {0}")]
    Backend(String),
}

/// Binary outcome classifier with the two read-only operations the CDSS needs.
pub trait BinaryClassifier: Send + Sync {
    /// Predicted class label, `0` (success) or `1` (failure).
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError>;

    /// Probability mass assigned to class `1` (failure).
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError>;
}
