//! Binary logistic regression exported from the training notebook as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::classifier::{BinaryClassifier, ClassifierError};
use crate::features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};

/// Fixed artifact path, relative to the working directory.
pub const DEFAULT_MODEL_FILE: &str = "logistic_model.json";

/// Fatal errors raised while loading the model artifact at startup.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    /// No file exists at the configured path.
    #[error(
        "ERROR: model artifact not found at {path}. Place the exported model there, or point model_path in config.toml (or --model) at it"
    )]
    Missing { path: PathBuf },
    /// The file exists but could not be read.
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a valid JSON model export.
    #[error("Failed to decode model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The JSON decoded but does not describe a usable five-feature model.
    #[error("Model artifact {path} is unusable: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Logistic regression over the five CDSS features.
///
/// `P(failure) = sigmoid(intercept + coefficients · row)`. The predicted label
/// is `1` only when the decision value is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Column names the model was fitted on, when exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    /// One weight per feature, in column order.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Class labels in probability-column order, when exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<i64>>,
}

impl LogisticModel {
    /// Build a model from raw weights using the canonical column order.
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            feature_names: Some(FEATURE_NAMES.iter().map(|name| name.to_string()).collect()),
            coefficients: coefficients.to_vec(),
            intercept,
            classes: Some(vec![0, 1]),
        }
    }

    /// Read and decode the artifact at `path`.
    pub fn load_json(path: &Path) -> Result<Self, ModelLoadError> {
        if !path.exists() {
            return Err(ModelLoadError::Missing {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self =
            serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        model
            .validate()
            .map_err(|reason| ModelLoadError::Invalid {
                path: path.to_path_buf(),
                reason,
            })?;
        tracing::info!(
            path = %path.display(),
            coefficients = model.coefficients.len(),
            "Loaded logistic model"
        );
        Ok(model)
    }

    /// Check that the weights line up with the five CDSS features.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {FEATURE_COUNT} coefficients, found {}",
                self.coefficients.len()
            ));
        }
        if let Some(idx) = self.coefficients.iter().position(|w| !w.is_finite()) {
            return Err(format!("coefficient for {} is not finite", FEATURE_NAMES[idx]));
        }
        if !self.intercept.is_finite() {
            return Err("intercept is not finite".to_string());
        }
        if let Some(names) = &self.feature_names
            && !names.iter().map(String::as_str).eq(FEATURE_NAMES)
        {
            return Err(format!(
                "feature order {names:?} does not match {FEATURE_NAMES:?}"
            ));
        }
        if let Some(classes) = &self.classes
            && classes.as_slice() != [0, 1]
        {
            return Err(format!("classes {classes:?} must be [0, 1]"));
        }
        Ok(())
    }

    /// Linear score before the sigmoid.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        if let Some(name) = features.first_non_finite() {
            return Err(ClassifierError::NonFiniteFeature { name });
        }
        let score = self
            .coefficients
            .iter()
            .zip(features.as_row())
            .fold(self.intercept, |acc, (w, x)| acc + w * x);
        Ok(score)
    }
}

impl BinaryClassifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        Ok(u8::from(self.decision_function(features)? > 0.0))
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        Ok(sigmoid(self.decision_function(features)?))
    }
}

/// Logistic function that stays finite for large-magnitude scores.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
