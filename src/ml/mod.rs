//! Classifier contract and the logistic model that implements it.
//!
//! The UI and the headless command only see [`BinaryClassifier`]; the JSON
//! artifact format stays inside [`logreg`].

pub mod classifier;
pub mod logreg;

pub use classifier::{BinaryClassifier, ClassifierError, ModelHandle};
pub use logreg::{DEFAULT_MODEL_FILE, LogisticModel, ModelLoadError};
