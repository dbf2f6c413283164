//! Dental implant outcome decision support.
//!
//! Five radiograph-derived features go in, a pre-trained logistic model
//! scores them, and the desktop form shows "SUCCESS" or "FAILURE" with the
//! matching probability.

/// Application directory resolution.
pub mod app_dirs;
/// TOML settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Model input record.
pub mod features;
/// Terminal prediction path.
pub mod headless;
/// Single-row prediction.
pub mod inference;
/// Command-line overrides for the desktop binary.
pub mod launch;
/// Tracing subscriber setup.
pub mod logging;
/// Classifier contract and model artifact loading.
pub mod ml;
