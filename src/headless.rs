//! Terminal prediction shared by `implant-cdss-predict`.

use std::path::PathBuf;

use crate::config;
use crate::egui_app::view_model::ResultView;
use crate::features::FeatureVector;
use crate::inference::run_inference;
use crate::ml::LogisticModel;

/// Score one row and return the outcome and probability lines.
///
/// Without an explicit model path, `model_path` comes from `config.toml`
/// through the same fallback as the desktop form.
pub fn predict_lines(
    model_path: Option<PathBuf>,
    features: &FeatureVector,
) -> Result<[String; 2], String> {
    let model_path = model_path.unwrap_or_else(|| config::load_or_fallback().model_path);
    let model = LogisticModel::load_json(&model_path).map_err(|err| err.to_string())?;
    let result = run_inference(&model, features).map_err(|err| err.to_string())?;
    let view = ResultView::from_result(&result);
    Ok([view.headline(), view.probability_line()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_dirs::{APP_DIR_NAME, OverrideGuard};
    use crate::config::CONFIG_FILE_NAME;
    use tempfile::tempdir;

    fn write_model(path: &std::path::Path) {
        // Zero weights, intercept logit(0.2): every row scores P(failure) = 0.2.
        let model = LogisticModel::new([0.0; 5], (0.2f64 / 0.8).ln());
        std::fs::write(path, serde_json::to_vec(&model).unwrap()).unwrap();
    }

    #[test]
    fn broken_config_still_uses_its_model_path() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let model_path = base.path().join("implant_model.json");
        write_model(&model_path);
        let config_path = base.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        std::fs::write(
            &config_path,
            format!(
                "model_path = {:?}\nvariant = \"neon\"\n",
                model_path.display().to_string()
            ),
        )
        .unwrap();

        let lines = predict_lines(None, &FeatureVector::default()).unwrap();
        assert_eq!(
            lines,
            [
                "Predicted Outcome: SUCCESS".to_string(),
                "Probability of Success: 0.80".to_string(),
            ]
        );
    }

    #[test]
    fn explicit_model_skips_config() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let model_path = base.path().join("m.json");
        write_model(&model_path);
        let lines = predict_lines(Some(model_path), &FeatureVector::default()).unwrap();
        assert_eq!(lines[0], "Predicted Outcome: SUCCESS");
        assert!(!base.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn missing_model_names_the_path() {
        let base = tempdir().unwrap();
        let missing = base.path().join("absent.json");
        let err = predict_lines(Some(missing.clone()), &FeatureVector::default()).unwrap_err();
        assert!(err.contains(&missing.display().to_string()));
    }
}
