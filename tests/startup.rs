use implant_cdss::config::{AppSettings, PresentationVariant};
use implant_cdss::egui_app::controller::CdssController;
use implant_cdss::egui_app::view_model::ResultTone;
use implant_cdss::ml::{LogisticModel, ModelLoadError};
use tempfile::TempDir;

fn settings_for(dir: &TempDir) -> AppSettings {
    AppSettings {
        model_path: dir.path().join("logistic_model.json"),
        ..AppSettings::default()
    }
}

#[test]
fn missing_artifact_yields_no_controller() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_for(&dir);
    match CdssController::from_settings(&settings) {
        Err(ModelLoadError::Missing { path }) => assert_eq!(path, settings.model_path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("controller built without a model"),
    }
}

#[test]
fn corrupt_artifact_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_for(&dir);
    std::fs::write(&settings.model_path, b"\x80\x04pickle").expect("write artifact");
    assert!(matches!(
        CdssController::from_settings(&settings),
        Err(ModelLoadError::Parse { .. })
    ));
}

#[test]
fn exported_artifact_drives_the_form() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = AppSettings {
        variant: PresentationVariant::Compact,
        ..settings_for(&dir)
    };
    let model = LogisticModel::new([0.0, 0.0, 0.0, 0.0, 8.0], -2.0);
    std::fs::write(
        &settings.model_path,
        serde_json::to_vec_pretty(&model).expect("serialize"),
    )
    .expect("write artifact");

    let mut controller = CdssController::from_settings(&settings).expect("controller");
    assert_eq!(controller.variant(), PresentationVariant::Compact);

    controller.ui.form.failure_ratio = 0.05;
    let low = controller.run_prediction().expect("low-risk prediction");
    assert_eq!(controller.ui.result.view().expect("view").tone, ResultTone::Success);
    assert!(low.prob_success > 0.5);

    controller.ui.form.failure_ratio = 0.9;
    let high = controller.run_prediction().expect("high-risk prediction");
    assert_eq!(controller.ui.result.view().expect("view").tone, ResultTone::Failure);
    assert!(high.prob_failure > 0.5);
}
