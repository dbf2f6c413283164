use implant_cdss::egui_app::view_model::{ResultTone, ResultView};
use implant_cdss::features::FeatureVector;
use implant_cdss::inference::{Outcome, run_inference};
use implant_cdss::ml::{BinaryClassifier, ClassifierError, LogisticModel};

/// Classifier that answers the same way for every row.
struct StubModel {
    label: u8,
    prob_failure: f64,
}

impl BinaryClassifier for StubModel {
    fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
        Ok(self.label)
    }

    fn predict_probability(&self, _features: &FeatureVector) -> Result<f64, ClassifierError> {
        Ok(self.prob_failure)
    }
}

fn scenario_row() -> FeatureVector {
    FeatureVector {
        bbox_count: 5,
        avg_width: 0.12345,
        avg_height: 0.23456,
        mean_y_center: 0.5,
        failure_ratio: 0.1,
    }
}

#[test]
fn stub_success_renders_success_with_complement_probability() {
    let model = StubModel {
        label: 0,
        prob_failure: 0.2,
    };
    let result = run_inference(&model, &scenario_row()).expect("prediction");
    let view = ResultView::from_result(&result);
    assert_eq!(view.tone, ResultTone::Success);
    assert_eq!(view.label, "SUCCESS");
    assert_eq!(view.probability_text, "0.80");
}

#[test]
fn stub_failure_renders_failure_probability() {
    let model = StubModel {
        label: 1,
        prob_failure: 0.73,
    };
    let result = run_inference(&model, &scenario_row()).expect("prediction");
    let view = ResultView::from_result(&result);
    assert_eq!(view.tone, ResultTone::Failure);
    assert_eq!(view.label, "FAILURE");
    assert_eq!(view.probability_text, "0.73");
}

#[test]
fn probabilities_always_sum_to_one() {
    let model = LogisticModel::new([0.35, -2.0, 4.0, 1.5, 6.0], -1.25);
    for count in [0u32, 1, 5, 40] {
        for ratio in [-1.0, 0.0, 0.25, 0.5, 0.99, 3.0] {
            let row = FeatureVector {
                bbox_count: count,
                failure_ratio: ratio,
                ..scenario_row()
            };
            let result = run_inference(&model, &row).expect("prediction");
            assert!((result.prob_success + result.prob_failure - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn presentation_follows_label_exclusively() {
    let model = LogisticModel::new([0.35, -2.0, 4.0, 1.5, 6.0], -1.25);
    for ratio in [0.0, 0.1, 0.2, 0.3, 0.4, 0.6, 0.8] {
        let row = FeatureVector {
            failure_ratio: ratio,
            ..scenario_row()
        };
        let label = model.predict(&row).expect("label");
        let view = ResultView::from_result(&run_inference(&model, &row).expect("prediction"));
        match label {
            0 => assert_eq!(view.tone, ResultTone::Success),
            1 => assert_eq!(view.tone, ResultTone::Failure),
            other => panic!("unexpected label {other}"),
        }
    }
}

#[test]
fn repeated_inference_is_identical() {
    let model = LogisticModel::new([0.2, 0.4, -0.6, 0.8, 1.0], 0.1);
    let row = scenario_row();
    let first = run_inference(&model, &row).expect("first");
    let second = run_inference(&model, &row).expect("second");
    assert_eq!(first, second);
}

#[test]
fn zero_count_is_a_valid_row() {
    let model = LogisticModel::new([1.0, 0.0, 0.0, 0.0, 0.0], -0.5);
    let row = FeatureVector {
        bbox_count: 0,
        ..scenario_row()
    };
    let result = run_inference(&model, &row).expect("prediction");
    assert_eq!(result.outcome, Outcome::Success);
}
