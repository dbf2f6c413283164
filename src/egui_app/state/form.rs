use crate::features::FeatureVector;

/// Decimal places shown for the floating-point inputs.
pub const FLOAT_DECIMALS: usize = 5;

/// Static description of one input field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Widget label, unit included.
    pub label: &'static str,
    /// Short name used in the definitions block.
    pub title: &'static str,
    pub definition: &'static str,
}

/// Field metadata in column order.
pub const FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        label: "Bounding Box Count (count)",
        title: "Bounding Box Count",
        definition: "Number of detected implant-related regions.",
    },
    FieldSpec {
        label: "Average Width (normalized units)",
        title: "Average Width",
        definition: "Mean horizontal size of detected regions (normalized).",
    },
    FieldSpec {
        label: "Average Height (normalized units)",
        title: "Average Height",
        definition: "Mean vertical size of detected regions (normalized).",
    },
    FieldSpec {
        label: "Mean Y Center (0–1 scale)",
        title: "Mean Y Center",
        definition: "Average vertical location (0–1 scale).",
    },
    FieldSpec {
        label: "Failure Ratio (0–1 scale)",
        title: "Failure Ratio",
        definition: "Failure-related proportional feature used in dataset.",
    },
];

/// Raw widget values for the input form.
///
/// `bbox_count` is held signed because the widget edits it in place; the
/// minimum of zero is enforced when the row is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub bbox_count: i64,
    pub avg_width: f64,
    pub avg_height: f64,
    pub mean_y_center: f64,
    pub failure_ratio: f64,
}

impl FormState {
    /// Clamp the count into `0..=u32::MAX`.
    pub fn clamp_bbox_count(&mut self) {
        self.bbox_count = self.bbox_count.clamp(0, i64::from(u32::MAX));
    }

    /// Snapshot the current values as a model input row.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector {
            bbox_count: u32::try_from(self.bbox_count.max(0)).unwrap_or(u32::MAX),
            avg_width: self.avg_width,
            avg_height: self.avg_height,
            mean_y_center: self.mean_y_center,
            failure_ratio: self.failure_ratio,
        }
    }
}
