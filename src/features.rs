//! The five radiograph-derived inputs submitted per prediction.

/// Number of columns in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 5;

/// Column names in the order the classifier expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "bbox_count",
    "avg_width",
    "avg_height",
    "mean_y_center",
    "failure_ratio",
];

/// Single-row input record for the implant outcome classifier.
///
/// Values are not normalized or range-checked; `mean_y_center` and
/// `failure_ratio` are nominally in `[0, 1]` but anything finite passes
/// through to the model unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector {
    /// Number of detected implant-related regions.
    pub bbox_count: u32,
    /// Mean horizontal size of detected regions (normalized units).
    pub avg_width: f64,
    /// Mean vertical size of detected regions (normalized units).
    pub avg_height: f64,
    /// Average vertical location of detected regions.
    pub mean_y_center: f64,
    /// Failure-related proportional feature from the training dataset.
    pub failure_ratio: f64,
}

impl FeatureVector {
    /// Values in [`FEATURE_NAMES`] order.
    pub fn as_row(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.bbox_count),
            self.avg_width,
            self.avg_height,
            self.mean_y_center,
            self.failure_ratio,
        ]
    }

    /// `(name, value)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.as_row())
    }

    /// Name of the first column holding NaN or an infinity, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        self.columns()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
    }
}
