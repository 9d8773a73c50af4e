use serde::Serialize;

use crate::curve::generate_curve;
use crate::model::{Parameters, Sample, SkewCategory, Statistics};

/// Everything the widget displays for one set of parameters.
///
/// Recomputed from scratch on every parameter change; nothing here is
/// cached or updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSnapshot {
    pub parameters: Parameters,
    pub statistics: Statistics,
    pub category: SkewCategory,
    pub samples: Vec<Sample>,
}

impl CurveSnapshot {
    pub fn compute(params: &Parameters) -> Self {
        Self {
            parameters: *params,
            statistics: Statistics::from_parameters(params),
            category: SkewCategory::from_skewness(params.skewness),
            samples: generate_curve(params),
        }
    }

    /// Smallest and largest `y` over the samples.
    pub fn y_range(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.y), hi.max(s.y))
            })
    }
}
