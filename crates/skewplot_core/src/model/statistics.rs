use serde::{Deserialize, Serialize};

use super::Parameters;

/// Reference positions drawn over the curve.
///
/// These follow algebraically from the first-order skew approximation, not
/// from the sampled points:
/// - `mode = mean - skewness * std_dev`
/// - `median = mean - 0.5 * skewness * std_dev`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mode: f64,
    pub median: f64,
    pub mean: f64,
}

impl Statistics {
    pub fn from_parameters(params: &Parameters) -> Self {
        let shift = params.skewness * params.std_dev;
        Self {
            mode: params.mean - shift,
            median: params.mean - 0.5 * shift,
            mean: params.mean,
        }
    }
}
