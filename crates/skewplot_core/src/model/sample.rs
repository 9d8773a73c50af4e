use serde::{Deserialize, Serialize};

/// One point of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tuple form, as consumed by chart datasets.
    pub fn as_point(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
