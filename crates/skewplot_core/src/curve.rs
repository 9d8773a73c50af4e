//! Curve generator.
//!
//! Samples the skew-adjusted Gaussian over a fixed standardized axis. The
//! domain does not move with `mean`: shifting the mean slides the curve
//! across the same 81 x-positions.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use crate::model::{Parameters, Sample};

pub const DOMAIN_MIN: f64 = -4.0;
pub const DOMAIN_MAX: f64 = 4.0;
pub const DOMAIN_STEP: f64 = 0.1;
/// Points from `DOMAIN_MIN` to `DOMAIN_MAX` inclusive.
pub const SAMPLE_COUNT: usize = 81;

/// x-position of the `index`-th sample.
///
/// Computed from the index rather than by repeated addition so the last
/// point lands on `DOMAIN_MAX`.
pub fn x_at(index: usize) -> f64 {
    DOMAIN_MIN + DOMAIN_STEP * index as f64
}

/// Curve height at `x`.
///
/// `y` is the normal density scaled by `1 + skewness * z`. For
/// `|skewness * z| > 1` the result is negative.
pub fn density(params: &Parameters, x: f64) -> f64 {
    let z = (x - params.mean) / params.std_dev;
    let gaussian = (-z * z / 2.0).exp() / (params.std_dev * (2.0 * PI).sqrt());
    gaussian * (1.0 + params.skewness * z)
}

/// Lazy iterator over the curve samples in ascending `x`.
#[derive(Debug, Clone)]
pub struct Samples {
    params: Parameters,
    index: usize,
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.index >= SAMPLE_COUNT {
            return None;
        }
        let x = x_at(self.index);
        self.index += 1;
        Some(Sample::new(x, density(&self.params, x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SAMPLE_COUNT.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples {}

impl FusedIterator for Samples {}

pub fn samples(params: &Parameters) -> Samples {
    Samples {
        params: *params,
        index: 0,
    }
}

/// Eager form of [`samples`].
pub fn generate_curve(params: &Parameters) -> Vec<Sample> {
    samples(params).collect()
}
