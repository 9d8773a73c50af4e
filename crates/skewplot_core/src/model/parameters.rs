//! Curve parameters and their input ranges.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, Result};

/// Inclusive input range for one parameter, with a fixed step grid.
///
/// `step` is expected to be the reciprocal of an integer (0.1, 0.25, 0.5, ...).
/// Snapping scales by that integer and divides back, so grid points come out
/// as the nearest `f64` to their decimal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    fn steps_per_unit(&self) -> f64 {
        self.step.recip().round()
    }

    /// Restrict a value to `[min, max]`. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamp and round to the nearest grid point.
    pub fn snap(&self, value: f64) -> f64 {
        let scale = self.steps_per_unit();
        let snapped = ((self.clamp(value) * scale).round() / scale).clamp(self.min, self.max);
        // Avoid -0.0 leaking into display and classification
        if snapped == 0.0 { 0.0 } else { snapped }
    }

    /// Move `steps` grid points away from `value` (negative moves down).
    pub fn offset(&self, value: f64, steps: i32) -> f64 {
        self.snap(self.snap(value) + f64::from(steps) * self.step)
    }

    /// Position of `value` within the range, from 0.0 (min) to 1.0 (max).
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / span
    }

    /// Number of grid points, both ends included.
    pub fn grid_len(&self) -> usize {
        ((self.max - self.min) * self.steps_per_unit()).round() as usize + 1
    }

    /// Grid point at `index`, clamped to the last point.
    pub fn value_at(&self, index: usize) -> f64 {
        let scale = self.steps_per_unit();
        let index = index.min(self.grid_len() - 1) as f64;
        self.snap(((self.min * scale).round() + index) / scale)
    }
}

/// Identifies one of the three adjustable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Mean,
    StdDev,
    Skewness,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 3] = [
        ParameterKind::Mean,
        ParameterKind::StdDev,
        ParameterKind::Skewness,
    ];

    pub const MEAN_RANGE: ParameterRange = ParameterRange::new(-2.0, 2.0, 0.1);
    pub const STD_DEV_RANGE: ParameterRange = ParameterRange::new(0.5, 2.0, 0.1);
    pub const SKEWNESS_RANGE: ParameterRange = ParameterRange::new(-1.0, 1.0, 0.1);

    pub fn range(&self) -> ParameterRange {
        match self {
            ParameterKind::Mean => Self::MEAN_RANGE,
            ParameterKind::StdDev => Self::STD_DEV_RANGE,
            ParameterKind::Skewness => Self::SKEWNESS_RANGE,
        }
    }

    /// Stable identifier used in logs, errors and serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            ParameterKind::Mean => "mean",
            ParameterKind::StdDev => "std_dev",
            ParameterKind::Skewness => "skewness",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ParameterKind::Mean => 0,
            ParameterKind::StdDev => 1,
            ParameterKind::Skewness => 2,
        }
    }

    /// Next kind in display order, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous kind in display order, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The three inputs of the curve generator.
///
/// `std_dev` must be positive. The generator does not check it: values built
/// with [`Parameters::new`] are taken as-is and a zero or negative standard
/// deviation yields NaN/infinite samples. Use [`Parameters::clamped`] or
/// [`Parameters::set`] to stay inside the input ranges, or
/// [`Parameters::validate`] to check unclamped values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            skewness: 0.0,
        }
    }
}

impl Parameters {
    /// Build parameters without any range restriction.
    pub fn new(mean: f64, std_dev: f64, skewness: f64) -> Self {
        Self {
            mean,
            std_dev,
            skewness,
        }
    }

    /// Build parameters snapped into their input ranges.
    pub fn clamped(mean: f64, std_dev: f64, skewness: f64) -> Self {
        Self::new(mean, std_dev, skewness).snapped()
    }

    /// Copy of `self` with every field snapped into its range.
    pub fn snapped(&self) -> Self {
        Self {
            mean: ParameterKind::MEAN_RANGE.snap(self.mean),
            std_dev: ParameterKind::STD_DEV_RANGE.snap(self.std_dev),
            skewness: ParameterKind::SKEWNESS_RANGE.snap(self.skewness),
        }
    }

    pub fn get(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::Mean => self.mean,
            ParameterKind::StdDev => self.std_dev,
            ParameterKind::Skewness => self.skewness,
        }
    }

    fn slot(&mut self, kind: ParameterKind) -> &mut f64 {
        match kind {
            ParameterKind::Mean => &mut self.mean,
            ParameterKind::StdDev => &mut self.std_dev,
            ParameterKind::Skewness => &mut self.skewness,
        }
    }

    /// Set one parameter, snapped into its range. The other two are untouched.
    pub fn set(&mut self, kind: ParameterKind, value: f64) {
        *self.slot(kind) = kind.range().snap(value);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, kind: ParameterKind, value: f64) -> Self {
        self.set(kind, value);
        self
    }

    /// Move one parameter by `steps` grid points, staying in range.
    pub fn step(&mut self, kind: ParameterKind, steps: i32) {
        let range = kind.range();
        let slot = self.slot(kind);
        *slot = range.offset(*slot, steps);
    }

    /// Draw each parameter uniformly from its step grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pick = |kind: ParameterKind| {
            let range = kind.range();
            range.value_at(rng.random_range(0..range.grid_len()))
        };
        Self {
            mean: pick(ParameterKind::Mean),
            std_dev: pick(ParameterKind::StdDev),
            skewness: pick(ParameterKind::Skewness),
        }
    }

    /// Check that the curve formula is well-defined for these values.
    pub fn validate(&self) -> Result<()> {
        for kind in ParameterKind::ALL {
            let value = self.get(kind);
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { kind, value });
            }
        }
        if self.std_dev <= 0.0 {
            return Err(ParameterError::NonPositiveStdDev(self.std_dev));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_snap_lands_on_decimal_grid() {
        let range = ParameterKind::MEAN_RANGE;
        assert_eq!(range.snap(0.3), 0.3);
        assert_eq!(range.snap(0.26), 0.3);
        assert_eq!(range.snap(-1.04), -1.0);
        assert_eq!(range.snap(9.0), 2.0);
        assert_eq!(range.snap(-9.0), -2.0);
    }

    #[test]
    fn test_snap_never_returns_negative_zero() {
        let snapped = ParameterKind::SKEWNESS_RANGE.snap(-0.04);
        assert_eq!(snapped, 0.0);
        assert!(snapped.is_sign_positive());
    }

    #[test]
    fn test_snap_nan_goes_to_min() {
        assert_eq!(ParameterKind::STD_DEV_RANGE.snap(f64::NAN), 0.5);
    }

    #[test]
    fn test_offset_accumulates_without_drift() {
        let range = ParameterKind::MEAN_RANGE;
        let mut value = 0.0;
        for _ in 0..3 {
            value = range.offset(value, 1);
        }
        assert_eq!(value, 0.3);
        assert_eq!(range.offset(value, -3), 0.0);
        assert_eq!(range.offset(1.9, 5), 2.0);
    }

    #[test]
    fn test_ratio() {
        let range = ParameterKind::STD_DEV_RANGE;
        assert_eq!(range.ratio(0.5), 0.0);
        assert_eq!(range.ratio(2.0), 1.0);
        assert!((range.ratio(1.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_grid() {
        assert_eq!(ParameterKind::MEAN_RANGE.grid_len(), 41);
        assert_eq!(ParameterKind::STD_DEV_RANGE.grid_len(), 16);
        assert_eq!(ParameterKind::SKEWNESS_RANGE.grid_len(), 21);
        assert_eq!(ParameterKind::STD_DEV_RANGE.value_at(0), 0.5);
        assert_eq!(ParameterKind::STD_DEV_RANGE.value_at(7), 1.2);
        assert_eq!(ParameterKind::STD_DEV_RANGE.value_at(99), 2.0);
    }

    #[test]
    fn test_kind_cycle() {
        assert_eq!(ParameterKind::Mean.next(), ParameterKind::StdDev);
        assert_eq!(ParameterKind::Skewness.next(), ParameterKind::Mean);
        assert_eq!(ParameterKind::Mean.prev(), ParameterKind::Skewness);
    }

    #[test]
    fn test_set_leaves_other_parameters_alone() {
        let mut params = Parameters::new(0.5, 1.5, -0.3);
        params.set(ParameterKind::StdDev, 0.8);
        assert_eq!(params, Parameters::new(0.5, 0.8, -0.3));

        params.step(ParameterKind::Skewness, 2);
        assert_eq!(params, Parameters::new(0.5, 0.8, -0.1));
    }

    #[test]
    fn test_set_clamps_std_dev_above_zero() {
        let params = Parameters::default().with(ParameterKind::StdDev, 0.0);
        assert_eq!(params.std_dev, 0.5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(Parameters::default().validate().is_ok());
        assert_eq!(
            Parameters::new(0.0, 0.0, 0.0).validate(),
            Err(ParameterError::NonPositiveStdDev(0.0))
        );
        assert!(matches!(
            Parameters::new(f64::INFINITY, 1.0, 0.0).validate(),
            Err(ParameterError::NonFinite {
                kind: ParameterKind::Mean,
                ..
            })
        ));
    }

    #[test]
    fn test_random_stays_on_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let params = Parameters::random(&mut rng);
            assert_eq!(params, params.snapped());
            assert!(params.validate().is_ok());
        }
    }
}
