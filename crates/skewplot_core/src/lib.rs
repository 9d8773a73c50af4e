//! Skew-adjusted Gaussian curve model
//!
//! This crate provides the numeric core behind the skewplot widget:
//! - Parameters (mean, standard deviation, skewness) with fixed input ranges
//! - An 81-point curve sampled over the standardized domain [-4, 4]
//! - Derived mode/median/mean statistics
//! - Skew classification with display text in Spanish and English
//!
//! The curve is a first-order skew perturbation of a normal density:
//!
//! ```text
//! z = (x - mean) / std_dev
//! y = exp(-z^2 / 2) / (std_dev * sqrt(2*pi)) * (1 + skewness * z)
//! ```
//!
//! It is not normalized and `y` can go negative for strong skew at the tails.
//!
//! ```ignore
//! use skewplot_core::{CurveSnapshot, Parameters};
//!
//! let snapshot = CurveSnapshot::compute(&Parameters::new(1.0, 0.5, -1.0));
//! assert_eq!(snapshot.samples.len(), 81);
//! assert_eq!(snapshot.statistics.mode, 1.5);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod curve;
pub mod error;
pub mod snapshot;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use curve::{
    DOMAIN_MAX, DOMAIN_MIN, DOMAIN_STEP, SAMPLE_COUNT, Samples, density, generate_curve, samples,
    x_at,
};
pub use error::ParameterError;
pub use model::{
    Language, ParameterKind, ParameterRange, Parameters, Sample, SkewCategory, Statistics,
};
pub use snapshot::CurveSnapshot;
