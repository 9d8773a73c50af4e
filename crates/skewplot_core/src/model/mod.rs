//! Data model for the curve generator.

mod language;
mod parameters;
mod sample;
mod skew;
mod statistics;

pub use language::{Labels, Language};
pub use parameters::{ParameterKind, ParameterRange, Parameters};
pub use sample::Sample;
pub use skew::SkewCategory;
pub use statistics::Statistics;
