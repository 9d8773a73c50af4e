use std::fmt;

use crate::model::ParameterKind;

/// Errors reported by [`Parameters::validate`](crate::Parameters::validate).
///
/// The curve generator itself never fails. Callers that build parameters
/// without range clamping use this to reject inputs that would produce
/// NaN or infinite samples.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Standard deviation is zero or negative
    NonPositiveStdDev(f64),
    /// A parameter is NaN or infinite
    NonFinite { kind: ParameterKind, value: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonPositiveStdDev(value) => {
                write!(f, "standard deviation must be positive (got {value})")
            }
            ParameterError::NonFinite { kind, value } => {
                write!(f, "{} must be finite (got {value})", kind.key())
            }
        }
    }
}

impl std::error::Error for ParameterError {}

pub type Result<T> = std::result::Result<T, ParameterError>;
