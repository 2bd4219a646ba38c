//! Construction-time errors for profile parameters.

use std::error::Error;
use std::fmt;

/// A profile was constructed with parameters its formula cannot accept.
///
/// Raised only by constructors: once built, a profile's `evaluate` is
/// infallible on the hot path. This is why degenerate intervals are
/// rejected here rather than tolerated at evaluation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProfileError {
    /// A gradient interval is empty or inverted (`x1 <= x0`), leaving the
    /// interpolation fraction undefined.
    EmptyInterval {
        /// Interval start.
        x0: f64,
        /// Interval end.
        x1: f64,
    },
    /// An exponential formula needs a strictly positive value (its
    /// logarithm is taken), and this one is not.
    NonPositiveValue {
        /// The offending value.
        value: f64,
    },
    /// An absorbing ramp's edge width must be strictly positive.
    NonPositiveWidth {
        /// The offending width.
        width: f64,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInterval { x0, x1 } => {
                write!(f, "gradient interval [{x0}, {x1}] is empty or inverted")
            }
            Self::NonPositiveValue { value } => {
                write!(f, "exponential profile needs a positive value, got {value}")
            }
            Self::NonPositiveWidth { width } => {
                write!(f, "absorbing ramp width must be positive, got {width}")
            }
        }
    }
}

impl Error for ProfileError {}
