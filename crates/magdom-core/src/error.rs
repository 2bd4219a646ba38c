//! Shared error types for geometry and discretisation checks.

use crate::axis::Axis;
use std::error::Error;
use std::fmt;

/// A pair of region corners is not strictly ordered.
///
/// Region corners must satisfy `pmin[i] < pmax[i]` on every axis. This is
/// never silently repaired: callers either pass already-ordered corners or
/// use the sorting constructor. Fatal to the single operation that raised
/// it; pure functions leave no partial state behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// `pmin >= pmax` on the named axis.
    UnorderedCorners {
        /// The offending axis.
        axis: Axis,
        /// Minimum-corner coordinate on that axis.
        min: f64,
        /// Maximum-corner coordinate on that axis.
        max: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnorderedCorners { axis, min, max } => write!(
                f,
                "corners not strictly ordered on {axis}: pmin ({min}) >= pmax ({max})"
            ),
        }
    }
}

impl Error for GeometryError {}

/// A produced extent is not an integer multiple of the governing cell size.
///
/// Raised by [`check_divisible`](crate::validate::check_divisible) when a
/// region boundary would fall inside a discretisation cell. Fatal to the
/// slice or subdivision that triggered it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DiscretisationError {
    /// `length / cell` is further than the tolerance from the nearest integer.
    NotDivisible {
        /// The extent being checked.
        length: f64,
        /// The governing cell size on the checked axis.
        cell: f64,
        /// Distance of `length / cell` from the nearest integer.
        remainder: f64,
    },
}

impl fmt::Display for DiscretisationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDivisible {
                length,
                cell,
                remainder,
            } => write!(
                f,
                "length {length} is not an integer multiple of cell size {cell} \
                 (off by {remainder} cells)"
            ),
        }
    }
}

impl Error for DiscretisationError {}
