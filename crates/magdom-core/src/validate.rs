//! Discretisation and ordering checks shared by all region operations.
//!
//! These functions are pure and side-effect-free. Every region-algebra
//! operation that creates a region from arithmetic on lengths (slab
//! carving, subdivision) runs them; operations that merely copy or relabel
//! an existing region do not re-validate.

use crate::error::{DiscretisationError, GeometryError};
use crate::point::Point3;
use crate::Axis;

/// Default tolerance for divisibility checks.
///
/// Region extents come out of chains of rounded floating-point arithmetic,
/// so `length / cell` lands near — not exactly on — an integer. A relative
/// slack of one part in a million accepts those while still rejecting
/// boundaries that genuinely fall inside a cell.
pub const DEFAULT_DIVISIBILITY_TOL: f64 = 1e-6;

/// Check that `length` is an integer multiple of `cell`, within `tol`.
///
/// Fails unless `|length/cell - round(length/cell)| <= tol`. Callers that
/// have no reason to override the tolerance pass
/// [`DEFAULT_DIVISIBILITY_TOL`].
pub fn check_divisible(length: f64, cell: f64, tol: f64) -> Result<(), DiscretisationError> {
    let ratio = length / cell;
    let remainder = (ratio - ratio.round()).abs();
    if remainder <= tol {
        Ok(())
    } else {
        Err(DiscretisationError::NotDivisible {
            length,
            cell,
            remainder,
        })
    }
}

/// Check that two corners are strictly ordered on every axis.
///
/// Returns the first axis on which `pmin[i] >= pmax[i]`, in axis order.
pub fn check_ordered(pmin: Point3, pmax: Point3) -> Result<(), GeometryError> {
    for axis in Axis::ALL {
        let i = axis.index();
        if pmin[i] >= pmax[i] {
            return Err(GeometryError::UnorderedCorners {
                axis,
                min: pmin[i],
                max: pmax[i],
            });
        }
    }
    Ok(())
}
