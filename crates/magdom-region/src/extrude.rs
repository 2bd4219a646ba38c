//! Slice-and-scale extrusion: append a new region off a face of an
//! existing one.

use crate::region::Region;
use magdom_core::{round_to, Axis, CellSize, Face, GeometryError, COORD_DECIMALS};

/// How far an extruded slab is stretched along its axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleAmount {
    /// A multiple of the slab width, i.e. a cell count. `Cells(4.0)` makes
    /// the appended region four cells long.
    Cells(f64),
    /// A physical length in the base region's units. The scale factor is
    /// `length / cell[axis]`, rounded to coordinate precision before use to
    /// suppress floating accumulation.
    Absolute(f64),
}

/// Create a new region by slicing a one-cell slab off `base` and scaling it.
///
/// The slab sits flush against the chosen `face` of `base` along `axis`
/// (outside the base region) and is exactly `cell[axis]` wide. It is then
/// scaled along `axis` about its near corner — the corner it shares with
/// `base` — by the factor `amount` resolves to. The other two axes keep the
/// base region's extent. Both output corners are rounded to coordinate
/// precision; dimension labels and units are inherited from `base`.
///
/// `amount` is not validated here: a zero or negative factor yields a
/// degenerate or inverted slab, which surfaces as the region constructor's
/// ordering error.
///
/// # Examples
///
/// ```
/// use magdom_core::{Axis, Face};
/// use magdom_region::{extrude, Region, ScaleAmount};
///
/// let cell = [2e-9, 1e-9, 12e-9];
/// let base = Region::si([0.0, 0.0, 0.0], [100e-9, 10e-9, 12e-9]).unwrap();
///
/// // Four cells appended past the +x face.
/// let lead = extrude(&base, Axis::X, Face::Positive, ScaleAmount::Cells(4.0), cell).unwrap();
/// assert_eq!(lead.pmin()[0], 100e-9);
/// assert_eq!(lead.pmax()[0], 108e-9);
/// ```
pub fn extrude(
    base: &Region,
    axis: Axis,
    face: Face,
    amount: ScaleAmount,
    cell: CellSize,
) -> Result<Region, GeometryError> {
    let i = axis.index();

    // One-cell slab flush against the chosen face.
    let mut slab_min = base.pmin();
    let mut slab_max = base.pmax();
    match face {
        Face::Positive => {
            slab_min[i] = base.pmax()[i];
            slab_max[i] = base.pmax()[i] + cell[i];
        }
        Face::Negative => {
            slab_min[i] = base.pmin()[i] - cell[i];
            slab_max[i] = base.pmin()[i];
        }
    }
    let slab = Region::like(base, slab_min, slab_max)?;

    let factor = match amount {
        ScaleAmount::Cells(k) => k,
        ScaleAmount::Absolute(length) => round_to(length / cell[i], COORD_DECIMALS),
    };

    let mut factors = [1.0, 1.0, 1.0];
    factors[i] = factor;

    // Scale about the slab's near corner so the shared face stays put.
    let reference = match face {
        Face::Positive => slab.pmin(),
        Face::Negative => slab.pmax(),
    };
    let scaled = slab.scaled(factors, reference)?;
    Region::like(base, scaled.pmin(), scaled.pmax())
}
