//! The axis-aligned box every domain operation is built on.

use magdom_core::{check_ordered, round_coord, round_point, Axis, CellSize, GeometryError, Point3};

/// An axis-aligned rectangular box in 3-space with labeled dimensions and
/// units.
///
/// Invariant: `pmin[i] < pmax[i]` strictly on every axis. Violations are an
/// error at construction, never silently swapped — callers pass
/// already-ordered corners to [`Region::new`] or unordered ones to
/// [`Region::from_corners`], which sorts.
///
/// `Region` is an immutable value type: every transformation
/// ([`scaled`](Region::scaled), [`translated`](Region::translated), the
/// algebra operations in this crate) produces a new region.
///
/// # Examples
///
/// ```
/// use magdom_region::Region;
///
/// let film = Region::si([0.0, 0.0, 0.0], [100e-9, 50e-9, 5e-9]).unwrap();
/// assert!(film.contains([50e-9, 25e-9, 2e-9]));
/// assert!(!film.contains([50e-9, 25e-9, 6e-9]));
/// assert_eq!(film.edges()[0], 100e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pmin: Point3,
    pmax: Point3,
    dims: [String; 3],
    units: [String; 3],
}

impl Region {
    /// Construct from strictly ordered corners.
    ///
    /// Returns `Err(GeometryError::UnorderedCorners)` if `pmin[i] >= pmax[i]`
    /// on any axis. Coordinates are stored as given; the algebra operations
    /// round before calling this.
    pub fn new(
        pmin: Point3,
        pmax: Point3,
        dims: [String; 3],
        units: [String; 3],
    ) -> Result<Self, GeometryError> {
        check_ordered(pmin, pmax)?;
        Ok(Self {
            pmin,
            pmax,
            dims,
            units,
        })
    }

    /// Construct from two opposite corners in either order.
    ///
    /// Sorts each axis independently, so `p1`/`p2` may be any pair of
    /// opposite corners. Still fails if the two corners coincide on an axis
    /// (a zero-extent box cannot be repaired by sorting).
    pub fn from_corners(
        p1: Point3,
        p2: Point3,
        dims: [String; 3],
        units: [String; 3],
    ) -> Result<Self, GeometryError> {
        let mut pmin = p1;
        let mut pmax = p2;
        for i in 0..3 {
            if pmin[i] > pmax[i] {
                std::mem::swap(&mut pmin[i], &mut pmax[i]);
            }
        }
        Self::new(pmin, pmax, dims, units)
    }

    /// Construct with SI metre units and `x`/`y`/`z` dimension labels.
    pub fn si(pmin: Point3, pmax: Point3) -> Result<Self, GeometryError> {
        Self::new(
            pmin,
            pmax,
            ["x".into(), "y".into(), "z".into()],
            ["m".into(), "m".into(), "m".into()],
        )
    }

    /// Construct from already-computed corners, rounding both to 9 decimal
    /// places and inheriting labels and units from `template`.
    ///
    /// This is the constructor every algebra operation funnels through:
    /// rounding here keeps container keys and later containment tests
    /// stable across chained operations.
    pub fn like(template: &Region, pmin: Point3, pmax: Point3) -> Result<Self, GeometryError> {
        Self::new(
            round_point(pmin),
            round_point(pmax),
            template.dims.clone(),
            template.units.clone(),
        )
    }

    /// Construct from a minimum corner plus per-axis cell counts.
    ///
    /// The maximum corner is derived as `pmin + counts * cell`, rounded.
    pub fn from_cell_counts(
        pmin: Point3,
        counts: [u32; 3],
        cell: CellSize,
        dims: [String; 3],
        units: [String; 3],
    ) -> Result<Self, GeometryError> {
        let mut pmax = pmin;
        for i in 0..3 {
            pmax[i] = round_coord(pmin[i] + counts[i] as f64 * cell[i]);
        }
        Self::new(pmin, pmax, dims, units)
    }

    /// Minimum corner.
    pub fn pmin(&self) -> Point3 {
        self.pmin
    }

    /// Maximum corner.
    pub fn pmax(&self) -> Point3 {
        self.pmax
    }

    /// Dimension labels, in axis order.
    pub fn dims(&self) -> &[String; 3] {
        &self.dims
    }

    /// Unit labels, in axis order.
    pub fn units(&self) -> &[String; 3] {
        &self.units
    }

    /// Edge lengths per axis (`pmax - pmin`).
    pub fn edges(&self) -> Point3 {
        [
            self.pmax[0] - self.pmin[0],
            self.pmax[1] - self.pmin[1],
            self.pmax[2] - self.pmin[2],
        ]
    }

    /// Edge length along one axis.
    pub fn length(&self, axis: Axis) -> f64 {
        let i = axis.index();
        self.pmax[i] - self.pmin[i]
    }

    /// Number of discretisation cells per axis.
    ///
    /// The ratio is rounded to coordinate precision before taking the
    /// ceiling, so extents that are integer multiples of the cell size up
    /// to rounding noise report the exact count.
    pub fn cell_counts(&self, cell: CellSize) -> [usize; 3] {
        let e = self.edges();
        let mut counts = [0usize; 3];
        for i in 0..3 {
            counts[i] = round_coord(e[i] / cell[i]).ceil() as usize;
        }
        counts
    }

    /// Containment test, closed on both faces on all three axes:
    /// `pmin[i] <= p[i] <= pmax[i]`.
    ///
    /// This single convention is used by every profile gate; points on a
    /// shared boundary therefore belong to both adjacent regions, and
    /// first-match-wins ordering in a composite resolves the tie.
    pub fn contains(&self, p: Point3) -> bool {
        (0..3).all(|i| self.pmin[i] <= p[i] && p[i] <= self.pmax[i])
    }

    /// Affine scaling about a reference point, per-axis factors.
    ///
    /// Each corner coordinate maps to
    /// `reference[i] + (c[i] - reference[i]) * factors[i]`. Coordinates are
    /// not rounded here; callers round via [`Region::like`]. A zero or
    /// negative factor produces a degenerate or inverted box, which
    /// surfaces as the constructor's ordering error.
    pub fn scaled(&self, factors: [f64; 3], reference: Point3) -> Result<Self, GeometryError> {
        let mut pmin = self.pmin;
        let mut pmax = self.pmax;
        for i in 0..3 {
            pmin[i] = reference[i] + (self.pmin[i] - reference[i]) * factors[i];
            pmax[i] = reference[i] + (self.pmax[i] - reference[i]) * factors[i];
        }
        Self::new(pmin, pmax, self.dims.clone(), self.units.clone())
    }

    /// Displace the region by `offset`, restricted to the given axes.
    ///
    /// Both corners move together, so ordering is preserved; corners are
    /// rounded to coordinate precision. Axes not listed are untouched.
    pub fn translated(&self, offset: Point3, axes: &[Axis]) -> Self {
        let mut pmin = self.pmin;
        let mut pmax = self.pmax;
        for &axis in axes {
            let i = axis.index();
            pmin[i] = round_coord(pmin[i] + offset[i]);
            pmax[i] = round_coord(pmax[i] + offset[i]);
        }
        Self {
            pmin,
            pmax,
            dims: self.dims.clone(),
            units: self.units.clone(),
        }
    }
}
