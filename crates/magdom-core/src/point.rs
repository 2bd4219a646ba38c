//! Position and cell-size types, and coordinate rounding.
//!
//! Every corner coordinate produced by arithmetic (slab carving, scaling,
//! subdivision boundaries) is rounded to [`COORD_DECIMALS`] decimal places
//! before a region is constructed. This keeps region keys and later
//! containment tests numerically stable across chains of operations that
//! would otherwise accumulate floating-point noise.

/// A position in 3-space, in base units (metres for SI sessions).
pub type Point3 = [f64; 3];

/// Per-axis spacing of the regular grid a region will be sampled on.
///
/// Strictly positive on every axis. Supplied by the caller and constant
/// for the lifetime of one geometry session; the engine never mutates it.
pub type CellSize = [f64; 3];

/// Number of decimal places kept on corner coordinates.
pub const COORD_DECIMALS: i32 = 9;

/// Round `v` to `decimals` decimal places (half away from zero).
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// Round a single coordinate to [`COORD_DECIMALS`] decimal places.
pub fn round_coord(v: f64) -> f64 {
    round_to(v, COORD_DECIMALS)
}

/// Round every component of a point to [`COORD_DECIMALS`] decimal places.
pub fn round_point(p: Point3) -> Point3 {
    [round_coord(p[0]), round_coord(p[1]), round_coord(p[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_coord_truncates_accumulated_noise() {
        // 0.1 + 0.2 is the classic 0.30000000000000004.
        assert_eq!(round_coord(0.1 + 0.2), 0.3);
    }

    #[test]
    fn round_coord_keeps_nine_decimals() {
        assert_eq!(round_coord(1.23456789012), 1.23456789);
        assert_eq!(round_coord(-1.23456789012), -1.23456789);
    }

    #[test]
    fn round_to_coarser_precision() {
        assert_eq!(round_to(2.0 / 3.0, 4), 0.6667);
        assert_eq!(round_to(0.15, 1), 0.2);
    }

    #[test]
    fn round_point_applies_per_component() {
        let p = round_point([0.1 + 0.2, 1e-10, -2.5e-9]);
        assert_eq!(p, [0.3, 0.0, -2.5e-9]);
    }

    proptest! {
        #[test]
        fn round_coord_idempotent(v in -1e3f64..1e3) {
            let once = round_coord(v);
            prop_assert_eq!(once, round_coord(once));
        }

        #[test]
        fn round_coord_within_half_ulp_of_precision(v in -1e3f64..1e3) {
            prop_assert!((round_coord(v) - v).abs() <= 0.5e-9 + f64::EPSILON * v.abs());
        }
    }
}
