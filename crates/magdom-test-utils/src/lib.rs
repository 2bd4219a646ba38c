//! Test fixtures for magdom development.
//!
//! Canonical geometry shared across the region and profile test suites:
//! a thin-film domain on the standard session cell size, strip subregions
//! spanning its cross-section, and a cell-centre iterator matching the
//! sweep an external field-assembly loop performs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use magdom_core::{CellSize, Point3};
use magdom_region::Region;

/// Standard session cell size used by the fixtures: 2 nm x 1 nm x 12 nm.
pub const CELL: CellSize = [2e-9, 1e-9, 12e-9];

/// A 100 nm x 10 nm x 12 nm thin film anchored at the origin, SI units.
pub fn thin_film() -> Region {
    Region::si([0.0, 0.0, 0.0], [100e-9, 10e-9, 12e-9]).expect("fixture corners are ordered")
}

/// A subregion spanning the film's full cross-section between two x
/// coordinates.
pub fn strip(x0: f64, x1: f64) -> Region {
    Region::si([x0, 0.0, 0.0], [x1, 10e-9, 12e-9]).expect("fixture corners are ordered")
}

/// Cell-centre positions of `region` on the given cell size, in canonical
/// x-fastest order — the sweep an external field-assembly loop performs.
pub fn cell_centres(region: &Region, cell: CellSize) -> Vec<Point3> {
    let counts = region.cell_counts(cell);
    let pmin = region.pmin();
    let mut centres = Vec::with_capacity(counts[0] * counts[1] * counts[2]);
    for k in 0..counts[2] {
        for j in 0..counts[1] {
            for i in 0..counts[0] {
                centres.push([
                    pmin[0] + (i as f64 + 0.5) * cell[0],
                    pmin[1] + (j as f64 + 0.5) * cell[1],
                    pmin[2] + (k as f64 + 0.5) * cell[2],
                ]);
            }
        }
    }
    centres
}
