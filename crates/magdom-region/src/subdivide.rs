//! Partition a region along one axis with linearly interpolated
//! per-piece values.

use crate::error::RegionError;
use crate::region::Region;
use indexmap::IndexMap;
use magdom_core::{check_divisible, round_coord, Axis, CellSize, DEFAULT_DIVISIBILITY_TOL};

/// Where the internal boundaries of a subdivision fall.
#[derive(Clone, Debug, PartialEq)]
pub enum Partition {
    /// `n` equal-width pieces.
    Count(usize),
    /// Explicit boundary offsets from `region.pmin[axis]`, strictly
    /// increasing, each within `[0, length]`. `k` offsets produce `k + 1`
    /// pieces.
    Offsets(Vec<f64>),
}

/// Options for [`subdivide`].
#[derive(Clone, Debug)]
pub struct SubdivideOptions {
    /// Prefix for piece names; pieces are named `"{root}{i}"` with no
    /// separator, `i` counting from zero.
    pub name_root: String,
    /// Require every piece length to be an integer multiple of the cell
    /// size on the split axis. The first violation aborts the whole
    /// operation with the failing piece's name; nothing is committed.
    pub require_discretisable: bool,
    /// Tolerance for the divisibility check.
    pub tol: f64,
}

impl Default for SubdivideOptions {
    fn default() -> Self {
        Self {
            name_root: "sub".into(),
            require_discretisable: true,
            tol: DEFAULT_DIVISIBILITY_TOL,
        }
    }
}

/// Result of a successful [`subdivide`]: named pieces and their
/// interpolated values, in piece order.
///
/// Commit into a container with
/// [`RegionMap::apply_subdivision`](crate::RegionMap::apply_subdivision).
#[derive(Clone, Debug, PartialEq)]
pub struct Subdivision {
    /// The pieces, keyed by `"{root}{i}"`, in position order along the axis.
    pub regions: IndexMap<String, Region>,
    /// Interpolated value per piece, same keys and order as `regions`.
    pub values: IndexMap<String, f64>,
}

/// Evenly spaced values from `start` to `stop` inclusive, `n` samples.
///
/// `n = 1` degenerates to `[start]`; endpoints are exact, not accumulated.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Partition `region` along `axis` into contiguous pieces with linearly
/// interpolated values.
///
/// The pieces exactly tile the region along the split axis: the first
/// starts at `pmin[axis]`, the last ends at `pmax[axis]`, and adjacent
/// boundaries coincide exactly (both sides of a cut are the same rounded
/// coordinate). Transverse extents are untouched.
///
/// Piece values follow `linspace(v_min, v_max, n)`: the first piece gets
/// exactly `v_min`, the last exactly `v_max`, and a single piece gets
/// `v_min`. Values are returned unrounded.
///
/// All-or-nothing: any failure (bad partition, non-discretisable piece,
/// degenerate piece geometry) returns an error with no pieces committed
/// anywhere.
///
/// # Examples
///
/// ```
/// use magdom_core::Axis;
/// use magdom_region::{subdivide, Partition, Region, SubdivideOptions};
///
/// let cell = [2e-9, 1e-9, 12e-9];
/// let chain = Region::si([0.0, 0.0, 0.0], [80e-9, 10e-9, 12e-9]).unwrap();
/// let sub = subdivide(
///     &chain,
///     Axis::X,
///     &Partition::Count(4),
///     (0.0, 1.0),
///     cell,
///     &SubdivideOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(sub.regions.len(), 4);
/// assert_eq!(sub.values["sub0"], 0.0);
/// assert_eq!(sub.values["sub3"], 1.0);
/// ```
pub fn subdivide(
    region: &Region,
    axis: Axis,
    partition: &Partition,
    values: (f64, f64),
    cell: CellSize,
    options: &SubdivideOptions,
) -> Result<Subdivision, RegionError> {
    let i = axis.index();
    let length = region.length(axis);

    let boundaries: Vec<f64> = match partition {
        Partition::Count(0) => {
            return Err(RegionError::InvalidPartition {
                reason: "piece count must be at least 1".into(),
            })
        }
        Partition::Count(n) => linspace(0.0, length, n + 1),
        Partition::Offsets(offsets) => {
            for pair in offsets.windows(2) {
                if pair[0] >= pair[1] {
                    return Err(RegionError::InvalidPartition {
                        reason: format!(
                            "offsets must be strictly increasing, got {} then {}",
                            pair[0], pair[1]
                        ),
                    });
                }
            }
            if offsets.iter().any(|&d| d < 0.0 || d > length) {
                return Err(RegionError::InvalidPartition {
                    reason: format!("offsets must lie within [0, {length}]"),
                });
            }
            let mut b = Vec::with_capacity(offsets.len() + 2);
            b.push(0.0);
            b.extend_from_slice(offsets);
            b.push(length);
            b
        }
    };

    let n = boundaries.len() - 1;
    let interp = linspace(values.0, values.1, n);

    let mut regions = IndexMap::with_capacity(n);
    let mut value_map = IndexMap::with_capacity(n);
    let origin = region.pmin()[i];

    for (k, pair) in boundaries.windows(2).enumerate() {
        let name = format!("{}{}", options.name_root, k);
        let lo = round_coord(origin + pair[0]);
        let hi = round_coord(origin + pair[1]);

        if options.require_discretisable {
            check_divisible(hi - lo, cell[i], options.tol).map_err(|source| {
                RegionError::Piece {
                    name: name.clone(),
                    source,
                }
            })?;
        }

        let mut pmin = region.pmin();
        let mut pmax = region.pmax();
        pmin[i] = lo;
        pmax[i] = hi;
        let piece = Region::like(region, pmin, pmax)?;

        regions.insert(name.clone(), piece);
        value_map.insert(name, interp[k]);
    }

    Ok(Subdivision {
        regions,
        values: value_map,
    })
}
