//! Vector-valued spatial profiles (drive-field amplitudes).

use crate::error::ProfileError;
use magdom_core::{Axis, Point3};
use magdom_region::Region;

/// A 3-component field value (e.g. drive-field amplitude in A/m).
pub type VectorValue = [f64; 3];

/// A spatially varying 3-vector parameter.
///
/// The vector counterpart of [`ScalarProfile`](crate::ScalarProfile),
/// carrying the variants the drive-field call sites use: a bulk constant,
/// a region-gated constant, and a component-wise linear gradient. The
/// composite machinery is shared with the scalar flavor through the
/// [`Profile`](crate::Profile) trait rather than re-implemented.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorProfile {
    /// The constant bulk vector, everywhere. Terminal default only.
    Bulk {
        /// The constant vector.
        value: VectorValue,
    },
    /// A constant vector inside a region, nothing outside.
    RegionGated {
        /// The gating region.
        region: Region,
        /// Vector returned inside the region.
        value: VectorValue,
    },
    /// Component-wise linear interpolation across `[x0, x1]` along an
    /// axis, gated by a region.
    LinearGradient {
        /// The gating region.
        region: Region,
        /// Interpolation axis.
        axis: Axis,
        /// Interval start (vector `left` here).
        x0: f64,
        /// Interval end (vector `right` here).
        x1: f64,
        /// Vector at `x0`.
        left: VectorValue,
        /// Vector at `x1`.
        right: VectorValue,
    },
}

impl VectorProfile {
    /// Constant vector everywhere.
    pub fn bulk(value: VectorValue) -> Self {
        Self::Bulk { value }
    }

    /// Constant vector inside `region`, `None` outside.
    pub fn region_gated(region: Region, value: VectorValue) -> Self {
        Self::RegionGated { region, value }
    }

    /// Component-wise linear gradient from `left` at `x0` to `right` at
    /// `x1`. Fails with [`ProfileError::EmptyInterval`] when `x1 <= x0`.
    pub fn linear_gradient(
        region: Region,
        axis: Axis,
        x0: f64,
        x1: f64,
        left: VectorValue,
        right: VectorValue,
    ) -> Result<Self, ProfileError> {
        if x1 <= x0 {
            return Err(ProfileError::EmptyInterval { x0, x1 });
        }
        Ok(Self::LinearGradient {
            region,
            axis,
            x0,
            x1,
            left,
            right,
        })
    }

    /// Value at `pos`, or `None` where this profile does not govern.
    pub fn evaluate(&self, pos: Point3) -> Option<VectorValue> {
        match self {
            Self::Bulk { value } => Some(*value),

            Self::RegionGated { region, value } => region.contains(pos).then_some(*value),

            Self::LinearGradient {
                region,
                axis,
                x0,
                x1,
                left,
                right,
            } => {
                if !region.contains(pos) {
                    return None;
                }
                let x = pos[axis.index()];
                if x < *x0 || x > *x1 {
                    return None;
                }
                let t = (x - x0) / (x1 - x0);
                Some([
                    left[0] + t * (right[0] - left[0]),
                    left[1] + t * (right[1] - left[1]),
                    left[2] + t * (right[2] - left[2]),
                ])
            }
        }
    }
}
