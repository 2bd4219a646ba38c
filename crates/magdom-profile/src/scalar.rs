//! Scalar-valued spatial profiles (damping coefficients and friends).

use crate::error::ProfileError;
use crate::shape::RampShape;
use magdom_core::{Axis, Point3};
use magdom_region::Region;

/// A spatially varying scalar parameter.
///
/// Each variant answers [`evaluate`](ScalarProfile::evaluate) with
/// `Some(value)` where it governs the position and `None` where it does
/// not; `None` is how a profile yields to the next one in a
/// [`Composite`](crate::Composite) chain.
///
/// Build variants through the constructors, which validate parameters up
/// front (interval non-degeneracy, positivity where a logarithm is taken)
/// so that `evaluate` stays infallible.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarProfile {
    /// The constant bulk value, everywhere. Never `None`; meant as a
    /// terminal default, not as a member of a composite list — a composite
    /// already carries its own bulk fallback.
    Bulk {
        /// The constant value.
        value: f64,
    },
    /// A constant inside a region, nothing outside.
    RegionGated {
        /// The gating region; containment is the region's own closed
        /// convention on all three axes.
        region: Region,
        /// Value returned inside the region.
        value: f64,
    },
    /// Straight-line interpolation across `[x0, x1]` along an axis,
    /// gated by a region.
    LinearGradient {
        /// The gating region.
        region: Region,
        /// Interpolation axis.
        axis: Axis,
        /// Interval start (value `left` here).
        x0: f64,
        /// Interval end (value `right` here).
        x1: f64,
        /// Value at `x0`.
        left: f64,
        /// Value at `x1`.
        right: f64,
    },
    /// Exponential interpolation `start * exp(ln(end/start) * t)` across
    /// `[x0, x1]`. Both endpoint values are strictly positive
    /// (constructor-enforced; the formula takes their ratio's logarithm).
    ExponentialGradient {
        /// The gating region.
        region: Region,
        /// Interpolation axis.
        axis: Axis,
        /// Interval start.
        x0: f64,
        /// Interval end.
        x1: f64,
        /// Value at `x0` (positive).
        start: f64,
        /// Value at `x1` (positive).
        end: f64,
    },
    /// Tanh-shaped interpolation recentred on the interval midpoint.
    TanhGradient {
        /// The gating region.
        region: Region,
        /// Interpolation axis.
        axis: Axis,
        /// Interval start.
        x0: f64,
        /// Interval end.
        x1: f64,
        /// Value approached at `x0`.
        start: f64,
        /// Value approached at `x1`.
        end: f64,
        /// Steepness `k`; the tanh argument runs `-k..k` across the
        /// interval.
        steepness: f64,
    },
    /// Edge-anchored absorbing ramp: applies only within `width` of the
    /// region's two end faces along `axis`, interpolating `1.0` at the
    /// face to `bulk` at depth `width`. `None` in the deeper interior —
    /// the composite's bulk takes over there.
    AbsorbingRamp {
        /// Region whose end faces anchor the ramps.
        region: Region,
        /// Axis along which depth is measured.
        axis: Axis,
        /// Ramp depth from each face.
        width: f64,
        /// Value at depth `width` (and the composite fallback beyond).
        bulk: f64,
        /// Interpolation shape.
        shape: RampShape,
        /// Swap which endpoint sits at the face.
        reverse: bool,
    },
}

fn check_interval(x0: f64, x1: f64) -> Result<(), ProfileError> {
    if x1 <= x0 {
        Err(ProfileError::EmptyInterval { x0, x1 })
    } else {
        Ok(())
    }
}

fn check_positive(value: f64) -> Result<(), ProfileError> {
    if value <= 0.0 {
        Err(ProfileError::NonPositiveValue { value })
    } else {
        Ok(())
    }
}

impl ScalarProfile {
    /// Constant value everywhere.
    pub fn bulk(value: f64) -> Self {
        Self::Bulk { value }
    }

    /// Constant value inside `region`, `None` outside.
    pub fn region_gated(region: Region, value: f64) -> Self {
        Self::RegionGated { region, value }
    }

    /// Linear gradient from `left` at `x0` to `right` at `x1`.
    ///
    /// Fails with [`ProfileError::EmptyInterval`] when `x1 <= x0`.
    pub fn linear_gradient(
        region: Region,
        axis: Axis,
        x0: f64,
        x1: f64,
        left: f64,
        right: f64,
    ) -> Result<Self, ProfileError> {
        check_interval(x0, x1)?;
        Ok(Self::LinearGradient {
            region,
            axis,
            x0,
            x1,
            left,
            right,
        })
    }

    /// Exponential gradient from `start` at `x0` to `end` at `x1`.
    ///
    /// Both values must be strictly positive.
    pub fn exponential_gradient(
        region: Region,
        axis: Axis,
        x0: f64,
        x1: f64,
        start: f64,
        end: f64,
    ) -> Result<Self, ProfileError> {
        check_interval(x0, x1)?;
        check_positive(start)?;
        check_positive(end)?;
        Ok(Self::ExponentialGradient {
            region,
            axis,
            x0,
            x1,
            start,
            end,
        })
    }

    /// Tanh gradient from `start` at `x0` to `end` at `x1` with the given
    /// steepness ([`DEFAULT_STEEPNESS`](crate::DEFAULT_STEEPNESS) is the
    /// conventional choice).
    pub fn tanh_gradient(
        region: Region,
        axis: Axis,
        x0: f64,
        x1: f64,
        start: f64,
        end: f64,
        steepness: f64,
    ) -> Result<Self, ProfileError> {
        check_interval(x0, x1)?;
        Ok(Self::TanhGradient {
            region,
            axis,
            x0,
            x1,
            start,
            end,
            steepness,
        })
    }

    /// Absorbing ramp anchored on both end faces of `region` along `axis`.
    ///
    /// `width` must be strictly positive; an exponential shape also needs
    /// `bulk > 0`.
    pub fn absorbing_ramp(
        region: Region,
        axis: Axis,
        width: f64,
        bulk: f64,
        shape: RampShape,
        reverse: bool,
    ) -> Result<Self, ProfileError> {
        if width <= 0.0 {
            return Err(ProfileError::NonPositiveWidth { width });
        }
        if matches!(shape, RampShape::Exponential) {
            check_positive(bulk)?;
        }
        Ok(Self::AbsorbingRamp {
            region,
            axis,
            width,
            bulk,
            shape,
            reverse,
        })
    }

    /// Value at `pos`, or `None` where this profile does not govern.
    ///
    /// Never fails and never allocates; the field-assembly loop calls this
    /// once per cell.
    pub fn evaluate(&self, pos: Point3) -> Option<f64> {
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
                let t = interval_fraction(region, *axis, *x0, *x1, pos)?;
                Some(left + t * (right - left))
            }

            Self::ExponentialGradient {
                region,
                axis,
                x0,
                x1,
                start,
                end,
            } => {
                let t = interval_fraction(region, *axis, *x0, *x1, pos)?;
                Some(start * ((end / start).ln() * t).exp())
            }

            Self::TanhGradient {
                region,
                axis,
                x0,
                x1,
                start,
                end,
                steepness,
            } => {
                let t = interval_fraction(region, *axis, *x0, *x1, pos)?;
                let s = (1.0 + (steepness * (2.0 * t - 1.0)).tanh()) / 2.0;
                Some(start + (end - start) * s)
            }

            Self::AbsorbingRamp {
                region,
                axis,
                width,
                bulk,
                shape,
                reverse,
            } => {
                if !region.contains(pos) {
                    return None;
                }
                let i = axis.index();
                let x = pos[i];
                // Left face first: for widths past the region midpoint the
                // two ramp zones overlap and the left one wins.
                let depth_lo = x - region.pmin()[i];
                if depth_lo <= *width {
                    return Some(shape.mix(depth_lo / width, *bulk, *reverse));
                }
                let depth_hi = region.pmax()[i] - x;
                if depth_hi <= *width {
                    return Some(shape.mix(depth_hi / width, *bulk, *reverse));
                }
                None
            }
        }
    }
}

/// Fraction through `[x0, x1]` along `axis`, or `None` when `pos` is
/// outside the gating region or the interval.
fn interval_fraction(region: &Region, axis: Axis, x0: f64, x1: f64, pos: Point3) -> Option<f64> {
    if !region.contains(pos) {
        return None;
    }
    let x = pos[axis.index()];
    if x < x0 || x > x1 {
        return None;
    }
    Some((x - x0) / (x1 - x0))
}
