//! First-match-wins composition of profiles with a mandatory bulk
//! fallback.

use crate::scalar::ScalarProfile;
use crate::vector::{VectorProfile, VectorValue};
use magdom_core::Point3;
use smallvec::SmallVec;

/// Anything that can answer "what is the parameter value at this
/// position, if you govern it".
///
/// Implemented by the closed profile enums; the associated `Value` type is
/// what lets [`Composite`] serve scalars and vectors through one
/// implementation instead of two parallel ones.
pub trait Profile {
    /// The value a profile yields: a scalar or a 3-vector.
    type Value: Copy + PartialEq + std::fmt::Debug;

    /// Value at `pos`, or `None` where this profile does not govern.
    fn evaluate(&self, pos: Point3) -> Option<Self::Value>;
}

impl Profile for ScalarProfile {
    type Value = f64;

    fn evaluate(&self, pos: Point3) -> Option<f64> {
        ScalarProfile::evaluate(self, pos)
    }
}

impl Profile for VectorProfile {
    type Value = VectorValue;

    fn evaluate(&self, pos: Point3) -> Option<VectorValue> {
        VectorProfile::evaluate(self, pos)
    }
}

/// An ordered profile chain with a mandatory bulk fallback.
///
/// [`evaluate`](Composite::evaluate) tries each profile in list order and
/// returns the first `Some`; if none governs the position, the bulk value
/// does. Evaluation is therefore total — every position has a defined
/// value — and deterministic under overlap: precedence is list position,
/// chosen by the caller, never a geometric tie-break. Order the most
/// specific profiles (driven region, absorbing edges) before the most
/// general.
///
/// The profile list is stored inline for typical chain lengths, so
/// per-cell evaluation performs no heap access beyond the profiles
/// themselves; `&Composite` is freely shared across threads over disjoint
/// position batches (there is nothing to lock — evaluation mutates
/// nothing).
///
/// # Examples
///
/// ```
/// use magdom_profile::{Composite, ScalarProfile};
/// use magdom_region::Region;
///
/// let driven = Region::si([0.0, 0.0, 0.0], [20e-9, 10e-9, 12e-9]).unwrap();
/// let alpha = Composite::with_profiles(
///     [ScalarProfile::region_gated(driven, 0.5)],
///     0.008,
/// );
/// assert_eq!(alpha.evaluate([10e-9, 5e-9, 6e-9]), 0.5);
/// assert_eq!(alpha.evaluate([50e-9, 5e-9, 6e-9]), 0.008);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Composite<P: Profile> {
    profiles: SmallVec<[P; 4]>,
    bulk: P::Value,
}

/// Damping-style scalar composite.
pub type CompositeScalar = Composite<ScalarProfile>;

/// Drive-field vector composite. Same algorithm, same implementation.
pub type CompositeVector = Composite<VectorProfile>;

impl<P: Profile> Composite<P> {
    /// Empty chain: every position evaluates to `bulk`.
    pub fn new(bulk: P::Value) -> Self {
        Self {
            profiles: SmallVec::new(),
            bulk,
        }
    }

    /// Chain from an ordered list of profiles.
    pub fn with_profiles(profiles: impl IntoIterator<Item = P>, bulk: P::Value) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
            bulk,
        }
    }

    /// Append a profile at the end of the chain (lowest precedence so far).
    pub fn push(&mut self, profile: P) {
        self.profiles.push(profile);
    }

    /// The chain, in precedence order.
    pub fn profiles(&self) -> &[P] {
        &self.profiles
    }

    /// The fallback value.
    pub fn bulk(&self) -> P::Value {
        self.bulk
    }

    /// Value at `pos`: the first governing profile's value, else bulk.
    ///
    /// Total and infallible; called once per discretisation cell by the
    /// field-assembly loop.
    pub fn evaluate(&self, pos: Point3) -> P::Value {
        for profile in &self.profiles {
            if let Some(value) = profile.evaluate(pos) {
                return value;
            }
        }
        self.bulk
    }
}
