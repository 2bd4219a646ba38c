//! Spatially varying material parameters for magdom domains.
//!
//! A profile maps a position to an *optional* value: `None` means "this
//! profile does not govern this position", which is semantically distinct
//! from a value of zero. Profiles are closed enums — [`ScalarProfile`] for
//! damping-style scalars, [`VectorProfile`] for drive-field vectors —
//! dispatched through a single `evaluate` match, so the per-cell hot path
//! has no dynamic dispatch, no allocation, and no error channel.
//!
//! [`Composite`] chains profiles first-match-wins over an ordered list
//! with a mandatory bulk fallback, making evaluation total: callers order
//! the most specific profiles (driven region, absorbing edges) before the
//! most general, and overlaps resolve by list position, never by a
//! geometric tie-break.
//!
//! All parameter validation happens at construction time
//! ([`ProfileError`]); `evaluate` never fails.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod error;
pub mod scalar;
pub mod shape;
pub mod vector;

pub use composite::{Composite, CompositeScalar, CompositeVector, Profile};
pub use error::ProfileError;
pub use scalar::ScalarProfile;
pub use shape::{RampShape, DEFAULT_STEEPNESS};
pub use vector::{VectorProfile, VectorValue};
