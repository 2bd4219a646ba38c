//! magdom: the geometry and spatial-profile engine behind interactive
//! micromagnetic domain assembly.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the magdom sub-crates. For most users, adding `magdom` as a single
//! dependency is sufficient.
//!
//! The engine does two things:
//!
//! 1. **Region algebra** — derive new axis-aligned domain regions from
//!    existing ones (extrude a slab off a face, subdivide into a graded
//!    chain, merge named containers) while enforcing that every boundary
//!    lands on a discretisation cell boundary.
//! 2. **Spatial profiles** — answer "what is the damping / drive-field
//!    value at this cell" through ordered first-match-wins chains of
//!    profile shapes with a mandatory bulk fallback.
//!
//! It owns no UI, no persistence, and no solver: callers hand it plain
//! numeric inputs and consume plain geometric/numeric outputs.
//!
//! # Quick start
//!
//! ```rust
//! use magdom::prelude::*;
//!
//! let cell = [2e-9, 1e-9, 12e-9];
//!
//! // A 100 nm film with a centred driven strip.
//! let film = Region::si([0.0, 0.0, 0.0], [100e-9, 10e-9, 12e-9]).unwrap();
//! let driven = Region::si([40e-9, 0.0, 0.0], [60e-9, 10e-9, 12e-9]).unwrap();
//! let mut session = RegionMap::with_main(film.clone());
//! session.set_cell(cell);
//! session.insert("driven", driven.clone());
//!
//! // Append a 10-cell lead past the +x face.
//! let lead = extrude(&film, Axis::X, Face::Positive, ScaleAmount::Cells(10.0), cell).unwrap();
//! session.insert("lead", lead);
//!
//! // Damping: driven value first, absorbing edges second, bulk otherwise.
//! let alpha = CompositeScalar::with_profiles(
//!     [
//!         ScalarProfile::region_gated(driven, 0.5),
//!         ScalarProfile::absorbing_ramp(
//!             film,
//!             Axis::X,
//!             20e-9,
//!             0.008,
//!             RampShape::Exponential,
//!             false,
//!         )
//!         .unwrap(),
//!     ],
//!     0.008,
//! );
//! assert_eq!(alpha.evaluate([50e-9, 5e-9, 6e-9]), 0.5);
//! assert_eq!(alpha.evaluate([30e-9, 5e-9, 6e-9]), 0.008);
//! // Damping climbs toward 1.0 inside the absorbing edge.
//! assert!(alpha.evaluate([1e-9, 5e-9, 6e-9]) > 0.008);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `magdom-core` | Points, axes, rounding, validators, core errors |
//! | [`region`] | `magdom-region` | `Region`, extrusion, subdivision, containers, coupling |
//! | [`profile`] | `magdom-profile` | Profile variants and composite evaluation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, rounding, and invariant checks (`magdom-core`).
///
/// Contains [`types::Point3`], [`types::CellSize`], [`types::Axis`],
/// [`types::Face`], the discretisation validator, and the shared error
/// types.
pub use magdom_core as types;

/// Region algebra and named containers (`magdom-region`).
///
/// Provides [`region::Region`], [`region::extrude()`],
/// [`region::subdivide()`], [`region::RegionMap`], and
/// [`region::build_coupling_table`].
pub use magdom_region as region;

/// Spatial parameter profiles and composition (`magdom-profile`).
///
/// Provides [`profile::ScalarProfile`], [`profile::VectorProfile`], and
/// the generic [`profile::Composite`] evaluator.
pub use magdom_profile as profile;

/// Common imports for typical magdom usage.
///
/// ```rust
/// use magdom::prelude::*;
/// ```
pub mod prelude {
    // Core types and checks
    pub use magdom_core::{
        check_divisible, check_ordered, Axis, CellSize, DiscretisationError, Face, GeometryError,
        Point3,
    };

    // Region algebra
    pub use magdom_region::{
        build_coupling_table, extrude, subdivide, Partition, Region, RegionError, RegionMap,
        ScaleAmount, SubdivideOptions, Subdivision,
    };

    // Profiles
    pub use magdom_profile::{
        Composite, CompositeScalar, CompositeVector, Profile, ProfileError, RampShape,
        ScalarProfile, VectorProfile,
    };
}
