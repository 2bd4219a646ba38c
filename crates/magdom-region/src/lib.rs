//! Region algebra for magdom: derive, subdivide, and merge the axis-aligned
//! regions that make up a discretised simulation domain.
//!
//! The [`Region`] value type is immutable; every operation returns a new
//! region and re-runs the shared ordering/discretisation checks from
//! `magdom-core` whenever corner coordinates come out of arithmetic.
//!
//! # Operations
//!
//! - [`extrude()`]: carve a one-cell slab off a face and scale it into a
//!   new appended region
//! - [`subdivide()`]: partition a region along an axis with linearly
//!   interpolated per-piece values
//! - [`RegionMap`]: insertion-ordered named container with a reserved
//!   `"main"` domain key, duplicate-collecting [`RegionMap::merge`]
//! - [`build_coupling_table`]: nearest-neighbour coupling synthesis for
//!   chain-model energy terms

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod container;
pub mod coupling;
pub mod error;
pub mod extrude;
pub mod region;
pub mod subdivide;

pub use container::{DuplicateName, RegionMap, MAIN_KEY};
pub use coupling::{build_coupling_table, CHAIN_BOUNDARY_KEY};
pub use error::RegionError;
pub use extrude::{extrude, ScaleAmount};
pub use region::Region;
pub use subdivide::{subdivide, Partition, SubdivideOptions, Subdivision};
