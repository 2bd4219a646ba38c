//! Core types and invariant checks for the magdom geometry engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the magdom workspace:
//! positions and cell sizes, axis/face selectors, coordinate rounding,
//! the discretisation validator, and the shared error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod point;
pub mod validate;

pub use axis::{Axis, Face};
pub use error::{DiscretisationError, GeometryError};
pub use point::{round_coord, round_point, round_to, CellSize, Point3, COORD_DECIMALS};
pub use validate::{check_divisible, check_ordered, DEFAULT_DIVISIBILITY_TOL};
