//! Error types for region-algebra operations.

use magdom_core::{DiscretisationError, GeometryError};
use std::error::Error;
use std::fmt;

/// Errors from region-algebra operations.
///
/// Wraps the shared core checks so that an operation like [`subdivide`]
/// (which can fail geometrically, on discretisation, or on its partition
/// input) has a single error channel, with [`Error::source`] chaining to
/// the underlying check where one exists.
///
/// [`subdivide`]: crate::subdivide()
#[derive(Clone, Debug, PartialEq)]
pub enum RegionError {
    /// A produced corner pair failed the strict ordering check.
    Geometry(GeometryError),
    /// A named subdivision piece failed the divisibility check.
    ///
    /// The whole subdivision aborts with no pieces committed.
    Piece {
        /// Name the failing piece would have had.
        name: String,
        /// The underlying divisibility failure.
        source: DiscretisationError,
    },
    /// A partition specification is unusable for the given region.
    InvalidPartition {
        /// What went wrong.
        reason: String,
    },
    /// An operation needed the reserved `"main"` region, and the container
    /// has none.
    MissingMain,
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry check failed: {e}"),
            Self::Piece { name, source } => {
                write!(f, "piece '{name}' not discretisable: {source}")
            }
            Self::InvalidPartition { reason } => write!(f, "invalid partition: {reason}"),
            Self::MissingMain => write!(f, "container has no main region"),
        }
    }
}

impl Error for RegionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::Piece { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<GeometryError> for RegionError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
