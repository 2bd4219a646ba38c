//! Axis and face selectors for region operations.

use std::fmt;

/// A Cartesian axis of the simulation domain.
///
/// Every region operation that slices, scales, or subdivides works along
/// exactly one axis; the other two are left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first dimension (index 0).
    X,
    /// The second dimension (index 1).
    Y,
    /// The third dimension (index 2).
    Z,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis into a [`Point3`](crate::Point3) or
    /// [`CellSize`](crate::CellSize).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase label, as used in dimension-label arrays (`"x"`, `"y"`, `"z"`).
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Parse an axis from its label. Accepts upper- or lowercase.
    pub fn from_label(label: &str) -> Option<Axis> {
        match label {
            "x" | "X" => Some(Axis::X),
            "y" | "Y" => Some(Axis::Y),
            "z" | "Z" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which face of a region an operation anchors to along its axis.
///
/// `Positive` is the `pmax` face, `Negative` the `pmin` face. The face
/// names follow the toggle the assembly UI exposes (`+ve` / `-ve`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// The `pmin` face of the region along the chosen axis.
    Negative,
    /// The `pmax` face of the region along the chosen axis.
    Positive,
}
