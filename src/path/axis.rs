//! Axis selection and camera orientation.

use crate::error::{QuadPlotError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the three spatial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First coordinate.
    X,
    /// Second coordinate.
    Y,
    /// Third coordinate (altitude).
    Z,
}

impl Axis {
    /// All axes in column order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Column index of this axis in a position row.
    pub fn column(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Upper-case label drawn next to the axis.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl FromStr for Axis {
    type Err = QuadPlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(QuadPlotError::unknown_axis(other)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Horizontal and vertical axis of a 2D projection.
///
/// Both axes may be the same; the projection is then a degenerate diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPair {
    /// Axis drawn left to right.
    pub horizontal: Axis,
    /// Axis drawn bottom to top.
    pub vertical: Axis,
}

impl AxisPair {
    /// Create an axis pair.
    pub fn new(horizontal: Axis, vertical: Axis) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Parse an axis pair from two axis names such as `"x"` and `"z"`.
    pub fn parse(horizontal: &str, vertical: &str) -> Result<Self> {
        Ok(Self::new(horizontal.parse()?, vertical.parse()?))
    }

    /// The same pair with horizontal and vertical exchanged.
    pub fn swapped(self) -> Self {
        Self::new(self.vertical, self.horizontal)
    }
}

impl Default for AxisPair {
    fn default() -> Self {
        Self::new(Axis::X, Axis::Y)
    }
}

/// Initial camera orientation of a 3D plot, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngle {
    /// Rotation around the vertical axis.
    pub azimuth: f64,
    /// Angle above the horizontal plane.
    pub elevation: f64,
}

impl ViewAngle {
    /// Default azimuth in degrees.
    pub const DEFAULT_AZIMUTH: f64 = 210.0;
    /// Default elevation in degrees.
    pub const DEFAULT_ELEVATION: f64 = 45.0;

    /// Create a view angle.
    pub fn new(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }
}

impl Default for ViewAngle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AZIMUTH, Self::DEFAULT_ELEVATION)
    }
}
