//! Position sequences.

use super::{Axis, AxisPair};
use crate::error::{QuadPlotError, Result};
use ndarray::{Array2, ArrayView1, Axis as ArrayAxis};

/// An ordered sequence of `(x, y, z)` positions.
///
/// Backed by an `N×3` array; one row per position.
#[derive(Debug, Clone, PartialEq)]
pub struct Positions {
    data: Array2<f64>,
}

impl Positions {
    /// Wrap an existing `N×3` array.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.ncols() != 3 {
            return Err(QuadPlotError::shape(format!(
                "expected 3 columns (x, y, z), got {}",
                data.ncols()
            )));
        }
        Ok(Self { data })
    }

    /// Build a sequence from `[x, y, z]` rows.
    pub fn from_points(points: &[[f64; 3]]) -> Self {
        let data = Array2::from_shape_fn((points.len(), 3), |(row, col)| points[row][col]);
        Self { data }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// True if the sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Underlying `N×3` array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// One coordinate column.
    pub fn column(&self, axis: Axis) -> ArrayView1<'_, f64> {
        self.data.column(axis.column())
    }

    /// Project every position onto the two axes of `axes`.
    pub fn project(&self, axes: AxisPair) -> Vec<(f64, f64)> {
        self.column(axes.horizontal)
            .iter()
            .zip(self.column(axes.vertical).iter())
            .map(|(&h, &v)| (h, v))
            .collect()
    }

    /// All positions as `(x, y, z)` tuples.
    pub fn points(&self) -> Vec<(f64, f64, f64)> {
        self.data
            .axis_iter(ArrayAxis(0))
            .map(|row| (row[0], row[1], row[2]))
            .collect()
    }

    /// Smallest and largest finite value along `axis`.
    pub fn bounds(&self, axis: Axis) -> Option<(f64, f64)> {
        self.column(axis)
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl From<Vec<[f64; 3]>> for Positions {
    fn from(points: Vec<[f64; 3]>) -> Self {
        Self::from_points(&points)
    }
}

impl FromIterator<(f64, f64, f64)> for Positions {
    fn from_iter<I: IntoIterator<Item = (f64, f64, f64)>>(iter: I) -> Self {
        let points: Vec<[f64; 3]> = iter.into_iter().map(|(x, y, z)| [x, y, z]).collect();
        Self::from_points(&points)
    }
}
