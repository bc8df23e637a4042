//! Path data.
//!
//! This module holds the position sequences a render call consumes,
//! the axis selection for 2D projections, and the 3D camera angle.

mod axis;
mod positions;
mod reader;

pub use axis::{Axis, AxisPair, ViewAngle};
pub use positions::Positions;
pub use reader::PositionReader;

use crate::error::{QuadPlotError, Result};

/// The series passed to one render call.
///
/// The flown path is required; the planned path and waypoints are optional.
#[derive(Debug, Clone, Copy)]
pub struct PathSet<'a> {
    /// Positions the quadrotor actually occupied.
    pub flown: &'a Positions,
    /// Target positions from the trajectory generator.
    pub planned: Option<&'a Positions>,
    /// Checkpoints the flight should pass.
    pub waypoints: Option<&'a Positions>,
}

impl<'a> PathSet<'a> {
    /// A set holding only the flown path.
    pub fn new(flown: &'a Positions) -> Self {
        Self {
            flown,
            planned: None,
            waypoints: None,
        }
    }

    /// Attach a planned path.
    pub fn with_planned(mut self, planned: Option<&'a Positions>) -> Self {
        self.planned = planned;
        self
    }

    /// Attach waypoints.
    pub fn with_waypoints(mut self, waypoints: Option<&'a Positions>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Check that there is something to draw.
    pub fn validate(&self) -> Result<()> {
        if self.flown.is_empty() {
            return Err(QuadPlotError::EmptyPath);
        }
        Ok(())
    }

    /// Smallest and largest value along `axis` over every supplied series.
    pub fn bounds(&self, axis: Axis) -> Option<(f64, f64)> {
        [Some(self.flown), self.planned, self.waypoints]
            .into_iter()
            .flatten()
            .filter_map(|series| series.bounds(axis))
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_flown_path_is_rejected() {
        let empty = Positions::from_points(&[]);
        assert!(matches!(
            PathSet::new(&empty).validate(),
            Err(QuadPlotError::EmptyPath)
        ));
    }

    #[test]
    fn bounds_span_all_supplied_series() {
        let flown = Positions::from_points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        let waypoints = Positions::from_points(&[[5.0, -3.0, 0.5]]);
        let paths = PathSet::new(&flown).with_waypoints(Some(&waypoints));
        assert_eq!(paths.bounds(Axis::X), Some((0.0, 5.0)));
        assert_eq!(paths.bounds(Axis::Y), Some((-3.0, 1.0)));
        assert_eq!(paths.bounds(Axis::Z), Some((0.0, 1.0)));
    }
}
