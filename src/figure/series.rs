//! Series as they are handed to the drawing primitives.

use crate::path::{AxisPair, PathSet};
use crate::style::SeriesKind;

/// A series projected onto two axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSeries {
    /// Which series this is.
    pub kind: SeriesKind,
    /// `(horizontal, vertical)` coordinates in path order.
    pub points: Vec<(f64, f64)>,
}

/// A series in full 3D.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSeries {
    /// Which series this is.
    pub kind: SeriesKind,
    /// `(x, y, z)` coordinates in path order.
    pub points: Vec<(f64, f64, f64)>,
}

/// Projected series in 2D drawing order: planned, flown, waypoints.
pub fn projected_series(paths: &PathSet<'_>, axes: AxisPair) -> Vec<ProjectedSeries> {
    let mut series = Vec::with_capacity(3);
    if let Some(planned) = paths.planned {
        series.push(ProjectedSeries {
            kind: SeriesKind::Planned,
            points: planned.project(axes),
        });
    }
    series.push(ProjectedSeries {
        kind: SeriesKind::Flown,
        points: paths.flown.project(axes),
    });
    if let Some(waypoints) = paths.waypoints {
        series.push(ProjectedSeries {
            kind: SeriesKind::Waypoints,
            points: waypoints.project(axes),
        });
    }
    series
}

/// Spatial series in 3D drawing order: planned, waypoints, flown.
pub fn spatial_series(paths: &PathSet<'_>) -> Vec<SpatialSeries> {
    let mut series = Vec::with_capacity(3);
    if let Some(planned) = paths.planned {
        series.push(SpatialSeries {
            kind: SeriesKind::Planned,
            points: planned.points(),
        });
    }
    if let Some(waypoints) = paths.waypoints {
        series.push(SpatialSeries {
            kind: SeriesKind::Waypoints,
            points: waypoints.points(),
        });
    }
    series.push(SpatialSeries {
        kind: SeriesKind::Flown,
        points: paths.flown.points(),
    });
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Axis, Positions};
    use crate::style::Mark;

    #[test]
    fn flown_path_projected_onto_xy() {
        let flown = Positions::from_points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 0.0, 2.0]]);
        let series = projected_series(&PathSet::new(&flown), AxisPair::default());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].kind, SeriesKind::Flown);
        assert_eq!(series[0].points, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
    }

    #[test]
    fn waypoint_drawn_as_single_hexagon() {
        let flown = Positions::from_points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 0.0, 2.0]]);
        let waypoints = Positions::from_points(&[[1.0, 1.0, 1.0]]);
        let paths = PathSet::new(&flown).with_waypoints(Some(&waypoints));

        let flat = projected_series(&paths, AxisPair::new(Axis::X, Axis::Z));
        let last = flat.last().unwrap();
        assert_eq!(last.kind.mark(), Mark::Hexagon);
        assert_eq!(last.points, vec![(1.0, 1.0)]);

        let spatial = spatial_series(&paths);
        let hexagons: Vec<_> = spatial
            .iter()
            .filter(|s| s.kind.mark() == Mark::Hexagon)
            .collect();
        assert_eq!(hexagons.len(), 1);
        assert_eq!(hexagons[0].points, vec![(1.0, 1.0, 1.0)]);
    }

    #[test]
    fn drawing_order() {
        let flown = Positions::from_points(&[[0.0, 0.0, 0.0]]);
        let paths = PathSet::new(&flown)
            .with_planned(Some(&flown))
            .with_waypoints(Some(&flown));
        let flat: Vec<_> = projected_series(&paths, AxisPair::default())
            .into_iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            flat,
            vec![SeriesKind::Planned, SeriesKind::Flown, SeriesKind::Waypoints]
        );
        let spatial: Vec<_> = spatial_series(&paths).into_iter().map(|s| s.kind).collect();
        assert_eq!(
            spatial,
            vec![SeriesKind::Planned, SeriesKind::Waypoints, SeriesKind::Flown]
        );
    }
}
