//! Figure layout.
//!
//! A [`Figure`] describes what one render call draws: its title, the panels
//! in row-major order, and the single legend. It holds no pixels, so the
//! layout rules can be checked without decoding an image.

mod legend;
mod series;

pub use legend::{Legend, LegendEntry};
pub use series::{projected_series, spatial_series, ProjectedSeries, SpatialSeries};

use crate::path::{Axis, AxisPair, PathSet, ViewAngle};

/// The three figures that can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    /// Single 2D projection.
    One,
    /// Single 3D perspective.
    Isometric,
    /// 2×2 grid of three projections and one perspective.
    Grid,
}

impl FigureKind {
    /// Prefix of the output file name.
    pub fn file_prefix(self) -> &'static str {
        match self {
            FigureKind::One => "one",
            FigureKind::Isometric => "isometric",
            FigureKind::Grid => "grid",
        }
    }

    /// Figure title.
    pub fn title(self) -> &'static str {
        match self {
            FigureKind::One | FigureKind::Isometric => "Quadrotor Path",
            FigureKind::Grid => "Quadrotor Path: multiple perspectives",
        }
    }

    /// Panel grid as `(rows, columns)`.
    pub fn layout(self) -> (usize, usize) {
        match self {
            FigureKind::One | FigureKind::Isometric => (1, 1),
            FigureKind::Grid => (2, 2),
        }
    }
}

/// One sub-plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel {
    /// 2D projection onto two axes.
    Projection(AxisPair),
    /// 3D perspective from a camera angle.
    Perspective(ViewAngle),
}

/// Everything a render call draws, minus the data.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Which figure this is.
    pub kind: FigureKind,
    /// Panels in row-major order.
    pub panels: Vec<Panel>,
    /// Figure-level legend.
    pub legend: Legend,
}

impl Figure {
    /// Single projection onto `axes`.
    pub fn one(paths: &PathSet<'_>, axes: AxisPair) -> Self {
        Self {
            kind: FigureKind::One,
            panels: vec![Panel::Projection(axes)],
            legend: Legend::for_paths(paths),
        }
    }

    /// Single perspective from `view`.
    pub fn isometric(paths: &PathSet<'_>, view: ViewAngle) -> Self {
        Self {
            kind: FigureKind::Isometric,
            panels: vec![Panel::Perspective(view)],
            legend: Legend::for_paths(paths),
        }
    }

    /// x/y, perspective, x/z, y/z.
    pub fn grid(paths: &PathSet<'_>, view: ViewAngle) -> Self {
        Self {
            kind: FigureKind::Grid,
            panels: vec![
                Panel::Projection(AxisPair::new(Axis::X, Axis::Y)),
                Panel::Perspective(view),
                Panel::Projection(AxisPair::new(Axis::X, Axis::Z)),
                Panel::Projection(AxisPair::new(Axis::Y, Axis::Z)),
            ],
            legend: Legend::for_paths(paths),
        }
    }

    /// Figure title.
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}
