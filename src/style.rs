//! Per-series styling.
//!
//! Colors and marker shapes are fixed per series so that every renderer
//! draws a series the same way. Only sizes can be tuned through [`PathStyle`].

use plotters::style::RGBColor;
use plotters::style::colors::{BLACK, BLUE, RED};

/// The three kinds of series a figure can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Path the quadrotor actually flew.
    Flown,
    /// Path the trajectory generator planned.
    Planned,
    /// Checkpoints along the flight.
    Waypoints,
}

/// How a series is marked on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Continuous line through all positions.
    Line,
    /// Filled circle at every position.
    Circle,
    /// Filled flat-topped hexagon at every position.
    Hexagon,
}

impl SeriesKind {
    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Flown => "quadrotor path",
            SeriesKind::Planned => "planned path",
            SeriesKind::Waypoints => "waypoints",
        }
    }

    /// Series color, also used for the legend patch.
    pub fn color(self) -> RGBColor {
        match self {
            SeriesKind::Flown => BLACK,
            SeriesKind::Planned => RED,
            SeriesKind::Waypoints => BLUE,
        }
    }

    /// Mark used for the series.
    pub fn mark(self) -> Mark {
        match self {
            SeriesKind::Flown => Mark::Line,
            SeriesKind::Planned => Mark::Circle,
            SeriesKind::Waypoints => Mark::Hexagon,
        }
    }
}

/// Line width and marker sizes, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    /// Width of the flown path line.
    pub line_width: f64,
    /// Diameter of planned path markers.
    pub planned_marker_size: f64,
    /// Diameter of waypoint markers.
    pub waypoint_marker_size: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            planned_marker_size: 3.5,
            waypoint_marker_size: 6.0,
        }
    }
}

impl PathStyle {
    /// Stroke width of the flown path in pixels at `dpi`.
    pub fn line_px(&self, dpi: f64) -> u32 {
        points_to_px(self.line_width, dpi).round().max(1.0) as u32
    }

    /// Marker radius in pixels for a series at `dpi`.
    pub fn marker_radius_px(&self, kind: SeriesKind, dpi: f64) -> u32 {
        let size = match kind {
            SeriesKind::Planned => self.planned_marker_size,
            SeriesKind::Waypoints => self.waypoint_marker_size,
            SeriesKind::Flown => self.line_width,
        };
        (points_to_px(size, dpi) / 2.0).round().max(1.0) as u32
    }
}

/// Convert a size in typographic points to pixels.
pub fn points_to_px(points: f64, dpi: f64) -> f64 {
    points * dpi / 72.0
}
