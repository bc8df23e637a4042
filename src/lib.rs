//! quadplot - plots of a quadrotor's flown path.
//!
//! quadplot renders the path a quadrotor flew next to the path it was asked
//! to fly and the waypoints along the way, and saves the figure as a PNG in
//! the package's `output_data/` directory.
//!
//! # Figures
//!
//! - `one_plot_*.png`: a single 2D projection onto two chosen axes
//! - `isometric_plot_*.png`: a single 3D perspective
//! - `grid_plot_*.png`: x/y, 3D, x/z and y/z in a 2×2 grid
//!
//! The flown path is always a black line, the planned path red circles and
//! waypoints blue hexagons. Each figure carries one legend listing exactly
//! the series that were supplied.
//!
//! # Example
//!
//! ```ignore
//! use quadplot::{AxisPair, PathPlotter, Positions, ViewAngle};
//!
//! let flown = Positions::from_points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 0.0, 2.0]]);
//! let waypoints = Positions::from_points(&[[1.0, 1.0, 1.0]]);
//!
//! let plotter = PathPlotter::from_env();
//! let out = plotter.plot_path_grid(&flown, None, Some(&waypoints), ViewAngle::default())?;
//! println!("Wrote {}", out.display());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod figure;
pub mod output;
pub mod path;
pub mod plotter;
pub mod render;
pub mod style;

pub use config::RenderConfig;
pub use error::{QuadPlotError, Result};
pub use figure::{Figure, FigureKind, Legend, Panel};
pub use output::{FixedRoot, OutputLocation, PackageResolver, RosPackageResolver};
pub use path::{Axis, AxisPair, PathSet, PositionReader, Positions, ViewAngle};
pub use plotter::PathPlotter;
pub use render::{path_2d, path_3d};
pub use style::{PathStyle, SeriesKind};
