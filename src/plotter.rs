//! Plotting entry points.
//!
//! [`PathPlotter`] ties the pieces together: it validates the series, builds
//! the [`Figure`], resolves the output directory and writes the PNG.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::figure::Figure;
use crate::output::{timestamp_now, OutputLocation, PackageResolver, RosPackageResolver};
use crate::path::{AxisPair, PathSet, Positions, ViewAngle};
use crate::render;
use crate::style::PathStyle;
use std::path::PathBuf;

/// Renders path figures into the package's output directory.
#[derive(Debug, Clone)]
pub struct PathPlotter<R = RosPackageResolver> {
    resolver: R,
    config: RenderConfig,
    style: PathStyle,
}

impl PathPlotter<RosPackageResolver> {
    /// Plotter that finds the package through `ROS_PACKAGE_PATH`.
    pub fn from_env() -> Self {
        Self::with_resolver(RosPackageResolver::from_env())
    }
}

impl<R: PackageResolver> PathPlotter<R> {
    /// Plotter using `resolver` to find the package root.
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            config: RenderConfig::default(),
            style: PathStyle::default(),
        }
    }

    /// Replace the rendering configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace line width and marker sizes.
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Current rendering configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Write a single 2D projection of the paths onto `axes`.
    ///
    /// Returns the path of the written `one_plot_*.png`.
    pub fn plot_path_2d(
        &self,
        flown: &Positions,
        planned: Option<&Positions>,
        waypoints: Option<&Positions>,
        axes: AxisPair,
    ) -> Result<PathBuf> {
        let paths = PathSet::new(flown)
            .with_planned(planned)
            .with_waypoints(waypoints);
        paths.validate()?;
        self.write(&Figure::one(&paths, axes), &paths)
    }

    /// Write a single 3D perspective of the paths seen from `view`.
    ///
    /// Returns the path of the written `isometric_plot_*.png`.
    pub fn plot_path_3d(
        &self,
        flown: &Positions,
        planned: Option<&Positions>,
        waypoints: Option<&Positions>,
        view: ViewAngle,
    ) -> Result<PathBuf> {
        let paths = PathSet::new(flown)
            .with_planned(planned)
            .with_waypoints(waypoints);
        paths.validate()?;
        self.write(&Figure::isometric(&paths, view), &paths)
    }

    /// Write a 2×2 grid: x/y, 3D from `view`, x/z and y/z.
    ///
    /// Returns the path of the written `grid_plot_*.png`.
    pub fn plot_path_grid(
        &self,
        flown: &Positions,
        planned: Option<&Positions>,
        waypoints: Option<&Positions>,
        view: ViewAngle,
    ) -> Result<PathBuf> {
        let paths = PathSet::new(flown)
            .with_planned(planned)
            .with_waypoints(waypoints);
        paths.validate()?;
        self.write(&Figure::grid(&paths, view), &paths)
    }

    fn write(&self, figure: &Figure, paths: &PathSet<'_>) -> Result<PathBuf> {
        let location = OutputLocation::resolve(
            &self.resolver,
            &self.config.package,
            &self.config.output_subdir,
        )?;
        location.ensure_exists()?;

        // Same-tick calls share a name and the later one overwrites.
        let out = location.file_for(figure.kind, &timestamp_now());
        render::render_png(figure, paths, &self.config, &self.style, &out)?;

        tracing::info!(
            "Wrote {} panel(s) with {} legend entries to {}",
            figure.panels.len(),
            figure.legend.len(),
            out.display()
        );
        Ok(out)
    }
}
