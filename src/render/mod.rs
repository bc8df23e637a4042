//! Drawing figures with plotters.
//!
//! [`path_2d`] and [`path_3d`] draw one panel onto any drawing area and are
//! the building blocks for custom layouts. [`draw_figure`] composes a whole
//! [`Figure`] and [`render_png`] writes it to disk.

mod chart2d;
mod chart3d;
mod legend;
mod marker;

pub use chart2d::path_2d;
pub use chart3d::path_3d;
pub use legend::draw_legend;
pub use marker::Hexagon;

use crate::config::RenderConfig;
use crate::error::{QuadPlotError, Result};
use crate::figure::{Figure, Panel};
use crate::path::PathSet;
use crate::style::PathStyle;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use std::fs;
use std::io::ErrorKind;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Padding added on each side of a panel's data span, as a fraction of it.
const RANGE_PADDING: f64 = 0.05;

/// Largest magnitude an axis end may have. Keeps the padded width finite.
const RANGE_LIMIT: f64 = f64::MAX / 4.0;

/// Axis range covering `bounds` with a little padding.
///
/// A zero-width span is widened to one unit so a single point still gets a
/// usable axis. Ends are clamped to `±f64::MAX / 4` so the width never
/// overflows; positions beyond that are clipped.
pub fn axis_range(bounds: Option<(f64, f64)>) -> Range<f64> {
    match bounds {
        None => -0.5..0.5,
        Some((lo, hi)) => {
            let lo = lo.clamp(-RANGE_LIMIT, RANGE_LIMIT);
            let hi = hi.clamp(-RANGE_LIMIT, RANGE_LIMIT);
            let span = hi - lo;
            if span.abs() < 1e-9 {
                (lo - 0.5)..(hi + 0.5)
            } else {
                let pad = span * RANGE_PADDING;
                (lo - pad)..(hi + pad)
            }
        }
    }
}

/// Draw `figure` onto `root`: title, panels, then the shared legend.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    paths: &PathSet<'_>,
    config: &RenderConfig,
    style: &PathStyle,
) -> Result<()> {
    paths.validate()?;

    root.fill(&WHITE)?;
    let title_style = ("sans-serif", config.font_px(config.title_font_size))
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK);
    let body = root
        .titled(figure.title(), title_style)?
        .margin(legend::legend_height(&figure.legend, config), 0, 0, 0);

    let panels = body.split_evenly(figure.kind.layout());
    for (panel, area) in figure.panels.iter().zip(panels.iter()) {
        match *panel {
            Panel::Projection(axes) => path_2d(area, paths, axes, config, style)?,
            Panel::Perspective(view) => path_3d(area, paths, view, config, style)?,
        };
    }

    draw_legend(root, &figure.legend, config)?;
    Ok(())
}

/// Render `figure` and write it as a PNG to `out`.
///
/// The image is drawn into a hidden sibling file and renamed into place, so
/// `out` only ever appears complete. On failure nothing is left behind.
pub fn render_png(
    figure: &Figure,
    paths: &PathSet<'_>,
    config: &RenderConfig,
    style: &PathStyle,
    out: &Path,
) -> Result<()> {
    let staging = staging_path(out);
    let drawn = {
        // The backend writes its buffer when dropped, even after an error.
        let root =
            BitMapBackend::new(&staging, (config.width, config.height)).into_drawing_area();
        let result = draw_figure(&root, figure, paths, config, style)
            .and_then(|()| root.present().map_err(QuadPlotError::from));
        result
    };

    match drawn.and_then(|()| fs::rename(&staging, out).map_err(QuadPlotError::from)) {
        Ok(()) => Ok(()),
        Err(e) => {
            discard(&staging);
            Err(e)
        }
    }
}

/// `<dir>/.<stem>.partial.png` next to `out`.
fn staging_path(out: &Path) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    out.with_file_name(format!(".{}.partial.png", stem))
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != ErrorKind::NotFound {
            tracing::warn!("Could not remove {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{AxisPair, Positions, ViewAngle};

    const W: u32 = 480;
    const H: u32 = 320;

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: W,
            height: H,
            ..RenderConfig::default()
        }
    }

    fn draw_to_buffer(figure: &Figure, paths: &PathSet<'_>) -> Vec<u8> {
        let mut buffer = vec![0u8; (W * H * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (W, H)).into_drawing_area();
            draw_figure(&root, figure, paths, &small_config(), &PathStyle::default()).unwrap();
            root.present().unwrap();
        }
        buffer
    }

    fn count_color(buffer: &[u8], rgb: (u8, u8, u8)) -> usize {
        buffer
            .chunks_exact(3)
            .filter(|p| (p[0], p[1], p[2]) == rgb)
            .count()
    }

    fn flown() -> Positions {
        Positions::from_points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 0.0, 2.0]])
    }

    #[test]
    fn axis_range_pads_span() {
        let r = axis_range(Some((0.0, 10.0)));
        assert!((r.start + 0.5).abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn axis_range_widens_single_value() {
        assert_eq!(axis_range(Some((2.0, 2.0))), 1.5..2.5);
        assert_eq!(axis_range(None), -0.5..0.5);
    }

    #[test]
    fn flown_path_only_draws_no_markers() {
        let flown = flown();
        let paths = PathSet::new(&flown);
        let buffer = draw_to_buffer(&Figure::one(&paths, AxisPair::default()), &paths);
        assert!(count_color(&buffer, (0, 0, 0)) > 0);
        assert_eq!(count_color(&buffer, (255, 0, 0)), 0);
        assert_eq!(count_color(&buffer, (0, 0, 255)), 0);
    }

    #[test]
    fn waypoints_drawn_in_blue() {
        let flown = flown();
        let waypoints = Positions::from_points(&[[1.0, 1.0, 1.0]]);
        let paths = PathSet::new(&flown).with_waypoints(Some(&waypoints));
        let buffer = draw_to_buffer(&Figure::isometric(&paths, ViewAngle::default()), &paths);
        assert!(count_color(&buffer, (0, 0, 255)) > 0);
        assert_eq!(count_color(&buffer, (255, 0, 0)), 0);
    }

    #[test]
    fn grid_draws_every_series() {
        let flown = flown();
        let planned = Positions::from_points(&[[0.0, 0.0, 0.0], [2.0, 0.0, 2.0]]);
        let waypoints = Positions::from_points(&[[1.0, 1.0, 1.0]]);
        let paths = PathSet::new(&flown)
            .with_planned(Some(&planned))
            .with_waypoints(Some(&waypoints));
        let buffer = draw_to_buffer(&Figure::grid(&paths, ViewAngle::default()), &paths);
        assert!(count_color(&buffer, (255, 0, 0)) > 0);
        assert!(count_color(&buffer, (0, 0, 255)) > 0);
    }

    #[test]
    fn empty_flown_path_fails_before_drawing() {
        let empty = Positions::from_points(&[]);
        let paths = PathSet::new(&empty);
        let mut buffer = vec![0u8; (W * H * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buffer, (W, H)).into_drawing_area();
        let result = draw_figure(
            &root,
            &Figure::one(&paths, AxisPair::default()),
            &paths,
            &small_config(),
            &PathStyle::default(),
        );
        assert!(matches!(result, Err(crate::QuadPlotError::EmptyPath)));
    }

    #[test]
    fn writes_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("figure.png");
        let flown = flown();
        let paths = PathSet::new(&flown);
        render_png(
            &Figure::grid(&paths, ViewAngle::default()),
            &paths,
            &small_config(),
            &PathStyle::default(),
            &out,
        )
        .unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_render_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("figure.png");
        let empty = Positions::from_points(&[]);
        let paths = PathSet::new(&empty);
        let result = render_png(
            &Figure::one(&paths, AxisPair::default()),
            &paths,
            &small_config(),
            &PathStyle::default(),
            &out,
        );
        assert!(matches!(result, Err(QuadPlotError::EmptyPath)));
        assert!(!out.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn axis_range_stays_finite_for_extreme_values() {
        let r = axis_range(Some((-1e308, 1e308)));
        assert!(r.start.is_finite() && r.end.is_finite());
        assert!((r.end - r.start).is_finite());
        assert!(r.start < r.end);

        let r = axis_range(Some((f64::MAX, f64::MAX)));
        assert!(r.start.is_finite() && r.end.is_finite() && r.start < r.end);
    }

    #[test]
    fn extreme_coordinates_render() {
        let flown = Positions::from_points(&[[-1e308, 0.0, 0.0], [1e308, 1.0, 1.0]]);
        let paths = PathSet::new(&flown);
        let buffer = draw_to_buffer(&Figure::grid(&paths, ViewAngle::default()), &paths);
        assert!(count_color(&buffer, (0, 0, 0)) > 0);
    }

    #[test]
    fn view_angle_changes_perspective() {
        let flown = flown();
        let waypoints = Positions::from_points(&[[1.0, 1.0, 1.0]]);
        let paths = PathSet::new(&flown).with_waypoints(Some(&waypoints));
        let default_view =
            draw_to_buffer(&Figure::isometric(&paths, ViewAngle::default()), &paths);
        let low_view =
            draw_to_buffer(&Figure::isometric(&paths, ViewAngle::new(30.0, 10.0)), &paths);
        assert_ne!(default_view, low_view);

        let same_again =
            draw_to_buffer(&Figure::isometric(&paths, ViewAngle::default()), &paths);
        assert_eq!(default_view, same_again);
    }
}
