//! 3D perspective panel.

use super::{axis_range, Hexagon};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::figure::spatial_series;
use crate::path::{Axis, PathSet, ViewAngle};
use crate::style::{Mark, PathStyle};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;

/// Draw the supplied series in 3D into `area`, seen from `view`.
///
/// Data z is the chart's vertical axis, so points go in as `(x, z, y)`.
///
/// Returns the number of series drawn.
pub fn path_3d<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    paths: &PathSet<'_>,
    view: ViewAngle,
    config: &RenderConfig,
    style: &PathStyle,
) -> Result<usize> {
    let x_range = axis_range(paths.bounds(Axis::X));
    let y_range = axis_range(paths.bounds(Axis::Y));
    let z_range = axis_range(paths.bounds(Axis::Z));
    let tick_px = config.font_px(config.tick_font_size_3d);
    let label_px = config.font_px(config.axis_label_font_size);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_3d(x_range.clone(), z_range.clone(), y_range.clone())?;

    chart.with_projection(|mut pb| {
        pb.yaw = view.azimuth.to_radians();
        pb.pitch = view.elevation.to_radians();
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .axis_panel_style(config.background.filled())
        .bold_grid_style(config.grid.stroke_width(1))
        .light_grid_style(config.grid.mix(0.4).stroke_width(1))
        .label_style(("sans-serif", tick_px).into_font())
        .max_light_lines(3)
        .draw()?;

    let label_style = ("sans-serif", label_px)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK);
    chart.draw_series([
        Text::new(
            Axis::X.label(),
            (x_range.end, z_range.start, y_range.start),
            label_style.clone(),
        ),
        Text::new(
            Axis::Y.label(),
            (x_range.start, z_range.start, y_range.end),
            label_style.clone(),
        ),
        Text::new(
            Axis::Z.label(),
            (x_range.start, z_range.end, y_range.start),
            label_style,
        ),
    ])?;

    let series = spatial_series(paths);
    for s in &series {
        let color = s.kind.color();
        let points = s.points.iter().map(|&(x, y, z)| (x, z, y));
        match s.kind.mark() {
            Mark::Line => {
                chart.draw_series(LineSeries::new(
                    points,
                    color.stroke_width(style.line_px(config.dpi)),
                ))?;
            }
            Mark::Circle => {
                let radius = style.marker_radius_px(s.kind, config.dpi);
                chart.draw_series(points.map(|p| Circle::new(p, radius, color.filled())))?;
            }
            Mark::Hexagon => {
                let radius = style.marker_radius_px(s.kind, config.dpi);
                chart.draw_series(points.map(|p| Hexagon::new(p, radius, color.filled())))?;
            }
        }
        tracing::debug!(
            "Drew {} ({} points) in 3D at azimuth {} elevation {}",
            s.kind.label(),
            s.points.len(),
            view.azimuth,
            view.elevation
        );
    }

    Ok(series.len())
}
