//! 2D projection panel.

use super::{axis_range, Hexagon};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::figure::projected_series;
use crate::path::{AxisPair, PathSet};
use crate::style::{Mark, PathStyle};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;

/// Draw the supplied series projected onto `axes` into `area`.
///
/// The flown path is a continuous line, the planned path red circles and the
/// waypoints blue hexagons. The area gets a ggplot-style grey background with
/// white grid lines, and both axes are labelled with their coordinate letter.
///
/// Returns the number of series drawn.
pub fn path_2d<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    paths: &PathSet<'_>,
    axes: AxisPair,
    config: &RenderConfig,
    style: &PathStyle,
) -> Result<usize> {
    let x_range = axis_range(paths.bounds(axes.horizontal));
    let y_range = axis_range(paths.bounds(axes.vertical));
    let tick_px = config.font_px(config.tick_font_size_2d);
    let label_px = config.font_px(config.axis_label_font_size);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size((tick_px + label_px * 2.0) as u32)
        .y_label_area_size((tick_px * 4.0 + label_px * 2.0) as u32)
        .build_cartesian_2d(x_range, y_range)?;

    chart.plotting_area().fill(&config.background)?;
    chart
        .configure_mesh()
        .bold_line_style(config.grid.stroke_width(1))
        .light_line_style(config.grid.mix(0.4).stroke_width(1))
        .label_style(("sans-serif", tick_px).into_font())
        .x_desc(axes.horizontal.label())
        .y_desc(axes.vertical.label())
        .axis_desc_style(("sans-serif", label_px).into_font().style(FontStyle::Bold))
        .draw()?;

    let series = projected_series(paths, axes);
    for s in &series {
        let color = s.kind.color();
        match s.kind.mark() {
            Mark::Line => {
                chart.draw_series(LineSeries::new(
                    s.points.iter().copied(),
                    color.stroke_width(style.line_px(config.dpi)),
                ))?;
            }
            Mark::Circle => {
                let radius = style.marker_radius_px(s.kind, config.dpi);
                chart.draw_series(
                    s.points
                        .iter()
                        .map(|&p| Circle::new(p, radius, color.filled())),
                )?;
            }
            Mark::Hexagon => {
                let radius = style.marker_radius_px(s.kind, config.dpi);
                chart.draw_series(
                    s.points
                        .iter()
                        .map(|&p| Hexagon::new(p, radius, color.filled())),
                )?;
            }
        }
        tracing::debug!(
            "Drew {} ({} points) on {}/{} projection",
            s.kind.label(),
            s.points.len(),
            axes.horizontal,
            axes.vertical
        );
    }

    Ok(series.len())
}
