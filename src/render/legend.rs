//! Figure-level legend.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::figure::Legend;
use plotters::coord::Shift;
use plotters::prelude::*;

const EDGE_MARGIN: i32 = 12;

/// Draw `legend` in the upper-right corner of `root`, one row per entry,
/// each a colored patch followed by its label. No frame is drawn.
pub fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    legend: &Legend,
    config: &RenderConfig,
) -> Result<()> {
    let font_px = config.font_px(config.legend_font_size);
    let text_style = ("sans-serif", font_px).into_font().color(&BLACK);

    let mut text_width = 0u32;
    for entry in legend.entries() {
        let (w, _) = root.estimate_text_size(entry.label(), &text_style)?;
        text_width = text_width.max(w);
    }

    let patch_w = (font_px * 1.6).round() as i32;
    let patch_h = (font_px * 0.8).round() as i32;
    let gap = (font_px * 0.6).round() as i32;
    let row_h = legend_row_height(config);

    let (width, _) = root.dim_in_pixel();
    let left = width as i32 - EDGE_MARGIN - text_width as i32 - gap - patch_w;

    for (row, entry) in legend.entries().iter().enumerate() {
        let top = EDGE_MARGIN + row as i32 * row_h;
        root.draw(&Rectangle::new(
            [(left, top), (left + patch_w, top + patch_h)],
            entry.color().filled(),
        ))?;
        root.draw(&Text::new(
            entry.label(),
            (left + patch_w + gap, top - (font_px * 0.15) as i32),
            text_style.clone(),
        ))?;
    }

    Ok(())
}

/// Height of one legend row in pixels.
pub(crate) fn legend_row_height(config: &RenderConfig) -> i32 {
    (config.font_px(config.legend_font_size) * 1.5).round() as i32
}

/// Vertical space the legend needs below the top edge.
pub(crate) fn legend_height(legend: &Legend, config: &RenderConfig) -> i32 {
    EDGE_MARGIN + legend.len() as i32 * legend_row_height(config)
}
