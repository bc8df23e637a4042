//! Rendering configuration.

use plotters::style::RGBColor;

/// Figure constants shared by every renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Resolution used to convert point sizes to pixels.
    pub dpi: f64,
    /// Figure title font size in points.
    pub title_font_size: f64,
    /// Axis label font size in points.
    pub axis_label_font_size: f64,
    /// Tick label font size for 2D panels, in points.
    pub tick_font_size_2d: f64,
    /// Tick label font size for 3D panels, in points.
    pub tick_font_size_3d: f64,
    /// Legend font size in points.
    pub legend_font_size: f64,
    /// Plot area background.
    pub background: RGBColor,
    /// Grid line color.
    pub grid: RGBColor,
    /// Package whose root holds the output directory.
    pub package: String,
    /// Output directory relative to the package root.
    pub output_subdir: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1000,
            dpi: 100.0,
            title_font_size: 14.0,
            axis_label_font_size: 10.0,
            tick_font_size_2d: 9.0,
            tick_font_size_3d: 8.0,
            legend_font_size: 11.0,
            background: RGBColor(229, 229, 229), // ggplot grey
            grid: RGBColor(255, 255, 255),
            package: "quad_controller".to_string(),
            output_subdir: "output_data".to_string(),
        }
    }
}

impl RenderConfig {
    /// Font size in pixels for a size in points.
    pub fn font_px(&self, points: f64) -> f64 {
        crate::style::points_to_px(points, self.dpi)
    }
}
