//! Hexagon marker element.
//!
//! plotters ships circles, triangles and crosses but no hexagon, so waypoints
//! get their own element.

use plotters::element::{Drawable, PointCollection};
use plotters::style::ShapeStyle;
use plotters_backend::{BackendCoord, DrawingBackend, DrawingErrorKind};

/// A flat-topped hexagon centred on a data point, sized in pixels.
#[derive(Debug, Clone)]
pub struct Hexagon<Coord> {
    center: Coord,
    radius: u32,
    style: ShapeStyle,
}

impl<Coord> Hexagon<Coord> {
    /// Create a hexagon with circumradius `radius` pixels.
    pub fn new<S: Into<ShapeStyle>>(center: Coord, radius: u32, style: S) -> Self {
        Self {
            center,
            radius,
            style: style.into(),
        }
    }
}

/// Vertices of a flat-topped hexagon around `(x, y)`.
pub(crate) fn hexagon_vertices((x, y): BackendCoord, radius: u32) -> Vec<BackendCoord> {
    let r = f64::from(radius);
    (0..6u8)
        .map(|k| {
            let angle = std::f64::consts::FRAC_PI_3 * f64::from(k);
            (
                x + (r * angle.cos()).round() as i32,
                y + (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}

impl<'a, Coord> PointCollection<'a, Coord> for &'a Hexagon<Coord> {
    type Point = &'a Coord;
    type IntoIter = std::iter::Once<&'a Coord>;

    fn point_iter(self) -> Self::IntoIter {
        std::iter::once(&self.center)
    }
}

impl<Coord, DB: DrawingBackend> Drawable<DB> for Hexagon<Coord> {
    fn draw<I: Iterator<Item = BackendCoord>>(
        &self,
        mut points: I,
        backend: &mut DB,
        _parent_dim: (u32, u32),
    ) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
        if let Some(center) = points.next() {
            let mut vertices = hexagon_vertices(center, self.radius);
            if self.style.filled {
                backend.fill_polygon(vertices, &self.style)?;
            } else {
                vertices.push(vertices[0]);
                backend.draw_path(vertices, &self.style)?;
            }
        }
        Ok(())
    }
}
