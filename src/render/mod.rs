//! Drawing surfaces
//!
//! The pipeline only talks to the [`Renderer`] trait, so the same landscape
//! can be painted into an SVG document or recorded for inspection.

mod recording;
mod svg_renderer;

pub use self::recording::{DrawCommand, RecordingRenderer};
pub use self::svg_renderer::SvgRenderer;

use crate::color::Rgb;
use crate::decoration::GradientSpec;
use crate::geometry::Point;

/// Primitive drawing capability consumed by the landscape pipeline
///
/// Calls arrive in paint order: for every cell a gradient is created, the
/// polygon filled with it and then outlined, before the next cell starts.
/// Trees are drawn last.
pub trait Renderer {
    /// Surface-specific handle for a registered gradient
    type Gradient;

    /// Register a gradient so polygons can be filled with it
    fn create_gradient(&mut self, gradient: &GradientSpec) -> Self::Gradient;

    /// Fill the closed polygon through `vertices`
    fn fill_polygon(&mut self, vertices: &[Point], fill: &Self::Gradient);

    /// Outline the closed polygon through `vertices`
    fn stroke_polygon(&mut self, vertices: &[Point], color: Rgb);

    /// Fill a full circle
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);
}
