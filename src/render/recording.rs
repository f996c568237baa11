//! In-memory renderer that records every draw call
//!
//! Useful for inspecting a landscape without a drawing surface: how many
//! cells get painted, in which order, with which gradients, and where the
//! trees land.

use crate::color::Rgb;
use crate::decoration::GradientSpec;
use crate::geometry::Point;

use super::Renderer;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillPolygon { vertices: Vec<Point>, gradient: usize },
    StrokePolygon { vertices: Vec<Point>, color: Rgb },
    FillCircle { center: Point, radius: f64, color: Rgb },
}

/// Renderer that paints nothing and keeps the call log
///
/// Gradients are kept in creation order; fills refer to them by index.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub gradients: Vec<GradientSpec>,
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polygon_fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPolygon { .. }))
            .count()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }
}

impl Renderer for RecordingRenderer {
    type Gradient = usize;

    fn create_gradient(&mut self, gradient: &GradientSpec) -> usize {
        self.gradients.push(gradient.clone());
        self.gradients.len() - 1
    }

    fn fill_polygon(&mut self, vertices: &[Point], fill: &usize) {
        self.commands.push(DrawCommand::FillPolygon {
            vertices: vertices.to_vec(),
            gradient: *fill,
        });
    }

    fn stroke_polygon(&mut self, vertices: &[Point], color: Rgb) {
        self.commands.push(DrawCommand::StrokePolygon {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }
}
