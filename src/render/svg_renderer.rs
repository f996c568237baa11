//! SVG output
//!
//! Cells become `<polygon>` elements filled with a `<linearGradient>` laid
//! out in user space along the cell's bounding-box diagonal; trees become
//! `<circle>` elements. The view box is the canvas in device pixels while
//! the document's width and height are the logical surface size.

use std::path::Path;

use log::info;
use svg::node::element::{Circle, Definitions, Group, LinearGradient, Polygon, Stop};
use svg::{Document, Node};

use crate::color::Rgb;
use crate::config::Surface;
use crate::decoration::GradientSpec;
use crate::error::Result;
use crate::geometry::Point;

use super::Renderer;

/// Renders into an in-memory SVG document
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    surface: Surface,
    stroke_width: f64,
    definitions: Definitions,
    shapes: Group,
    gradient_count: usize,
}

impl SvgRenderer {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            stroke_width: 1.0,
            definitions: Definitions::new(),
            shapes: Group::new(),
            gradient_count: 0,
        }
    }

    /// Outline width in canvas units (default 1)
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Number of gradients registered so far
    pub fn gradient_count(&self) -> usize {
        self.gradient_count
    }

    /// Assemble the complete document
    pub fn document(&self) -> Document {
        Document::new()
            .set("width", self.surface.width)
            .set("height", self.surface.height)
            .set(
                "viewBox",
                format!("0 0 {} {}", self.surface.canvas_width(), self.surface.canvas_height()),
            )
            .add(self.definitions.clone())
            .add(self.shapes.clone())
    }

    pub fn to_svg_string(&self) -> String {
        self.document().to_string()
    }

    /// Write the document to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        svg::save(path, &self.document())?;
        info!("wrote {}", path.display());
        Ok(())
    }
}

fn points_attribute(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Renderer for SvgRenderer {
    type Gradient = String;

    fn create_gradient(&mut self, gradient: &GradientSpec) -> String {
        let id = format!("cell-gradient-{}", self.gradient_count);
        self.gradient_count += 1;

        let mut element = LinearGradient::new()
            .set("id", id.as_str())
            .set("gradientUnits", "userSpaceOnUse")
            .set("x1", gradient.start.x)
            .set("y1", gradient.start.y)
            .set("x2", gradient.end.x)
            .set("y2", gradient.end.y);

        for stop in gradient.stops() {
            element.append(
                Stop::new()
                    .set("offset", format!("{:.4}", stop.offset))
                    .set("stop-color", stop.color.to_hex()),
            );
        }

        self.definitions.append(element);
        id
    }

    fn fill_polygon(&mut self, vertices: &[Point], fill: &String) {
        self.shapes.append(
            Polygon::new()
                .set("points", points_attribute(vertices))
                .set("fill", format!("url(#{})", fill)),
        );
    }

    fn stroke_polygon(&mut self, vertices: &[Point], color: Rgb) {
        self.shapes.append(
            Polygon::new()
                .set("points", points_attribute(vertices))
                .set("fill", "none")
                .set("stroke", color.to_hex())
                .set("stroke-width", self.stroke_width),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.shapes.append(
            Circle::new()
                .set("cx", format!("{:.2}", center.x))
                .set("cy", format!("{:.2}", center.y))
                .set("r", format!("{:.2}", radius))
                .set("fill", color.to_hex()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;

    #[test]
    fn test_document_size() {
        let renderer = SvgRenderer::new(Surface::new(400.0, 300.0, 2.0));
        let svg = renderer.to_svg_string();
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains(r#"height="300""#));
    }

    #[test]
    fn test_cell_is_filled_then_outlined() {
        let mut renderer = SvgRenderer::new(Surface::default());
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let spec = GradientSpec::along_diagonal(&bounds, Rgb::OLIVE, Rgb::OLIVE.darken(15), 0.025);
        let cell = bounds.corners();

        let id = renderer.create_gradient(&spec);
        renderer.fill_polygon(&cell, &id);
        renderer.stroke_polygon(&cell, Rgb::DARK_GREEN);

        assert_eq!(id, "cell-gradient-0");
        assert_eq!(renderer.gradient_count(), 1);

        let svg = renderer.to_svg_string();
        assert!(svg.contains(r#"gradientUnits="userSpaceOnUse""#));
        assert!(svg.contains(r##"stop-color="#a4ab1d""##));
        assert!(svg.contains(r##"stop-color="#959c0e""##));
        assert_eq!(svg.matches("<stop").count(), 200);

        let fill = svg.find("url(#cell-gradient-0)").unwrap();
        let stroke = svg.find(r##"stroke="#004400""##).unwrap();
        assert!(fill < stroke);
    }

    #[test]
    fn test_circle() {
        let mut renderer = SvgRenderer::new(Surface::default());
        renderer.fill_circle(Point::new(12.5, 3.0), 2.25, Rgb::TREE_GREEN);
        let svg = renderer.to_svg_string();
        assert!(svg.contains("<circle"));
        assert!(svg.contains(r#"cx="12.50""#));
        assert!(svg.contains(r##"fill="#006600""##));
    }

    #[test]
    fn test_gradient_ids_are_unique() {
        let mut renderer = SvgRenderer::new(Surface::default());
        let bounds = BoundingBox::from_point(Point::ZERO);
        let spec = GradientSpec::along_diagonal(&bounds, Rgb::EARTH, Rgb::EARTH.darken(15), 0.5);
        let a = renderer.create_gradient(&spec);
        let b = renderer.create_gradient(&spec);
        assert_ne!(a, b);
    }

    #[test]
    fn test_save() {
        let path = std::env::temp_dir()
            .join(format!("voronoi_terrain_test_{}.svg", std::process::id()));
        let mut renderer = SvgRenderer::new(Surface::new(10.0, 10.0, 1.0));
        renderer.fill_circle(Point::new(5.0, 5.0), 1.0, Rgb::DARK_GREEN);
        renderer.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
        assert!(written.contains("<circle"));
        std::fs::remove_file(&path).unwrap();
    }
}
