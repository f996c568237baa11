//! Terrain Cell Structure
//!
//! One clipped Voronoi region of the canvas together with the fill chosen for it.

use crate::decoration::GradientSpec;
use crate::geometry::{BoundingBox, Point};

/// A single decorated Voronoi cell
///
/// Each cell carries:
/// - The index of the seed it belongs to
/// - The seed point itself
/// - The clipped boundary polygon, in the order the partition produced it
/// - Bounds and fill, present only when the polygon has vertices
///
/// A seed whose region clips to nothing still gets a cell, with no vertices
/// and no fill, so cell IDs always line up with seed indices.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainCell {
    /// Index of the seed point (0 to cell_count-1)
    pub id: usize,

    /// Seed point the region was grown from
    pub seed: Point,

    /// Boundary polygon in canvas coordinates
    pub vertices: Vec<Point>,

    /// Axis-aligned bounds of `vertices`
    pub bounds: Option<BoundingBox>,

    /// Banded gradient laid along the bounds diagonal
    pub fill: Option<GradientSpec>,
}

impl TerrainCell {
    /// Cell with geometry but no decoration yet
    pub fn new(id: usize, seed: Point, vertices: Vec<Point>) -> Self {
        Self {
            id,
            seed,
            vertices,
            bounds: None,
            fill: None,
        }
    }

    /// Attach the bounds and fill computed for this cell
    pub fn with_fill(mut self, bounds: BoundingBox, fill: GradientSpec) -> Self {
        self.bounds = Some(bounds);
        self.fill = Some(fill);
        self
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True for a seed whose region clipped to nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the cell gets painted
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.fill.is_some()
    }

    /// Planar polygon area (shoelace formula)
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }

        let twice: f64 = self
            .vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(a, b)| a.perp_dot(*b))
            .sum();

        twice.abs() * 0.5
    }
}
