//! Planar geometry shared by the pipeline stages

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the canvas, in device pixels
pub type Point = DVec2;

/// Axis-aligned rectangle `(min_x, min_y, max_x, max_y)`
///
/// Used both as the bounds of a cell and as the clipping rectangle handed
/// to the Voronoi partition.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Degenerate box covering a single point
    pub fn from_point(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Smallest box covering every vertex, `None` for an empty slice
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::from_point(*first), |b, p| b.include(*p)))
    }

    /// Grow the box so that it covers `point`
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    #[inline]
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    #[inline]
    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when either side has zero length
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left
    /// (y grows downward on the canvas)
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }
}

/// Bounds of a cell polygon
///
/// Returns `None` for a polygon without vertices, where min/max are
/// undefined. Callers skip such cells.
pub fn bounds_of(polygon: &[Point]) -> Option<BoundingBox> {
    BoundingBox::from_points(polygon)
}
