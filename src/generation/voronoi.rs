//! Clipped Voronoi cells from a Delaunay triangulation
//!
//! The triangulation itself comes from `spade`. A seed's Voronoi cell is
//! the intersection of the half-planes closer to it than to each of its
//! Delaunay neighbours, so every cell is obtained by cutting the clipping
//! rectangle down with one bisector per neighbour. Boundary cells need no
//! special treatment: their unbounded sides simply end at the rectangle.

use std::collections::HashSet;

use log::warn;
use spade::handles::FixedVertexHandle;
use spade::{DelaunayTriangulation, Point2, Triangulation};

use crate::geometry::{BoundingBox, Point};

/// Partitions a rectangle into one polygon per seed point
pub trait VoronoiProvider {
    /// Compute the cells of `points` clipped to `rect`
    ///
    /// The result has exactly one entry per input point, in input order.
    /// An entry may be empty when the seed's cell is clipped away (or the
    /// seed could not be triangulated); this is not an error.
    fn partition(&self, points: &[Point], rect: &BoundingBox) -> Vec<Vec<Point>>;
}

/// Voronoi partition backed by spade's incremental Delaunay triangulation
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaunayVoronoi;

impl VoronoiProvider for DelaunayVoronoi {
    fn partition(&self, points: &[Point], rect: &BoundingBox) -> Vec<Vec<Point>> {
        let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();

        let handles: Vec<Option<FixedVertexHandle>> = points
            .iter()
            .enumerate()
            .map(|(index, p)| match triangulation.insert(Point2::new(p.x, p.y)) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    warn!(
                        "seed {} at ({}, {}) rejected by triangulation: {}",
                        index, p.x, p.y, err
                    );
                    None
                }
            })
            .collect();

        let rect_ring = rect.corners().to_vec();
        let mut claimed = HashSet::new();

        handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| {
                let Some(handle) = handle else {
                    return Vec::new();
                };

                // Coincident seeds share one vertex; only the first owns the cell
                if !claimed.insert(handle) {
                    warn!("seed {} coincides with an earlier seed, its cell is empty", index);
                    return Vec::new();
                }

                let vertex = triangulation.vertex(handle);
                let site = to_point(vertex.position());

                let mut cell = rect_ring.clone();
                for edge in vertex.out_edges() {
                    let neighbor = to_point(edge.to().position());
                    cell = clip_to_bisector(&cell, site, neighbor);
                    if cell.is_empty() {
                        break;
                    }
                }

                if cell.len() < 3 {
                    cell.clear();
                }
                cell
            })
            .collect()
    }
}

#[inline]
fn to_point(p: Point2<f64>) -> Point {
    Point::new(p.x, p.y)
}

/// Keep the part of `polygon` that is at least as close to `site` as to
/// `neighbor` (one Sutherland-Hodgman pass against the perpendicular
/// bisector). Vertex order is preserved.
fn clip_to_bisector(polygon: &[Point], site: Point, neighbor: Point) -> Vec<Point> {
    let normal = neighbor - site;
    let midpoint = (site + neighbor) * 0.5;
    // <= 0 means on the site's side
    let side = |p: Point| (p - midpoint).dot(normal);

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let (d_current, d_next) = (side(current), side(next));

        if d_current <= 0.0 {
            clipped.push(current);
        }
        if (d_current < 0.0 && d_next > 0.0) || (d_current > 0.0 && d_next < 0.0) {
            let t = d_current / (d_current - d_next);
            clipped.push(current + (next - current) * t);
        }
    }
    clipped
}
