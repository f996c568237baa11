//! Tree line selection
//!
//! Most cells contribute one boundary edge as a "tree line" along which
//! vegetation is scattered later. By default that is always the cell's
//! first edge (vertex 0 to vertex 1): the diagram's vertex order decides
//! where the lines run, which gives the hedgerows their common heading.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Which edge of a cell becomes its tree line
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeSelection {
    /// Edge from vertex 0 to vertex 1 of every cell
    #[default]
    First,
    /// Edge starting at this vertex index (taken modulo the vertex count)
    Index(usize),
    /// Uniformly random starting vertex per cell
    Random,
}

/// A segment of a cell boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeLine {
    pub start: Point,
    pub end: Point,
}

impl TreeLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn delta(&self) -> Point {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Index of the vertex that closes the edge starting at `p`
///
/// The next vertex when there is one, the previous one (wrapping) at the
/// end of the ring. A single-vertex ring pairs the vertex with itself.
pub fn edge_partner(p: usize, len: usize) -> usize {
    if p + 1 < len {
        p + 1
    } else {
        (p + len - 1) % len
    }
}

/// Decides per cell whether, and along which edge, trees grow
#[derive(Debug, Clone, Copy)]
pub struct TreeLineSelector {
    probability: f64,
    edge: EdgeSelection,
}

impl TreeLineSelector {
    pub fn new(probability: f64, edge: EdgeSelection) -> Self {
        Self { probability, edge }
    }

    /// Roll for a tree line on `polygon`
    ///
    /// Empty polygons never yield a line and consume no randomness.
    pub fn select<R: Rng + ?Sized>(&self, polygon: &[Point], rng: &mut R) -> Option<TreeLine> {
        if polygon.is_empty() {
            return None;
        }
        if rng.gen::<f64>() >= self.probability {
            return None;
        }

        let len = polygon.len();
        let p = match self.edge {
            EdgeSelection::First => 0,
            EdgeSelection::Index(index) => index % len,
            EdgeSelection::Random => rng.gen_range(0..len),
        };

        Some(TreeLine::new(polygon[p], polygon[edge_partner(p, len)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_first_edge_is_always_chosen() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let selector = TreeLineSelector::new(1.0, EdgeSelection::First);
        for _ in 0..20 {
            let line = selector.select(&square(), &mut rng).unwrap();
            assert_eq!(line, TreeLine::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        }
    }

    #[test]
    fn test_single_vertex_yields_zero_length_line() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let selector = TreeLineSelector::new(1.0, EdgeSelection::First);
        let line = selector.select(&[Point::new(4.0, 5.0)], &mut rng).unwrap();
        assert_eq!(line.start, line.end);
        assert_eq!(line.length(), 0.0);
    }

    #[test]
    fn test_empty_polygon_is_skipped() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let selector = TreeLineSelector::new(1.0, EdgeSelection::First);
        assert!(selector.select(&[], &mut rng).is_none());
    }

    #[test]
    fn test_edge_partner() {
        assert_eq!(edge_partner(0, 4), 1);
        assert_eq!(edge_partner(2, 4), 3);
        // Last vertex pairs with its predecessor
        assert_eq!(edge_partner(3, 4), 2);
        assert_eq!(edge_partner(0, 1), 0);
        assert_eq!(edge_partner(1, 2), 0);
    }

    #[test]
    fn test_explicit_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let polygon = square();

        let line = TreeLineSelector::new(1.0, EdgeSelection::Index(1))
            .select(&polygon, &mut rng)
            .unwrap();
        assert_eq!(line, TreeLine::new(polygon[1], polygon[2]));

        let line = TreeLineSelector::new(1.0, EdgeSelection::Index(3))
            .select(&polygon, &mut rng)
            .unwrap();
        assert_eq!(line, TreeLine::new(polygon[3], polygon[2]));

        let line = TreeLineSelector::new(1.0, EdgeSelection::Index(6))
            .select(&polygon, &mut rng)
            .unwrap();
        assert_eq!(line, TreeLine::new(polygon[2], polygon[3]));
    }

    #[test]
    fn test_random_edge_stays_on_boundary() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let polygon = square();
        let selector = TreeLineSelector::new(1.0, EdgeSelection::Random);
        let mut starts = std::collections::HashSet::new();
        for _ in 0..100 {
            let line = selector.select(&polygon, &mut rng).unwrap();
            assert_eq!(line.length(), 10.0);
            starts.insert((line.start.x as i64, line.start.y as i64));
        }
        assert_eq!(starts.len(), 4);
    }

    #[test]
    fn test_selection_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let polygon = square();

        let never = TreeLineSelector::new(0.0, EdgeSelection::First);
        assert!((0..100).all(|_| never.select(&polygon, &mut rng).is_none()));

        let default = TreeLineSelector::new(0.75, EdgeSelection::First);
        let hits = (0..4000).filter(|_| default.select(&polygon, &mut rng).is_some()).count();
        assert!((2800..3200).contains(&hits), "selected {} of 4000", hits);
    }
}
