//! Uniform random seed points
//!
//! Seeds are scattered independently and uniformly over the canvas. No
//! relaxation is applied: the irregular cell sizes are part of the look.

use rand::Rng;

use crate::geometry::Point;

/// Generate `count` points uniformly distributed over `[0, width) x [0, height)`
///
/// `width` and `height` must be positive when `count > 0`; the landscape
/// configuration guarantees this for the canvas size.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use voronoi_terrain::generation::generate_seed_points;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let points = generate_seed_points(100, 640.0, 480.0, &mut rng);
/// assert_eq!(points.len(), 100);
/// ```
pub fn generate_seed_points<R: Rng + ?Sized>(
    count: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let x = rng.gen_range(0.0..width);
            let y = rng.gen_range(0.0..height);
            Point::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_point_count_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for &count in &[1usize, 2, 10, 1000] {
            let points = generate_seed_points(count, 300.0, 7.5, &mut rng);
            assert_eq!(points.len(), count);
            for p in &points {
                assert!(p.x >= 0.0 && p.x < 300.0, "x out of range: {}", p.x);
                assert!(p.y >= 0.0 && p.y < 7.5, "y out of range: {}", p.y);
            }
        }
    }

    #[test]
    fn test_zero_points() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(generate_seed_points(0, 100.0, 100.0, &mut rng).is_empty());
        // Bounds are irrelevant when nothing is sampled
        assert!(generate_seed_points(0, 0.0, 0.0, &mut rng).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = generate_seed_points(50, 100.0, 100.0, &mut ChaCha8Rng::seed_from_u64(9));
        let b = generate_seed_points(50, 100.0, 100.0, &mut ChaCha8Rng::seed_from_u64(9));
        let c = generate_seed_points(50, 100.0, 100.0, &mut ChaCha8Rng::seed_from_u64(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_points_spread_over_canvas() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = generate_seed_points(1000, 100.0, 100.0, &mut rng);
        let left = points.iter().filter(|p| p.x < 50.0).count();
        let top = points.iter().filter(|p| p.y < 50.0).count();
        assert!((400..600).contains(&left), "left half got {} points", left);
        assert!((400..600).contains(&top), "top half got {} points", top);
    }
}
