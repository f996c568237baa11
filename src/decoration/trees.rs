//! Tree scattering along tree lines
//!
//! Trees are small dark dots placed at even steps along each line and then
//! shaken loose by a generous random offset, so a line reads as a loose
//! hedgerow rather than a dotted stroke.

use rand::Rng;

use crate::color::Rgb;
use crate::config::TreeConfig;
use crate::decoration::TreeLine;
use crate::geometry::Point;

/// A single tree dot, produced while walking a line and drawn right away
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeMarker {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb,
}

/// Scatters trees along tree lines
#[derive(Debug, Clone, Copy)]
pub struct TreeScatterer {
    density: f64,
    jitter_span: f64,
    max_radius: f64,
    colors: [Rgb; 2],
}

impl TreeScatterer {
    pub fn new(density: f64, jitter_span: f64, max_radius: f64, colors: [Rgb; 2]) -> Self {
        Self {
            density,
            jitter_span,
            max_radius,
            colors,
        }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        Self::new(config.density, config.jitter_span, config.max_radius, config.colors)
    }

    /// Number of trees on `line`: `floor(length * density)`
    pub fn tree_count(&self, line: &TreeLine) -> usize {
        let count = line.length() * self.density;
        if count.is_finite() && count > 0.0 {
            count.floor() as usize
        } else {
            0
        }
    }

    /// Position a tree would take on `line` before jitter
    ///
    /// Steps are `length / (length * density)` apart, starting at the
    /// line's start point.
    pub fn nominal_position(&self, line: &TreeLine, step: usize) -> Point {
        let count = line.length() * self.density;
        if count.is_nan() || count <= 0.0 {
            return line.start;
        }
        line.start + line.delta() * (step as f64 / count)
    }

    /// Trees for one line
    ///
    /// Per tree the generator is drawn for color, x offset, y offset and
    /// radius, in that order.
    pub fn scatter_line<R: Rng + ?Sized>(&self, line: &TreeLine, rng: &mut R) -> Vec<TreeMarker> {
        (0..self.tree_count(line))
            .map(|step| {
                let color = if rng.gen::<f64>() < 0.5 { self.colors[0] } else { self.colors[1] };
                let offset = Point::new(self.jitter(rng), self.jitter(rng));
                let radius = rng.gen::<f64>() * self.max_radius;

                TreeMarker {
                    center: self.nominal_position(line, step) + offset,
                    radius,
                    color,
                }
            })
            .collect()
    }

    /// Trees for all lines, lazily, line by line
    pub fn scatter<'a, R: Rng + ?Sized>(
        &'a self,
        lines: &'a [TreeLine],
        rng: &'a mut R,
    ) -> impl Iterator<Item = TreeMarker> + 'a {
        lines.iter().flat_map(move |line| self.scatter_line(line, rng))
    }

    /// Uniform offset in `[-span / 2, span / 2)`
    fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        -self.jitter_span / 2.0 + rng.gen::<f64>() * self.jitter_span
    }
}

impl Default for TreeScatterer {
    fn default() -> Self {
        Self::from_config(&TreeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> TreeLine {
        TreeLine::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn test_zero_length_line_has_no_trees() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let scatterer = TreeScatterer::default();
        let degenerate = line(5.0, 5.0, 5.0, 5.0);
        assert_eq!(scatterer.tree_count(&degenerate), 0);
        assert!(scatterer.scatter_line(&degenerate, &mut rng).is_empty());
    }

    #[test]
    fn test_tree_count_is_floor_of_length_times_density() {
        let scatterer = TreeScatterer::default();
        assert_eq!(scatterer.tree_count(&line(0.0, 0.0, 100.0, 0.0)), 10);
        assert_eq!(scatterer.tree_count(&line(0.0, 0.0, 0.0, 57.0)), 5);
        assert_eq!(scatterer.tree_count(&line(0.0, 0.0, 3.0, 4.0)), 0);
        // 3-4-5 triangle scaled by 5: length 25
        assert_eq!(scatterer.tree_count(&line(10.0, 10.0, 25.0, 30.0)), 2);
    }

    #[test]
    fn test_markers_stay_near_nominal_positions() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let scatterer = TreeScatterer::default();
        let l = line(0.0, 0.0, 300.0, 400.0);

        let markers = scatterer.scatter_line(&l, &mut rng);
        assert_eq!(markers.len(), 50);

        for (step, marker) in markers.iter().enumerate() {
            let nominal = scatterer.nominal_position(&l, step);
            let offset = marker.center - nominal;
            assert!(offset.x.abs() <= 50.0 + 1e-9, "x jitter {}", offset.x);
            assert!(offset.y.abs() <= 50.0 + 1e-9, "y jitter {}", offset.y);
            assert!(marker.radius >= 0.0 && marker.radius < 5.0);
            assert!(marker.color == Rgb::DARK_GREEN || marker.color == Rgb::TREE_GREEN);
        }
    }

    #[test]
    fn test_nominal_positions_walk_the_line() {
        let scatterer = TreeScatterer::default();
        let l = line(0.0, 0.0, 100.0, 0.0);
        assert_eq!(scatterer.nominal_position(&l, 0), Point::new(0.0, 0.0));
        assert!((scatterer.nominal_position(&l, 3).x - 30.0).abs() < 1e-9);
        assert!((scatterer.nominal_position(&l, 9).x - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_without_jitter_trees_sit_on_the_line() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let scatterer = TreeScatterer::new(0.1, 0.0, 5.0, [Rgb::DARK_GREEN, Rgb::TREE_GREEN]);
        let l = line(0.0, 20.0, 200.0, 20.0);
        for (step, marker) in scatterer.scatter_line(&l, &mut rng).iter().enumerate() {
            assert_eq!(marker.center.y, 20.0);
            assert!((marker.center.x - step as f64 * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_both_colors_used() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let scatterer = TreeScatterer::default();
        let markers = scatterer.scatter_line(&line(0.0, 0.0, 2000.0, 0.0), &mut rng);
        assert_eq!(markers.len(), 200);
        let dark = markers.iter().filter(|m| m.color == Rgb::DARK_GREEN).count();
        assert!(dark > 50 && dark < 150, "{} dark trees of 200", dark);
    }

    #[test]
    fn test_scatter_covers_all_lines() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let scatterer = TreeScatterer::default();
        let lines = [
            line(0.0, 0.0, 100.0, 0.0),
            line(0.0, 0.0, 0.0, 0.0),
            line(0.0, 0.0, 0.0, 45.0),
        ];
        assert_eq!(scatterer.scatter(&lines, &mut rng).count(), 14);
    }

    #[test]
    fn test_zero_density() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let scatterer = TreeScatterer::new(0.0, 100.0, 5.0, [Rgb::DARK_GREEN, Rgb::TREE_GREEN]);
        assert!(scatterer.scatter_line(&line(0.0, 0.0, 1000.0, 0.0), &mut rng).is_empty());
    }
}
