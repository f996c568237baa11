//! Seed sampling and Voronoi partitioning
//!
//! Scatters random seed points over the canvas and splits the canvas into
//! one clipped Voronoi cell per seed.

mod points;
mod voronoi;

pub use points::generate_seed_points;
pub use voronoi::{DelaunayVoronoi, VoronoiProvider};

use rand::Rng;

use crate::config::TerrainConfig;
use crate::geometry::Point;

/// Seeds and their cell polygons, index-aligned
#[derive(Debug, Clone, Default)]
pub struct RawDiagram {
    pub seeds: Vec<Point>,
    pub polygons: Vec<Vec<Point>>,
}

/// Sample seeds for `config` and partition its canvas
///
/// Returns one polygon per seed, in seed order. Polygons may be empty.
pub fn generate_raw_diagram<R, V>(config: &TerrainConfig, provider: &V, rng: &mut R) -> RawDiagram
where
    R: Rng + ?Sized,
    V: VoronoiProvider + ?Sized,
{
    let rect = config.surface.clip_rect();

    // Step 1: Scatter seeds over the canvas
    let seeds = generate_seed_points(config.point_count, rect.max_x, rect.max_y, rng);

    // Step 2: One clipped cell per seed
    let polygons = provider.partition(&seeds, &rect);

    RawDiagram { seeds, polygons }
}
