//! Landscape main structure

use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cell::TerrainCell;
use crate::config::TerrainConfig;
use crate::decoration::{CellDecorator, TreeLine, TreeLineSelector, TreeScatterer};
use crate::error::Result;
use crate::generation::{generate_raw_diagram, DelaunayVoronoi, VoronoiProvider};
use crate::geometry::Point;
use crate::render::{Renderer, SvgRenderer};

/// A generated terrain picture, ready to be painted
///
/// Generation is deterministic: one generator seeded from `config.seed`
/// drives seed sampling and then, cell by cell, the palette pick followed
/// by the tree line roll. Trees are scattered at render time from a second
/// generator seeded from `config.tree_seed`, so they are never stored and
/// every render of the same landscape paints the same trees.
///
/// # Examples
///
/// ```
/// use voronoi_terrain::*;
/// use voronoi_terrain::render::RecordingRenderer;
///
/// let config = TerrainConfigBuilder::new()
///     .seed(42)
///     .point_count(50)
///     .build()
///     .unwrap();
///
/// let landscape = Landscape::generate(config).unwrap();
/// assert_eq!(landscape.cell_count(), 50);
///
/// let mut recorder = RecordingRenderer::new();
/// landscape.render(&mut recorder);
/// assert_eq!(recorder.polygon_fills(), landscape.visible_cell_count());
/// ```
#[derive(Debug, Clone)]
pub struct Landscape {
    /// Configuration used to generate this landscape
    config: TerrainConfig,

    /// Sampled seed points, in sampling order
    seeds: Vec<Point>,

    /// One cell per seed (indexed by seed index)
    cells: Vec<TerrainCell>,

    /// Tree lines recorded while decorating cells, in cell order
    tree_lines: Vec<TreeLine>,
}

impl Landscape {
    /// Generate a landscape with the spade-backed Voronoi partition
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the configuration fails
    /// [`TerrainConfig::validate`], for example a zero-sized surface or an
    /// empty palette set without the builder.
    pub fn generate(config: TerrainConfig) -> Result<Self> {
        Self::generate_with_provider(config, &DelaunayVoronoi)
    }

    /// Generate a landscape with a custom Voronoi provider
    ///
    /// The provider must return one polygon per seed, in seed order.
    ///
    /// # Errors
    ///
    /// Same as [`Landscape::generate`].
    pub fn generate_with_provider<V>(config: TerrainConfig, provider: &V) -> Result<Self>
    where
        V: VoronoiProvider + ?Sized,
    {
        config.validate()?;

        let decorator = CellDecorator::new(
            config.palette.clone(),
            config.darken_offset,
            config.band_step,
        )?;
        let selector = TreeLineSelector::new(config.tree_line_probability, config.edge_selection);
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(config.seed));

        let start = Instant::now();
        let diagram = generate_raw_diagram(&config, provider, &mut rng);
        debug!(
            "partitioned {} seeds in {:.2}ms",
            diagram.seeds.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        let start = Instant::now();
        let mut tree_lines = Vec::new();
        let cells: Vec<TerrainCell> = diagram
            .seeds
            .iter()
            .zip(diagram.polygons)
            .enumerate()
            .map(|(id, (&seed, polygon))| {
                let mut cell = TerrainCell::new(id, seed, Vec::new());
                if let Some((bounds, fill)) = decorator.decorate(&polygon, &mut rng) {
                    cell = cell.with_fill(bounds, fill);
                }
                if let Some(line) = selector.select(&polygon, &mut rng) {
                    tree_lines.push(line);
                }
                cell.vertices = polygon;
                cell
            })
            .collect();
        debug!("decorated cells in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

        let landscape = Self {
            config,
            seeds: diagram.seeds,
            cells,
            tree_lines,
        };
        info!(
            "generated {} cells ({} visible), {} tree lines",
            landscape.cell_count(),
            landscape.visible_cell_count(),
            landscape.tree_lines.len()
        );

        Ok(landscape)
    }

    /// Paint the landscape onto `renderer`
    ///
    /// Cells go in order, each filled with its gradient and then outlined.
    /// Empty cells are skipped. Trees, when enabled, are drawn last.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for cell in &self.cells {
            let Some(fill) = &cell.fill else {
                continue;
            };
            let gradient = renderer.create_gradient(fill);
            renderer.fill_polygon(&cell.vertices, &gradient);
            renderer.stroke_polygon(&cell.vertices, self.config.outline_color);
        }

        if !self.config.trees.enabled {
            return;
        }

        let scatterer = TreeScatterer::from_config(&self.config.trees);
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(self.config.tree_seed));
        let mut painted = 0usize;
        for tree in scatterer.scatter(&self.tree_lines, &mut rng) {
            renderer.fill_circle(tree.center, tree.radius, tree.color);
            painted += 1;
        }
        info!("painted {} trees along {} lines", painted, self.tree_lines.len());
    }

    /// Render into a fresh SVG document sized to the configured surface
    pub fn to_svg(&self) -> SvgRenderer {
        let mut renderer = SvgRenderer::new(self.config.surface);
        self.render(&mut renderer);
        renderer
    }

    /// Render and write an SVG file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn render_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_svg().save(path)
    }

    #[inline]
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Seed points in sampling order
    #[inline]
    pub fn seeds(&self) -> &[Point] {
        &self.seeds
    }

    /// Get all cells as a slice, indexed by seed
    #[inline]
    pub fn cells(&self) -> &[TerrainCell] {
        &self.cells
    }

    /// Get a cell by ID
    #[inline]
    pub fn get_cell(&self, id: usize) -> Option<&TerrainCell> {
        self.cells.get(id)
    }

    /// Number of cells, equal to the number of seeds
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells that get painted
    pub fn visible_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visible()).count()
    }

    /// Tree lines in the order their cells were processed
    #[inline]
    pub fn tree_lines(&self) -> &[TreeLine] {
        &self.tree_lines
    }
}
