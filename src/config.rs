//! Landscape configuration and builder
//!
//! Every constant of the renderer is a tunable here. The same configuration
//! (including its seeds) always produces the same image.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{default_palette, default_tree_colors, Rgb};
use crate::decoration::EdgeSelection;
use crate::error::{Result, TerrainError};
use crate::geometry::BoundingBox;

/// Drawing surface dimensions
///
/// `width` and `height` are logical units (what the display reports);
/// the canvas itself is `pixel_ratio` times larger in each direction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Canvas width in device pixels
    #[inline]
    pub fn canvas_width(&self) -> f64 {
        self.width * self.pixel_ratio
    }

    /// Canvas height in device pixels
    #[inline]
    pub fn canvas_height(&self) -> f64 {
        self.height * self.pixel_ratio
    }

    /// Rectangle the Voronoi cells are clipped to, also the sampling area
    pub fn clip_rect(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.canvas_width(), self.canvas_height())
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` unless width, height and pixel ratio are
    /// positive and finite
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("width", self.width),
            ("height", self.height),
            ("pixel ratio", self.pixel_ratio),
        ];
        for (name, value) in dims {
            if !(value.is_finite() && value > 0.0) {
                return Err(TerrainError::InvalidConfig(format!(
                    "surface {} must be positive and finite (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(1920.0, 1080.0, 1.0)
    }
}

/// Tree scattering settings
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeConfig {
    /// Trees are only painted when enabled (off by default)
    pub enabled: bool,
    /// Trees per unit of line length
    pub density: f64,
    /// Full width of the positional jitter; offsets fall in `[-span/2, span/2]`
    pub jitter_span: f64,
    /// Radii are drawn from `[0, max_radius)`
    pub max_radius: f64,
    /// Each tree picks one of these with equal probability
    pub colors: [Rgb; 2],
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            density: 0.1,
            jitter_span: 100.0,
            max_radius: 5.0,
            colors: default_tree_colors(),
        }
    }
}

/// Configuration for one rendered landscape
///
/// # Example
///
/// ```rust
/// use voronoi_terrain::*;
///
/// let config = TerrainConfigBuilder::new()
///     .seed(42)
///     .point_count(200)
///     .surface(Surface::new(800.0, 600.0, 2.0))
///     .unwrap()
///     .trees_enabled(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.surface.canvas_width(), 1600.0);
/// assert_eq!(config.tree_seed, 42);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainConfig {
    /// Seed for point placement, cell colors and tree line selection
    pub seed: u32,

    /// Seed for tree placement (separate so trees can be re-rolled on the
    /// same cell layout)
    pub tree_seed: u32,

    /// Drawing surface; its canvas size is both the sampling area and the
    /// clipping rectangle
    pub surface: Surface,

    /// Number of Voronoi seed points
    pub point_count: usize,

    /// Cell base colors, picked uniformly (duplicates raise a color's weight)
    pub palette: Vec<Rgb>,

    /// Per-channel offset of the darker band color
    pub darken_offset: u8,

    /// Width of one gradient band on the normalized gradient axis
    pub band_step: f64,

    /// Stroke color of the cell outlines
    pub outline_color: Rgb,

    /// Chance that a cell contributes a tree line
    pub tree_line_probability: f64,

    /// Which cell edge becomes the tree line
    pub edge_selection: EdgeSelection,

    /// Tree scattering settings
    pub trees: TreeConfig,
}

impl TerrainConfig {
    /// Check every value the pipeline relies on
    ///
    /// The builder runs this on `build()`; configurations assembled by hand
    /// or deserialized are checked again before generation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending value
    pub fn validate(&self) -> Result<()> {
        self.surface.validate()?;
        check_palette(&self.palette)?;
        check_band_step(self.band_step)?;
        check_probability(self.tree_line_probability)?;
        check_non_negative("tree density", self.trees.density)?;
        check_non_negative("tree jitter span", self.trees.jitter_span)?;
        check_non_negative("tree max radius", self.trees.max_radius)?;
        Ok(())
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfigBuilder::new().assemble()
    }
}

/// Builder for creating TerrainConfig with validation
///
/// Setters that can receive out-of-range values return `Result<Self>`.
#[derive(Debug, Clone)]
pub struct TerrainConfigBuilder {
    seed: Option<u32>,
    tree_seed: Option<u32>,
    surface: Surface,
    point_count: usize,
    palette: Vec<Rgb>,
    darken_offset: u8,
    band_step: f64,
    outline_color: Rgb,
    tree_line_probability: f64,
    edge_selection: EdgeSelection,
    trees: TreeConfig,
}

impl TerrainConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: random, tree_seed: same as seed
    /// - surface: 1920x1080 at pixel ratio 1
    /// - point_count: 1000
    /// - palette: olive, earth, forest (twice), ochre
    /// - darken_offset: 15, band_step: 0.025, outline: `#040`
    /// - tree_line_probability: 0.75, first edge of every cell
    /// - trees disabled (density 0.1, jitter span 100, max radius 5)
    pub fn new() -> Self {
        Self {
            seed: None,
            tree_seed: None,
            surface: Surface::default(),
            point_count: 1000,
            palette: default_palette(),
            darken_offset: 15,
            band_step: 0.025,
            outline_color: Rgb::DARK_GREEN,
            tree_line_probability: 0.75,
            edge_selection: EdgeSelection::default(),
            trees: TreeConfig::default(),
        }
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set a separate tree seed; defaults to the main seed
    pub fn tree_seed(mut self, seed: u32) -> Self {
        self.tree_seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` unless width, height and pixel ratio are
    /// positive and finite
    pub fn surface(mut self, surface: Surface) -> Result<Self> {
        surface.validate()?;
        self.surface = surface;
        Ok(self)
    }

    /// Number of seed points; zero yields an empty canvas
    pub fn point_count(mut self, count: usize) -> Self {
        self.point_count = count;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for an empty palette
    pub fn palette(mut self, palette: Vec<Rgb>) -> Result<Self> {
        check_palette(&palette)?;
        self.palette = palette;
        Ok(self)
    }

    pub fn darken_offset(mut self, offset: u8) -> Self {
        self.darken_offset = offset;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `0 < step <= 1`
    pub fn band_step(mut self, step: f64) -> Result<Self> {
        check_band_step(step)?;
        self.band_step = step;
        Ok(self)
    }

    pub fn outline_color(mut self, color: Rgb) -> Self {
        self.outline_color = color;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `0 <= probability <= 1`
    pub fn tree_line_probability(mut self, probability: f64) -> Result<Self> {
        check_probability(probability)?;
        self.tree_line_probability = probability;
        Ok(self)
    }

    pub fn edge_selection(mut self, selection: EdgeSelection) -> Self {
        self.edge_selection = selection;
        self
    }

    /// Paint trees along the selected tree lines
    pub fn trees_enabled(mut self, enabled: bool) -> Self {
        self.trees.enabled = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for a negative or non-finite density
    pub fn tree_density(mut self, density: f64) -> Result<Self> {
        check_non_negative("tree density", density)?;
        self.trees.density = density;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for a negative or non-finite span
    pub fn tree_jitter_span(mut self, span: f64) -> Result<Self> {
        check_non_negative("tree jitter span", span)?;
        self.trees.jitter_span = span;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for a negative or non-finite radius
    pub fn tree_max_radius(mut self, radius: f64) -> Result<Self> {
        check_non_negative("tree max radius", radius)?;
        self.trees.max_radius = radius;
        Ok(self)
    }

    pub fn tree_colors(mut self, colors: [Rgb; 2]) -> Self {
        self.trees.colors = colors;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the assembled configuration fails
    /// [`TerrainConfig::validate`]
    pub fn build(self) -> Result<TerrainConfig> {
        let config = self.assemble();
        config.validate()?;
        Ok(config)
    }

    fn assemble(self) -> TerrainConfig {
        let seed = self.seed.unwrap_or_else(rand::random);
        let tree_seed = self.tree_seed.unwrap_or(seed);

        TerrainConfig {
            seed,
            tree_seed,
            surface: self.surface,
            point_count: self.point_count,
            palette: self.palette,
            darken_offset: self.darken_offset,
            band_step: self.band_step,
            outline_color: self.outline_color,
            tree_line_probability: self.tree_line_probability,
            edge_selection: self.edge_selection,
            trees: self.trees,
        }
    }
}

impl Default for TerrainConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_palette(palette: &[Rgb]) -> Result<()> {
    if palette.is_empty() {
        return Err(TerrainError::InvalidConfig(
            "palette must contain at least one color".into(),
        ));
    }
    Ok(())
}

fn check_band_step(step: f64) -> Result<()> {
    if step > 0.0 && step <= 1.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidConfig(format!(
            "band step must be in (0, 1] (got {})",
            step
        )))
    }
}

fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(TerrainError::InvalidConfig(format!(
            "tree line probability must be in [0, 1] (got {})",
            probability
        )))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidConfig(format!(
            "{} must be non-negative and finite (got {})",
            name, value
        )))
    }
}
