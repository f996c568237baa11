//! Voronoi-based stylized terrain generation
//!
//! Scatters random seeds over a 2D canvas, splits it into Voronoi cells,
//! fills every cell with a banded earth-tone gradient and optionally grows
//! hedgerows of tree dots along one edge of most cells.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voronoi_terrain::*;
//!
//! let config = TerrainConfigBuilder::new()
//!     .seed(42)
//!     .surface(Surface::new(1280.0, 720.0, 2.0)).unwrap()
//!     .trees_enabled(true)
//!     .build().unwrap();
//!
//! let landscape = Landscape::generate(config).unwrap();
//! println!("Generated {} cells", landscape.cell_count());
//!
//! landscape.render_svg("terrain.svg").unwrap();
//! ```
//!
//! Any drawing surface can be targeted by implementing [`Renderer`].
//! [`render::RecordingRenderer`] keeps the draw calls instead of painting
//! them, for inspecting what a landscape would draw.
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and colors

// Modules
pub mod cell;
pub mod color;
pub mod config;
pub mod decoration;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod landscape;
pub mod render;

// Re-export core types for convenience
pub use cell::TerrainCell;
pub use color::Rgb;
pub use config::{Surface, TerrainConfig, TerrainConfigBuilder, TreeConfig};
pub use decoration::{
    CellDecorator, ColorStop, EdgeSelection, GradientSpec, TreeLine, TreeLineSelector, TreeMarker,
    TreeScatterer,
};
pub use error::{Result, TerrainError};
pub use generation::{DelaunayVoronoi, VoronoiProvider};
pub use geometry::{BoundingBox, Point};
pub use landscape::Landscape;
pub use render::{Renderer, SvgRenderer};

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
