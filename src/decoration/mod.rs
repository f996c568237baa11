//! Per-cell decoration
//!
//! Derives the procedural content painted on top of the diagram: a banded
//! gradient fill for every cell, an optional tree line per cell, and the
//! trees scattered along those lines.

mod gradient;
mod tree_lines;
mod trees;

pub use gradient::{CellDecorator, ColorStop, GradientSpec};
pub use tree_lines::{edge_partner, EdgeSelection, TreeLine, TreeLineSelector};
pub use trees::{TreeMarker, TreeScatterer};
