//! Example: Render a terrain picture to SVG
//!
//! Usage: `cargo run --example render_terrain [output.svg]`

use log::{Level, LevelFilter, Metadata, Record};
use voronoi_terrain::*;

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                Level::Trace => print!("[\x1b[36mTRACE\x1b[0m]"),
                Level::Debug => print!("[\x1b[34mDEBUG\x1b[0m]"),
                Level::Info => print!("[\x1b[32mINFO\x1b[0m]"),
                Level::Warn => print!("[\x1b[33mWARN\x1b[0m]"),
                Level::Error => print!("[\x1b[31m\x1b[1mERROR\x1b[0m]"),
            }
            println!(" {}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

fn main() -> Result<()> {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let output = std::env::args().nth(1).unwrap_or_else(|| "terrain.svg".to_string());

    let config = TerrainConfigBuilder::new()
        .seed(20240611)
        .surface(Surface::new(1280.0, 720.0, 2.0))?
        .point_count(600)
        .trees_enabled(true)
        .build()?;

    println!("Seed: {} (trees: {})", config.seed, config.tree_seed);
    println!("Canvas: {}x{}", config.surface.canvas_width(), config.surface.canvas_height());

    let landscape = Landscape::generate(config)?;
    println!(
        "{} cells, {} painted, {} tree lines",
        landscape.cell_count(),
        landscape.visible_cell_count(),
        landscape.tree_lines().len()
    );

    landscape.render_svg(&output)?;
    println!("Saved {}", output);

    Ok(())
}
