//! Striped terrain fills
//!
//! A cell is filled with a linear gradient along its bounding-box diagonal.
//! The gradient is not a smooth blend: it repeats a short band of base and
//! darker color many times, which reads as ploughed or layered ground.

use rand::Rng;

use crate::color::Rgb;
use crate::error::{Result, TerrainError};
use crate::geometry::{bounds_of, BoundingBox, Point};

/// Stop positions within one band, as fractions of the band step, and
/// whether they use the darker color
///
/// With the default step of 0.025 these land at +0, +0.003, +0.01, +0.02
/// and +0.024.
const BAND_LAYOUT: [(f64, bool); 5] = [
    (0.0, false),
    (0.12, false),
    (0.4, true),
    (0.8, true),
    (0.96, false),
];

/// One color stop on the normalized gradient axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgb,
}

/// A banded linear gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    /// Axis start (offset 0), the top-left corner of the cell bounds
    pub start: Point,
    /// Axis end (offset 1), the bottom-right corner of the cell bounds
    pub end: Point,
    pub base: Rgb,
    pub darker: Rgb,
    pub band_step: f64,
}

impl GradientSpec {
    /// Banded gradient along the diagonal of `bounds`
    ///
    /// A zero-width or zero-height box is fine; the axis just collapses.
    pub fn along_diagonal(bounds: &BoundingBox, base: Rgb, darker: Rgb, band_step: f64) -> Self {
        Self {
            start: bounds.min(),
            end: bounds.max(),
            base,
            darker,
            band_step,
        }
    }

    /// Number of bands starting in `[0, 1)`
    pub fn band_count(&self) -> usize {
        if self.band_step.is_nan() || self.band_step <= 0.0 {
            return 1;
        }
        // The epsilon keeps 1 / 0.025 from rounding up to a 41st band
        ((1.0 / self.band_step) - 1e-9).ceil().max(1.0) as usize
    }

    /// All color stops, ordered by offset, every offset within `[0, 1]`
    pub fn stops(&self) -> Vec<ColorStop> {
        let mut stops = Vec::with_capacity(self.band_count() * BAND_LAYOUT.len());
        for band in 0..self.band_count() {
            let band_start = band as f64 * self.band_step;
            for &(fraction, dark) in &BAND_LAYOUT {
                stops.push(ColorStop {
                    offset: (band_start + fraction * self.band_step).min(1.0),
                    color: if dark { self.darker } else { self.base },
                });
            }
        }
        stops
    }
}

/// Picks a fill for every cell
#[derive(Debug, Clone)]
pub struct CellDecorator {
    palette: Vec<Rgb>,
    darken_offset: u8,
    band_step: f64,
}

impl CellDecorator {
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an empty palette
    pub fn new(palette: Vec<Rgb>, darken_offset: u8, band_step: f64) -> Result<Self> {
        if palette.is_empty() {
            return Err(TerrainError::InvalidConfig(
                "palette must contain at least one color".into(),
            ));
        }
        Ok(Self {
            palette,
            darken_offset,
            band_step,
        })
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    /// Pick a base color uniformly from the palette
    pub fn pick_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.palette[rng.gen_range(0..self.palette.len())]
    }

    /// Random palette color and its darker variant, banded along the
    /// diagonal of `bounds`
    pub fn gradient_for<R: Rng + ?Sized>(&self, bounds: &BoundingBox, rng: &mut R) -> GradientSpec {
        let base = self.pick_color(rng);
        let darker = base.darken(self.darken_offset);
        GradientSpec::along_diagonal(bounds, base, darker, self.band_step)
    }

    /// Bounds and fill of a cell, `None` (and no randomness consumed) for
    /// a polygon without vertices
    pub fn decorate<R: Rng + ?Sized>(
        &self,
        polygon: &[Point],
        rng: &mut R,
    ) -> Option<(BoundingBox, GradientSpec)> {
        let bounds = bounds_of(polygon)?;
        let gradient = self.gradient_for(&bounds, rng);
        Some((bounds, gradient))
    }
}
