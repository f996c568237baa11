//! Colors and palettes for terrain cells and trees

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// 8-bit RGB color
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Olive grassland
    pub const OLIVE: Rgb = Rgb::new(0xa4, 0xab, 0x1d);
    /// Bare earth
    pub const EARTH: Rgb = Rgb::new(0x71, 0x54, 0x40);
    /// Forest green
    pub const FOREST: Rgb = Rgb::new(0x25, 0x81, 0x33);
    /// Dry ochre fields
    pub const OCHRE: Rgb = Rgb::new(0xd2, 0x95, 0x2a);
    /// Dark green used for cell outlines and trees (`#040`)
    pub const DARK_GREEN: Rgb = Rgb::new(0x00, 0x44, 0x00);
    /// Slightly lighter tree green (`#060`)
    pub const TREE_GREEN: Rgb = Rgb::new(0x00, 0x66, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional, case-insensitive)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *channel = v * 16 + v;
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`, every channel zero-padded to two digits
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The mechanically darker variant used for gradient bands
    ///
    /// Each channel goes through [`wrapping_subtract`] independently, so
    /// channels smaller than `offset` bounce back up instead of clamping
    /// at zero.
    pub fn darken(self, offset: u8) -> Self {
        Self::new(
            wrapping_subtract(self.r, offset),
            wrapping_subtract(self.g, offset),
            wrapping_subtract(self.b, offset),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
            .ok_or_else(|| TerrainError::InvalidConfig(format!("not a hex color: {:?}", s)))
    }
}

/// `|channel - offset|`
///
/// Not a saturating subtraction: `0x05 - 0x0f` yields `0x0a`. The banded
/// texture of dark cells depends on this.
#[inline]
pub fn wrapping_subtract(channel: u8, offset: u8) -> u8 {
    channel.abs_diff(offset)
}

/// The five terrain colors cells are painted with
///
/// Forest appears twice, so it is picked twice as often as the others.
pub fn default_palette() -> Vec<Rgb> {
    vec![Rgb::OLIVE, Rgb::EARTH, Rgb::FOREST, Rgb::FOREST, Rgb::OCHRE]
}

/// The two shades trees are drawn with
pub fn default_tree_colors() -> [Rgb; 2] {
    [Rgb::DARK_GREEN, Rgb::TREE_GREEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_palette_entry() {
        let base = Rgb::from_hex("#a4ab1d").unwrap();
        let darker = base.darken(15);
        assert_eq!(darker, Rgb::new(0x95, 0x9c, 0x0e));
        assert_eq!(darker.to_hex(), "#959c0e");
    }

    #[test]
    fn test_darken_reflects_below_offset() {
        assert_eq!(wrapping_subtract(0x05, 15), 0x0a);
        assert_eq!(wrapping_subtract(0x00, 15), 0x0f);
        assert_eq!(wrapping_subtract(15, 15), 0);
        assert_eq!(Rgb::new(0, 0x44, 0).darken(15), Rgb::new(0x0f, 0x35, 0x0f));
    }

    #[test]
    fn test_darken_twice() {
        // Above 2 * offset the transform is a plain subtraction
        let base = Rgb::OCHRE;
        let twice = base.darken(15).darken(15);
        assert_eq!(twice, Rgb::new(0xd2 - 30, 0x95 - 30, 0x2a - 30));

        // Below it the reflection kicks in: 20 -> 5 -> 10
        assert_eq!(wrapping_subtract(wrapping_subtract(20, 15), 15), 10);
    }

    #[test]
    fn test_hex_round_trip_is_zero_padded() {
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Rgb::from_hex("#D2952a"), Some(Rgb::OCHRE));
        assert_eq!(Rgb::from_hex("#040"), Some(Rgb::DARK_GREEN));
        assert_eq!(Rgb::from_hex("060"), Some(Rgb::TREE_GREEN));
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex(""), None);
        assert!("#zzz".parse::<Rgb>().is_err());
        assert_eq!("#258133".parse::<Rgb>().unwrap(), Rgb::FOREST);
    }

    #[test]
    fn test_default_palette_weights_forest() {
        let palette = default_palette();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.iter().filter(|&&c| c == Rgb::FOREST).count(), 2);
    }
}
