//! Level colors.

use std::fmt;
use std::str::FromStr;

use blockmesh_core::{Error, RefinementLevel, Result};
use serde::{Deserialize, Serialize};

/// An RGB color (0-255 per channel).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Red
    pub const RED: Self = Self([255, 0, 0]);
    /// Orange
    pub const ORANGE: Self = Self([255, 165, 0]);
    /// Green
    pub const GREEN: Self = Self([0, 128, 0]);
    /// Blue
    pub const BLUE: Self = Self([0, 0, 255]);
    /// Magenta
    pub const MAGENTA: Self = Self([255, 0, 255]);
    /// Cyan
    pub const CYAN: Self = Self([0, 255, 255]);

    /// Look up a named color.
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Some(Self::RED),
            "orange" => Some(Self::ORANGE),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "magenta" => Some(Self::MAGENTA),
            "cyan" => Some(Self::CYAN),
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Accepts a color name or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(named) = Self::named(s) {
            return Ok(named);
        }

        let invalid = || Error::InvalidConfig(format!("unknown color `{s}`"));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

/// Ordered colors, cycled by refinement level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Rgb::RED,
                Rgb::ORANGE,
                Rgb::GREEN,
                Rgb::BLUE,
                Rgb::MAGENTA,
                Rgb::CYAN,
            ],
        }
    }
}

impl Palette {
    /// Create a palette, rejecting an empty color list.
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidConfig("palette is empty".into()));
        }
        Ok(Self { colors })
    }

    /// Parse a comma-separated list of names or `#rrggbb` values.
    pub fn parse(list: &str) -> Result<Self> {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<Rgb>)
            .collect::<Result<Vec<Rgb>>>()?;
        Self::new(colors)
    }

    /// Color for a level: `colors[level % len]`.
    #[inline]
    pub fn color_for(&self, level: RefinementLevel) -> Rgb {
        self.colors[level as usize % self.colors.len()]
    }

    /// Number of colors
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes hold at least one color.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in order
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}
