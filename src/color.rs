//! Color type, palette table, and input-boundary parsing.
//!
//! The classroom scripts each kept their own module-level table of color
//! tuples; here the palette lives on [`Color`] as associated constants, one
//! canonical copy. Parsing of transport-shaped color strings ("255,0,0",
//! "#ff0000", palette names, bare grayscale levels) also happens here,
//! before any drawing code runs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// An RGB color with 8-bit channels, decoupled from the hardware crate.
///
/// Serializes with named fields, e.g. `{"r":255,"g":0,"b":0}`. Callers that
/// need the bare-triple shape can go through `[u8; 3]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Broadcast a single grayscale level to all three channels.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    // ── Palette ────────────────────────────────────────────────────

    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GREY: Color = Color::new(100, 100, 100);
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Case-insensitive palette lookup ("red", "Grey", "CYAN", ...).
    pub fn by_name(name: &str) -> Option<Color> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "magenta" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            "white" => Self::WHITE,
            "grey" | "gray" => Self::GREY,
            "black" => Self::BLACK,
            _ => return None,
        };
        Some(color)
    }

    /// Apply brightness scaling (0-100) to this color.
    ///
    /// 100 and above is the identity; 0 is black. Scaling is linear per
    /// channel, which is what the Sense HAT's low-light mode amounts to.
    pub fn apply_brightness(self, percent: u8) -> Self {
        if percent >= 100 {
            return self;
        }
        Self {
            r: ((self.r as u16 * percent as u16) / 100) as u8,
            g: ((self.g as u16 * percent as u16) / 100) as u8,
            b: ((self.b as u16 * percent as u16) / 100) as u8,
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Convert to the vendor pixel type at the hardware boundary.
#[cfg(feature = "hardware")]
impl From<Color> for sensehat_screen::PixelColor {
    fn from(c: Color) -> Self {
        sensehat_screen::PixelColor::new(c.r, c.g, c.b)
    }
}

// ── Parsing ────────────────────────────────────────────────────────

/// A color string that fits none of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color {input:?}: expected \"r,g,b\", \"#rrggbb\", a palette name, or a grayscale level")]
pub struct ParseColorError {
    pub input: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse the color shapes callers send over the wire: `"#rrggbb"` hex,
    /// `"r,g,b"` decimal triples, palette names, and bare grayscale levels,
    /// tried in that order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Color::new(channel(0)?, channel(2)?, channel(4)?));
        }

        if trimmed.contains(',') {
            let parts: Vec<&str> = trimmed.split(',').collect();
            if parts.len() != 3 {
                return Err(err());
            }
            let channel = |raw: &str| raw.trim().parse::<u8>().map_err(|_| err());
            return Ok(Color::new(
                channel(parts[0])?,
                channel(parts[1])?,
                channel(parts[2])?,
            ));
        }

        if let Some(named) = Color::by_name(trimmed) {
            return Ok(named);
        }

        trimmed.parse::<u8>().map(Color::gray).map_err(|_| err())
    }
}

// ── Tests ──────────────────────────────────────────────────────────
