//! Color types for the recoloring pipeline.
//!
//! Two plain float types: [`Rgb`] for configuration values (the foreground
//! color) and [`Rgba`] for raster pixels. Channels are in `0.0..=1.0`
//! (mapping to `0..255` for 8-bit I/O). Alpha is straight, not
//! premultiplied; compositing code premultiplies internally where needed.

use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a color from a hex string.
#[derive(Debug, Error)]
pub enum ParseColorError {
    /// Input was not 3 or 6 hex digits (after an optional `#`).
    #[error("hex color must be 3 or 6 digits")]
    InvalidLength,

    /// A digit was not valid hexadecimal.
    #[error("invalid hex digit: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// An opaque RGB color.
///
/// Used for configuration values such as the foreground color. Values are
/// gamma-encoded sRGB in the range `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0.0..=1.0)
    pub r: f32,
    /// Green channel (0.0..=1.0)
    pub g: f32,
    /// Blue channel (0.0..=1.0)
    pub b: f32,
}

impl Rgb {
    /// Create a new color from float channels.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to 8-bit channel values, rounding and clamping.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` (shorthand digits
    /// expand as `0xF -> 0xFF`). Case-insensitive; surrounding whitespace
    /// is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use qr_tint::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// A single raster pixel: RGB plus straight (unpremultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel (0.0..=1.0)
    pub r: f32,
    /// Green channel (0.0..=1.0)
    pub g: f32,
    /// Blue channel (0.0..=1.0)
    pub b: f32,
    /// Alpha channel (0.0 transparent ..= 1.0 opaque), straight
    pub a: f32,
}

impl Rgba {
    /// Create a new pixel from float channels.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel from an [`Rgb`] color.
    #[inline]
    pub fn opaque(color: Rgb) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 1.0,
        }
    }

    /// Create a pixel from 8-bit channel values.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Convert to 8-bit channel values, rounding and clamping.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Rec. 709 luma of the RGB channels, ignoring alpha.
    ///
    /// Grey pixels short-circuit to the channel value, so masks derived
    /// from pure black/white input carry exact 0.0/1.0 alpha.
    #[inline]
    pub fn luminance(self) -> f32 {
        if self.r == self.g && self.g == self.b {
            self.r
        } else {
            0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
        }
    }
}
