//! RGBA colors as written in CSS, composited down to terminal colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A straight-alpha RGBA color.
///
/// Serialized as its CSS notation, so config files can write
/// `"rgba(244, 114, 182, 0.15)"` or `"#f472b6"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in 0.0-1.0.
    pub a: f32,
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("unrecognized color syntax: {0:?}")]
    Syntax(String),
    #[error("invalid color component: {0:?}")]
    Component(String),
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// CSS `rgba()` notation.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Composite this color onto an opaque background.
    ///
    /// `alpha` scales the color's own alpha (animated opacity, gradient
    /// falloff) and is clamped to 0.0-1.0.
    pub fn blend_over(&self, bg: (u8, u8, u8), alpha: f32) -> (u8, u8, u8) {
        let a = (self.a * alpha).clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        (mix(self.r, bg.0), mix(self.g, bg.1), mix(self.b, bg.2))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl TryFrom<String> for Rgba {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parses `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(ParseColorError::Syntax(s.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| ParseColorError::Component(hex[i..i + 2].to_string()))
            };
            return Ok(Self::opaque(channel(0)?, channel(2)?, channel(4)?));
        }

        let (args, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ParseColorError::Syntax(s.to_string()));
        };
        let args = args
            .strip_suffix(')')
            .ok_or_else(|| ParseColorError::Syntax(s.to_string()))?;

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ParseColorError::Syntax(s.to_string()));
        }

        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|_| ParseColorError::Component(p.to_string()))
        };
        let a = if has_alpha {
            let a: f32 = parts[3]
                .parse()
                .map_err(|_| ParseColorError::Component(parts[3].to_string()))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ParseColorError::Component(parts[3].to_string()));
            }
            a
        } else {
            1.0
        };

        Ok(Self::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            a,
        ))
    }
}
