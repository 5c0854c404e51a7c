#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

/// RGB color (opaque). Defaults to black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(value: &str) -> Result<Self, ParseColorError> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError {
                value: value.to_owned(),
            });
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError {
                value: value.to_owned(),
            })
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Attach an opacity in percent (clamped to 0–100).
    #[must_use]
    pub const fn with_opacity(self, percent: u8) -> Rgba {
        let percent = if percent > 100 { 100 } else { percent };
        Rgba {
            rgb: self,
            opacity: percent,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// An RGB color with an opacity percentage, used for translucent fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub rgb: Rgb,
    /// Opacity in percent (0–100).
    pub opacity: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgb::new(0, 0, 0).with_opacity(0);

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.opacity == 0
    }

    /// CSS `rgba(...)` form, e.g. `rgba(147, 197, 253, 0.20)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {}.{:02})",
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            self.opacity / 100,
            self.opacity % 100
        )
    }

    /// Blend onto an opaque background.
    #[must_use]
    pub fn over(self, background: Rgb) -> Rgb {
        let a = self.opacity as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (100 - a) + 50) / 100) as u8;
        Rgb::new(
            mix(self.rgb.r, background.r),
            mix(self.rgb.g, background.g),
            mix(self.rgb.b, background.b),
        )
    }
}

/// A string that is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    pub value: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?} (expected #rrggbb)", self.value)
    }
}

impl std::error::Error for ParseColorError {}
