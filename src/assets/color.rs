use crate::foundation::error::{FlyerError, FlyerResult};
use serde::{Deserialize, Serialize};

/// Brightness threshold separating "dark" from "light" backgrounds.
pub const CONTRAST_THRESHOLD: f32 = 128.0;

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Straight-alpha 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const fn opaque(self) -> Rgba {
        self.with_alpha(255)
    }

    /// Parse `#RGB` / `#RRGGBB` (the `#` is optional).
    pub fn from_hex(s: &str) -> FlyerResult<Self> {
        parse_hex_color(s)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Premultiplied `[r, g, b, a]` bytes as stored in the canvas.
    pub fn to_premul(self) -> [u8; 4] {
        let a16 = u16::from(self.a);
        let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }

    pub(crate) fn to_cpu(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.opaque()
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex_color(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) if v.len() == 3 || v.len() == 4 => Ok(Rgb::new(v[0], v[1], v[2])),
            Repr::Arr(_) => Err(serde::de::Error::custom(
                "rgb array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
            )),
        }
    }
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
///
/// The 3-digit form duplicates each nibble (`#fa0` == `#ffaa00`).
pub fn parse_hex_color(s: &str) -> FlyerResult<Rgb> {
    let trimmed = s.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FlyerError::invalid_color(format!(
            "\"{s}\" contains non-hex characters"
        )));
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_owned(),
        n => {
            return Err(FlyerError::invalid_color(format!(
                "\"{s}\" has {n} hex digits, expected #RGB or #RRGGBB"
            )));
        }
    };

    fn hex_byte(pair: &str) -> FlyerResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| FlyerError::invalid_color(format!("invalid hex byte \"{pair}\"")))
    }

    Ok(Rgb::new(
        hex_byte(&expanded[0..2])?,
        hex_byte(&expanded[2..4])?,
        hex_byte(&expanded[4..6])?,
    ))
}

/// Weighted perceptual luminance in `[0, 255]`.
pub fn brightness(color: Rgb) -> f32 {
    0.299 * f32::from(color.r) + 0.587 * f32::from(color.g) + 0.114 * f32::from(color.b)
}

/// Legible text color against `bg`: white on dark backgrounds, black otherwise.
pub fn contrast_color(bg: Rgb) -> Rgb {
    if brightness(bg) < CONTRAST_THRESHOLD {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
