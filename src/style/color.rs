use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::math::interpolate;
use serde::{Deserialize, Serialize};

/// Opaque RGB color with components in `[0, 1]`.
///
/// Fields are crate-private; outside callers go through [`Color::new`], the hex and serde
/// forms, or the palette constants, all of which keep the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub(crate) r: f64,
    pub(crate) g: f64,
    pub(crate) b: f64,
}

pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);
pub const GREY: Color = Color::from_rgb8(0x88, 0x88, 0x88);
pub const YELLOW: Color = Color::from_rgb8(0xFF, 0xFF, 0x00);
pub const RED: Color = Color::from_rgb8(0xFC, 0x62, 0x55);
pub const GREEN: Color = Color::from_rgb8(0x83, 0xC1, 0x67);
pub const BLUE_A: Color = Color::from_rgb8(0xC7, 0xE9, 0xF1);
pub const BLUE_B: Color = Color::from_rgb8(0x9C, 0xDC, 0xEB);
pub const BLUE_C: Color = Color::from_rgb8(0x58, 0xC4, 0xDD);
pub const BLUE_D: Color = Color::from_rgb8(0x29, 0xAB, 0xCA);
pub const BLUE_E: Color = Color::from_rgb8(0x1C, 0x75, 0x8A);

impl Color {
    /// Create a validated color; every component must be finite and in `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> StrataResult<Self> {
        for (name, v) in [("r", r), ("g", g), ("b", b)] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(StrataError::validation(format!(
                    "color component {name}={v} is outside [0, 1]"
                )));
            }
        }
        Ok(Self { r, g, b })
    }

    /// Build a color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub fn r(self) -> f64 {
        self.r
    }

    pub fn g(self) -> f64 {
        self.g
    }

    pub fn b(self) -> f64 {
        self.b
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> StrataResult<Self> {
        parse_hex(s).map_err(StrataError::validation)
    }

    /// Per-channel linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn interpolate(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: interpolate(self.r, other.r, t),
            g: interpolate(self.g, other.g, t),
            b: interpolate(self.b, other.b, t),
        }
    }

    /// Largest per-channel absolute difference.
    pub fn distance(self, other: Color) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// Quantized straight RGB bytes.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    /// Premultiplied RGBA8 with the given opacity.
    pub fn to_rgba8_premul(self, opacity: f64) -> Rgba8Premul {
        let [r, g, b] = self.to_rgb8();
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }

    /// `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        WHITE
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbObj { r: f64, g: f64, b: f64 },
            HslObj { h: f64, s: f64, l: f64 },
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbObj { r, g, b } => {
                Color::new(r, g, b).map_err(|e| serde::de::Error::custom(e.to_string()))
            }
            Repr::HslObj { h, s, l } => Ok(hsl_to_rgb(h, s, l)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => {
                    Color::new(*r, *g, *b).map_err(|e| serde::de::Error::custom(e.to_string()))
                }
                _ => Err(serde::de::Error::custom(
                    "rgb array must have exactly 3 components ([r,g,b])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    let r = hex_byte(&s[0..2])?;
    let g = hex_byte(&s[2..4])?;
    let b = hex_byte(&s[4..6])?;
    Ok(Color::from_rgb8(r, g, b))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Color { r: l, g: l, b: l };
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Color {
        r: hue_to_rgb(p, q, h + 1.0 / 3.0).clamp(0.0, 1.0),
        g: hue_to_rgb(p, q, h).clamp(0.0, 1.0),
        b: hue_to_rgb(p, q, h - 1.0 / 3.0).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
