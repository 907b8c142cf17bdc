use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, SPACE_WIDTH};
use crate::foundation::error::{StrataError, StrataResult};
use crate::mobject::node::Mobject;
use crate::mobject::shapes::{filled_rectangle, rectangle};
use crate::style::color::{BLUE_A, BLUE_E, Color, YELLOW};

/// How glass rectangles are sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectClass {
    /// Edge-sampled outline.
    #[default]
    Outline,
    /// Grid-sampled interior.
    Filled,
}

impl RectClass {
    /// Rectangle of this class centered at the origin.
    pub fn build(self, width: f64, height: f64, color: Color) -> StrataResult<Mobject> {
        match self {
            Self::Outline => rectangle(width, height, color),
            Self::Filled => filled_rectangle(width, height, color),
        }
    }
}

/// Options of the stratified-glass scenes, fully resolved from documented defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MultilayerConfig {
    /// Number of glass bands.
    pub n_layers: usize,
    /// Color of the top band.
    pub top_color: Color,
    /// Color the bands approach toward the bottom.
    pub bottom_color: Color,
    /// Height of the whole glass stack.
    pub total_glass_height: f64,
    /// Top-center anchor of the stack. Accepts `[x, y]` or `{ "x": .., "y": .. }`.
    #[serde(deserialize_with = "deserialize_point")]
    pub top: Point,
    /// Width of every band.
    pub width: f64,
    /// Rectangle sampling; unset lets each scene pick.
    pub rect_class: Option<RectClass>,
    pub photon_color: Color,
    /// Photon diameter.
    pub photon_size: f64,
}

impl Default for MultilayerConfig {
    fn default() -> Self {
        Self {
            n_layers: 5,
            top_color: BLUE_E,
            bottom_color: BLUE_A,
            total_glass_height: 5.0,
            top: Point::new(0.0, 3.0),
            width: 2.0 * SPACE_WIDTH,
            rect_class: None,
            photon_color: YELLOW,
            photon_size: 0.12,
        }
    }
}

impl MultilayerConfig {
    /// Effective rectangle class ([`RectClass::Outline`] when unset).
    pub fn rect_class(&self) -> RectClass {
        self.rect_class.unwrap_or_default()
    }

    /// Use `class` unless one was chosen explicitly.
    pub fn with_default_rect_class(mut self, class: RectClass) -> Self {
        self.rect_class.get_or_insert(class);
        self
    }

    pub fn validate(&self) -> StrataResult<()> {
        if self.n_layers == 0 {
            return Err(StrataError::validation("n_layers must be >= 1"));
        }
        for (name, v) in [
            ("total_glass_height", self.total_glass_height),
            ("width", self.width),
            ("photon_size", self.photon_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(StrataError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        if !self.top.x.is_finite() || !self.top.y.is_finite() {
            return Err(StrataError::validation("top anchor must be finite"));
        }
        Ok(())
    }
}

fn deserialize_point<'de, D>(deserializer: D) -> Result<Point, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Arr([f64; 2]),
        Obj { x: f64, y: f64 },
    }

    match Repr::deserialize(deserializer)? {
        Repr::Arr([x, y]) | Repr::Obj { x, y } => Ok(Point::new(x, y)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/multilayer/config.rs"]
mod tests;
