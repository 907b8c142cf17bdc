use crate::foundation::core::{Affine, Canvas, Point, Rect};
use crate::foundation::error::{StrataError, StrataResult};
use crate::style::color::{BLACK, Color};

/// Camera settings: output raster size, visible world height and clear color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Output width in pixels.
    pub width_px: u32,
    /// Output height in pixels.
    pub height_px: u32,
    /// Visible world height; the visible width follows from the pixel aspect ratio.
    pub frame_height: f64,
    /// Color behind everything.
    pub background: Color,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width_px: 1280,
            height_px: 720,
            frame_height: 8.0,
            background: BLACK,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> StrataResult<()> {
        if self.width_px == 0 || self.height_px == 0 {
            return Err(StrataError::validation(format!(
                "camera size must be non-zero, got {}x{}",
                self.width_px, self.height_px
            )));
        }
        if !self.frame_height.is_finite() || self.frame_height <= 0.0 {
            return Err(StrataError::validation(format!(
                "camera frame_height must be finite and > 0, got {}",
                self.frame_height
            )));
        }
        Ok(())
    }
}

/// Maps y-up world units onto the y-down pixel grid, centered on the world origin.
#[derive(Clone, Debug)]
pub struct Camera {
    config: CameraConfig,
    pixels_per_unit: f64,
}

impl Camera {
    pub fn new(config: CameraConfig) -> StrataResult<Self> {
        config.validate()?;
        let pixels_per_unit = f64::from(config.height_px) / config.frame_height;
        Ok(Self {
            config,
            pixels_per_unit,
        })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.config.width_px,
            height: self.config.height_px,
        }
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    pub fn frame_height(&self) -> f64 {
        self.config.frame_height
    }

    pub fn frame_width(&self) -> f64 {
        f64::from(self.config.width_px) / self.pixels_per_unit
    }

    /// World rectangle that is visible in the output.
    pub fn visible_rect(&self) -> Rect {
        let (hw, hh) = (self.frame_width() * 0.5, self.frame_height() * 0.5);
        Rect::new(-hw, -hh, hw, hh)
    }

    /// `x_px = (x + W/2)·ppu`, `y_px = (H/2 - y)·ppu`.
    pub fn world_to_pixel(&self) -> Affine {
        let ppu = self.pixels_per_unit;
        Affine::new([
            ppu,
            0.0,
            0.0,
            -ppu,
            self.frame_width() * 0.5 * ppu,
            self.frame_height() * 0.5 * ppu,
        ])
    }

    pub fn to_pixel(&self, p: Point) -> Point {
        self.world_to_pixel() * p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/camera.rs"]
mod tests;
