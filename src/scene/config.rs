use std::path::Path;

use anyhow::Context as _;

use crate::animation::rate::RateFunc;
use crate::foundation::core::Fps;
use crate::foundation::error::{StrataError, StrataResult};
use crate::multilayer::config::MultilayerConfig;
use crate::render::camera::CameraConfig;

/// Playback and output settings shared by every scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub fps: Fps,
    /// Length of a plain `dither()` hold, in seconds.
    pub dither_secs: f64,
    /// Run time of animations that do not set one.
    pub default_run_time: f64,
    /// What [`RateFunc::Default`] resolves to.
    pub default_rate: RateFunc,
    /// Advance the clock without rasterizing or emitting frames.
    pub skip_rendering: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            fps: Fps::default(),
            dither_secs: 1.0,
            default_run_time: 1.0,
            default_rate: RateFunc::Smooth,
            skip_rendering: false,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> StrataResult<()> {
        self.camera.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.dither_secs.is_finite() || self.dither_secs <= 0.0 {
            return Err(StrataError::validation(format!(
                "dither_secs must be finite and > 0, got {}",
                self.dither_secs
            )));
        }
        if !self.default_run_time.is_finite() || self.default_run_time <= 0.0 {
            return Err(StrataError::validation(format!(
                "default_run_time must be finite and > 0, got {}",
                self.default_run_time
            )));
        }
        Ok(())
    }
}

/// Everything a render invocation can configure: playback plus the glass scenes' options.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub scene: SceneConfig,
    pub layers: MultilayerConfig,
}

impl RenderConfig {
    /// Parse and validate a JSON document; missing keys keep their defaults.
    pub fn from_json_str(s: &str) -> StrataResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| StrataError::serde(format!("invalid render config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> StrataResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> StrataResult<()> {
        self.scene.validate()?;
        self.layers.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
