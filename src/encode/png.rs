use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{StrataError, StrataResult};
use crate::render::backend::FrameRGBA;

/// Writes every frame to `<dir>/frame_00000.png`, `frame_00001.png`, … (straight alpha).
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    written: u64,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of files written since `begin`.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Path of the file for frame `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> StrataResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StrataResult<()> {
        write_png(&self.frame_path(idx), frame)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> StrataResult<()> {
        tracing::info!(frames = self.written, dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

/// Keeps a single frame (by index) and writes it as one PNG on `end`.
#[derive(Debug)]
pub struct SingleFrameSink {
    index: FrameIndex,
    out: Option<PathBuf>,
    frame: Option<FrameRGBA>,
}

impl SingleFrameSink {
    /// Capture frame `index`; when `out` is set it is written there on `end`.
    pub fn new(index: FrameIndex, out: Option<PathBuf>) -> Self {
        Self {
            index,
            out,
            frame: None,
        }
    }

    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.frame.as_ref()
    }

    pub fn into_frame(self) -> Option<FrameRGBA> {
        self.frame
    }
}

impl FrameSink for SingleFrameSink {
    fn begin(&mut self, _cfg: SinkConfig) -> StrataResult<()> {
        self.frame = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StrataResult<()> {
        if idx == self.index {
            self.frame = Some(frame.clone());
        }
        Ok(())
    }

    fn end(&mut self) -> StrataResult<()> {
        let Some(out) = &self.out else {
            return Ok(());
        };
        let frame = self.frame.as_ref().ok_or_else(|| {
            StrataError::render(format!("scene never emitted frame {}", self.index.0))
        })?;
        write_png(out, frame)
    }
}

/// Encode `frame` as an RGBA PNG at `path`.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> StrataResult<()> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(StrataError::render(format!(
            "frame buffer has {} bytes, expected {expected}",
            frame.data.len()
        )));
    }
    let rgba = frame.to_straight_rgba();
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
