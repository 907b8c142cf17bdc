use crate::animation::anim::{ActiveAnimation, Animation};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::ids::MobjectId;
use crate::mobject::graph::SceneGraph;
use crate::mobject::node::Mobject;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuRenderer;
use crate::scene::config::SceneConfig;

/// A running scene: the Mobject arena and display list, a frame clock, a renderer and the
/// sink that receives every emitted frame.
///
/// Scripts drive it linearly (`add`, `play`, `dither`, ...). Any error aborts the script; the
/// sink is left without its `end` call.
pub struct Scene<'a> {
    config: SceneConfig,
    graph: SceneGraph,
    renderer: CpuRenderer,
    sink: &'a mut dyn FrameSink,
    clock: FrameIndex,
    emitted: u64,
}

impl std::fmt::Debug for Scene<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("config", &self.config)
            .field("graph", &self.graph)
            .field("clock", &self.clock)
            .field("emitted", &self.emitted)
            .finish_non_exhaustive()
    }
}

impl<'a> Scene<'a> {
    /// Validate `config`, set up the renderer and open the sink.
    pub fn new(config: SceneConfig, sink: &'a mut dyn FrameSink) -> StrataResult<Self> {
        config.validate()?;
        let renderer = CpuRenderer::new(config.camera.clone())?;
        let canvas = renderer.camera().canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: config.fps,
        })?;
        Ok(Self {
            config,
            graph: SceneGraph::new(),
            renderer,
            sink,
            clock: FrameIndex(0),
            emitted: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Take ownership of `m` and display it on top.
    pub fn add(&mut self, m: Mobject) -> MobjectId {
        self.graph.insert_shown(m)
    }

    /// [`Scene::add`] each of `ms` in order.
    pub fn add_all(&mut self, ms: impl IntoIterator<Item = Mobject>) -> Vec<MobjectId> {
        ms.into_iter().map(|m| self.add(m)).collect()
    }

    /// Take ownership of `m` without displaying it; animations show it when they begin.
    pub fn insert(&mut self, m: Mobject) -> MobjectId {
        self.graph.insert(m)
    }

    /// Display `id` on top of everything else.
    pub fn show(&mut self, id: MobjectId) -> StrataResult<()> {
        self.graph.show(id)
    }

    /// Take `id` off the screen; it stays available for later animations.
    pub fn remove(&mut self, id: MobjectId) -> StrataResult<()> {
        self.graph.get(id)?;
        self.graph.hide(id);
        Ok(())
    }

    pub fn mobject(&self, id: MobjectId) -> StrataResult<&Mobject> {
        self.graph.get(id)
    }

    pub fn mobject_mut(&mut self, id: MobjectId) -> StrataResult<&mut Mobject> {
        self.graph.get_mut(id)
    }

    /// Run `anims` concurrently for the longest run time in the batch.
    ///
    /// Emits `round(run_time · fps)` frames (at least one) sampled at `t = k / fps`. Every
    /// animation is updated for the same `t` before the frame is rendered, in batch order, so
    /// when two animations write the same Mobject the later one wins. Afterwards each
    /// animation is finished at `rate(1)`.
    #[tracing::instrument(skip(self, anims), fields(animations = anims.len()))]
    pub fn play(&mut self, anims: Vec<Animation>) -> StrataResult<()> {
        if anims.is_empty() {
            return Err(StrataError::animation("play called with no animations"));
        }
        let mut active = Vec::with_capacity(anims.len());
        for anim in anims {
            active.push(ActiveAnimation::begin(
                anim,
                &mut self.graph,
                self.config.default_run_time,
                &self.config.default_rate,
            )?);
        }

        let run_time = active
            .iter()
            .map(ActiveAnimation::run_time)
            .fold(0.0, f64::max);
        let fps = self.config.fps;
        let frames = fps.secs_to_frames_round(run_time).max(1);
        tracing::debug!(run_time, frames, "playing batch");

        for k in 0..frames {
            let t = fps.frames_to_secs(k);
            for a in &mut active {
                let alpha = a.progress(t);
                a.update(&mut self.graph, alpha)?;
            }
            self.emit_frame()?;
        }
        for a in active {
            a.finish(&mut self.graph)?;
        }
        Ok(())
    }

    /// Hold the current picture for the configured dither time.
    pub fn dither(&mut self) -> StrataResult<()> {
        self.dither_for(self.config.dither_secs)
    }

    /// Hold the current picture for `secs` seconds.
    #[tracing::instrument(skip(self))]
    pub fn dither_for(&mut self, secs: f64) -> StrataResult<()> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(StrataError::animation(format!(
                "dither duration must be finite and >= 0, got {secs}"
            )));
        }
        let frames = self.config.fps.secs_to_frames_round(secs);
        if frames == 0 {
            return Ok(());
        }
        if self.config.skip_rendering {
            self.clock.0 += frames;
            return Ok(());
        }
        let frame = self.capture_frame()?;
        for _ in 0..frames {
            self.push(&frame)?;
        }
        Ok(())
    }

    /// Emit exactly one frame of the current state.
    pub fn show_frame(&mut self) -> StrataResult<()> {
        self.emit_frame()
    }

    /// Render the current state without emitting it or advancing the clock.
    pub fn capture_frame(&mut self) -> StrataResult<FrameRGBA> {
        self.renderer.render(self.graph.displayed())
    }

    /// Bake everything currently displayed into the renderer's background and clear the
    /// display list. Frozen Mobjects stay in the arena but can no longer change on screen.
    #[tracing::instrument(skip(self))]
    pub fn freeze_background(&mut self) -> StrataResult<()> {
        let count = self.graph.display_list().len();
        if !self.config.skip_rendering {
            self.renderer.freeze(self.graph.displayed())?;
        }
        self.graph.clear_display();
        tracing::debug!(mobjects = count, "background frozen");
        Ok(())
    }

    /// Scene time in seconds: frames elapsed on the clock (emitted or skipped) over fps.
    pub fn elapsed_secs(&self) -> f64 {
        self.config.fps.frames_to_secs(self.clock.0)
    }

    /// Frames actually handed to the sink.
    pub fn frames_emitted(&self) -> u64 {
        self.emitted
    }

    /// Close the sink and return the number of emitted frames.
    pub fn finish(self) -> StrataResult<u64> {
        self.sink.end()?;
        tracing::debug!(frames = self.emitted, "scene finished");
        Ok(self.emitted)
    }

    fn emit_frame(&mut self) -> StrataResult<()> {
        if self.config.skip_rendering {
            self.clock.0 += 1;
            return Ok(());
        }
        let frame = self.capture_frame()?;
        self.push(&frame)
    }

    fn push(&mut self, frame: &FrameRGBA) -> StrataResult<()> {
        self.sink.push_frame(self.clock, frame)?;
        self.clock.0 += 1;
        self.emitted += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/player.rs"]
mod tests;
