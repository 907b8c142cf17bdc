use crate::animation::rate::RateFunc;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::ids::MobjectId;
use crate::mobject::align::{align_points, flattened, interpolate_into};
use crate::mobject::graph::SceneGraph;
use crate::mobject::node::Mobject;
use crate::style::color::Color;

/// What an [`Animation`] does to its Mobject as progress goes from 0 to 1.
#[derive(Clone, Debug)]
pub enum AnimationKind {
    /// Morph into `target` (points, colors, opacity, dot size). The target itself is never
    /// displayed; on completion the animated Mobject adopts its structure.
    Transform { target: Mobject },
    /// Opacity from 0 up to the Mobject's own opacity.
    FadeIn,
    /// Opacity down to 0, then off the display list.
    FadeOut,
    /// Every point's color toward `color`.
    FadeToColor { color: Color },
    /// Scale up from nothing about the bounding-box center.
    GrowFromCenter,
    /// Reveal points in paint order.
    ShowCreation,
    /// Carry the Mobject's center along `path`'s points.
    MoveAlongPath { path: Mobject },
    /// Translate by `by`.
    Shift { by: Vec2 },
}

/// One animation of a `play` batch: target, behavior, timing.
#[derive(Clone, Debug)]
pub struct Animation {
    mobject: MobjectId,
    kind: AnimationKind,
    run_time: Option<f64>,
    rate: RateFunc,
}

impl Animation {
    /// Animation of `mobject` with the scene's default run time and rate.
    pub fn new(mobject: MobjectId, kind: AnimationKind) -> Self {
        Self {
            mobject,
            kind,
            run_time: None,
            rate: RateFunc::Default,
        }
    }

    pub fn transform(mobject: MobjectId, target: Mobject) -> Self {
        Self::new(mobject, AnimationKind::Transform { target })
    }

    pub fn fade_in(mobject: MobjectId) -> Self {
        Self::new(mobject, AnimationKind::FadeIn)
    }

    pub fn fade_out(mobject: MobjectId) -> Self {
        Self::new(mobject, AnimationKind::FadeOut)
    }

    pub fn fade_to_color(mobject: MobjectId, color: Color) -> Self {
        Self::new(mobject, AnimationKind::FadeToColor { color })
    }

    pub fn grow_from_center(mobject: MobjectId) -> Self {
        Self::new(mobject, AnimationKind::GrowFromCenter)
    }

    pub fn show_creation(mobject: MobjectId) -> Self {
        Self::new(mobject, AnimationKind::ShowCreation)
    }

    pub fn move_along_path(mobject: MobjectId, path: Mobject) -> Self {
        Self::new(mobject, AnimationKind::MoveAlongPath { path })
    }

    pub fn shift(mobject: MobjectId, by: Vec2) -> Self {
        Self::new(mobject, AnimationKind::Shift { by })
    }

    /// Override the run time in seconds.
    pub fn with_run_time(mut self, secs: f64) -> Self {
        self.run_time = Some(secs);
        self
    }

    pub fn with_rate(mut self, rate: RateFunc) -> Self {
        self.rate = rate;
        self
    }

    pub fn mobject(&self) -> MobjectId {
        self.mobject
    }

    pub fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    pub fn run_time(&self) -> Option<f64> {
        self.run_time
    }

    pub fn rate(&self) -> &RateFunc {
        &self.rate
    }
}

#[derive(Debug)]
enum State {
    Transform {
        start: Mobject,
        end: Mobject,
        target: Box<Mobject>,
    },
    Fade {
        opacities: Vec<f64>, // family order
        fade_in: bool,
    },
    FadeToColor {
        colors: Vec<Vec<Color>>, // family order
        color: Color,
    },
    Grow {
        start: Mobject,
        center: Point,
    },
    ShowCreation {
        start: Mobject,
    },
    MoveAlongPath {
        path: Mobject,
    },
    Shift {
        by: Vec2,
        applied: Vec2,
    },
}

/// An [`Animation`] that has snapshotted its start state and is being driven by a scene.
#[derive(Debug)]
pub struct ActiveAnimation {
    mobject: MobjectId,
    run_time: f64,
    rate: RateFunc,
    state: State,
}

impl ActiveAnimation {
    /// Resolve timing defaults, snapshot the start state and make sure the Mobject is shown.
    ///
    /// Transform aligns both point sets here, so an unreconcilable pair fails before any
    /// frame is produced.
    pub fn begin(
        anim: Animation,
        graph: &mut SceneGraph,
        default_run_time: f64,
        default_rate: &RateFunc,
    ) -> StrataResult<Self> {
        let run_time = anim.run_time.unwrap_or(default_run_time);
        if !run_time.is_finite() || run_time <= 0.0 {
            return Err(StrataError::animation(format!(
                "run time for {} must be finite and > 0, got {run_time}",
                anim.mobject
            )));
        }
        let rate = anim.rate.resolve(default_rate);
        let id = anim.mobject;

        let m = graph.get_mut(id)?;
        let state = match anim.kind {
            AnimationKind::Transform { target } => {
                let mut start = flattened(m);
                let mut end = flattened(&target);
                align_points(&mut start, &mut end)?;
                m.clone_from(&start);
                State::Transform {
                    start,
                    end,
                    target: Box::new(target),
                }
            }
            AnimationKind::FadeIn => State::Fade {
                opacities: family_opacities(m),
                fade_in: true,
            },
            AnimationKind::FadeOut => State::Fade {
                opacities: family_opacities(m),
                fade_in: false,
            },
            AnimationKind::FadeToColor { color } => State::FadeToColor {
                colors: m.family().iter().map(|f| f.colors().to_vec()).collect(),
                color,
            },
            AnimationKind::GrowFromCenter => State::Grow {
                center: m.get_center()?,
                start: m.clone(),
            },
            AnimationKind::ShowCreation => State::ShowCreation { start: m.clone() },
            AnimationKind::MoveAlongPath { path } => {
                if path.is_empty() {
                    return Err(StrataError::construction(format!(
                        "path '{}' for {id} has no points",
                        path.name()
                    )));
                }
                m.get_center()?;
                State::MoveAlongPath { path }
            }
            AnimationKind::Shift { by } => State::Shift {
                by,
                applied: Vec2::ZERO,
            },
        };
        graph.ensure_shown(id)?;

        Ok(Self {
            mobject: id,
            run_time,
            rate,
            state,
        })
    }

    pub fn mobject(&self) -> MobjectId {
        self.mobject
    }

    pub fn run_time(&self) -> f64 {
        self.run_time
    }

    /// Progress after `elapsed_secs` of playback: the rate applied to clamped normalized time.
    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        self.rate.eval(elapsed_secs / self.run_time)
    }

    /// Write the state at progress `alpha` into the graph.
    pub fn update(&mut self, graph: &mut SceneGraph, alpha: f64) -> StrataResult<()> {
        let m = graph.get_mut(self.mobject)?;
        match &mut self.state {
            State::Transform { start, end, .. } => interpolate_into(start, end, alpha, m),
            State::Fade { opacities, fade_in } => {
                let k = if *fade_in { alpha } else { 1.0 - alpha };
                let mut i = 0usize;
                m.for_each_family_mut(&mut |f| {
                    if let Some(o) = opacities.get(i) {
                        f.set_own_opacity(o * k);
                    }
                    i += 1;
                });
            }
            State::FadeToColor { colors, color } => {
                let mut i = 0usize;
                m.for_each_family_mut(&mut |f| {
                    if let Some(start) = colors.get(i) {
                        for (c, s) in f.colors_mut().iter_mut().zip(start) {
                            *c = s.interpolate(*color, alpha);
                        }
                    }
                    i += 1;
                });
            }
            State::Grow { start, center } => {
                m.clone_from(start);
                m.scale_about(alpha, *center);
            }
            State::ShowCreation { start } => {
                m.clone_from(start);
                m.for_each_family_mut(&mut |f| {
                    let keep = (f.len_points() as f64 * alpha.clamp(0.0, 1.0)).round() as usize;
                    f.truncate_points(keep);
                });
            }
            State::MoveAlongPath { path } => {
                let to = path.point_from_proportion(alpha)?;
                let from = m.get_center()?;
                m.shift(to - from);
            }
            State::Shift { by, applied } => {
                let next = *by * alpha;
                m.shift(next - *applied);
                *applied = next;
            }
        }
        Ok(())
    }

    /// Apply the final progress `rate(1)` and clean up.
    pub fn finish(mut self, graph: &mut SceneGraph) -> StrataResult<()> {
        let alpha = self.rate.eval(1.0);
        self.update(graph, alpha)?;
        match self.state {
            State::Transform { target, .. } if (alpha - 1.0).abs() < 1e-9 => {
                let m = graph.get_mut(self.mobject)?;
                let name = m.name().to_owned();
                *m = (*target).with_name(name);
            }
            State::Fade { fade_in: false, .. } => graph.hide(self.mobject),
            _ => {}
        }
        Ok(())
    }
}

fn family_opacities(m: &Mobject) -> Vec<f64> {
    m.family().iter().map(|f| f.opacity()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
