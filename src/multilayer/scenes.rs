//! Scene scripts for the layered-glass light sequence.
//!
//! Each script is a fixed, linear sequence of `add` / `play` / `dither` calls over a
//! [`Scene`]. Text labels are stood in for by plain marker Mobjects (dots, bars, small
//! squares) so every beat still has something to animate.

use crate::animation::anim::Animation;
use crate::animation::rate::RateFunc;
use crate::encode::sink::FrameSink;
use crate::foundation::core::{DOWN, LEFT, Point, RIGHT, SPACE_HEIGHT, Vec2};
use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::ids::MobjectId;
use crate::mobject::node::Mobject;
use crate::mobject::shapes::{brace, dot, filled_rectangle, line, point, polygon};
use crate::multilayer::config::{MultilayerConfig, RectClass};
use crate::multilayer::glass::{add_layers, get_continuous_glass, get_layers, glass_bottom};
use crate::multilayer::photon::{layer_rates, photon_run_along_path, rate_maker};
use crate::scene::config::RenderConfig;
use crate::scene::player::Scene;
use crate::style::color::WHITE;

/// Gap used when placing a marker next to another Mobject.
const MARKER_BUFF: f64 = 0.25;
/// Resolution doublings shown by [`MultilayerScene::LimitingProcess`] before the continuum.
const LIMIT_ITERATIONS: u32 = 3;
/// Latest squish start a staggered entrance may use, so every window keeps a nonzero width.
const STAGGER_SPAN: f64 = 0.8;

/// The registered glass scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultilayerScene {
    /// One slab of glass splits into `n` layers.
    TwoToMany,
    /// A photon races through every layer, faster the deeper it goes.
    RaceLightInLayers,
    /// A brace marks the `n` layers.
    NLayers,
    /// Per-layer velocity markers, photon runs and depth braces for the top three layers.
    ShowLayerVariables,
    /// `n, 2n, 4n` layers, then the continuous gradient.
    LimitingProcess,
}

const ALL: [MultilayerScene; 5] = [
    MultilayerScene::TwoToMany,
    MultilayerScene::RaceLightInLayers,
    MultilayerScene::NLayers,
    MultilayerScene::ShowLayerVariables,
    MultilayerScene::LimitingProcess,
];

impl MultilayerScene {
    pub fn all() -> &'static [Self] {
        &ALL
    }

    /// Kebab-case name used for selection.
    pub fn name(self) -> &'static str {
        match self {
            Self::TwoToMany => "two-to-many",
            Self::RaceLightInLayers => "race-light-in-layers",
            Self::NLayers => "n-layers",
            Self::ShowLayerVariables => "show-layer-variables",
            Self::LimitingProcess => "limiting-process",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::TwoToMany => "a single slab of glass splits into layers",
            Self::RaceLightInLayers => "photons race across every layer",
            Self::NLayers => "a brace marks the n layers",
            Self::ShowLayerVariables => "velocity markers, photon runs and depth braces",
            Self::LimitingProcess => "layers double in number, then become continuous",
        }
    }

    pub fn from_name(name: &str) -> StrataResult<Self> {
        ALL.iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or_else(|| {
                let known: Vec<&str> = ALL.iter().map(|s| s.name()).collect();
                StrataError::validation(format!(
                    "unknown scene '{name}' (known: {})",
                    known.join(", ")
                ))
            })
    }

    /// `base` with this scene's own defaults filled in (every glass scene samples filled
    /// rectangles unless told otherwise).
    pub fn configure(self, base: &MultilayerConfig) -> MultilayerConfig {
        base.clone().with_default_rect_class(RectClass::Filled)
    }

    /// Run this scene's script on `scene`.
    #[tracing::instrument(skip(cfg, scene), fields(scene = self.name()))]
    pub fn construct(self, cfg: &MultilayerConfig, scene: &mut Scene<'_>) -> StrataResult<()> {
        cfg.validate()?;
        let cfg = self.configure(cfg);
        match self {
            Self::TwoToMany => two_to_many(&cfg, scene),
            Self::RaceLightInLayers => race_light_in_layers(&cfg, scene),
            Self::NLayers => n_layers(&cfg, scene),
            Self::ShowLayerVariables => show_layer_variables(&cfg, scene),
            Self::LimitingProcess => limiting_process(&cfg, scene),
        }
    }

    /// Open a scene on `sink`, run the script and close the sink. Returns the frame count.
    pub fn render(self, cfg: &RenderConfig, sink: &mut dyn FrameSink) -> StrataResult<u64> {
        cfg.validate()?;
        let mut scene = Scene::new(cfg.scene.clone(), sink)?;
        self.construct(&cfg.layers, &mut scene)?;
        scene.finish()
    }
}

impl std::fmt::Display for MultilayerScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MultilayerScene {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

fn two_to_many(cfg: &MultilayerConfig, scene: &mut Scene<'_>) -> StrataResult<()> {
    let mut glass = cfg
        .rect_class()
        .build(cfg.width, SPACE_HEIGHT, cfg.top_color)?
        .with_name("glass");
    glass.shift(DOWN * (SPACE_HEIGHT / 2.0));
    let mut layers = get_layers(cfg, cfg.n_layers)?.into_iter();
    let Some(first) = layers.next() else {
        return Err(StrataError::construction("glass stack is empty"));
    };

    let glass = scene.add(glass);
    scene.dither()?;

    let mut anims = Vec::with_capacity(cfg.n_layers);
    let starts = stagger_starts(cfg.n_layers - 1, 0.2);
    for (layer, start) in layers.zip(starts) {
        let id = scene.insert(layer);
        anims.push(
            Animation::fade_in(id).with_rate(RateFunc::squish(RateFunc::Smooth, start, 1.0)?),
        );
    }
    anims.push(Animation::transform(glass, first));
    scene.play(anims)?;
    scene.dither()
}

fn race_light_in_layers(cfg: &MultilayerConfig, scene: &mut Scene<'_>) -> StrataResult<()> {
    let layers = add_layers(cfg, scene)?;
    let path = horizontal_path(cfg, 0.0)?;

    let mut anims = Vec::with_capacity(layers.len());
    for (id, x) in layers.iter().zip(layer_rates(cfg.n_layers)) {
        let center = scene.mobject(*id)?.get_center()?;
        let mut lane = path.clone();
        lane.shift(center.to_vec2());
        anims.push(photon_run_along_path(
            cfg,
            scene,
            lane,
            rate_maker(x)?,
            Some(2.0),
        )?);
    }
    scene.play(anims)
}

fn n_layers(cfg: &MultilayerConfig, scene: &mut Scene<'_>) -> StrataResult<()> {
    add_layers(cfg, scene)?;
    let span = Mobject::group("span", vec![point(cfg.top), point(glass_bottom(cfg))]);
    let brace = brace(&span, RIGHT)?;
    let mut label = count_marker(cfg.n_layers)?;
    label.next_to(&brace, RIGHT, MARKER_BUFF)?;

    scene.dither()?;

    let brace = scene.add(brace);
    scene.show_frame()?;

    let label = scene.insert(label);
    scene.play(vec![
        Animation::grow_from_center(brace),
        Animation::grow_from_center(label),
    ])?;
    scene.dither()
}

struct LayerVariables {
    velocity: MobjectId,
    equals: MobjectId,
    radical: MobjectId,
    path: Mobject,
    brace: MobjectId,
    start_y: MobjectId,
    end_y: Mobject,
}

fn show_layer_variables(cfg: &MultilayerConfig, scene: &mut Scene<'_>) -> StrataResult<()> {
    let layers = add_layers(cfg, scene)?;

    let mut rows = Vec::new();
    for (x, id) in (1u32..).zip(layers.iter().take(3)) {
        let layer = scene.mobject(*id)?;
        let center = layer.get_center()?;
        let bottom = layer.get_bottom()?;
        let color = layer.get_color();

        let anchor = center + LEFT * 2.0;
        let velocity = dot(anchor, 0.08, color)?.with_name(format!("v_{x}"));
        let equals = equals_marker(anchor + Vec2::new(0.25, 0.0))?;
        let radical = radical_marker(anchor + Vec2::new(0.75, 0.0))?;
        let path = horizontal_path(cfg, center.y)?;

        let span = Mobject::group("span", vec![point(cfg.top), point(bottom)]);
        let mut brace = brace(&span, RIGHT)?;
        brace.shift(RIGHT * f64::from(x));

        let mut start_y = depth_marker(x)?;
        start_y.next_to(&brace, RIGHT, MARKER_BUFF)?;
        let mut end_y = depth_marker(x)?;
        end_y.move_to(radical.get_center()? + RIGHT * 0.2)?;

        rows.push(LayerVariables {
            velocity: scene.insert(velocity),
            equals: scene.insert(equals),
            radical: scene.insert(radical),
            path,
            brace: scene.insert(brace),
            start_y: scene.insert(start_y),
            end_y,
        });
    }

    for (row, time) in rows.iter().zip([2.0, 1.0, 0.5]) {
        let run = photon_sweep(cfg, scene, row.path.clone(), time)?;
        scene.play(vec![
            Animation::fade_to_color(row.velocity, WHITE).with_run_time(time),
            run,
        ])?;
    }
    scene.dither()?;

    let starts = stagger_starts(rows.len(), 0.3);
    let grow = |id: MobjectId, start: f64| -> StrataResult<Animation> {
        Ok(Animation::grow_from_center(id)
            .with_rate(RateFunc::squish(RateFunc::Smooth, start, 1.0)?))
    };
    let mut anims = Vec::new();
    for (row, start) in rows.iter().zip(&starts) {
        anims.push(grow(row.start_y, *start)?);
    }
    for (row, start) in rows.iter().zip(&starts) {
        anims.push(grow(row.brace, *start)?);
    }
    scene.play(anims)?;
    scene.dither()?;

    let mut anims = Vec::new();
    for row in &rows {
        let copy = scene.mobject(row.start_y)?.clone();
        let moving = scene.insert(copy);
        anims.push(Animation::show_creation(row.equals));
        anims.push(Animation::show_creation(row.radical));
        anims.push(Animation::transform(moving, row.end_y.clone()));
    }
    scene.play(anims)?;
    scene.dither()
}

fn limiting_process(cfg: &MultilayerConfig, scene: &mut Scene<'_>) -> StrataResult<()> {
    let mut stages = (0..LIMIT_ITERATIONS)
        .map(|x| aligned_layer_set(cfg, 1usize << x))
        .collect::<StrataResult<Vec<_>>>()?;
    stages.push(get_continuous_glass(cfg)?);

    let mut stages = stages.into_iter();
    let Some(first) = stages.next() else {
        return Ok(());
    };
    let current = scene.add(first);
    for stage in stages {
        scene.dither()?;
        scene.play(vec![Animation::transform(current, stage)])?;
    }
    scene.dither()
}

/// Squish starts for `count` staggered entrances, `step` apart. The step shrinks when needed
/// so the last start stays at or below [`STAGGER_SPAN`].
fn stagger_starts(count: usize, step: f64) -> Vec<f64> {
    let step = match count {
        0 | 1 => step,
        n => step.min(STAGGER_SPAN / (n - 1) as f64),
    };
    (0..count).map(|k| k as f64 * step).collect()
}

/// Photon run across `path` over `secs`, at constant speed.
fn photon_sweep(
    cfg: &MultilayerConfig,
    scene: &mut Scene<'_>,
    path: Mobject,
    secs: f64,
) -> StrataResult<Animation> {
    photon_run_along_path(cfg, scene, path, RateFunc::Linear, Some(secs))
}

/// `per · n` thin layers regrouped into `n` bands, each band flattened into one point cloud,
/// so consecutive resolutions line up band by band.
fn aligned_layer_set(cfg: &MultilayerConfig, per: usize) -> StrataResult<Mobject> {
    let mut slices = get_layers(cfg, per * cfg.n_layers)?.into_iter();
    let bands = (0..cfg.n_layers)
        .map(|i| {
            let mut band = Mobject::group(format!("band_{i}"), slices.by_ref().take(per).collect());
            band.ingest_sub_mobjects();
            band
        })
        .collect();
    Ok(Mobject::group(format!("layers_x{per}"), bands))
}

/// Full-width horizontal line at height `y`.
fn horizontal_path(cfg: &MultilayerConfig, y: f64) -> StrataResult<Mobject> {
    let half = cfg.width * 0.5;
    line(Point::new(-half, y), Point::new(half, y), WHITE)
}

/// A column of `n` dots centered on the origin, one per layer.
fn count_marker(n: usize) -> StrataResult<Mobject> {
    let spacing = 0.15;
    let offset = (n as f64 - 1.0) * 0.5;
    let dots = (0..n)
        .map(|k| dot(Point::new(0.0, (offset - k as f64) * spacing), 0.04, WHITE))
        .collect::<StrataResult<Vec<_>>>()?;
    Ok(Mobject::group("layer_count", dots))
}

/// Two short bars starting at `left`.
fn equals_marker(left: Point) -> StrataResult<Mobject> {
    let bar = |dy: f64| line(left + Vec2::new(0.0, dy), left + Vec2::new(0.3, dy), WHITE);
    Ok(Mobject::group("equals", vec![bar(0.06)?, bar(-0.06)?]))
}

/// Square-root sign starting at `left`.
fn radical_marker(left: Point) -> StrataResult<Mobject> {
    let vertices = [
        left + Vec2::new(0.0, 0.0),
        left + Vec2::new(0.1, -0.12),
        left + Vec2::new(0.25, 0.22),
        left + Vec2::new(0.8, 0.22),
    ];
    Ok(polygon(&vertices, false, WHITE)?.with_name("radical"))
}

/// Small square standing in for the depth label `y_x`.
fn depth_marker(x: u32) -> StrataResult<Mobject> {
    Ok(filled_rectangle(0.2, 0.2, WHITE)?.with_name(format!("y_{x}")))
}

#[cfg(test)]
#[path = "../../tests/unit/multilayer/scenes.rs"]
mod tests;
