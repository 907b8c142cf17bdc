//! Strata is a point-cloud 2D animation engine with a CPU rasterizer.
//!
//! Shapes are sampled into colored point clouds ([`Mobject`]), owned by a [`Scene`] and
//! animated in batches. Every played or held frame is rasterized with `vello_cpu` and pushed
//! into a [`FrameSink`].
//!
//! The [`MultilayerScene`] scripts build on this to show light crossing stacked layers of
//! glass whose refractive index grows with depth:
//!
//! - Pick a scene by name with [`MultilayerScene::from_name`]
//! - Load a [`RenderConfig`] (or use the defaults)
//! - Render into a [`PngSequenceSink`], an [`InMemorySink`] or any other [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod encode;
pub(crate) mod mobject;
pub(crate) mod multilayer;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod style;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, DOWN, Fps, FrameIndex, LEFT, ORIGIN, Point, RIGHT, Rect,
    Rgba8Premul, SPACE_HEIGHT, SPACE_WIDTH, UP, Vec2,
};
pub use crate::foundation::error::{StrataError, StrataResult};
pub use crate::foundation::ids::MobjectId;
pub use crate::foundation::math::{clamp01, interpolate, interpolate_point};

pub use crate::style::color::{
    BLACK, BLUE_A, BLUE_B, BLUE_C, BLUE_D, BLUE_E, Color, GREEN, GREY, RED, WHITE, YELLOW,
};

pub use crate::mobject::align::{align_points, flattened, interpolate_into, resample};
pub use crate::mobject::graph::SceneGraph;
pub use crate::mobject::node::{DEFAULT_DOT_SIZE, Mobject};
pub use crate::mobject::shapes::{
    BRACE_BUFF, BRACE_HEIGHT, POINT_DENSITY_1D, POINT_DENSITY_2D, brace, dot, filled_rectangle,
    line, point, polygon, rectangle,
};

pub use crate::animation::anim::{ActiveAnimation, Animation, AnimationKind};
pub use crate::animation::rate::RateFunc;

pub use crate::encode::png::{PngSequenceSink, SingleFrameSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, NullSink, SinkConfig};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::camera::{Camera, CameraConfig};
pub use crate::render::composite::{PremulRgba8, over, over_in_place};
pub use crate::render::cpu::CpuRenderer;

pub use crate::scene::config::{RenderConfig, SceneConfig};
pub use crate::scene::player::Scene;

pub use crate::multilayer::config::{MultilayerConfig, RectClass};
pub use crate::multilayer::glass::{add_layers, get_continuous_glass, get_layers, glass_bottom};
pub use crate::multilayer::photon::{layer_rates, photon, photon_run_along_path, rate_maker};
pub use crate::multilayer::scenes::MultilayerScene;
