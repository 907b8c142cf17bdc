use crate::animation::anim::Animation;
use crate::animation::rate::RateFunc;
use crate::foundation::core::Point;
use crate::foundation::error::StrataResult;
use crate::mobject::node::Mobject;
use crate::mobject::shapes::dot;
use crate::multilayer::config::MultilayerConfig;
use crate::scene::player::Scene;

/// A photon dot centered at `at`.
pub fn photon(cfg: &MultilayerConfig, at: Point) -> StrataResult<Mobject> {
    Ok(dot(at, cfg.photon_size * 0.5, cfg.photon_color)?.with_name("photon"))
}

/// Put a photon at the start of `path` and return the animation that carries it to the end.
///
/// The photon is registered with `scene` but only shown once the animation is played.
pub fn photon_run_along_path(
    cfg: &MultilayerConfig,
    scene: &mut Scene<'_>,
    path: Mobject,
    rate: RateFunc,
    run_time: Option<f64>,
) -> StrataResult<Animation> {
    let start = path.point_from_proportion(0.0)?;
    let id = scene.insert(photon(cfg, start)?);
    let anim = Animation::move_along_path(id, path).with_rate(rate);
    Ok(match run_time {
        Some(secs) => anim.with_run_time(secs),
        None => anim,
    })
}

/// `t ↦ min(x²·t, 1)`: faster layers (larger `x`) finish their run sooner.
pub fn rate_maker(x: f64) -> StrataResult<RateFunc> {
    RateFunc::ramp(x)
}

/// Per-layer speed factors `1, 1 + 1/n, …, 2 - 1/n`.
pub fn layer_rates(n: usize) -> Vec<f64> {
    let (min_rate, max_rate) = (1.0, 2.0);
    let step = (max_rate - min_rate) / n as f64;
    (0..n).map(|k| min_rate + k as f64 * step).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/multilayer/photon.rs"]
mod tests;
