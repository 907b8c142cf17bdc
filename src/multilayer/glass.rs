//! Glass stacks: `n` contiguous colored bands, or their continuous-gradient limit.

use crate::foundation::core::{DOWN, Point};
use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::ids::MobjectId;
use crate::mobject::node::Mobject;
use crate::multilayer::config::MultilayerConfig;
use crate::scene::player::Scene;

/// `n` bands of equal height stacked downward from `cfg.top`, with no gaps or overlaps.
///
/// Band `i` is colored `top_color → bottom_color` at fraction `i / n`, so band 0 is exactly
/// `top_color` and `bottom_color` itself is never reached.
pub fn get_layers(cfg: &MultilayerConfig, n: usize) -> StrataResult<Vec<Mobject>> {
    if n == 0 {
        return Err(StrataError::construction(
            "a glass stack needs at least one layer",
        ));
    }
    let height = cfg.total_glass_height / n as f64;
    let class = cfg.rect_class();
    (0..n)
        .map(|i| -> StrataResult<Mobject> {
            let color = cfg
                .top_color
                .interpolate(cfg.bottom_color, i as f64 / n as f64);
            let top = cfg.top + DOWN * (i as f64 * height);
            let mut rect = class
                .build(cfg.width, height, color)?
                .with_name(format!("layer_{i}"));
            let at = rect.get_top()?;
            rect.shift(top - at);
            Ok(rect)
        })
        .collect()
}

/// Bottom-center of the stack.
pub fn glass_bottom(cfg: &MultilayerConfig) -> Point {
    cfg.top + DOWN * cfg.total_glass_height
}

/// One rectangle spanning the whole stack, colored by a top-to-bottom gradient.
pub fn get_continuous_glass(cfg: &MultilayerConfig) -> StrataResult<Mobject> {
    let mut glass = cfg
        .rect_class()
        .build(cfg.width, cfg.total_glass_height, cfg.top_color)?
        .with_name("continuous_glass");
    glass
        .sort_points(|p| -p.y)
        .gradient_highlight(cfg.top_color, cfg.bottom_color);
    let at = glass.get_top()?;
    glass.shift(cfg.top - at);
    Ok(glass)
}

/// Add `cfg.n_layers` bands to `scene` and freeze them into its background.
///
/// The returned ids stay valid for geometry queries after freezing.
pub fn add_layers(
    cfg: &MultilayerConfig,
    scene: &mut Scene<'_>,
) -> StrataResult<Vec<MobjectId>> {
    let ids = scene.add_all(get_layers(cfg, cfg.n_layers)?);
    scene.freeze_background()?;
    Ok(ids)
}

#[cfg(test)]
#[path = "../../tests/unit/multilayer/glass.rs"]
mod tests;
