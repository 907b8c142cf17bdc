//! Point-set alignment and interpolation used by Transform-style animations.

use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::math::{interpolate, interpolate_point};
use crate::mobject::node::Mobject;

/// Copy of `m` with its whole family ingested into a single point cloud.
pub fn flattened(m: &Mobject) -> Mobject {
    let mut out = m.clone();
    out.ingest_sub_mobjects();
    out
}

/// Resample `m`'s own points to exactly `n` by nearest-index mapping (`i * len / n`), which
/// repeats points when growing and drops evenly spaced points when shrinking.
pub fn resample(m: &mut Mobject, n: usize) -> StrataResult<()> {
    let len = m.len_points();
    if len == n {
        return Ok(());
    }
    if len == 0 {
        return Err(StrataError::alignment(format!(
            "cannot resample empty mobject '{}' to {n} points",
            m.name()
        )));
    }
    let (points, colors) = (0..n)
        .map(|i| {
            let j = i * len / n;
            (m.points()[j], m.colors()[j])
        })
        .unzip();
    m.set_points_and_colors(points, colors);
    Ok(())
}

/// Bring two flattened Mobjects to the same point count (the larger of the two).
///
/// Both empty is fine (nothing to interpolate); exactly one empty cannot be reconciled.
pub fn align_points(a: &mut Mobject, b: &mut Mobject) -> StrataResult<()> {
    match (a.len_points(), b.len_points()) {
        (0, 0) => Ok(()),
        (0, _) | (_, 0) => Err(StrataError::alignment(format!(
            "cannot align '{}' ({} points) with '{}' ({} points)",
            a.name(),
            a.len_points(),
            b.name(),
            b.len_points()
        ))),
        (la, lb) => {
            let n = la.max(lb);
            resample(a, n)?;
            resample(b, n)
        }
    }
}

/// Write the blend of two aligned flat Mobjects into `out` (points, colors, opacity, dot size).
pub fn interpolate_into(start: &Mobject, end: &Mobject, alpha: f64, out: &mut Mobject) {
    debug_assert_eq!(start.len_points(), end.len_points());
    let points = start
        .points()
        .iter()
        .zip(end.points())
        .map(|(a, b)| interpolate_point(*a, *b, alpha))
        .collect();
    let colors = start
        .colors()
        .iter()
        .zip(end.colors())
        .map(|(a, b)| a.interpolate(*b, alpha))
        .collect();
    out.set_points_and_colors(points, colors);
    out.set_own_opacity(interpolate(start.opacity(), end.opacity(), alpha));
    out.set_dot_size(interpolate(start.dot_size(), end.dot_size(), alpha));
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/align.rs"]
mod tests;
