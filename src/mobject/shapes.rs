//! Shape constructors. Every shape is a point cloud sampled from its outline (1D shapes)
//! or its interior (filled shapes); all are pure functions of their parameters.

use crate::foundation::core::{Affine, BezPath, DOWN, Point, Vec2};
use crate::foundation::error::{StrataError, StrataResult};
use crate::mobject::node::{DEFAULT_DOT_SIZE, Mobject};
use crate::style::color::{Color, WHITE};
use kurbo::{ParamCurve, ParamCurveArclen};

/// Outline samples per world unit.
pub const POINT_DENSITY_1D: f64 = 60.0;
/// Interior grid samples per world unit (per axis).
pub const POINT_DENSITY_2D: f64 = 25.0;
/// Gap between a brace and the bounds it annotates.
pub const BRACE_BUFF: f64 = 0.25;
/// Depth of a brace from its edge to its tip.
pub const BRACE_HEIGHT: f64 = 0.3;

const ARCLEN_ACCURACY: f64 = 1e-4;

fn check_dimension(what: &str, v: f64) -> StrataResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(StrataError::construction(format!(
            "{what} must be finite and > 0, got {v}"
        )));
    }
    Ok(())
}

fn check_points(points: &[Point]) -> StrataResult<()> {
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(StrataError::construction("shape vertices must be finite"));
    }
    Ok(())
}

/// Sample the segment `[a, b)` at the 1D density.
fn sample_edge(a: Point, b: Point, out: &mut Vec<Point>) {
    let len = (b - a).hypot();
    if len == 0.0 {
        return;
    }
    let n = (len * POINT_DENSITY_1D).ceil().max(1.0) as usize;
    for k in 0..n {
        out.push(a.lerp(b, k as f64 / n as f64));
    }
}

/// Edge-sampled polygon through `vertices`; `closed` adds the edge back to the first vertex.
pub fn polygon(vertices: &[Point], closed: bool, color: Color) -> StrataResult<Mobject> {
    if vertices.len() < 2 {
        return Err(StrataError::construction(
            "polygon needs at least 2 vertices",
        ));
    }
    check_points(vertices)?;

    let mut points = Vec::new();
    for pair in vertices.windows(2) {
        sample_edge(pair[0], pair[1], &mut points);
    }
    if closed {
        sample_edge(vertices[vertices.len() - 1], vertices[0], &mut points);
    } else {
        points.push(vertices[vertices.len() - 1]);
    }
    if points.len() < 2 {
        return Err(StrataError::construction(
            "polygon has zero perimeter",
        ));
    }
    Ok(Mobject::from_points("polygon", points, color))
}

/// Rectangle outline centered at the origin.
pub fn rectangle(width: f64, height: f64, color: Color) -> StrataResult<Mobject> {
    check_dimension("rectangle width", width)?;
    check_dimension("rectangle height", height)?;
    let (hw, hh) = (width * 0.5, height * 0.5);
    let corners = [
        Point::new(-hw, hh),
        Point::new(hw, hh),
        Point::new(hw, -hh),
        Point::new(-hw, -hh),
    ];
    Ok(polygon(&corners, true, color)?.with_name("rectangle"))
}

/// Rectangle interior centered at the origin, sampled on a grid that includes the edges.
///
/// Points are emitted row by row from the top edge down, left to right within a row.
pub fn filled_rectangle(width: f64, height: f64, color: Color) -> StrataResult<Mobject> {
    check_dimension("rectangle width", width)?;
    check_dimension("rectangle height", height)?;
    let cols = ((width * POINT_DENSITY_2D).ceil() as usize).max(1) + 1;
    let rows = ((height * POINT_DENSITY_2D).ceil() as usize).max(1) + 1;
    let dx = width / (cols - 1) as f64;
    let dy = height / (rows - 1) as f64;

    let mut points = Vec::with_capacity(rows * cols);
    for j in 0..rows {
        let y = if j == rows - 1 {
            -height * 0.5
        } else {
            height * 0.5 - j as f64 * dy
        };
        for i in 0..cols {
            let x = if i == cols - 1 {
                width * 0.5
            } else {
                -width * 0.5 + i as f64 * dx
            };
            points.push(Point::new(x, y));
        }
    }
    Ok(Mobject::from_points("filled_rectangle", points, color).with_dot_size(dx.max(dy) * 1.25))
}

/// Straight segment from `start` to `end`.
pub fn line(start: Point, end: Point, color: Color) -> StrataResult<Mobject> {
    if start == end {
        return Err(StrataError::construction("line endpoints coincide"));
    }
    Ok(polygon(&[start, end], false, color)?.with_name("line"))
}

/// Filled disc of `radius` around `center`.
pub fn dot(center: Point, radius: f64, color: Color) -> StrataResult<Mobject> {
    check_dimension("dot radius", radius)?;
    check_points(&[center])?;
    let step = radius / 4.0;
    let mut points = Vec::new();
    for j in -4i32..=4 {
        for i in -4i32..=4 {
            let off = Vec2::new(f64::from(i) * step, f64::from(j) * step);
            if off.hypot() <= radius + 1e-9 {
                points.push(center + off);
            }
        }
    }
    Ok(Mobject::from_points("dot", points, color).with_dot_size(step * 1.25))
}

/// A single point.
pub fn point(at: Point) -> Mobject {
    Mobject::from_points("point", vec![at], WHITE).with_dot_size(DEFAULT_DOT_SIZE)
}

/// Curly bracket spanning `reference`'s bounds across `direction`, sitting [`BRACE_BUFF`]
/// beyond them with its tip pointing along `direction`.
pub fn brace(reference: &Mobject, direction: Vec2) -> StrataResult<Mobject> {
    let len = direction.hypot();
    if !len.is_finite() || len == 0.0 {
        return Err(StrataError::construction(
            "brace direction must be a non-zero vector",
        ));
    }
    let direction = direction / len;

    // Canonical frame: brace lies horizontally below the reference, tip pointing DOWN.
    let to_world = Affine::rotate(direction.atan2() - DOWN.atan2());
    let to_canonical = to_world.inverse();

    let mut iter = reference.family_points().map(|(p, _)| to_canonical * p);
    let first = iter.next().ok_or_else(|| {
        StrataError::construction(format!(
            "brace reference '{}' has no points",
            reference.name()
        ))
    })?;
    let (mut left, mut right, mut bottom) = (first.x, first.x, first.y);
    for p in iter {
        left = left.min(p.x);
        right = right.max(p.x);
        bottom = bottom.min(p.y);
    }
    let span = right - left;
    if span <= 1e-9 {
        return Err(StrataError::construction(
            "brace reference has zero extent across the brace direction",
        ));
    }

    let h = BRACE_HEIGHT.min(span * 0.5);
    let top = bottom - BRACE_BUFF;
    let mid = top - h * 0.5;
    let tip = top - h;
    let cx = (left + right) * 0.5;

    let mut path = BezPath::new();
    path.move_to((left, top));
    path.quad_to((left, mid), (left + h * 0.5, mid));
    path.line_to((cx - h * 0.5, mid));
    path.quad_to((cx, mid), (cx, tip));
    path.quad_to((cx, mid), (cx + h * 0.5, mid));
    path.line_to((right - h * 0.5, mid));
    path.quad_to((right, mid), (right, top));

    let mut points = Vec::new();
    let mut last = None;
    for seg in path.segments() {
        let arclen = seg.arclen(ARCLEN_ACCURACY);
        if arclen == 0.0 {
            continue;
        }
        let n = (arclen * POINT_DENSITY_1D).ceil().max(1.0) as usize;
        for k in 0..n {
            points.push(to_world * seg.eval(k as f64 / n as f64));
        }
        last = Some(seg.end());
    }
    if let Some(end) = last {
        points.push(to_world * end);
    }

    Ok(Mobject::from_points("brace", points, WHITE))
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/shapes.rs"]
mod tests;
