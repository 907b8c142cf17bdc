use crate::foundation::core::Point;

/// Linear interpolation without clamping `t`; exact at `t == 0` and `t == 1`.
#[inline]
pub fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Pointwise linear interpolation between two points.
#[inline]
pub fn interpolate_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(interpolate(a.x, b.x, t), interpolate(a.y, b.y, t))
}

/// Clamp scalar value to normalized range `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Logistic sigmoid.
#[inline]
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
