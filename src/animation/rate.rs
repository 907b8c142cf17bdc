use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::math::sigmoid;

const SMOOTH_INFLECTION: f64 = 10.0;

/// Rate (easing) function: maps normalized elapsed time `t ∈ [0, 1]` to animation progress.
///
/// Rates are plain data so animation batches can be built, inspected and configured before
/// they are played.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFunc {
    /// Whatever the playing scene is configured to use (see `SceneConfig::default_rate`).
    /// Evaluated standalone it behaves as [`RateFunc::Smooth`].
    #[default]
    Default,
    /// `t`.
    Linear,
    /// Sigmoid ease-in/out, exactly 0 at `t = 0` and 1 at `t = 1`.
    Smooth,
    /// Smooth out to 1 at the midpoint and back to 0.
    ThereAndBack,
    /// First half of [`RateFunc::Smooth`], rescaled: accelerates into the end.
    RushInto,
    /// Second half of [`RateFunc::Smooth`], rescaled: decelerates from the start.
    RushFrom,
    /// `inner` stretched over `[a, b]`; `inner(0)` before `a`, `inner(1)` after `b`.
    /// A zero-width window (`a == b`) evaluates to the constant `a`.
    Squish {
        /// Rate applied inside the window.
        inner: Box<RateFunc>,
        /// Window start.
        a: f64,
        /// Window end.
        b: f64,
    },
    /// `min(x² · t, 1)`: constant-acceleration style ramp that saturates at `t = 1 / x²`.
    Ramp {
        /// Speed factor.
        x: f64,
    },
}

impl RateFunc {
    /// Validated [`RateFunc::Squish`] with `0 <= a <= b <= 1`.
    pub fn squish(inner: RateFunc, a: f64, b: f64) -> StrataResult<Self> {
        if !a.is_finite() || !b.is_finite() || a < 0.0 || b > 1.0 || a > b {
            return Err(StrataError::animation(format!(
                "squish window [{a}, {b}] must satisfy 0 <= a <= b <= 1"
            )));
        }
        Ok(Self::Squish {
            inner: Box::new(inner),
            a,
            b,
        })
    }

    /// Validated [`RateFunc::Ramp`] with finite `x >= 0`.
    pub fn ramp(x: f64) -> StrataResult<Self> {
        if !x.is_finite() || x < 0.0 {
            return Err(StrataError::animation(format!(
                "ramp factor must be finite and >= 0, got {x}"
            )));
        }
        Ok(Self::Ramp { x })
    }

    /// Replace every [`RateFunc::Default`] (including inside squish windows) by `default`.
    pub fn resolve(&self, default: &RateFunc) -> RateFunc {
        match self {
            Self::Default => match default {
                Self::Default => Self::Smooth,
                other => other.resolve(&Self::Smooth),
            },
            Self::Squish { inner, a, b } => Self::Squish {
                inner: Box::new(inner.resolve(default)),
                a: *a,
                b: *b,
            },
            other => other.clone(),
        }
    }

    /// Evaluate at `t`, clamped into `[0, 1]` first.
    pub fn eval(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Default | Self::Smooth => smooth(t),
            Self::Linear => t,
            Self::ThereAndBack => {
                let t = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
                smooth(t)
            }
            Self::RushInto => (2.0 * smooth(t / 2.0)).clamp(0.0, 1.0),
            Self::RushFrom => (2.0 * smooth(t / 2.0 + 0.5) - 1.0).clamp(0.0, 1.0),
            Self::Squish { inner, a, b } => {
                if a == b {
                    *a
                } else if t < *a {
                    inner.eval(0.0)
                } else if t > *b {
                    inner.eval(1.0)
                } else {
                    inner.eval((t - a) / (b - a))
                }
            }
            Self::Ramp { x } => (x * x * t).min(1.0),
        }
    }
}

fn smooth(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let error = sigmoid(-SMOOTH_INFLECTION / 2.0);
    let v = (sigmoid(SMOOTH_INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error);
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rate.rs"]
mod tests;
