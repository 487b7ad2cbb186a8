//! Easing curves for scripted camera transitions.
//!
//! Every curve maps progress `t` in [0, 1] to eased progress in [0, 1]
//! with `f(0) = 0` and `f(1) = 1`, so a transition always lands exactly on
//! its destination.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for waypoint transitions.
///
/// Serde uses `snake_case` names so TOML presets stay readable:
/// ```toml
/// [tour]
/// easing = "quadratic_in_out"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out, the "power2.inOut" curve: slow start, fast
    /// middle, slow arrival.
    QuadraticInOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default camera easing: quadratic in-out.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let omt = 1.0 - t;
                    1.0 - 2.0 * omt * omt
                }
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
