//! Scalar utilities shared by the vector and color types.
//!
//! - Clamping ([`clamp`], [`clamp01`])
//! - Interpolation ([`lerp`], [`lerp_unclamped`], [`inverse_lerp`], [`smoothstep`])
//! - Wraparound ([`repeat`], [`ping_pong`], [`delta_angle`])
//! - Frame smoothing ([`move_towards`], [`smooth_damp`])
//!
//! # Usage
//!
//! ```rust
//! use rastr_math::{lerp, lerp_unclamped, repeat};
//!
//! // `lerp` clamps its parameter, `lerp_unclamped` extrapolates
//! assert_eq!(lerp(0.0, 10.0, 1.5), 10.0);
//! assert_eq!(lerp_unclamped(0.0, 10.0, 1.5), 15.0);
//!
//! // Wrap a hue angle into [0, 360)
//! assert_eq!(repeat(-30.0, 360.0), 330.0);
//! ```

/// Machine epsilon for `f32`, the tolerance used by every degenerate-input check.
pub const EPSILON: f32 = f32::EPSILON;

/// Archimedes' constant.
pub const PI: f32 = std::f32::consts::PI;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Smallest smoothing time accepted by [`smooth_damp`] and `Vec3::smooth_damp`.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Clamps a value to the range [min, max].
///
/// Assumes `min <= max`.
///
/// # Example
///
/// ```rust
/// use rastr_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a value to [0, 1].
#[inline]
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation with `t` clamped to [0, 1].
///
/// # Example
///
/// ```rust
/// use rastr_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, clamp01(t))
}

/// Linear interpolation that extrapolates for `t` outside [0, 1].
#[inline]
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation, clamped to [0, 1].
///
/// Returns 0 when `a` and `b` coincide.
///
/// # Example
///
/// ```rust
/// use rastr_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(3.0, 3.0, 5.0), 0.0);
/// ```
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < EPSILON {
        0.0
    } else {
        clamp01((value - a) / (b - a))
    }
}

/// Hermite smoothstep between `edge0` and `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = inverse_lerp(edge0, edge1, x);
    t * t * (3.0 - 2.0 * t)
}

/// Floored modulo: wraps `value` into `[0, length)`.
///
/// Unlike `%`, negative inputs wrap from the top of the range, so this is the
/// operation used to bring hue angles into `[0, 360)`.
///
/// # Example
///
/// ```rust
/// use rastr_math::repeat;
///
/// assert_eq!(repeat(370.0, 360.0), 10.0);
/// assert_eq!(repeat(-90.0, 360.0), 270.0);
/// assert_eq!(repeat(360.0, 360.0), 0.0);
/// ```
#[inline]
pub fn repeat(value: f32, length: f32) -> f32 {
    let wrapped = value - (value / length).floor() * length;
    // Rounding can land a tiny negative input exactly on `length`.
    if wrapped >= length || wrapped < 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Bounces `value` back and forth in `[0, length]`.
#[inline]
pub fn ping_pong(value: f32, length: f32) -> f32 {
    let t = repeat(value, length * 2.0);
    length - (t - length).abs()
}

/// Shortest signed difference between two angles in degrees, in (-180, 180].
///
/// # Example
///
/// ```rust
/// use rastr_math::delta_angle;
///
/// assert_eq!(delta_angle(350.0, 10.0), 20.0);
/// assert_eq!(delta_angle(10.0, 350.0), -20.0);
/// ```
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = repeat(target - current, 360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Returns `true` when two values differ by less than a magnitude-scaled epsilon.
#[inline]
pub fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(EPSILON * 8.0)
}

/// Moves `current` towards `target` by at most `max_delta`.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Rational approximation of `e^-x` used by the critically damped integrator.
#[inline]
pub(crate) fn damping_decay(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Critically damped smoothing of a scalar towards `target`.
///
/// The scalar counterpart of `Vec3::smooth_damp`; see there for the
/// integrator. `velocity` is caller-owned state carried between frames and
/// `delta_time` is the elapsed time of the current step.
///
/// # Example
///
/// ```rust
/// use rastr_math::smooth_damp;
///
/// let mut velocity = 0.0;
/// let mut x = 0.0;
/// for _ in 0..120 {
///     x = smooth_damp(x, 10.0, &mut velocity, 0.3, None, 1.0 / 60.0);
/// }
/// assert!((x - 10.0).abs() < 0.05);
/// ```
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: Option<f32>,
    delta_time: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = damping_decay(omega * delta_time);

    let max_change = max_speed.unwrap_or(f32::INFINITY) * smooth_time;
    let change = clamp(current - target, -max_change, max_change);
    let original_target = target;
    let target = current - change;

    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (original_target - current > 0.0) == (output > original_target) {
        output = original_target;
        *velocity = if delta_time > EPSILON {
            (output - original_target) / delta_time
        } else {
            0.0
        };
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-5.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
    }

    #[test]
    fn test_lerp_clamps_parameter() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 2.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, -2.0), 2.0);
        assert_eq!(lerp_unclamped(2.0, 4.0, 2.0), 6.0);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat(0.0, 360.0), 0.0);
        assert_eq!(repeat(720.5, 360.0), 0.5);
        assert_eq!(repeat(-360.0, 360.0), 0.0);
        assert_eq!(repeat(-1.0, 360.0), 359.0);
        let tiny = repeat(-1e-9, 360.0);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_ping_pong() {
        assert_eq!(ping_pong(0.5, 1.0), 0.5);
        assert_eq!(ping_pong(1.5, 1.0), 0.5);
        assert_eq!(ping_pong(2.0, 1.0), 0.0);
    }

    #[test]
    fn test_delta_angle() {
        assert_eq!(delta_angle(0.0, 90.0), 90.0);
        assert_eq!(delta_angle(0.0, 270.0), -90.0);
        assert_eq!(delta_angle(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_constants() {
        assert!((180.0 * DEG_TO_RAD - PI).abs() < 1e-6);
        assert!((PI * RAD_TO_DEG - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_smoothstep() {
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn test_move_towards() {
        assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
        assert_eq!(move_towards(0.0, -10.0, 3.0), -3.0);
        assert_eq!(move_towards(9.0, 10.0, 3.0), 10.0);
    }

    #[test]
    fn test_approximately() {
        assert!(approximately(1.0, 1.0 + 1e-7));
        assert!(!approximately(1.0, 1.01));
        assert!(approximately(0.0, 0.0));
    }

    #[test]
    fn test_damping_decay_tracks_exp() {
        for &x in &[0.0_f32, 0.1, 0.5, 1.0] {
            assert!((damping_decay(x) - (-x).exp()).abs() < 0.01);
        }
    }

    #[test]
    fn test_scalar_smooth_damp_converges_without_overshoot() {
        let mut velocity = 0.0;
        let mut x = 0.0;
        for _ in 0..240 {
            x = smooth_damp(x, 5.0, &mut velocity, 0.2, None, 1.0 / 60.0);
            assert!(x <= 5.0);
        }
        assert!((x - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_scalar_smooth_damp_respects_max_speed() {
        let mut velocity = 0.0;
        let x = smooth_damp(0.0, 100.0, &mut velocity, 1.0, Some(1.0), 0.1);
        // Change is limited to max_speed * smooth_time = 1
        assert!(x < 1.0);
        assert!(x > 0.0);
    }
}
