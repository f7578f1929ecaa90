//! 3D vector type for world-space points and directions.
//!
//! [`Vec3`] carries the full shared vector contract plus the 3D-only pieces:
//! the cross product, plane projection, orthonormalization and the
//! critically damped [`Vec3::smooth_damp`] integrator.
//!
//! # Usage
//!
//! ```rust
//! use rastr_math::Vec3;
//!
//! let up = Vec3::X.cross(Vec3::Y);
//! assert_eq!(up, Vec3::Z);
//!
//! let on_floor = Vec3::new(1.0, 5.0, 2.0).project_on_plane(Vec3::Y);
//! assert_eq!(on_floor, Vec3::new(1.0, 0.0, 2.0));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use tracing::trace;

use crate::error::{check_divisor, MathResult};
use crate::scalar::{
    clamp, clamp01, damping_decay, lerp_unclamped, EPSILON, MIN_SMOOTH_TIME, RAD_TO_DEG,
};
use crate::{Vec2, Vec4};

/// A 3D vector of `f32` components.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use rastr_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 2.0);
/// assert_eq!(v.length(), 3.0);
/// assert_eq!(v[2], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Negative unit X vector.
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);

    /// Negative unit Y vector.
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);

    /// Negative unit Z vector.
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    /// Up (0, 1, 0).
    pub const UP: Self = Self::Y;

    /// Down (0, -1, 0).
    pub const DOWN: Self = Self::NEG_Y;

    /// Left (-1, 0, 0).
    pub const LEFT: Self = Self::NEG_X;

    /// Right (1, 0, 0).
    pub const RIGHT: Self = Self::X;

    /// Forward (0, 0, 1), left-handed view convention.
    pub const FORWARD: Self = Self::Z;

    /// Back (0, 0, -1).
    pub const BACK: Self = Self::NEG_Z;

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Drops `z`.
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Appends a `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-hand rule).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_math::Vec3;
    ///
    /// assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalizes the vector to unit length.
    ///
    /// Returns the zero vector if the length is below [`EPSILON`] or a
    /// component is NaN or infinite, so the result never contains NaN. Finite
    /// vectors whose squared length overflows are rescaled first and still
    /// come out unit length.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > EPSILON && len.is_finite() {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else if len.is_infinite() && self.is_finite() {
            // length_squared overflowed; rescale so the largest component is 1
            let scaled = self * (self.x.abs().max(self.y.abs()).max(self.z.abs())).recip();
            scaled * scaled.length().recip()
        } else {
            Self::ZERO
        }
    }

    /// Normalizes in place.
    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Divides every component by `rhs`.
    ///
    /// # Errors
    ///
    /// [`MathError::DivisionByZero`](crate::MathError::DivisionByZero) when
    /// `|rhs| < EPSILON`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_math::Vec3;
    ///
    /// assert_eq!(Vec3::splat(4.0).checked_div(2.0).unwrap(), Vec3::splat(2.0));
    /// assert!(Vec3::new(1.0, 2.0, 3.0).checked_div(1e-10).is_err());
    /// ```
    #[inline]
    pub fn checked_div(self, rhs: f32) -> MathResult<Self> {
        let d = check_divisor(rhs)?;
        Ok(Self::new(self.x / d, self.y / d, self.z / d))
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Unsigned angle between two vectors in radians.
    ///
    /// The cosine is clamped to [-1, 1] so round-off never takes `acos` out of
    /// its domain. Returns 0 if either vector is shorter than [`EPSILON`] or
    /// has a non-finite component.
    pub fn angle(self, other: Self) -> f32 {
        if !self.is_finite() || !other.is_finite() {
            return 0.0;
        }
        if self.length() < EPSILON || other.length() < EPSILON {
            return 0.0;
        }
        let denom = (self.length_squared() * other.length_squared()).sqrt();
        let cos = if denom.is_finite() {
            self.dot(other) / denom
        } else {
            self.normalize().dot(other.normalize())
        };
        if !cos.is_finite() {
            return 0.0;
        }
        clamp(cos, -1.0, 1.0).acos()
    }

    /// Unsigned angle between two vectors in degrees.
    #[inline]
    pub fn angle_degrees(self, other: Self) -> f32 {
        self.angle(other) * RAD_TO_DEG
    }

    /// Angle in radians from `self` to `other`, signed by the rotation
    /// direction around `axis`.
    #[inline]
    pub fn signed_angle(self, other: Self, axis: Self) -> f32 {
        let angle = self.angle(other);
        if axis.dot(self.cross(other)) < 0.0 { -angle } else { angle }
    }

    /// Projects `self` onto `onto`.
    ///
    /// Returns the zero vector when `|onto|² < EPSILON`.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON {
            Self::ZERO
        } else {
            onto * (self.dot(onto) / len_sq)
        }
    }

    /// Projects `self` onto the plane through the origin with the given normal.
    ///
    /// The normal need not be unit length. A degenerate normal leaves the
    /// vector unchanged.
    #[inline]
    pub fn project_on_plane(self, plane_normal: Self) -> Self {
        self - self.project(plane_normal)
    }

    /// Reflects `self` off the plane with unit normal `normal`.
    ///
    /// `normal` is not renormalized.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    /// Returns some unit vector orthogonal to `self`.
    ///
    /// Returns the zero vector for a zero input.
    #[inline]
    pub fn any_orthogonal(self) -> Self {
        if self.x.abs() > self.z.abs() {
            Self::new(-self.y, self.x, 0.0).normalize()
        } else {
            Self::new(0.0, -self.z, self.y).normalize()
        }
    }

    /// Gram-Schmidt on a pair: normalizes `normal`, then makes `tangent` unit
    /// length and orthogonal to it.
    ///
    /// If `tangent` is parallel to `normal` it is replaced by an arbitrary
    /// orthogonal direction.
    pub fn orthonormalize(normal: &mut Self, tangent: &mut Self) {
        normal.normalize_mut();
        let t = tangent.project_on_plane(*normal).normalize();
        *tangent = if t == Self::ZERO { normal.any_orthogonal() } else { t };
    }

    /// Shortens the vector to `max_length` if it is longer.
    #[inline]
    pub fn clamp_magnitude(self, max_length: f32) -> Self {
        if self.length() > max_length {
            self.normalize() * max_length
        } else {
            self
        }
    }

    /// Linear interpolation with `t` clamped to [0, 1].
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    /// Linear interpolation that extrapolates for `t` outside [0, 1].
    #[inline]
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        Self::new(
            lerp_unclamped(self.x, other.x, t),
            lerp_unclamped(self.y, other.y, t),
            lerp_unclamped(self.z, other.z, t),
        )
    }

    /// Spherical interpolation with `t` clamped to [0, 1].
    #[inline]
    pub fn slerp(self, other: Self, t: f32) -> Self {
        self.slerp_unclamped(other, clamp01(t))
    }

    /// Spherical interpolation.
    ///
    /// The direction rotates from `self` towards `other` at constant angular
    /// speed in the plane they span; the length is the linear interpolation
    /// of the two input lengths, so a slerp between vectors of length 1 and 3
    /// passes through length 2 at `t = 0.5`.
    ///
    /// # Degenerate inputs
    ///
    /// - Either input shorter than [`EPSILON`]: returns the zero vector.
    /// - Opposite inputs: the rotation plane is picked with
    ///   [`Vec3::any_orthogonal`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_math::Vec3;
    ///
    /// let mid = Vec3::X.slerp(Vec3::Y * 3.0, 0.5);
    /// assert!((mid.length() - 2.0).abs() < 1e-5);
    /// assert!((mid.x - mid.y).abs() < 1e-5);
    /// ```
    pub fn slerp_unclamped(self, other: Self, t: f32) -> Self {
        let from_len = self.length();
        let to_len = other.length();
        if from_len < EPSILON || to_len < EPSILON {
            return Self::ZERO;
        }

        let from = self.normalize();
        let to = other.normalize();
        let dot = clamp(from.dot(to), -1.0, 1.0);
        let theta = dot.acos() * t;

        let mut ortho = (to - from * dot).normalize();
        if ortho == Self::ZERO && dot < 0.0 {
            ortho = from.any_orthogonal();
        }

        (from * theta.cos() + ortho * theta.sin()) * lerp_unclamped(from_len, to_len, t)
    }

    /// Moves towards `target` by at most `max_distance`.
    #[inline]
    pub fn move_towards(self, target: Self, max_distance: f32) -> Self {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_distance || dist < EPSILON {
            target
        } else {
            self + delta * (max_distance / dist)
        }
    }

    /// Critically damped smoothing towards `target`.
    ///
    /// Advances one step of a critically damped spring and returns the new
    /// position. Call it once per frame with the same `velocity` binding.
    ///
    /// # Arguments
    ///
    /// * `target` - Position to approach
    /// * `velocity` - Caller-owned velocity, read and updated every step
    /// * `smooth_time` - Approximate time to reach the target; floored at
    ///   [`MIN_SMOOTH_TIME`]
    /// * `max_speed` - Optional speed limit, `None` for unbounded
    /// * `delta_time` - Elapsed time of this step
    ///
    /// # Algorithm
    ///
    /// With `omega = 2 / smooth_time` and `x = omega * dt`, the decay factor is
    /// `1 / (1 + x + 0.48x² + 0.235x³)`, a rational approximation of `e^-x`.
    /// The offset to the target is clamped to `max_speed * smooth_time`. If
    /// the step would overshoot the target, the output is snapped to the
    /// target and the velocity reset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_math::Vec3;
    ///
    /// let target = Vec3::new(10.0, 0.0, 0.0);
    /// let mut velocity = Vec3::ZERO;
    /// let mut pos = Vec3::ZERO;
    /// for _ in 0..120 {
    ///     pos = pos.smooth_damp(target, &mut velocity, 0.25, None, 1.0 / 60.0);
    /// }
    /// assert!(pos.distance(target) < 0.01);
    /// ```
    pub fn smooth_damp(
        self,
        target: Self,
        velocity: &mut Self,
        smooth_time: f32,
        max_speed: Option<f32>,
        delta_time: f32,
    ) -> Self {
        let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
        let omega = 2.0 / smooth_time;
        let decay = damping_decay(omega * delta_time);

        let max_change = max_speed.unwrap_or(f32::INFINITY) * smooth_time;
        let change = (self - target).clamp_magnitude(max_change);
        let original_target = target;
        let target = self - change;

        let temp = (*velocity + change * omega) * delta_time;
        *velocity = (*velocity - temp * omega) * decay;
        let mut output = target + (change + temp) * decay;

        if (original_target - self).dot(output - original_target) > 0.0 {
            trace!(?output, ?original_target, "smooth_damp overshoot clamped");
            output = original_target;
            *velocity = (output - original_target)
                .checked_div(delta_time)
                .unwrap_or(Self::ZERO);
        }

        output
    }

    /// Component-wise product.
    #[inline]
    pub fn scale(self, other: Self) -> Self {
        self * other
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(crate::DISPLAY_PRECISION);
        write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z)
    }
}

impl Hash for Vec3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        crate::hash_component(self.x, state);
        crate::hash_component(self.y, state);
        crate::hash_component(self.z, state);
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vec3 * f32
impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f32 * Vec3
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

// Vec3 / Vec3 (component-wise)
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

/// Widens with `z = 0`.
impl From<Vec2> for Vec3 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

/// Drops `z`.
impl From<Vec3> for Vec2 {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.truncate()
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "glam")]
impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
