//! 2D vector type for screen-space points and directions.
//!
//! # Usage
//!
//! ```rust
//! use rastr_math::Vec2;
//!
//! let a = Vec2::new(3.0, 4.0);
//! assert_eq!(a.length(), 5.0);
//! assert_eq!(Vec2::X.cross(Vec2::Y), 1.0);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{check_divisor, MathResult};
use crate::scalar::{clamp, clamp01, lerp_unclamped, EPSILON, RAD_TO_DEG};

/// A 2D vector of `f32` components.
///
/// Equality is exact per component. Hashing uses the raw component bits
/// (with `-0.0` folded onto `0.0`) so it agrees with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);
    /// Negative unit X vector (-1, 0).
    pub const NEG_X: Self = Self::new(-1.0, 0.0);
    /// Negative unit Y vector (0, -1).
    pub const NEG_Y: Self = Self::new(0.0, -1.0);
    /// Up (0, 1).
    pub const UP: Self = Self::Y;
    /// Down (0, -1).
    pub const DOWN: Self = Self::NEG_Y;
    /// Left (-1, 0).
    pub const LEFT: Self = Self::NEG_X;
    /// Right (1, 0).
    pub const RIGHT: Self = Self::X;

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product: the signed area of the parallelogram spanned by
    /// `self` and `other`. Positive when `other` is counter-clockwise.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
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

    /// Returns a unit vector in the same direction.
    ///
    /// Vectors shorter than [`EPSILON`] or with a NaN or infinite component
    /// become [`Vec2::ZERO`] instead of NaN. Finite vectors too long for
    /// `length_squared` are rescaled first.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > EPSILON && len.is_finite() {
            Self::new(self.x / len, self.y / len)
        } else if len.is_infinite() && self.is_finite() {
            // length_squared overflowed; rescale so the largest component is 1
            let scaled = self * (self.x.abs().max(self.y.abs())).recip();
            scaled * scaled.length().recip()
        } else {
            Self::ZERO
        }
    }

    /// Normalizes in place. Same degenerate policy as [`Vec2::normalize`].
    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Divides by a scalar, failing when `|rhs| < EPSILON`.
    #[inline]
    pub fn checked_div(self, rhs: f32) -> MathResult<Self> {
        let d = check_divisor(rhs)?;
        Ok(Self::new(self.x / d, self.y / d))
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

    /// Unsigned angle between two vectors in radians, in [0, π].
    ///
    /// Returns 0 if either vector is shorter than [`EPSILON`] or not finite.
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

    /// Signed angle in radians from `self` to `other`, positive counter-clockwise.
    #[inline]
    pub fn signed_angle(self, other: Self) -> f32 {
        let angle = self.angle(other);
        if self.cross(other) < 0.0 { -angle } else { angle }
    }

    /// Projects `self` onto `onto`.
    ///
    /// Returns [`Vec2::ZERO`] when `|onto|² < EPSILON`.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON {
            Self::ZERO
        } else {
            onto * (self.dot(onto) / len_sq)
        }
    }

    /// Reflects `self` off the line with unit normal `normal`.
    ///
    /// `normal` is not renormalized.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    /// Counter-clockwise perpendicular (-y, x).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
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
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    /// Linear interpolation that extrapolates outside [0, 1].
    #[inline]
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        Self::new(
            lerp_unclamped(self.x, other.x, t),
            lerp_unclamped(self.y, other.y, t),
        )
    }

    /// Spherical interpolation with `t` clamped to [0, 1].
    #[inline]
    pub fn slerp(self, other: Self, t: f32) -> Self {
        self.slerp_unclamped(other, clamp01(t))
    }

    /// Spherical interpolation: rotates direction at constant angular speed
    /// while the length follows a linear ramp between the input lengths.
    ///
    /// Returns [`Vec2::ZERO`] if either input has zero length. Opposite
    /// inputs rotate counter-clockwise through the perpendicular.
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
            ortho = from.perpendicular();
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

    /// Component-wise product.
    #[inline]
    pub fn scale(self, other: Self) -> Self {
        self * other
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(crate::DISPLAY_PRECISION);
        write!(f, "({:.*}, {:.*})", p, self.x, p, self.y)
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        crate::hash_component(self.x, state);
        crate::hash_component(self.y, state);
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Vec2 * Vec2 (component-wise)
impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

// Vec2 / Vec2 (component-wise)
impl Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        v.to_array()
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(feature = "glam")]
impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> glam::Vec2 {
        glam::Vec2::new(v.x, v.y)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
