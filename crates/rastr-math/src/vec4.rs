//! 4D vector type for homogeneous coordinates and raw RGBA storage.
//!
//! [`Vec4`] plays two roles:
//!
//! - **Homogeneous coordinate**: `w = 1` is a point, `w = 0` a direction, any
//!   other non-zero `w` a projective point that [`Vec4::homogeneous_to_3d`]
//!   brings back with a perspective divide.
//! - **RGBA color**: `x, y, z, w` are `r, g, b, a`. Use [`Vec4::r`] and
//!   friends for readability. Unlike `rastr_color::Color`, a `Vec4` never
//!   clamps on its own; call [`Vec4::clamp_color`] when needed.
//!
//! # Packed Color Layout
//!
//! [`Vec4::to_color32`] packs as `0xAARRGGBB`: alpha in the most significant
//! byte, then red, green, blue. Each channel is clamped to [0, 1], scaled by
//! 255 and truncated.
//!
//! ```rust
//! use rastr_math::Vec4;
//!
//! let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
//! assert_eq!(red.to_color32(), 0xFFFF0000);
//! assert_eq!(Vec4::from_color32(0xFFFF0000), red);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{check_divisor, MathResult};
use crate::scalar::{clamp, clamp01, lerp_unclamped, EPSILON, RAD_TO_DEG};
use crate::{Vec2, Vec3};

/// Display gamma used by [`Vec4::gamma_to_linear`] and [`Vec4::linear_to_gamma`].
pub const GAMMA: f32 = 2.2;

/// A 4D vector of `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    /// X component (red in color use)
    pub x: f32,
    /// Y component (green in color use)
    pub y: f32,
    /// Z component (blue in color use)
    pub z: f32,
    /// W component (alpha in color use)
    pub w: f32,
}

impl Vec4 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// One vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Unit Z vector.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Unit W vector, also the homogeneous origin.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    // ------------------------------------------------------------------
    // Homogeneous coordinates
    // ------------------------------------------------------------------

    /// Homogeneous point with `w = 1`.
    #[inline]
    pub const fn from_point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Homogeneous point with an explicit `w`; components are stored as given.
    ///
    /// ```rust
    /// use rastr_math::{Vec3, Vec4};
    ///
    /// let h = Vec4::from_point_w(Vec3::new(2.0, 4.0, 6.0), 2.0);
    /// assert_eq!(h, Vec4::new(2.0, 4.0, 6.0, 2.0));
    /// ```
    #[inline]
    pub const fn from_point_w(p: Vec3, w: f32) -> Self {
        Self::new(p.x, p.y, p.z, w)
    }

    /// Homogeneous direction with `w = 0`; unaffected by translation.
    #[inline]
    pub const fn from_direction(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Leaves homogeneous space.
    ///
    /// Performs the perspective divide `(x/w, y/w, z/w)`. When `|w| < EPSILON`
    /// the vector is a direction and `(x, y, z)` is returned unchanged.
    #[inline]
    pub fn homogeneous_to_3d(self) -> Vec3 {
        if self.w.abs() < EPSILON {
            self.xyz()
        } else {
            Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w)
        }
    }

    /// `w ≈ 0`.
    #[inline]
    pub fn is_direction(self) -> bool {
        self.w.abs() < EPSILON
    }

    /// `w ≈ 1`.
    #[inline]
    pub fn is_position(self) -> bool {
        (self.w - 1.0).abs() < EPSILON
    }

    /// `w` is far enough from zero for a perspective divide.
    #[inline]
    pub fn is_valid_homogeneous(self) -> bool {
        self.w.abs() >= EPSILON
    }

    /// The `(x, y, z)` part, without a divide.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The `(x, y)` part.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    // ------------------------------------------------------------------
    // Color view
    // ------------------------------------------------------------------

    /// Red (alias of `x`).
    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    /// Green (alias of `y`).
    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    /// Blue (alias of `z`).
    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    /// Alpha (alias of `w`).
    #[inline]
    pub const fn a(self) -> f32 {
        self.w
    }

    /// Sets red.
    #[inline]
    pub fn set_r(&mut self, r: f32) {
        self.x = r;
    }

    /// Sets green.
    #[inline]
    pub fn set_g(&mut self, g: f32) {
        self.y = g;
    }

    /// Sets blue.
    #[inline]
    pub fn set_b(&mut self, b: f32) {
        self.z = b;
    }

    /// Sets alpha.
    #[inline]
    pub fn set_a(&mut self, a: f32) {
        self.w = a;
    }

    /// Copy with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.x, self.y, self.z, a)
    }

    /// Decodes gamma-encoded RGB with `c^2.2`. Alpha is untouched, non-positive
    /// channels map to 0.
    #[inline]
    pub fn gamma_to_linear(self) -> Self {
        Self::new(
            decode_gamma(self.x),
            decode_gamma(self.y),
            decode_gamma(self.z),
            self.w,
        )
    }

    /// Encodes linear RGB with `c^(1/2.2)`. Alpha is untouched.
    #[inline]
    pub fn linear_to_gamma(self) -> Self {
        Self::new(
            encode_gamma(self.x),
            encode_gamma(self.y),
            encode_gamma(self.z),
            self.w,
        )
    }

    /// Clamps every component to [0, 1].
    #[inline]
    pub fn clamp_color(self) -> Self {
        Self::new(clamp01(self.x), clamp01(self.y), clamp01(self.z), clamp01(self.w))
    }

    /// Packs as `0xAARRGGBB`, truncating each clamped channel to 8 bits.
    #[inline]
    pub fn to_color32(self) -> u32 {
        let c = self.clamp_color();
        let byte = |v: f32| (v * 255.0) as u32;
        (byte(c.w) << 24) | (byte(c.x) << 16) | (byte(c.y) << 8) | byte(c.z)
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub fn from_color32(packed: u32) -> Self {
        let channel = |shift: u32| ((packed >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0), channel(24))
    }

    // ------------------------------------------------------------------
    // Algebra
    // ------------------------------------------------------------------

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or zero for degenerate input.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > EPSILON && len.is_finite() {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else if len.is_infinite() && self.is_finite() {
            // length_squared overflowed; rescale so the largest component is 1
            let scaled = self * (self.x.abs().max(self.y.abs()).max(self.z.abs()).max(self.w.abs())).recip();
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

    /// Divides by a scalar, failing when `|rhs| < EPSILON`.
    #[inline]
    pub fn checked_div(self, rhs: f32) -> MathResult<Self> {
        let d = check_divisor(rhs)?;
        Ok(Self::new(self.x / d, self.y / d, self.z / d, self.w / d))
    }

    /// Distance.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Squared distance.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Unsigned angle in radians; 0 for short or non-finite input.
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

    /// Unsigned angle in degrees.
    #[inline]
    pub fn angle_degrees(self, other: Self) -> f32 {
        self.angle(other) * RAD_TO_DEG
    }

    /// Projects onto `onto`; zero when `|onto|² < EPSILON`.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq < EPSILON {
            Self::ZERO
        } else {
            onto * (self.dot(onto) / len_sq)
        }
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
            lerp_unclamped(self.z, other.z, t),
            lerp_unclamped(self.w, other.w, t),
        )
    }

    /// Spherical interpolation with `t` clamped to [0, 1].
    #[inline]
    pub fn slerp(self, other: Self, t: f32) -> Self {
        self.slerp_unclamped(other, clamp01(t))
    }

    /// Spherical interpolation with linearly interpolated length.
    ///
    /// Zero-length inputs give the zero vector. Exactly opposite inputs have
    /// no defined rotation plane in 4D; the direction then shrinks through
    /// the origin along `self` instead of producing NaN.
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
        let ortho = (to - from * dot).normalize();

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
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

#[inline]
fn decode_gamma(v: f32) -> f32 {
    if v <= 0.0 { 0.0 } else { v.powf(GAMMA) }
}

#[inline]
fn encode_gamma(v: f32) -> f32 {
    if v <= 0.0 { 0.0 } else { v.powf(1.0 / GAMMA) }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(crate::DISPLAY_PRECISION);
        write!(
            f,
            "({:.*}, {:.*}, {:.*}, {:.*})",
            p, self.x, p, self.y, p, self.z, p, self.w
        )
    }
}

impl Hash for Vec4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        crate::hash_component(self.x, state);
        crate::hash_component(self.y, state);
        crate::hash_component(self.z, state);
        crate::hash_component(self.w, state);
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

impl Div for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

/// Widens with `w = 0` (a direction).
impl From<Vec3> for Vec4 {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::from_direction(v)
    }
}

/// Widens with `z = 0, w = 0`.
impl From<Vec2> for Vec4 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0, 0.0)
    }
}

/// Drops `w` without a perspective divide.
impl From<Vec4> for Vec3 {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.xyz()
    }
}

/// Drops `z` and `w`.
impl From<Vec4> for Vec2 {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.xy()
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

#[cfg(feature = "glam")]
impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        glam::Vec4::from_array(v.to_array())
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Vec4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec4_normalize_mut() {
        let mut v = Vec4::new(0.0, 0.0, -5.0, 0.0);
        v.normalize_mut();
        assert_eq!(v, Vec4::new(0.0, 0.0, -1.0, 0.0));

        let mut tiny = Vec4::splat(1e-9);
        tiny.normalize_mut();
        assert_eq!(tiny, Vec4::ZERO);
    }

    #[test]
    fn test_vec4_huge_finite_vectors() {
        let n = Vec4::new(2e19, 0.0, 0.0, 0.0).normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n, Vec4::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec4::new(3e30, 4e30, 0.0, 0.0).normalize(), Vec4::new(0.6, 0.8, 0.0, 0.0), epsilon = 1e-6);

        let c = Vec4::new(1e20, 0.0, 0.0, 0.0).clamp_magnitude(1.0);
        assert_abs_diff_eq!(c, Vec4::X, epsilon = 1e-6);
        let c = Vec4::new(1e25, 0.0, 0.0, 0.0).clamp_magnitude(1e20);
        assert_abs_diff_eq!(c.x / 1e20, 1.0, epsilon = 1e-5);

        let a = Vec4::new(1e20, 0.0, 0.0, 0.0).angle_degrees(Vec4::new(1e20, 1e20, 0.0, 0.0));
        assert_abs_diff_eq!(a, 45.0, epsilon = 1e-3);
        assert_eq!(Vec4::new(f32::NAN, 1.0, 0.0, 0.0).angle(Vec4::X), 0.0);
    }

    #[test]
    fn test_homogeneous_roundtrip() {
        let h = Vec4::from_point_w(Vec3::new(2.0, 4.0, 6.0), 2.0);
        assert_eq!(h, Vec4::new(2.0, 4.0, 6.0, 2.0));
        assert_eq!(h.homogeneous_to_3d(), Vec3::new(1.0, 2.0, 3.0));

        let p = Vec3::new(-1.5, 0.25, 8.0);
        assert_eq!(Vec4::from_point(p).homogeneous_to_3d(), p);
    }

    #[test]
    fn test_direction_skips_divide() {
        let d = Vec4::from_direction(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(d.w, 0.0);
        assert_eq!(d.homogeneous_to_3d(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_homogeneous_classification() {
        let point = Vec4::from_point(Vec3::ONE);
        let dir = Vec4::from_direction(Vec3::ONE);
        let proj = Vec4::new(1.0, 1.0, 1.0, 3.0);

        assert!(point.is_position() && !point.is_direction() && point.is_valid_homogeneous());
        assert!(dir.is_direction() && !dir.is_position() && !dir.is_valid_homogeneous());
        assert!(!proj.is_direction() && !proj.is_position() && proj.is_valid_homogeneous());
        assert!(Vec4::new(0.0, 0.0, 0.0, 1e-9).is_direction());
    }

    #[test]
    fn test_color_aliases() {
        let mut c = Vec4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.1, 0.2, 0.3, 0.4));
        c.set_a(1.0);
        c.set_r(0.9);
        assert_eq!(c, Vec4::new(0.9, 0.2, 0.3, 1.0));
        assert_eq!(c.with_alpha(0.0).w, 0.0);
    }

    #[test]
    fn test_color32_layout() {
        assert_eq!(Vec4::new(1.0, 0.0, 0.0, 1.0).to_color32(), 0xFFFF0000);
        assert_eq!(Vec4::new(0.0, 1.0, 0.0, 0.0).to_color32(), 0x0000FF00);
        assert_eq!(Vec4::new(0.0, 0.0, 1.0, 0.5).to_color32(), 0x7F0000FF);
        // Out of range channels are clamped first
        assert_eq!(Vec4::new(2.0, -1.0, 0.0, 1.0).to_color32(), 0xFFFF0000);
    }

    #[test]
    fn test_color32_truncates() {
        // 0.999 * 255 = 254.745 truncates to 254, not 255
        assert_eq!(Vec4::new(0.999, 0.0, 0.0, 0.0).to_color32(), 0x00FE0000);
    }

    #[test]
    fn test_color32_roundtrip() {
        let c = Vec4::new(0.2, 0.4, 0.6, 0.8);
        let back = Vec4::from_color32(c.to_color32());
        assert_abs_diff_eq!(back, c, epsilon = 1.0 / 255.0);
    }

    #[test]
    fn test_gamma_roundtrip_leaves_alpha() {
        let c = Vec4::new(0.5, 0.25, 1.0, 0.3);
        let lin = c.gamma_to_linear();
        assert_eq!(lin.w, 0.3);
        assert_abs_diff_eq!(lin.x, 0.5f32.powf(2.2), epsilon = 1e-6);
        assert_abs_diff_eq!(lin.linear_to_gamma(), c, epsilon = 1e-5);
        assert_eq!(Vec4::new(-0.5, 0.0, 0.0, 1.0).gamma_to_linear().x, 0.0);
    }

    #[test]
    fn test_clamp_color_is_explicit() {
        let v = Vec4::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(v.x, 1.5);
        assert_eq!(v.clamp_color(), Vec4::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_vec4_algebra() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.dot(Vec4::ONE), 10.0);
        assert_eq!(Vec4::new(2.0, 0.0, 0.0, 0.0).normalize(), Vec4::X);
        assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
        assert!(a.checked_div(0.0).is_err());
        assert_abs_diff_eq!(Vec4::X.angle(Vec4::W), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(a.project(Vec4::ZERO), Vec4::ZERO);
        assert_eq!(Vec4::X.lerp(Vec4::W, 2.0), Vec4::W);
    }

    #[test]
    fn test_vec4_slerp_opposite_stays_finite() {
        let r = Vec4::X.slerp(-Vec4::X, 0.5);
        assert!(r.is_finite());
    }

    #[test]
    fn test_vec4_conversions() {
        let v3 = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec4::from(v3), Vec4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vec4::from(Vec2::new(1.0, 2.0)), Vec4::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(Vec3::from(Vec4::new(2.0, 4.0, 6.0, 2.0)), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec2::from(Vec4::new(2.0, 4.0, 6.0, 2.0)), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_vec4_display() {
        assert_eq!(
            Vec4::new(1.0, 0.5, 0.25, 0.0).to_string(),
            "(1.000, 0.500, 0.250, 0.000)"
        );
    }
}
