//! The [`Color`] value type.
//!
//! # Channel Invariant
//!
//! [`Color::new`] clamps every channel to [0, 1] and stores NaN as 0. Addition and subtraction
//! re-clamp their result. Multiplication (by a color or a scalar) and
//! [`Color::checked_div`] deliberately do not, so intermediate values such as
//! HDR intensity scaling survive until the caller clamps.
//!
//! # Equality
//!
//! Equality is grid-quantized, not an epsilon tolerance: each channel is
//! rounded to the nearest step of a 1/65535 grid and the steps are compared.
//! Quantized equality is an equivalence relation and [`Hash`] uses the same
//! keys, so colors work as map keys. Two channels a hair apart on either side
//! of a rounding boundary land on different steps and compare unequal.
//!
//! ```rust
//! use rastr_color::Color;
//!
//! let a = Color::new(0.5, 0.25, 1.0, 1.0);
//! let b = Color::new(0.5 + 1e-7, 0.25, 1.0, 1.0);
//! assert_eq!(a, b);
//! assert_ne!(a, Color::new(0.51, 0.25, 1.0, 1.0));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use rastr_math::{clamp01, lerp_unclamped, Vec4, DISPLAY_PRECISION};

use crate::error::ColorResult;

/// Rec.601 luma weights for R, G, B.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

const EQ_SCALE: f64 = 65535.0;

/// Clamps to [0, 1] with NaN mapped to 0.
#[inline]
fn channel(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { clamp01(v) }
}

/// An RGBA color with `f32` channels.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ColorRepr", into = "ColorRepr"))]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    /// Pure red.
    pub const RED: Self = Self::from_raw(1.0, 0.0, 0.0, 1.0);
    /// Pure green.
    pub const GREEN: Self = Self::from_raw(0.0, 1.0, 0.0, 1.0);
    /// Pure blue.
    pub const BLUE: Self = Self::from_raw(0.0, 0.0, 1.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_raw(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::from_raw(0.0, 0.0, 0.0, 1.0);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::from_raw(0.5, 0.5, 0.5, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::from_raw(0.0, 0.0, 0.0, 0.0);
    /// Red + green.
    pub const YELLOW: Self = Self::from_raw(1.0, 1.0, 0.0, 1.0);
    /// Green + blue.
    pub const CYAN: Self = Self::from_raw(0.0, 1.0, 1.0, 1.0);
    /// Red + blue.
    pub const MAGENTA: Self = Self::from_raw(1.0, 0.0, 1.0, 1.0);

    /// Creates a color, clamping every channel to [0, 1]. NaN becomes 0.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_raw(channel(r), channel(g), channel(b), channel(a))
    }

    /// Opaque color from RGB.
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Stores channels as given.
    #[inline]
    pub(crate) const fn from_raw(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> f32 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> f32 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> f32 {
        self.b
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(&self) -> f32 {
        self.a
    }

    /// Copy with a different (clamped) alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self::from_raw(self.r, self.g, self.b, channel(a))
    }

    /// `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Largest of R, G, B.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Channel-wise interpolation with `t` clamped to [0, 1].
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    /// Channel-wise interpolation that extrapolates in `t`; the result is
    /// still clamped to [0, 1] per channel.
    #[inline]
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        Self::new(
            lerp_unclamped(self.r, other.r, t),
            lerp_unclamped(self.g, other.g, t),
            lerp_unclamped(self.b, other.b, t),
            lerp_unclamped(self.a, other.a, t),
        )
    }

    /// Rec.601 luma: `0.299 r + 0.587 g + 0.114 b`.
    #[inline]
    pub fn luminance(&self) -> f32 {
        LUMA_WEIGHTS[0] * self.r + LUMA_WEIGHTS[1] * self.g + LUMA_WEIGHTS[2] * self.b
    }

    /// Gray of equal luminance, alpha preserved.
    #[inline]
    pub fn grayscale(self) -> Self {
        let l = self.luminance();
        Self::new(l, l, l, self.a)
    }

    /// `1 - channel` for R, G, B; alpha preserved.
    #[inline]
    pub fn invert(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Decodes gamma-2.2 RGB to linear. Alpha untouched.
    #[inline]
    pub fn gamma_to_linear(self) -> Self {
        Self::from(self.to_vec4().gamma_to_linear())
    }

    /// Encodes linear RGB with gamma 2.2. Alpha untouched.
    #[inline]
    pub fn linear_to_gamma(self) -> Self {
        Self::from(self.to_vec4().linear_to_gamma())
    }

    /// Packs as `0xAARRGGBB`, same layout and truncation as [`Vec4::to_color32`].
    #[inline]
    pub fn to_color32(self) -> u32 {
        self.to_vec4().to_color32()
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub fn from_color32(packed: u32) -> Self {
        Self::from(Vec4::from_color32(packed))
    }

    /// Divides every channel by `rhs` without clamping.
    ///
    /// # Errors
    ///
    /// [`ColorError::Math`](crate::ColorError::Math) when `|rhs|` is below
    /// [`rastr_math::EPSILON`].
    #[inline]
    pub fn checked_div(self, rhs: f32) -> ColorResult<Self> {
        let v = self.to_vec4().checked_div(rhs)?;
        Ok(Self::from_raw(v.x, v.y, v.z, v.w))
    }

    /// Channels as a [`Vec4`], unclamped.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    fn eq_keys(&self) -> [i64; 4] {
        // `as` saturates and maps NaN to 0
        let q = |v: f32| (f64::from(v) * EQ_SCALE).round() as i64;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.eq_keys() == other.eq_keys()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.eq_keys().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DISPLAY_PRECISION);
        write!(
            f,
            "RGBA({:.*}, {:.*}, {:.*}, {:.*})",
            p, self.r, p, self.g, p, self.b, p, self.a
        )
    }
}

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl Mul for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_raw(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

/// Clamps each channel.
impl From<Vec4> for Color {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color> for Vec4 {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_vec4()
    }
}

/// Clamps each channel.
impl From<[f32; 4]> for Color {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

/// Serialized form; deserializing goes back through the clamping constructor.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ColorRepr {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

#[cfg(feature = "serde")]
impl From<ColorRepr> for Color {
    fn from(c: ColorRepr) -> Self {
        Self::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(feature = "serde")]
impl From<Color> for ColorRepr {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}
