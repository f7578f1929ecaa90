//! RGB to HSV and HSL conversion.
//!
//! Hue is in degrees, always wrapped into [0, 360). Saturation, value and
//! lightness are in [0, 1]. Grays (no chroma) and black report hue 0.
//!
//! ```rust
//! use rastr_color::Color;
//!
//! let hsv = Color::RED.to_hsv();
//! assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 1.0, 1.0));
//!
//! let back = Color::from_hsv(hsv.h, hsv.s, hsv.v);
//! assert_eq!(back, Color::RED);
//! ```

use std::fmt;

use rastr_math::{clamp01, repeat, EPSILON};

use crate::Color;

/// Hue / saturation / value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees, [0, 360).
    pub h: f32,
    /// Saturation, [0, 1].
    pub s: f32,
    /// Value, [0, 1].
    pub v: f32,
}

/// Hue / saturation / lightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub h: f32,
    /// Saturation, [0, 1].
    pub s: f32,
    /// Lightness, [0, 1].
    pub l: f32,
}

impl Hsv {
    /// Creates an HSV triple as given.
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

impl Hsl {
    /// Creates an HSL triple as given.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// Hue in degrees plus the max and min of R, G, B.
fn hue_max_min(c: &Color) -> (f32, f32, f32) {
    let (r, g, b) = (c.r(), c.g(), c.b());
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta < EPSILON || max < EPSILON {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (repeat(hue, 360.0), max, min)
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = repeat(t, 1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Color {
    /// Converts RGB to HSV. Alpha is dropped.
    pub fn to_hsv(&self) -> Hsv {
        let (h, max, min) = hue_max_min(self);
        let s = if max < EPSILON { 0.0 } else { (max - min) / max };
        Hsv::new(h, s, max)
    }

    /// Opaque color from HSV. Hue wraps; saturation and value are clamped.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        Self::from_hsva(h, s, v, 1.0)
    }

    /// Color from HSV plus alpha.
    pub fn from_hsva(h: f32, s: f32, v: f32, a: f32) -> Self {
        let s = clamp01(s);
        let v = clamp01(v);
        if s < EPSILON {
            return Self::new(v, v, v, a);
        }

        let h = repeat(h, 360.0) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(r, g, b, a)
    }

    /// Converts RGB to HSL. Alpha is dropped.
    pub fn to_hsl(&self) -> Hsl {
        let (h, max, min) = hue_max_min(self);
        let l = (max + min) / 2.0;
        let delta = max - min;
        if delta < EPSILON {
            return Hsl::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        Hsl::new(h, clamp01(s), l)
    }

    /// Opaque color from HSL.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Color from HSL plus alpha.
    pub fn from_hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        let s = clamp01(s);
        let l = clamp01(l);
        if s < EPSILON {
            return Self::new(l, l, l, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = repeat(h, 360.0) / 360.0;

        Self::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        )
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv.h, hsv.s, hsv.v)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl.h, hsl.s, hsl.l)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(rastr_math::DISPLAY_PRECISION);
        write!(f, "HSV({:.*}, {:.*}, {:.*})", p, self.h, p, self.s, p, self.v)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(rastr_math::DISPLAY_PRECISION);
        write!(f, "HSL({:.*}, {:.*}, {:.*})", p, self.h, p, self.s, p, self.l)
    }
}
