//! Blend modes.
//!
//! `self` is the blend (top) layer and the argument is the base (background).
//! Every mode except [`BlendMode::Additive`] and [`BlendMode::AlphaBlend`]
//! works on RGB only and keeps the top layer's alpha.
//!
//! | Mode | Per channel (`t` top, `b` base) |
//! |------|----------------------------------|
//! | Multiply | `t * b` |
//! | Screen | `1 - (1 - t)(1 - b)` |
//! | Overlay | `b < 0.5 ? 2tb : 1 - 2(1 - t)(1 - b)` |
//! | SoftLight | `t < 0.5 ? 2bt + b²(1 - 2t) : 2b(1 - t) + √b(2t - 1)` |
//! | Additive | `min(t + b, 1)`, alpha included |
//! | AlphaBlend | `t·α + b·(1 - α)`, alpha `α + b.a(1 - α)` |

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::Color;

/// How two colors are combined by [`Color::blend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    /// Darkens: product of channels.
    Multiply,
    /// Lightens: inverse product of inverses.
    Screen,
    /// Multiply or screen depending on the base.
    Overlay,
    /// Gentle overlay with a square-root highlight term.
    SoftLight,
    /// Channel sum, clamped to 1.
    Additive,
    /// Straight-alpha "over" compositing.
    #[default]
    AlphaBlend,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::SoftLight,
        Self::Additive,
        Self::AlphaBlend,
    ];

    /// Lowercase name used by [`fmt::Display`] and [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::SoftLight => "soft-light",
            Self::Additive => "additive",
            Self::AlphaBlend => "alpha",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the [`BlendMode::name`] plus a few common aliases, case-insensitive.
impl FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "multiply" | "mult" => Ok(Self::Multiply),
            "screen" => Ok(Self::Screen),
            "overlay" => Ok(Self::Overlay),
            "soft-light" | "softlight" | "soft_light" => Ok(Self::SoftLight),
            "additive" | "add" => Ok(Self::Additive),
            "alpha" | "alpha-blend" | "alphablend" | "over" => Ok(Self::AlphaBlend),
            _ => Err(ColorError::UnknownBlendMode(s.to_string())),
        }
    }
}

impl Color {
    /// Blends `self` over `background` with `mode`.
    pub fn blend(self, background: Color, mode: BlendMode) -> Color {
        match mode {
            BlendMode::Multiply => self.multiply(background),
            BlendMode::Screen => self.screen(background),
            BlendMode::Overlay => self.overlay(background),
            BlendMode::SoftLight => self.soft_light(background),
            BlendMode::Additive => self.additive(background),
            BlendMode::AlphaBlend => self.alpha_blend(background),
        }
    }

    /// Multiply blend.
    pub fn multiply(self, background: Color) -> Color {
        self.blend_rgb(background, |t, b| t * b)
    }

    /// Screen blend.
    pub fn screen(self, background: Color) -> Color {
        self.blend_rgb(background, |t, b| 1.0 - (1.0 - t) * (1.0 - b))
    }

    /// Overlay blend, branching on the base channel.
    pub fn overlay(self, background: Color) -> Color {
        self.blend_rgb(background, |t, b| {
            if b < 0.5 {
                2.0 * t * b
            } else {
                1.0 - 2.0 * (1.0 - t) * (1.0 - b)
            }
        })
    }

    /// Soft light blend, branching on the top channel.
    pub fn soft_light(self, background: Color) -> Color {
        self.blend_rgb(background, |t, b| {
            if t < 0.5 {
                2.0 * b * t + b * b * (1.0 - 2.0 * t)
            } else {
                2.0 * b * (1.0 - t) + b.max(0.0).sqrt() * (2.0 * t - 1.0)
            }
        })
    }

    /// Channel sum including alpha, clamped to 1.
    pub fn additive(self, background: Color) -> Color {
        Color::new(
            self.r() + background.r(),
            self.g() + background.g(),
            self.b() + background.b(),
            self.a() + background.a(),
        )
    }

    /// Composites `self` over `background` using `self`'s alpha.
    ///
    /// ```rust
    /// use rastr_color::Color;
    ///
    /// let fg = Color::new(1.0, 0.0, 0.0, 0.5);
    /// let out = fg.alpha_blend(Color::BLUE);
    /// assert_eq!(out, Color::new(0.5, 0.0, 0.5, 1.0));
    /// ```
    pub fn alpha_blend(self, background: Color) -> Color {
        let a = self.a();
        let inv = 1.0 - a;
        Color::new(
            self.r() * a + background.r() * inv,
            self.g() * a + background.g() * inv,
            self.b() * a + background.b() * inv,
            a + background.a() * inv,
        )
    }

    fn blend_rgb(self, background: Color, f: impl Fn(f32, f32) -> f32) -> Color {
        Color::new(
            f(self.r(), background.r()),
            f(self.g(), background.g()),
            f(self.b(), background.b()),
            self.a(),
        )
    }
}
