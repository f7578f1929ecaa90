//! # rastr-color
//!
//! RGBA color value for the rastr renderer.
//!
//! - [`Color`] - clamped RGBA with arithmetic, interpolation and packing
//! - [`Hsv`] / [`Hsl`] - cylindrical representations
//! - [`BlendMode`] - multiply, screen, overlay, soft light, additive, alpha
//! - Brightness, contrast and saturation adjustments
//! - HTML hex codec (`#RGB`, `#RRGGBB`, `#RRGGBBAA`)
//!
//! # Architecture
//!
//! ```text
//!   rastr-color
//!        |
//!   rastr-math   (Vec4 storage, gamma, 0xAARRGGBB packing, scalar helpers)
//! ```
//!
//! [`Color`] and [`rastr_math::Vec4`] share one packed layout and one gamma
//! curve; `Color` adds the [0, 1] channel invariant and tolerant equality.
//!
//! # Quick Start
//!
//! ```rust
//! use rastr_color::{BlendMode, Color};
//!
//! let base = Color::from_html("#336699");
//! let tint = Color::new(1.0, 0.5, 0.0, 0.25);
//!
//! let out = tint.blend(base, BlendMode::AlphaBlend).adjust_saturation(1.2);
//! println!("{} {}", out, out.to_html_rgb());
//!
//! let hsv = out.to_hsv();
//! let shifted = Color::from_hsv(hsv.h + 180.0, hsv.s, hsv.v);
//! assert_eq!(shifted.a(), 1.0);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Color`], [`Hsv`], [`Hsl`],
//!   [`BlendMode`]; deserializing a `Color` clamps its channels

#![warn(missing_docs)]

mod adjust;
mod blend;
mod color;
mod convert;
pub mod error;
mod html;

pub use blend::BlendMode;
pub use color::{Color, LUMA_WEIGHTS};
pub use convert::{Hsl, Hsv};
pub use error::{ColorError, ColorResult};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{BlendMode, Color, ColorError, ColorResult, Hsl, Hsv};
}
