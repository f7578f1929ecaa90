//! # rastr-math
//!
//! Vector algebra for the rastr software renderer.
//!
//! This crate provides the value types every other rastr component is built on:
//!
//! - [`Vec2`] - screen-space points and directions
//! - [`Vec3`] - world-space points and directions, plus the [`Vec3::smooth_damp`] integrator
//! - [`Vec4`] - homogeneous coordinates and raw RGBA storage
//! - Scalar utilities ([`clamp`], [`lerp`], [`repeat`], ...)
//! - [`simd`] - batch helpers over slices of [`Vec4`]
//!
//! # Design
//!
//! All types are plain `Copy` aggregates of `f32`. Operations are pure except
//! the in-place `normalize_mut` and the smoothing integrators, which only
//! touch state the caller passes by `&mut`.
//!
//! Degenerate geometry is handled by policy rather than failure: normalizing,
//! projecting onto, measuring the angle with, or slerping a near-zero vector
//! yields the zero vector (or angle 0). The only hard failure is scalar
//! division by a value smaller than [`EPSILON`], reported as
//! [`MathError::DivisionByZero`].
//!
//! ```rust
//! use rastr_math::{Vec3, Vec4};
//!
//! let n = Vec3::X.cross(Vec3::Y);
//! assert_eq!(n, Vec3::Z);
//!
//! let clip = Vec4::from_point_w(Vec3::new(2.0, 4.0, 6.0), 2.0);
//! assert_eq!(clip.homogeneous_to_3d(), Vec3::new(1.0, 2.0, 3.0));
//!
//! assert!(Vec3::ONE.checked_div(0.0).is_err());
//! ```
//!
//! # Feature Flags
//!
//! - `glam` (default) - `From` conversions to and from `glam` vectors
//! - `serde` - `Serialize`/`Deserialize` for all vector types
//!
//! # Used By
//!
//! - `rastr-color` - `Color` converts to and from [`Vec4`]
//! - `rastr-cli` - the `vec` subcommand

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod scalar;
mod vec2;
mod vec3;
mod vec4;
pub mod simd;

use std::hash::Hasher;

pub use error::{MathError, MathResult};
pub use scalar::*;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Decimal places used by `Display` when no precision is given.
pub const DISPLAY_PRECISION: usize = 3;

/// Feeds one component into a hasher so that `0.0` and `-0.0` hash alike.
#[inline]
pub(crate) fn hash_component<H: Hasher>(v: f32, state: &mut H) {
    state.write_u32((v + 0.0).to_bits());
}

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        clamp, clamp01, lerp, lerp_unclamped, repeat, MathError, MathResult, Vec2, Vec3, Vec4,
        DEG_TO_RAD, EPSILON, PI, RAD_TO_DEG,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hash;

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_hash_agrees_with_signed_zero_equality() {
        let a = Vec3::new(0.0, 1.0, 2.0);
        let b = Vec3::new(-0.0, 1.0, 2.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_hash_distinguishes_components() {
        assert_ne!(hash_of(&Vec2::new(1.0, 2.0)), hash_of(&Vec2::new(2.0, 1.0)));
        assert_ne!(
            hash_of(&Vec4::new(1.0, 2.0, 3.0, 4.0)),
            hash_of(&Vec4::new(1.0, 2.0, 3.0, 5.0))
        );
    }
}
