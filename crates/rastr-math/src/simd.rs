//! SIMD batch helpers over slices of [`Vec4`].
//!
//! Each [`Vec4`] maps onto one `f32x4` lane group via the `wide` crate, so
//! these run on stable Rust on every target `wide` supports. Results match the
//! scalar methods on [`Vec4`] exactly; only throughput differs.
//!
//! # Example
//!
//! ```rust
//! use rastr_math::Vec4;
//! use rastr_math::simd::{batch_clamp01, batch_to_color32};
//!
//! let pixels = [Vec4::new(1.5, 0.0, -0.2, 1.0), Vec4::new(0.0, 0.0, 1.0, 1.0)];
//! let clamped = batch_clamp01(&pixels);
//! assert_eq!(clamped[0], Vec4::new(1.0, 0.0, 0.0, 1.0));
//! assert_eq!(batch_to_color32(&pixels), vec![0xFFFF0000, 0xFF0000FF]);
//! ```

use tracing::trace;
use wide::f32x4;

use crate::scalar::clamp01;
use crate::Vec4;

/// Lerps 4 lanes: `a + (b - a) * t`, with `t` clamped to [0, 1].
///
/// # Example
///
/// ```rust
/// use rastr_math::simd::lerp_x4;
///
/// let r = lerp_x4(&[0.0, 1.0, 2.0, 3.0], &[4.0, 5.0, 6.0, 7.0], 0.5);
/// assert_eq!(r, [2.0, 3.0, 4.0, 5.0]);
/// ```
#[inline]
pub fn lerp_x4(a: &[f32; 4], b: &[f32; 4], t: f32) -> [f32; 4] {
    let va = f32x4::from(*a);
    let vb = f32x4::from(*b);
    let t = f32x4::splat(clamp01(t));
    (va + (vb - va) * t).to_array()
}

/// Clamps 4 lanes to [0, 1].
#[inline]
pub fn clamp01_x4(values: &[f32; 4]) -> [f32; 4] {
    let v = f32x4::from(*values);
    v.max(f32x4::splat(0.0)).min(f32x4::splat(1.0)).to_array()
}

/// Lerps two slices pairwise. Output length is the shorter input length.
pub fn batch_lerp(a: &[Vec4], b: &[Vec4], t: f32) -> Vec<Vec4> {
    trace!(len = a.len().min(b.len()), t, "simd batch_lerp");
    a.iter()
        .zip(b)
        .map(|(x, y)| Vec4::from_array(lerp_x4(&x.to_array(), &y.to_array(), t)))
        .collect()
}

/// Clamps every component of every vector to [0, 1].
pub fn batch_clamp01(values: &[Vec4]) -> Vec<Vec4> {
    trace!(len = values.len(), "simd batch_clamp01");
    values
        .iter()
        .map(|v| Vec4::from_array(clamp01_x4(&v.to_array())))
        .collect()
}

/// Pairwise dot products. Output length is the shorter input length.
pub fn batch_dot(a: &[Vec4], b: &[Vec4]) -> Vec<f32> {
    trace!(len = a.len().min(b.len()), "simd batch_dot");
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let p = (f32x4::from(x.to_array()) * f32x4::from(y.to_array())).to_array();
            p[0] + p[1] + p[2] + p[3]
        })
        .collect()
}

/// Packs every vector as `0xAARRGGBB`, identical to [`Vec4::to_color32`].
pub fn batch_to_color32(values: &[Vec4]) -> Vec<u32> {
    trace!(len = values.len(), "simd batch_to_color32");
    let scale = f32x4::splat(255.0);
    values
        .iter()
        .map(|v| {
            let c = f32x4::from(clamp01_x4(&v.to_array())) * scale;
            let [r, g, b, a] = c.to_array();
            ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec4> {
        (0..9)
            .map(|i| {
                let f = i as f32 / 8.0;
                Vec4::new(f, 1.0 - f, f * 2.0 - 0.5, 0.5)
            })
            .collect()
    }

    #[test]
    fn test_clamp01_x4() {
        assert_eq!(clamp01_x4(&[-0.1, 0.5, 1.2, 0.8]), [0.0, 0.5, 1.0, 0.8]);
    }

    #[test]
    fn test_lerp_x4_clamps_t() {
        let a = [0.0; 4];
        let b = [1.0; 4];
        assert_eq!(lerp_x4(&a, &b, 2.0), b);
        assert_eq!(lerp_x4(&a, &b, -1.0), a);
    }

    #[test]
    fn test_batch_matches_scalar() {
        let v = sample();
        let w: Vec<Vec4> = v.iter().rev().copied().collect();

        for (got, (x, y)) in batch_lerp(&v, &w, 0.25).iter().zip(v.iter().zip(&w)) {
            assert!((*got - x.lerp(*y, 0.25)).length() < 1e-6);
        }
        for (got, x) in batch_clamp01(&v).iter().zip(&v) {
            assert_eq!(*got, x.clamp_color());
        }
        for (got, (x, y)) in batch_dot(&v, &w).iter().zip(v.iter().zip(&w)) {
            assert!((got - x.dot(*y)).abs() < 1e-5);
        }
        for (got, x) in batch_to_color32(&v).iter().zip(&v) {
            assert_eq!(*got, x.to_color32());
        }
    }

    #[test]
    fn test_batch_uses_shorter_length() {
        let v = sample();
        assert_eq!(batch_dot(&v, &v[..3]).len(), 3);
        assert!(batch_lerp(&[], &v, 0.5).is_empty());
    }
}
