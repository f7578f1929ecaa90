//! Deterministic inputs shared by the rastr benchmarks.

use rastr_color::Color;
use rastr_math::{Vec3, Vec4};

/// `n` colors sweeping hue, saturation and alpha.
pub fn sample_colors(n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n.max(1) as f32;
            Color::from_hsva(t * 360.0, 0.3 + 0.7 * t, 1.0 - 0.5 * t, 0.25 + 0.75 * t)
        })
        .collect()
}

/// `n` vectors with mixed signs and magnitudes, none zero.
pub fn sample_vec3(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let f = i as f32 + 1.0;
            Vec3::new(f.sin() * f, f.cos(), (f * 0.37).sin() + 1.5)
        })
        .collect()
}

/// Colors as raw [`Vec4`], some channels outside [0, 1].
pub fn sample_vec4(n: usize) -> Vec<Vec4> {
    (0..n)
        .map(|i| {
            let f = i as f32 / n.max(1) as f32;
            Vec4::new(f * 1.2 - 0.1, 1.0 - f, f * f, 0.5 + f * 0.6)
        })
        .collect()
}
