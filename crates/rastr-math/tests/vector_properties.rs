//! Property checks that hold across all vector dimensions.
//!
//! Inputs are small hand-picked grids rather than random draws so failures
//! reproduce exactly.

use rastr_math::{repeat, MathError, Vec2, Vec3, Vec4, EPSILON};

// ============================================================================
// Sample inputs
// ============================================================================

const SAMPLES: &[[f32; 4]] = &[
    [1.0, 0.0, 0.0, 0.0],
    [0.0, -2.0, 0.0, 0.0],
    [3.0, 4.0, 0.0, 1.0],
    [-1.5, 0.25, 8.0, 2.0],
    [1e-3, 1e-3, -1e-3, 0.5],
    [100.0, -50.0, 25.0, -1.0],
];

fn v2s() -> impl Iterator<Item = Vec2> {
    SAMPLES.iter().map(|s| Vec2::new(s[0], s[1]))
}

fn v3s() -> impl Iterator<Item = Vec3> {
    SAMPLES.iter().map(|s| Vec3::new(s[0], s[1], s[2]))
}

fn v4s() -> impl Iterator<Item = Vec4> {
    SAMPLES.iter().map(|s| Vec4::from_array(*s))
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_is_unit_and_idempotent() {
    for v in v3s() {
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-5, "{v} -> {n}");
        assert!((n.normalize() - n).length() < 1e-6);
    }
    for v in v2s().filter(|v| v.length() > EPSILON) {
        assert!((v.normalize().length() - 1.0).abs() < 1e-5);
    }
    for v in v4s() {
        assert!((v.normalize().length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_normalize_degenerate_is_zero() {
    assert_eq!(Vec2::new(1e-9, 0.0).normalize(), Vec2::ZERO);
    assert_eq!(Vec3::new(0.0, 1e-9, 0.0).normalize(), Vec3::ZERO);
    assert_eq!(Vec4::new(0.0, 0.0, 0.0, 1e-9).normalize(), Vec4::ZERO);
    assert_eq!(Vec3::new(f32::NAN, 0.0, 0.0).normalize(), Vec3::ZERO);
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn test_lerp_endpoints_and_clamping() {
    let pairs: Vec<(Vec3, Vec3)> = v3s().zip(v3s().skip(1)).collect();
    for (a, b) in pairs {
        assert_eq!(a.lerp(b, 0.0), a);
        assert!((a.lerp(b, 1.0) - b).length() < 1e-4);
        assert_eq!(a.lerp(b, -3.0), a.lerp(b, 0.0));
        assert_eq!(a.lerp(b, 7.0), a.lerp(b, 1.0));
    }
}

#[test]
fn test_slerp_endpoints() {
    let pairs: Vec<(Vec3, Vec3)> = v3s().zip(v3s().skip(2)).collect();
    for (a, b) in pairs {
        assert!((a.slerp(b, 0.0) - a).length() < 1e-3 * a.length().max(1.0));
        assert!((a.slerp(b, 1.0) - b).length() < 1e-3 * b.length().max(1.0));
    }
}

// ============================================================================
// Angles and products
// ============================================================================

#[test]
fn test_angle_is_symmetric_and_bounded() {
    let vs: Vec<Vec3> = v3s().collect();
    for a in &vs {
        for b in &vs {
            let ab = a.angle(*b);
            assert!((ab - b.angle(*a)).abs() < 1e-6);
            assert!((0.0..=std::f32::consts::PI + 1e-6).contains(&ab));
        }
    }
}

#[test]
fn test_cross_is_orthogonal() {
    let vs: Vec<Vec3> = v3s().collect();
    for a in &vs {
        for b in &vs {
            let c = a.cross(*b);
            let scale = a.length() * b.length() * c.length();
            assert!(c.dot(*a).abs() <= 1e-4 * scale.max(1.0));
            assert!(c.dot(*b).abs() <= 1e-4 * scale.max(1.0));
        }
    }
}

#[test]
fn test_reflect_preserves_length() {
    let n = Vec3::new(1.0, 1.0, 0.0).normalize();
    for v in v3s() {
        assert!((v.reflect(n).length() - v.length()).abs() < 1e-3 * v.length().max(1.0));
    }
}

// ============================================================================
// Homogeneous coordinates and color packing
// ============================================================================

#[test]
fn test_homogeneous_roundtrip() {
    for p in v3s() {
        for w in [1.0_f32, 2.0, -0.5, 10.0] {
            let h = Vec4::from_point_w(p * w, w);
            let back = h.homogeneous_to_3d();
            assert!((back - p).length() < 1e-4 * p.length().max(1.0), "{p} w={w}");
        }
    }
}

#[test]
fn test_color32_roundtrip_is_exact_on_byte_grid() {
    for packed in [0x00000000u32, 0xFFFFFFFF, 0x80FF4020, 0x01020304, 0xDEADBEEF] {
        let c = Vec4::from_color32(packed);
        // n / 255 * 255 can land just below n; check within one step
        let repacked = c.to_color32();
        for shift in [0, 8, 16, 24] {
            let a = (packed >> shift) & 0xFF;
            let b = (repacked >> shift) & 0xFF;
            assert!(a.abs_diff(b) <= 1, "{packed:08X} vs {repacked:08X}");
        }
    }
}

// ============================================================================
// Errors and wraparound
// ============================================================================

#[test]
fn test_checked_div_rejects_tiny_divisors() {
    for d in [0.0_f32, -0.0, EPSILON / 2.0, f32::NAN] {
        assert!(matches!(
            Vec3::ONE.checked_div(d),
            Err(MathError::DivisionByZero { .. })
        ));
        assert!(Vec2::ONE.checked_div(d).is_err());
        assert!(Vec4::ONE.checked_div(d).is_err());
    }
    assert_eq!(Vec3::ONE.checked_div(2.0), Ok(Vec3::splat(0.5)));
}

#[test]
fn test_repeat_range() {
    for v in [-1000.5_f32, -360.0, -0.001, 0.0, 359.999, 360.0, 1e6] {
        let r = repeat(v, 360.0);
        assert!((0.0..360.0).contains(&r), "{v} -> {r}");
    }
}
