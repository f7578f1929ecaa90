//! Integration tests for rastr crates.
//!
//! End-to-end checks of how rastr-math and rastr-color fit together: serde
//! round trips, vector/color interplay and glam interop.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rastr_color::{BlendMode, Color, Hsl, Hsv};
    use rastr_math::{simd, Vec2, Vec3, Vec4};
    use serde::{Deserialize, Serialize};

    /// A scene-ish record mixing every value type.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Material {
        name: String,
        albedo: Color,
        emission: Vec4,
        uv_scale: Vec2,
        normal: Vec3,
        blend: BlendMode,
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let m = Material {
            name: "brick".into(),
            albedo: Color::from_html("#B5523B"),
            emission: Vec4::new(0.0, 0.1, 0.2, 1.0),
            uv_scale: Vec2::new(2.0, 0.5),
            normal: Vec3::UP,
            blend: BlendMode::SoftLight,
        };

        let json = serde_json::to_string(&m).expect("serialize");
        let back: Material = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, m);
    }

    #[test]
    fn test_vector_json_shape() {
        let v = serde_json::to_value(Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(v, serde_json::json!({ "x": 1.0, "y": 2.0, "z": 3.0 }));

        let c = serde_json::to_value(Color::RED).unwrap();
        assert_eq!(c, serde_json::json!({ "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 }));
    }

    #[test]
    fn test_color_deserialize_clamps() {
        let c: Color = serde_json::from_str(r#"{"r":2.0,"g":-1.0,"b":0.5,"a":1.0}"#).unwrap();
        assert_eq!(c, Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_hsv_hsl_serde() {
        let hsv = Color::from_html("#40C080").to_hsv();
        let back: Hsv = serde_json::from_str(&serde_json::to_string(&hsv).unwrap()).unwrap();
        assert_eq!(back, hsv);

        let hsl: Hsl = serde_json::from_str(r#"{"h":120.0,"s":1.0,"l":0.5}"#).unwrap();
        assert_eq!(Color::from(hsl), Color::GREEN);
    }

    #[test]
    fn test_color_and_vec4_share_packing() {
        for hex in ["#FF8000", "#12345678", "#000000", "#FFFFFF00"] {
            let c = Color::from_html(hex);
            let v = Vec4::from(c);
            assert_eq!(c.to_color32(), v.to_color32(), "{hex}");
            assert_eq!(Color::from(Vec4::from_color32(v.to_color32())), c, "{hex}");
        }
    }

    #[test]
    fn test_simd_packing_matches_color() {
        let colors: Vec<Color> = (0..37)
            .map(|i| Color::from_hsva(i as f32 * 10.0, 0.8, 0.9, i as f32 / 36.0))
            .collect();
        let raw: Vec<Vec4> = colors.iter().copied().map(Vec4::from).collect();
        let packed = simd::batch_to_color32(&raw);
        for (c, p) in colors.iter().zip(packed) {
            assert_eq!(c.to_color32(), p);
        }
    }

    #[test]
    fn test_gamma_agrees_between_types() {
        let c = Color::new(0.3, 0.6, 0.9, 0.5);
        let via_vec = Color::from(Vec4::from(c).gamma_to_linear());
        assert_eq!(c.gamma_to_linear(), via_vec);
    }

    #[test]
    fn test_homogeneous_pipeline() {
        // Point through a manual "projection": scale xyz and put depth in w
        let p = Vec3::new(2.0, -1.0, 4.0);
        let clip = Vec4::from_point_w(p * p.z, p.z);
        assert!(clip.is_valid_homogeneous());
        assert_abs_diff_eq!(clip.homogeneous_to_3d(), p, epsilon = 1e-6);

        let dir = Vec4::from_direction(Vec3::FORWARD);
        assert!(dir.is_direction());
        assert_eq!(dir.homogeneous_to_3d(), Vec3::FORWARD);
    }

    #[test]
    fn test_glam_interop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g.cross(glam::Vec3::X), glam::Vec3::from(v.cross(Vec3::X)));
        assert_eq!(Vec4::from(glam::Vec4::W), Vec4::W);
        assert_eq!(Vec2::from(glam::Vec2::new(3.0, 4.0)).length(), 5.0);
    }

    #[test]
    fn test_smooth_damp_drives_color_fade() {
        // Fade a color by smoothing its Vec4 form towards a target
        let target = Vec4::from(Color::BLUE);
        let mut current = Vec3::from(Vec4::from(Color::RED));
        let mut velocity = Vec3::ZERO;
        for _ in 0..240 {
            current = current.smooth_damp(target.xyz(), &mut velocity, 0.2, None, 1.0 / 60.0);
        }
        let faded = Color::from(current.extend(1.0));
        assert_eq!(faded.to_html_rgb(), "#0000FF");
    }
}
