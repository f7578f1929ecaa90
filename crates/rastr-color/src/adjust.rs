//! Brightness, contrast and saturation adjustments.
//!
//! All three leave alpha alone and clamp their result like [`Color::new`].

use rastr_math::{clamp, lerp_unclamped};

use crate::Color;

impl Color {
    /// Adds `amount` (clamped to [-1, 1]) to R, G and B.
    pub fn adjust_brightness(self, amount: f32) -> Color {
        let amount = clamp(amount, -1.0, 1.0);
        Color::new(self.r() + amount, self.g() + amount, self.b() + amount, self.a())
    }

    /// Stretches R, G and B around 0.5.
    ///
    /// `contrast` is in [-1, 1]: -1 collapses to mid gray, 0 is identity,
    /// 1 is close to a hard threshold. Internally it maps to the classic
    /// 8-bit `c` in [-255, 255] with
    /// `factor = 259 (c + 255) / (255 (259 - c))`.
    ///
    /// ```rust
    /// use rastr_color::Color;
    ///
    /// let c = Color::rgb(0.2, 0.5, 0.8);
    /// assert_eq!(c.adjust_contrast(0.0), c);
    /// assert_eq!(c.adjust_contrast(-1.0), Color::GRAY);
    /// ```
    pub fn adjust_contrast(self, contrast: f32) -> Color {
        let c = clamp(contrast * 255.0, -255.0, 255.0);
        let factor = (259.0 * (c + 255.0)) / (255.0 * (259.0 - c));
        let stretch = |v: f32| factor * (v - 0.5) + 0.5;
        Color::new(stretch(self.r()), stretch(self.g()), stretch(self.b()), self.a())
    }

    /// Moves R, G and B away from (factor > 1) or towards (factor < 1) the
    /// luminance gray. `factor` is clamped to [0, 2]; 0 is fully gray.
    pub fn adjust_saturation(self, factor: f32) -> Color {
        let factor = clamp(factor, 0.0, 2.0);
        let gray = self.luminance();
        Color::new(
            lerp_unclamped(gray, self.r(), factor),
            lerp_unclamped(gray, self.g(), factor),
            lerp_unclamped(gray, self.b(), factor),
            self.a(),
        )
    }
}
