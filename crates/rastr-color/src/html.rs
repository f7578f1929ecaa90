//! HTML hex color codec.
//!
//! Accepted forms, case-insensitive, with or without a leading `#`:
//!
//! | Digits | Layout | Alpha |
//! |--------|--------|-------|
//! | 3 | `RGB`, each nibble doubled (`F` -> `FF`) | opaque |
//! | 6 | `RRGGBB` | opaque |
//! | 8 | `RRGGBBAA` | as given |
//!
//! The 3-digit shorthand needs the `#`: a bare word such as `bad` or `fed`
//! is not read as a color.
//!
//! [`Color::try_from_html`] (and [`FromStr`]) reject anything else with
//! [`ColorError::InvalidHex`]. [`Color::from_html`] is the lenient variant:
//! malformed input yields opaque black.
//!
//! ```rust
//! use rastr_color::Color;
//!
//! assert_eq!(Color::from_html("#FF0000"), Color::RED);
//! assert_eq!(Color::from_html("#0f0"), Color::GREEN);
//! assert_eq!(Color::from_html("bad"), Color::BLACK);
//! assert_eq!(Color::RED.to_html_rgba(), "#FF0000FF");
//! ```

use std::str::FromStr;

use rastr_math::clamp01;
use tracing::debug;

use crate::error::{ColorError, ColorResult};
use crate::Color;

fn channel(byte: u32) -> f32 {
    (byte & 0xFF) as f32 / 255.0
}

fn to_byte(v: f32) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}

impl Color {
    /// Strict hex parser.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] for non-hex characters, a digit count
    /// other than 3, 6 or 8, or 3 digits without `#`.
    pub fn try_from_html(input: &str) -> ColorResult<Color> {
        let trimmed = input.trim();
        let (hashed, digits) = match trimmed.strip_prefix('#') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(
                input,
                format!("unexpected character {bad:?}"),
            ));
        }

        if digits.len() == 3 && !hashed {
            return Err(ColorError::invalid_hex(
                input,
                "3-digit shorthand requires a leading '#'",
            ));
        }

        let value = match digits.len() {
            3 | 6 | 8 => u32::from_str_radix(digits, 16)
                .map_err(|e| ColorError::invalid_hex(input, e.to_string()))?,
            n => {
                return Err(ColorError::invalid_hex(
                    input,
                    format!("expected 3, 6 or 8 hex digits, got {n}"),
                ));
            }
        };

        let color = match digits.len() {
            3 => {
                let nibble = |shift: u32| ((value >> shift) & 0xF) * 0x11;
                Color::new(channel(nibble(8)), channel(nibble(4)), channel(nibble(0)), 1.0)
            }
            6 => Color::new(channel(value >> 16), channel(value >> 8), channel(value), 1.0),
            _ => Color::new(
                channel(value >> 24),
                channel(value >> 16),
                channel(value >> 8),
                channel(value),
            ),
        };
        Ok(color)
    }

    /// Lenient hex parser: malformed input gives [`Color::BLACK`].
    pub fn from_html(input: &str) -> Color {
        match Self::try_from_html(input) {
            Ok(color) => color,
            Err(err) => {
                debug!(%err, "hex color rejected, using opaque black");
                Color::BLACK
            }
        }
    }

    /// `#RRGGBB`, uppercase, each channel rounded to the nearest byte.
    pub fn to_html_rgb(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r()),
            to_byte(self.g()),
            to_byte(self.b())
        )
    }

    /// `#RRGGBBAA`, uppercase, each channel rounded to the nearest byte.
    pub fn to_html_rgba(&self) -> String {
        format!("{}{:02X}", self.to_html_rgb(), to_byte(self.a()))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_html(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Color::try_from_html("#FF0000"), Ok(Color::RED));
        assert_eq!(Color::try_from_html("00ff00"), Ok(Color::GREEN));
        assert_eq!(Color::try_from_html("#00F"), Ok(Color::BLUE));
        assert_eq!(
            Color::try_from_html("#FFFFFF80"),
            Ok(Color::new(1.0, 1.0, 1.0, 128.0 / 255.0))
        );
        assert_eq!(Color::try_from_html("  #fFf  "), Ok(Color::WHITE));
    }

    #[test]
    fn test_bare_shorthand_rejected() {
        assert!(Color::try_from_html("bad").is_err());
        assert_eq!(Color::try_from_html("#bad"), Ok(Color::from_html("#BBAADD")));
    }

    #[test]
    fn test_nibble_doubling() {
        let c = Color::try_from_html("#8A3").unwrap();
        assert_eq!(c.to_html_rgb(), "#88AA33");
    }

    #[test]
    fn test_strict_rejections() {
        for bad in ["", "#", "bad", "#12", "#1234", "#12345", "#GG0000", "#+F0000", "#FF0000FF00"] {
            let err = Color::try_from_html(bad).unwrap_err();
            assert!(err.is_invalid_hex(), "{bad}");
        }
    }

    #[test]
    fn test_lenient_fallback_is_opaque_black() {
        assert_eq!(Color::from_html("bad"), Color::BLACK);
        assert_eq!(Color::from_html(""), Color::BLACK);
        assert_eq!(Color::from_html("#FF0000"), Color::RED);
    }

    #[test]
    fn test_format_rounds_and_clamps() {
        assert_eq!(Color::new(0.5, 0.0, 1.0, 1.0).to_html_rgb(), "#8000FF");
        assert_eq!((Color::WHITE * 2.0).to_html_rgba(), "#FFFFFFFF");
        assert_eq!(Color::CLEAR.to_html_rgba(), "#00000000");
    }

    #[test]
    fn test_from_str() {
        let c: Color = "#336699".parse().unwrap();
        assert_eq!(c.to_html_rgb(), "#336699");
        assert!("nope".parse::<Color>().is_err());
    }
}
