//! CLI command implementations

pub mod adjust;
pub mod blend;
pub mod gradient;
pub mod inspect;
pub mod unpack;
pub mod vec;

use anyhow::{bail, Context, Result};
use rastr_color::Color;
use rastr_math::Vec3;
use serde_json::Value;

/// Output settings shared by every command.
pub struct Output {
    pub json: bool,
    pub precision: usize,
}

impl Output {
    /// Prints `value` as pretty JSON, or `text` otherwise.
    pub fn emit(&self, value: Value, text: impl FnOnce(usize) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", text(self.precision));
        }
        Ok(())
    }
}

/// Parses `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `RRGGBB[AA]`, `0xAARRGGBB` or `r,g,b[,a]`.
pub fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let packed = u32::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid packed color: {s}"))?;
        return Ok(Color::from_color32(packed));
    }
    if s.contains(',') {
        let parts = parse_floats(s)?;
        return match parts.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::new(*r, *g, *b, *a)),
            _ => bail!("Expected 3 or 4 components, got {}: {s}", parts.len()),
        };
    }
    Color::try_from_html(s).with_context(|| format!("Invalid color: {s}"))
}

/// Parses `x,y,z`.
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    match parse_floats(s)?.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        other => bail!("Expected x,y,z, got {} components: {s}", other.len()),
    }
}

fn parse_floats(s: &str) -> Result<Vec<f32>> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .with_context(|| format!("Invalid number '{}' in '{s}'", p.trim()))
        })
        .collect()
}

/// JSON for a color: channels, packed value and hex.
pub fn color_json(c: Color) -> Value {
    serde_json::json!({
        "rgba": c,
        "argb32": format!("0x{:08X}", c.to_color32()),
        "html": c.to_html_rgba(),
    })
}
