//! Unpack command

use anyhow::{Context, Result};
use rastr_color::Color;

use super::{color_json, Output};
use crate::UnpackArgs;

/// Parses `0x`-prefixed hex or plain decimal.
fn parse_packed(s: &str) -> Result<u32> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    }
    .with_context(|| format!("Invalid packed value: {s}"))
}

pub fn run(args: UnpackArgs, out: &Output) -> Result<()> {
    let packed = parse_packed(&args.packed)?;
    let color = Color::from_color32(packed);

    out.emit(color_json(color), |p| {
        let [a, r, g, b] = packed.to_be_bytes();
        format!("a={a} r={r} g={g} b={b}\n{color:.p$}  {}", color.to_html_rgba())
    })
}
