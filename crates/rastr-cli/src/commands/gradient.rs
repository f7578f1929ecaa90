//! Gradient command

use anyhow::{bail, Result};
use rastr_color::Color;
use rastr_math::{delta_angle, lerp, simd, Vec4};
use serde_json::{json, Value};
use tracing::debug;

use super::{parse_color, Output};
use crate::GradientArgs;

/// Samples `steps` colors from `from` to `to`, both ends included.
///
/// In HSV mode the hue takes the shorter arc and saturation, value and
/// alpha are interpolated linearly.
fn sample(from: Color, to: Color, steps: usize, hsv: bool) -> Vec<Color> {
    let (a, b) = (from.to_hsv(), to.to_hsv());
    (0..steps)
        .map(|i| {
            let t = i as f32 / (steps - 1) as f32;
            if hsv {
                Color::from_hsva(
                    a.h + delta_angle(a.h, b.h) * t,
                    lerp(a.s, b.s, t),
                    lerp(a.v, b.v, t),
                    lerp(from.a(), to.a(), t),
                )
            } else {
                from.lerp(to, t)
            }
        })
        .collect()
}

pub fn run(args: GradientArgs, out: &Output) -> Result<()> {
    if args.steps < 2 {
        bail!("Need at least 2 steps, got {}", args.steps);
    }
    let from = parse_color(&args.from)?;
    let to = parse_color(&args.to)?;
    debug!(%from, %to, steps = args.steps, hsv = args.hsv, "gradient");

    let colors = sample(from, to, args.steps, args.hsv);
    let raw: Vec<Vec4> = colors.iter().map(|c| c.to_vec4()).collect();
    let packed = simd::batch_to_color32(&raw);

    let entries: Vec<Value> = colors
        .iter()
        .zip(&packed)
        .map(|(c, argb)| {
            json!({
                "rgba": c,
                "argb32": format!("0x{argb:08X}"),
                "html": c.to_html_rgba(),
            })
        })
        .collect();
    let value = Value::Array(entries);

    out.emit(value, |p| {
        colors
            .iter()
            .zip(&packed)
            .enumerate()
            .map(|(i, (c, argb))| format!("{i:>3}  0x{argb:08X}  {}  {c:.p$}", c.to_html_rgba()))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
