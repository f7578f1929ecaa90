//! Blend command

use anyhow::{Context, Result};
use rastr_color::BlendMode;
use tracing::debug;

use super::{color_json, parse_color, Output};
use crate::BlendArgs;

pub fn run(args: BlendArgs, out: &Output) -> Result<()> {
    let fg = parse_color(&args.fg)?;
    let bg = parse_color(&args.bg)?;
    let mode: BlendMode = args
        .mode
        .parse()
        .with_context(|| format!("Unknown blend mode: {}", args.mode))?;

    debug!(%fg, %bg, %mode, "blend");
    let result = fg.blend(bg, mode);

    let mut value = color_json(result);
    value["mode"] = serde_json::json!(mode);
    out.emit(value, |p| format!("{result:.p$}  {}", result.to_html_rgba()))
}
