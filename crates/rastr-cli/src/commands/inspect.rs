//! Inspect command

use anyhow::Result;
use serde_json::json;
use tracing::debug;

use super::{color_json, parse_color, Output};
use crate::InspectArgs;

pub fn run(args: InspectArgs, out: &Output) -> Result<()> {
    let color = parse_color(&args.color)?;
    debug!(input = %args.color, %color, "inspect");

    let hsv = color.to_hsv();
    let hsl = color.to_hsl();
    let luminance = color.luminance();

    let mut value = color_json(color);
    value["hsv"] = json!(hsv);
    value["hsl"] = json!(hsl);
    value["luminance"] = json!(luminance);

    out.emit(value, |p| {
        format!(
            "rgba       {color:.p$}\n\
             argb32     0x{:08X}\n\
             html       {}\n\
             hsv        {hsv:.p$}\n\
             hsl        {hsl:.p$}\n\
             luminance  {luminance:.p$}",
            color.to_color32(),
            color.to_html_rgba(),
        )
    })
}
