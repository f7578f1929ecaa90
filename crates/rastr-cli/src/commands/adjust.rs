//! Adjust command
//!
//! Applied in a fixed order: brightness, contrast, saturation, invert, grayscale.

use anyhow::{bail, Result};
use tracing::{debug, trace};

use super::{color_json, parse_color, Output};
use crate::AdjustArgs;

pub fn run(args: AdjustArgs, out: &Output) -> Result<()> {
    let mut color = parse_color(&args.color)?;

    if args.brightness.is_none()
        && args.contrast.is_none()
        && args.saturation.is_none()
        && !args.invert
        && !args.grayscale
    {
        bail!("No adjustment given (use --brightness, --contrast, --saturation, --invert or --grayscale)");
    }

    if let Some(amount) = args.brightness {
        color = color.adjust_brightness(amount);
        trace!(amount, %color, "brightness");
    }
    if let Some(contrast) = args.contrast {
        color = color.adjust_contrast(contrast);
        trace!(contrast, %color, "contrast");
    }
    if let Some(factor) = args.saturation {
        color = color.adjust_saturation(factor);
        trace!(factor, %color, "saturation");
    }
    if args.invert {
        color = color.invert();
    }
    if args.grayscale {
        color = color.grayscale();
    }

    debug!(input = %args.color, result = %color, "adjust");
    out.emit(color_json(color), |p| {
        format!("{color:.p$}  {}", color.to_html_rgba())
    })
}
