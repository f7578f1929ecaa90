//! rastr - color and vector algebra from the shell
//!
//! Thin front end over rastr-color and rastr-math: inspect, blend, adjust and
//! pack colors, and evaluate vector operations.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rastr")]
#[command(author, version, about = "Color and vector algebra toolkit")]
#[command(long_about = "
Inspect, blend and adjust RGBA colors and evaluate vector operations.

Colors are accepted as #RGB, #RRGGBB, #RRGGBBAA, 0xAARRGGBB, or r,g,b[,a]
floats. Vectors are comma-separated x,y,z.

Examples:
  rastr inspect '#FF8000'                 # RGBA, packed, HSV, HSL, luminance
  rastr blend '#FF000080' '#0000FF'       # alpha-blend red over blue
  rastr blend '#808080' '#336699' -m soft-light
  rastr adjust '#336699' --saturation 1.5 --contrast 0.2
  rastr unpack 0x80FF4020
  rastr gradient '#FF0000' '#0000FF' -n 7 --hsv
  rastr vec slerp 1,0,0 0,0,1 -t 0.25
  rastr --json inspect 0.2,0.4,0.6
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Decimal places for printed floats
    #[arg(short, long, global = true, default_value_t = 3)]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every representation of a color
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Blend a foreground color over a background color
    #[command(visible_alias = "b")]
    Blend(BlendArgs),

    /// Apply brightness/contrast/saturation adjustments
    Adjust(AdjustArgs),

    /// Unpack a 32-bit 0xAARRGGBB value
    Unpack(UnpackArgs),

    /// Interpolate between two colors
    #[command(visible_alias = "g")]
    Gradient(GradientArgs),

    /// Evaluate a vector operation on 3D vectors
    Vec(VecArgs),
}

#[derive(Args)]
struct InspectArgs {
    /// Color to inspect
    color: String,
}

#[derive(Args)]
struct BlendArgs {
    /// Foreground (top layer) color
    fg: String,

    /// Background (base) color
    bg: String,

    /// Blend mode: multiply, screen, overlay, soft-light, additive, alpha
    #[arg(short, long, default_value = "alpha")]
    mode: String,
}

#[derive(Args)]
struct AdjustArgs {
    /// Color to adjust
    color: String,

    /// Brightness shift in [-1, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    brightness: Option<f32>,

    /// Contrast in [-1, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    contrast: Option<f32>,

    /// Saturation factor in [0, 2]
    #[arg(short, long)]
    saturation: Option<f32>,

    /// Invert RGB
    #[arg(long)]
    invert: bool,

    /// Convert to grayscale
    #[arg(long)]
    grayscale: bool,
}

#[derive(Args)]
struct UnpackArgs {
    /// Packed color, hex with 0x prefix or decimal
    packed: String,
}

#[derive(Args)]
struct GradientArgs {
    /// Start color
    from: String,

    /// End color
    to: String,

    /// Number of samples including both ends
    #[arg(short = 'n', long, default_value_t = 5)]
    steps: usize,

    /// Interpolate in HSV along the shorter hue arc
    #[arg(long)]
    hsv: bool,
}

#[derive(Args)]
struct VecArgs {
    /// Operation: angle, cross, dot, slerp, project, reflect, normalize, distance
    op: String,

    /// First vector, x,y,z
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second vector, x,y,z (not used by normalize)
    #[arg(allow_hyphen_values = true)]
    b: Option<String>,

    /// Interpolation parameter for slerp
    #[arg(short, long, default_value_t = 0.5, allow_hyphen_values = true)]
    t: f32,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = commands::Output {
        json: cli.json,
        precision: cli.precision,
    };

    match cli.command {
        Commands::Inspect(args) => commands::inspect::run(args, &out),
        Commands::Blend(args) => commands::blend::run(args, &out),
        Commands::Adjust(args) => commands::adjust::run(args, &out),
        Commands::Unpack(args) => commands::unpack::run(args, &out),
        Commands::Gradient(args) => commands::gradient::run(args, &out),
        Commands::Vec(args) => commands::vec::run(args, &out),
    }
}
