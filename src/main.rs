use clap::Parser;
use sigpad::{Colour, PadConfig, PenCap};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sigpad", about = "Render a stored signature to PNG")]
struct Cli {
    /// Signature JSON (array of {mx, my, lx, ly} records)
    #[arg(short, long)]
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Surface width in pixels
    #[arg(long, default_value = "198")]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value = "55")]
    height: u32,

    /// JSON preset with pen and background settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Constant pen width for unsmoothed output
    #[arg(long)]
    pen_width: Option<f32>,

    /// Ink colour (#rgb or #rrggbb)
    #[arg(long)]
    pen_colour: Option<Colour>,

    /// Background colour (#rgb or #rrggbb)
    #[arg(long)]
    bg_colour: Option<Colour>,

    /// Line cap: butt, round or square
    #[arg(long)]
    pen_cap: Option<PenCap>,

    /// Redraw with the smoothing pass instead of raw segments
    #[arg(long)]
    smooth: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => PadConfig::load(path)?,
        None => PadConfig::default(),
    };
    if let Some(w) = cli.pen_width {
        config.pen_width = w;
    }
    if let Some(c) = cli.pen_colour {
        config.pen_colour = c;
    }
    if let Some(c) = cli.bg_colour {
        config.bg_colour = c;
    }
    if let Some(cap) = cli.pen_cap {
        config.pen_cap = cap;
    }
    config.validate()?;

    eprintln!();
    eprintln!("  sigpad \u{00b7} {}", cli.input.display());
    eprintln!();

    let text = std::fs::read_to_string(&cli.input)?;
    let (pixmap, stats) =
        sigpad::render_signature(&text, (cli.width, cli.height), &config, cli.smooth)?;

    if let Some(stats) = stats {
        eprintln!(
            "  Smooth      {} curves \u{00b7} spacing {:.2} \u{00b7} skip {} \u{00b7} {} resampled segments",
            stats.curves, stats.average_spacing, stats.skip, stats.resampled_segments,
        );
    }

    std::fs::write(&cli.output, sigpad::render::encode_png(&pixmap)?)?;
    eprintln!("  \u{2713} {}", cli.output.display());
    eprintln!();

    Ok(())
}
