use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use channel_palette::{opaque_pixels, ChannelQuantizer};
use swatcher::config::{parse_strategy, QuantizeConfig};
use swatcher::output::{encode, OutputFormat};

#[derive(Parser)]
#[command(name = "swatcher")]
#[command(about = "Extract a perceptually optimized palette from an image")]
struct Cli {
    /// Input image (any format the image crate can decode)
    image: PathBuf,

    /// Number of palette colors to produce
    #[arg(short = 'n', long, default_value_t = 8)]
    colors: usize,

    /// Quantization mode preset: balanced, monotone, or vibrant
    #[arg(short, long)]
    mode: Option<String>,

    /// Grey-mix override (takes precedence over the mode preset)
    #[arg(long)]
    grey_mix: Option<f32>,

    /// Bucket merge strategy: least-cost, greatest-cost, or alternating
    #[arg(long, default_value = "least-cost")]
    strategy: String,

    /// Output format: hex, json, or raw
    #[arg(short, long, default_value = "hex")]
    format: String,

    /// Write the palette to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Mode catalog YAML file (built-in presets when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatcher=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = match &cli.config {
        Some(path) => QuantizeConfig::load(path)?,
        None => QuantizeConfig::default(),
    };

    let grey_mix = match cli.grey_mix {
        Some(value) => value,
        None => config.resolve_mode(cli.mode.as_deref())?.grey_mix,
    };
    let strategy = parse_strategy(&cli.strategy)?;
    let format = OutputFormat::parse(&cli.format)?;

    let image = image::open(&cli.image)?.to_rgba8();
    let (width, height) = image.dimensions();
    tracing::info!(
        image = %cli.image.display(),
        width,
        height,
        colors = cli.colors,
        grey_mix,
        "Quantizing image"
    );

    let quantizer = ChannelQuantizer::new()
        .grey_mix(grey_mix)
        .merge_strategy(strategy);
    let palette = quantizer.quantize(opaque_pixels(image.as_raw()), cli.colors)?;

    let encoded = encode(&palette, format);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &encoded)?;
            println!(
                "Wrote {} colors to {} ({} bytes)",
                palette.len(),
                path.display(),
                encoded.len()
            );
        }
        None => {
            std::io::stdout().write_all(&encoded)?;
        }
    }

    Ok(())
}
