use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown mode: {0} (expected one of: balanced, monotone, vibrant)")]
    UnknownMode(String),

    #[error("Unknown strategy: {0} (expected one of: least-cost, greatest-cost, alternating)")]
    UnknownStrategy(String),

    #[error("Unknown output format: {0} (expected one of: hex, json, raw)")]
    UnknownFormat(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Quantize error: {0}")]
    Quantize(#[from] channel_palette::QuantizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
