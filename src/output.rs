//! Palette output formats.
//!
//! The palette buffer itself is what a dithering stage consumes (`raw`);
//! `hex` and `json` exist for humans and tooling. Hex codes are always in
//! 6-digit form -- 3-digit shorthand does not round-trip through the
//! consumers this feeds.

use channel_palette::Palette;
use serde_json::json;

use crate::error::CliError;

/// Output encoding for an extracted palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `#RRGGBB` code per line.
    Hex,
    /// JSON object with a `colors` array of hex codes.
    Json,
    /// The raw palette buffer: `num_colors * 3` packed RGB bytes.
    Raw,
}

impl OutputFormat {
    /// Parse an output format name from the command line.
    pub fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "hex" => Ok(OutputFormat::Hex),
            "json" => Ok(OutputFormat::Json),
            "raw" => Ok(OutputFormat::Raw),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// Format a color as a 6-digit uppercase hex code.
pub fn hex_code(color: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

/// Encode a palette in the requested format.
pub fn encode(palette: &Palette, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Hex => {
            let mut out = String::new();
            for color in palette.colors() {
                out.push_str(&hex_code(color));
                out.push('\n');
            }
            out.into_bytes()
        }
        OutputFormat::Json => {
            let colors: Vec<String> = palette.colors().map(hex_code).collect();
            let doc = json!({
                "numColors": palette.len(),
                "colors": colors,
            });
            let mut out = doc.to_string().into_bytes();
            out.push(b'\n');
            out
        }
        OutputFormat::Raw => palette.as_bytes().to_vec(),
    }
}
