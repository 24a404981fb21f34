//! Unified error type for the channel-palette public API.
//!
//! [`QuantizeError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::options::ConfigError;
use crate::palette::AssembleError;

/// Unified error type for the channel-palette public API.
///
/// # Example
///
/// ```
/// use channel_palette::{ChannelQuantizer, Palette, QuantizeError, Rgb};
///
/// fn four_colors(pixels: Vec<Rgb>) -> Result<Palette, QuantizeError> {
///     let palette = ChannelQuantizer::new().quantize(pixels, 4)?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum QuantizeError {
    /// Invalid configuration, rejected before any accumulation.
    Config(ConfigError),
    /// Internal slot-accounting invariant violation during assembly.
    Assemble(AssembleError),
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Config(err) => write!(f, "configuration error: {}", err),
            QuantizeError::Assemble(err) => write!(f, "palette assembly error: {}", err),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Config(err) => Some(err),
            QuantizeError::Assemble(err) => Some(err),
        }
    }
}

impl From<ConfigError> for QuantizeError {
    fn from(err: ConfigError) -> Self {
        QuantizeError::Config(err)
    }
}

impl From<AssembleError> for QuantizeError {
    fn from(err: AssembleError) -> Self {
        QuantizeError::Assemble(err)
    }
}
