//! Quantizer configuration.

use std::fmt;

use crate::channel::MergeStrategy;

/// Default grey-mix dampening factor.
pub const DEFAULT_GREY_MIX: f32 = 1.6;

/// Configuration options for palette quantization.
///
/// # Defaults
///
/// - Grey mix: 1.6 (balanced split between hue and grey slots)
/// - Merge strategy: least-cost (the canonical reduction)
///
/// # Example
///
/// ```
/// use channel_palette::{MergeStrategy, QuantizeOptions};
///
/// // Use defaults (recommended for most cases)
/// let options = QuantizeOptions::new();
///
/// // Or customize with builder pattern
/// let options = QuantizeOptions::new()
///     .grey_mix(2.0)
///     .merge_strategy(MergeStrategy::GreatestCost);
/// ```
#[derive(Debug, Clone)]
pub struct QuantizeOptions {
    /// Grey-mix dampening factor. Larger values bias more palette slots
    /// toward grey/lightness buckets; must be positive and finite.
    pub grey_mix: f32,

    /// Bucket merge pair-selection strategy. The non-default variants are
    /// legacy modes kept for older output compatibility.
    pub merge_strategy: MergeStrategy,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            grey_mix: DEFAULT_GREY_MIX,
            merge_strategy: MergeStrategy::LeastCost,
        }
    }
}

impl QuantizeOptions {
    /// Create new quantize options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grey-mix dampening factor.
    ///
    /// Validated when quantization runs, not here, so builder chains stay
    /// infallible.
    #[inline]
    pub fn grey_mix(mut self, grey_mix: f32) -> Self {
        self.grey_mix = grey_mix;
        self
    }

    /// Set the merge pair-selection strategy.
    #[inline]
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Reject invalid configurations before any accumulation work runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grey_mix.is_finite() || self.grey_mix <= 0.0 {
            return Err(ConfigError::InvalidGreyMix {
                value: self.grey_mix,
            });
        }
        Ok(())
    }
}

/// Error type for quantizer configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grey mix must be a positive, finite number.
    InvalidGreyMix {
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGreyMix { value } => {
                write!(f, "grey mix must be a positive finite number, got {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
