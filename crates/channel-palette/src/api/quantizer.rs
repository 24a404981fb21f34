//! ChannelQuantizer builder -- the primary ergonomic entry point for the
//! crate.
//!
//! [`ChannelQuantizer`] sequences the full pipeline (accumulate, allocate,
//! reduce, assemble) behind a fluent builder with sensible defaults.

use crate::channel::{accumulate, MergeStrategy};
use crate::color::{HslMath, PixelMath, Rgb};
use crate::options::QuantizeOptions;
use crate::palette::{allocate, assemble, Palette};

use super::error::QuantizeError;

/// High-level palette quantizer.
///
/// `ChannelQuantizer` is the recommended entry point for the crate. It owns
/// the [`PixelMath`] used for channel decomposition (injected at
/// construction, defaulting to [`HslMath`]) and the quantization options.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`quantize()`](Self::quantize) takes `&self`, so the builder is
///   **reusable** across images
/// - Each invocation owns its channel statistics exclusively; there is no
///   shared mutable state, so concurrent invocations on independent pixel
///   buffers need no locking
///
/// # Example
///
/// ```
/// use channel_palette::{opaque_pixels, ChannelQuantizer};
///
/// // A 2x1 RGBA image: one red pixel, one transparent pixel.
/// let rgba = [255, 0, 0, 255, 0, 0, 0, 0];
///
/// let quantizer = ChannelQuantizer::new().grey_mix(1.6);
/// let palette = quantizer.quantize(opaque_pixels(&rgba), 2).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(0), [255, 0, 0]);
/// ```
pub struct ChannelQuantizer<M = HslMath> {
    math: M,
    options: QuantizeOptions,
}

impl ChannelQuantizer<HslMath> {
    /// Create a quantizer with the default HSL pixel math and default
    /// options.
    pub fn new() -> Self {
        Self::with_pixel_math(HslMath)
    }
}

impl Default for ChannelQuantizer<HslMath> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: PixelMath> ChannelQuantizer<M> {
    /// Create a quantizer with a custom [`PixelMath`] implementation.
    ///
    /// The quantizer buckets on whatever hue/saturation/lightness values the
    /// implementation reports, so alternative color decompositions plug in
    /// here without touching the bucket logic.
    pub fn with_pixel_math(math: M) -> Self {
        Self {
            math,
            options: QuantizeOptions::default(),
        }
    }

    /// Set the grey-mix dampening factor (see
    /// [`QuantizeOptions::grey_mix`]).
    #[inline]
    pub fn grey_mix(mut self, grey_mix: f32) -> Self {
        self.options = self.options.grey_mix(grey_mix);
        self
    }

    /// Set the merge pair-selection strategy (see [`MergeStrategy`]).
    #[inline]
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.options = self.options.merge_strategy(strategy);
        self
    }

    /// Replace the whole option set at once.
    #[inline]
    pub fn options(mut self, options: QuantizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Compute a `num_colors`-entry palette from a stream of opaque pixels.
    ///
    /// Runs the full pipeline: channel accumulation, anchor reservation and
    /// slot allocation, bucket reduction, palette assembly. The output
    /// buffer always holds exactly `num_colors * 3` bytes; slots with no
    /// surviving bucket stay black.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::Config`] if the options are invalid (rejected
    ///   before any pixel is read)
    /// - [`QuantizeError::Assemble`] on a slot-accounting invariant
    ///   violation; this aborts only the current invocation
    pub fn quantize<I>(&self, pixels: I, num_colors: usize) -> Result<Palette, QuantizeError>
    where
        I: IntoIterator<Item = Rgb>,
    {
        self.options.validate()?;

        let mut channels = accumulate(pixels, num_colors, &self.math);
        let allocation = allocate(
            &mut channels,
            num_colors,
            self.options.grey_mix,
            self.options.merge_strategy,
        );
        let palette = assemble(&channels, &allocation, num_colors)?;
        Ok(palette)
    }
}
