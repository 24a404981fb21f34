//! Pixel types and perceptual channel decomposition.
//!
//! This module provides the [`Rgb`] pixel type, the [`opaque_pixels`] adapter
//! for walking RGBA buffers, and the [`PixelMath`] trait that decomposes a
//! pixel into the hue/saturation/lightness values the quantizer buckets on.

mod hsl;
mod rgb;

pub use hsl::{HslMath, PixelMath};
pub use rgb::{opaque_pixels, Rgb};
