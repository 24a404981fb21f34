//! channel-palette: Two-channel perceptual palette extraction
//!
//! This library computes a fixed-size color palette from an image's pixels
//! for use as the input to a dithering renderer. Instead of clustering in a
//! 3D color space, it decomposes each pixel into two perceptual channels --
//! hue and lightness -- and reduces each channel's bucket histogram
//! independently. The approach is conceptually similar to octree
//! quantization but reads pixels in a single cheap pass and is particularly
//! good at preserving gradients.
//!
//! # Quick Start
//!
//! The [`ChannelQuantizer`] builder is the primary entry point:
//!
//! ```
//! use channel_palette::{opaque_pixels, ChannelQuantizer};
//!
//! // A tiny RGBA image: red, white, black, dark grey.
//! let rgba = [
//!     255u8, 0, 0, 255,
//!     255, 255, 255, 255,
//!     0, 0, 0, 255,
//!     40, 40, 40, 255,
//! ];
//!
//! let palette = ChannelQuantizer::new()
//!     .grey_mix(1.6)
//!     .quantize(opaque_pixels(&rgba), 4)
//!     .unwrap();
//!
//! assert_eq!(palette.as_bytes().len(), 4 * 3);
//! ```
//!
//! # How It Works
//!
//! The pipeline runs four stages, all synchronous and allocation-bounded:
//!
//! ```text
//! opaque pixels
//!     |
//!     v
//! ChannelAccumulator      360 hue buckets + min(256, n) lightness buckets;
//!     |                   each pixel's unit weight is split between the two
//!     |                   channels by saturation and mid-lightness distance
//!     v
//! Allocator               reserves black/white anchors, splits remaining
//!     |                   slots between channels by mass ratio
//!     v
//! BucketMerger x2         merges cheapest adjacent bucket pairs until each
//!     |                   channel fits its slot count; the hue channel is
//!     |                   circular (degree 359 is adjacent to degree 0)
//!     v
//! PaletteAssembler        anchors, then lightness centroids, then hue
//!                         centroids -- exactly n RGB triples
//! ```
//!
//! ## Channel Weighting
//!
//! A pixel's hue weight is `saturation^3 * (1 - d^3 / 127^3)` where `d` is
//! the mirrored distance of its lightness from 128; the lightness channel
//! receives the complement. Saturated mid-lightness pixels therefore read
//! as "colors" and desaturated or extreme-lightness pixels as "shades".
//! The cubic terms are empirically tuned and preserved verbatim for output
//! compatibility; they are not derived from a color-appearance model and do
//! not generalize to other color spaces or bit depths.
//!
//! ## Merge Cost
//!
//! Reduction repeatedly merges the adjacent pair of populated buckets with
//! the lowest `(mass_a + mass_b) * log2(distance + 1)`. Mass keeps heavily
//! populated buckets apart; the logarithmic distance penalty discourages
//! collapsing buckets that are perceptually far apart while still letting a
//! pair of tiny distant buckets merge before two huge neighbors.
//!
//! ## Contrast Anchors
//!
//! When the image spans at least two lightness bands, the darkest and
//! lightest pre-reduction bucket centroids are copied into the first two
//! palette slots verbatim. Dithered output depends on having true contrast
//! extremes available even when the mass-weighted reduction would have
//! merged them away.
//!
//! # Determinism and Concurrency
//!
//! One invocation is a pure function of its inputs apart from
//! floating-point summation order over the pixel stream. There is no
//! cross-invocation state: concurrent quantizations on independent buffers
//! need no locking.

pub mod api;
pub mod channel;
pub mod color;
pub mod options;
pub mod palette;


pub use api::{ChannelQuantizer, QuantizeError};
pub use channel::MergeStrategy;
pub use color::{opaque_pixels, HslMath, PixelMath, Rgb};
pub use options::{ConfigError, QuantizeOptions, DEFAULT_GREY_MIX};
pub use palette::{AssembleError, Palette};
