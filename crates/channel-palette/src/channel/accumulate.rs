//! Weighted two-channel accumulation.
//!
//! Every opaque pixel is split between the hue channel and the lightness
//! channel according to how strongly it reads as "a color" versus "a shade":
//! saturated pixels near mid-lightness push most of their weight into the
//! hue bucket for their degree, while desaturated or extreme-lightness
//! pixels push theirs into the lightness bucket for their brightness band.
//! The two weights always sum to 1, so no pixel is counted twice.

use crate::color::{PixelMath, Rgb};

use super::stats::ChannelStats;

/// One hue bucket per degree.
pub const HUE_BUCKETS: usize = 360;

/// Upper bound on lightness buckets; the actual count is
/// `min(256, num_colors)`.
pub const MAX_LIGHTNESS_BUCKETS: usize = 256;

/// Normalization constant for the mirrored lightness distance: the maximum
/// distance from mid-lightness (127), cubed.
const MAX_LIGHTNESS_DIFF_CUBED: f32 = (127 * 127 * 127) as f32;

/// The two channels produced by a single accumulation pass.
#[derive(Debug, Clone)]
pub struct ImageChannels {
    /// 360-bucket circular hue channel.
    pub hue: ChannelStats,
    /// Equal-width lightness channel with `min(256, num_colors)` buckets.
    pub lightness: ChannelStats,
}

/// Fraction of a pixel's weight that goes to the hue channel.
///
/// `saturation^3 * (1 - lightness_diff^3 / 127^3)`, where `lightness_diff`
/// mirrors around 128. The cubic terms are an empirically tuned heuristic
/// carried over verbatim for output compatibility; they do not generalize to
/// other color spaces or bit depths.
fn hue_weight(saturation: f32, lightness: u8) -> f32 {
    let diff = if lightness >= 128 {
        (lightness - 128) as f32
    } else {
        (127 - lightness) as f32
    };
    let falloff = (MAX_LIGHTNESS_DIFF_CUBED - diff * diff * diff) / MAX_LIGHTNESS_DIFF_CUBED;
    saturation * saturation * saturation * falloff
}

/// Build hue and lightness channel statistics from a pixel stream.
///
/// Allocates a 360-bucket hue channel and a `min(256, num_colors)`-bucket
/// lightness channel, then splits each pixel's unit weight between them.
/// With zero lightness buckets (`num_colors == 0`) the lightness share of
/// every pixel is dropped; the hue channel still accumulates.
///
/// The result depends on pixel enumeration order only through floating-point
/// summation order; this is a property of the accumulation, not a bit-exact
/// guarantee.
pub fn accumulate<I, M>(pixels: I, num_colors: usize, math: &M) -> ImageChannels
where
    I: IntoIterator<Item = Rgb>,
    M: PixelMath + ?Sized,
{
    let lightness_buckets = MAX_LIGHTNESS_BUCKETS.min(num_colors);
    let mut hue = ChannelStats::new(HUE_BUCKETS);
    let mut lightness = ChannelStats::new(lightness_buckets);

    for pixel in pixels {
        let saturation = math.saturation(pixel);
        let pixel_lightness = math.lightness(pixel);
        let rgb = pixel.to_bytes();

        let hue_fraction = hue_weight(saturation, pixel_lightness);
        if hue_fraction > 0.0 {
            let hue_index = (math.hue(pixel) as usize).min(HUE_BUCKETS - 1);
            hue.add(hue_index, rgb, hue_fraction);
        }

        if lightness_buckets > 0 {
            // floor(lightness / (256 / bucket_count)) in exact integer form.
            let lightness_index = pixel_lightness as usize * lightness_buckets / 256;
            lightness.add(lightness_index, rgb, 1.0 - hue_fraction);
        }
    }

    ImageChannels { hue, lightness }
}
