//! Palette slot allocation between the hue and lightness channels.
//!
//! Allocation happens before any reduction: black/white contrast anchors are
//! snapshotted from the untouched lightness channel, then the remaining
//! slots are split between the channels by mass ratio and both channels are
//! reduced to their targets.

use crate::channel::{reduce, ImageChannels, MergeStrategy};

/// Result of slot allocation: the anchor colors reserved ahead of the
/// per-channel slots.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    /// Zero or two entries: the centroids of the pre-reduction minimum- and
    /// maximum-index lightness buckets, in that order.
    pub anchors: Vec<[u8; 3]>,
}

impl Allocation {
    /// Number of palette slots consumed by anchors.
    #[inline]
    pub fn reserved(&self) -> usize {
        self.anchors.len()
    }
}

/// Split `num_colors` palette slots between the channels and reduce both.
///
/// When the lightness channel has at least two active buckets (and the
/// palette has room for them), exactly two slots are reserved for the
/// min-index and max-index lightness buckets taken verbatim before any
/// reduction. The snapshot must happen first: reduction may later merge
/// other buckets into the extreme ones and shift their centroids.
///
/// If every populated bucket already fits in the remaining slots, no
/// reduction runs. Otherwise the lightness channel is reduced to
/// `floor(adjusted * (1 - hueFraction))` and the hue channel to whatever is
/// left after the lightness reduction *actually* kept -- the lightness
/// channel may come up short of its target when it started under it, and
/// those slots would otherwise be wasted.
pub fn allocate(
    channels: &mut ImageChannels,
    num_colors: usize,
    grey_mix: f32,
    strategy: MergeStrategy,
) -> Allocation {
    let mut allocation = Allocation::default();
    if num_colors >= 2 {
        if let (Some(lo), Some(hi)) = (
            channels.lightness.min_active(),
            channels.lightness.max_active(),
        ) {
            if lo != hi {
                allocation.anchors = vec![
                    channels.lightness.bucket(lo).centroid(),
                    channels.lightness.bucket(hi).centroid(),
                ];
            }
        }
    }

    let adjusted = num_colors - allocation.reserved();
    let active_total = channels.hue.active_count() + channels.lightness.active_count();
    if active_total <= adjusted {
        // Every bucket keeps its own slot.
        return allocation;
    }

    let target = lightness_target(channels, num_colors, adjusted, grey_mix);
    reduce(&mut channels.lightness, target, false, strategy);

    // Use the actual post-reduction count, not the requested target.
    let hue_target = adjusted - channels.lightness.active_count();
    reduce(&mut channels.hue, hue_target, true, strategy);

    allocation
}

/// How many of the `adjusted` slots the lightness channel should keep.
///
/// The hue share of the palette follows the hue channel's share of total
/// mass, dampened toward grey by `grey_mix` and a square root of the base
/// lightness fraction (so strongly grey images keep their grey slots while
/// mildly grey ones give hues more room), with the dampening easing off as
/// `num_colors` grows. Zero-mass channels bypass the formula: all slots go
/// to the other channel.
fn lightness_target(
    channels: &ImageChannels,
    num_colors: usize,
    adjusted: usize,
    grey_mix: f32,
) -> usize {
    if adjusted == 0 {
        return 0;
    }
    let hue_mass = channels.hue.total_mass() as f64;
    let lightness_mass = channels.lightness.total_mass() as f64;

    let hue_fraction = if hue_mass <= 0.0 {
        0.0
    } else if lightness_mass <= 0.0 {
        1.0
    } else {
        let base_lightness_fraction = lightness_mass / (lightness_mass + hue_mass);
        let grey_pull = (lightness_mass / (grey_mix as f64 * (100.0 * base_lightness_fraction).sqrt()))
            * (1.0 - (num_colors as f64).log2() / num_colors as f64);
        hue_mass / (hue_mass + grey_pull)
    };

    (adjusted as f64 * (1.0 - hue_fraction)).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::accumulate;
    use crate::color::{HslMath, Rgb};

    fn grey_ramp(count: usize) -> Vec<Rgb> {
        (0..count)
            .map(|i| {
                let v = (i * 255 / (count - 1).max(1)) as u8;
                Rgb::new(v, v, v)
            })
            .collect()
    }

    #[test]
    fn test_anchors_snapshot_extreme_buckets() {
        let mut channels = accumulate(grey_ramp(16), 8, &HslMath);
        let allocation = allocate(&mut channels, 8, 1.6, MergeStrategy::LeastCost);

        assert_eq!(allocation.reserved(), 2);
        // Bucket 0 of 8 holds lightness 0..=31; bucket 7 holds 224..=255.
        let [lo_r, lo_g, lo_b] = allocation.anchors[0];
        assert_eq!(lo_r, lo_g);
        assert_eq!(lo_g, lo_b);
        assert!(
            lo_r <= 31,
            "min anchor should come from the bottom band, got {}",
            lo_r
        );
        let [hi_r, hi_g, hi_b] = allocation.anchors[1];
        assert_eq!(hi_r, hi_g);
        assert_eq!(hi_g, hi_b);
        assert!(
            hi_r >= 224,
            "max anchor should come from the top band, got {}",
            hi_r
        );
    }

    #[test]
    fn test_no_anchors_for_single_bucket() {
        let mut channels = accumulate(vec![Rgb::new(128, 128, 128); 4], 8, &HslMath);
        let allocation = allocate(&mut channels, 8, 1.6, MergeStrategy::LeastCost);
        assert_eq!(allocation.reserved(), 0);
    }

    #[test]
    fn test_no_anchors_when_palette_too_small() {
        // Two active lightness buckets but only one palette slot: reserving
        // two anchors would overrun by construction.
        let mut channels = accumulate(
            vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)],
            1,
            &HslMath,
        );
        let allocation = allocate(&mut channels, 1, 1.6, MergeStrategy::LeastCost);
        assert_eq!(allocation.reserved(), 0);
    }

    #[test]
    fn test_no_reduction_when_buckets_fit() {
        let mut channels = accumulate(
            vec![Rgb::new(10, 10, 10), Rgb::new(240, 240, 240)],
            8,
            &HslMath,
        );
        let before_light = channels.lightness.active_count();
        let before_hue = channels.hue.active_count();

        allocate(&mut channels, 8, 1.6, MergeStrategy::LeastCost);

        assert_eq!(channels.lightness.active_count(), before_light);
        assert_eq!(channels.hue.active_count(), before_hue);
    }

    #[test]
    fn test_slot_accounting_never_exceeds_palette() {
        // A busy mixed image: many hues, many lightness bands.
        let mut pixels = Vec::new();
        for i in 0..360usize {
            let (r, g, b) = hue_to_rgb(i as f32);
            pixels.push(Rgb::new(r, g, b));
        }
        pixels.extend(grey_ramp(64));

        for num_colors in [2usize, 3, 4, 8, 13, 16, 64] {
            let mut channels = accumulate(pixels.clone(), num_colors, &HslMath);
            let allocation = allocate(&mut channels, num_colors, 1.6, MergeStrategy::LeastCost);
            let used = allocation.reserved()
                + channels.lightness.active_count()
                + channels.hue.active_count();
            assert!(
                used <= num_colors,
                "{} slots used for a {}-color palette",
                used,
                num_colors
            );
        }
    }

    #[test]
    fn test_empty_hue_channel_gives_all_slots_to_lightness() {
        let mut channels = accumulate(grey_ramp(200), 4, &HslMath);
        assert_eq!(channels.hue.total_mass(), 0.0);

        let allocation = allocate(&mut channels, 4, 1.6, MergeStrategy::LeastCost);
        assert_eq!(allocation.reserved(), 2);
        assert_eq!(channels.lightness.active_count(), 2);
        assert_eq!(channels.hue.active_count(), 0);
    }

    #[test]
    fn test_hue_channel_reuses_unfilled_lightness_slots() {
        // One lightness bucket plus many hues: the lightness reduction can
        // only keep one bucket no matter the target, so the hue channel must
        // receive the leftovers.
        let mut pixels = vec![Rgb::new(128, 128, 128); 50];
        for i in 0..12usize {
            let (r, g, b) = hue_to_rgb((i * 30) as f32);
            pixels.push(Rgb::new(r, g, b));
        }

        let num_colors = 8;
        let mut channels = accumulate(pixels, num_colors, &HslMath);
        let allocation = allocate(&mut channels, num_colors, 1.6, MergeStrategy::LeastCost);

        let used = allocation.reserved()
            + channels.lightness.active_count()
            + channels.hue.active_count();
        assert_eq!(
            used, num_colors,
            "leftover lightness slots should flow to the hue channel"
        );
    }

    fn hue_to_rgb(hue: f32) -> (u8, u8, u8) {
        // Fully saturated, mid-lightness color wheel sample.
        let h = hue / 60.0;
        let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;
        let x = x.round() as u8;
        match h as u32 {
            0 => (255, x, 0),
            1 => (x, 255, 0),
            2 => (0, 255, x),
            3 => (0, x, 255),
            4 => (x, 0, 255),
            _ => (255, 0, x),
        }
    }
}
