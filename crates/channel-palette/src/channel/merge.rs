//! Penalty-weighted bucket merging.
//!
//! Reduction repeatedly merges the cheapest adjacent pair of populated
//! buckets until the channel holds the target count. Cost is the combined
//! mass of the pair scaled by a logarithmic distance penalty, so small
//! neighboring buckets collapse first and far-apart merges are discouraged.
//! On circular channels (hue) the last and first populated buckets are also
//! adjacent.

use super::stats::ChannelStats;

/// Pair-selection rule used by [`reduce`].
///
/// [`LeastCost`](MergeStrategy::LeastCost) is the canonical behavior. The
/// other two reproduce older variants of the reduction and are kept as
/// opt-in modes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Merge the globally cheapest pair each step (default).
    #[default]
    LeastCost,
    /// Legacy: merge the globally most expensive pair each step.
    GreatestCost,
    /// Legacy: least-cost selection for the first half of the merge
    /// sequence, greatest-cost after the midpoint.
    Alternating,
}

/// Distance penalty applied to a candidate merge: `log2(distance + 1)`.
///
/// Distance 1 (directly adjacent buckets) costs a factor of 1; the factor
/// grows slowly from there, so mass dominates for near neighbors and
/// distance dominates for gaps.
#[inline]
pub fn penalty(distance: usize) -> f32 {
    ((distance + 1) as f32).log2()
}

/// Reduce a channel's populated bucket count to `target`.
///
/// A target of zero clears the active set immediately: the channel receives
/// no palette slots, and the pairwise scan below needs at least two active
/// buckets. Otherwise, while more than `target` buckets are populated, the
/// cheapest pair (per `strategy`) is merged, second bucket into the first.
/// Ties resolve to the first pair encountered in ascending scan order, with
/// the wrap pair considered last, so the reduction is deterministic.
///
/// With `wrap` set, the pair `(last, first)` is also a candidate and its
/// distance is `min(forward_gap, bucket_count - forward_gap)`.
///
/// No-op when the channel is already at or under target. This is a closed
/// reduction over a finite set; it cannot fail.
pub fn reduce(stats: &mut ChannelStats, target: usize, wrap: bool, strategy: MergeStrategy) {
    if target == 0 {
        stats.clear_active();
        return;
    }
    if stats.active_count() <= target {
        return;
    }

    let reductions = stats.active_count() - target;
    for step in 0..reductions {
        let pick_greatest = match strategy {
            MergeStrategy::LeastCost => false,
            MergeStrategy::GreatestCost => true,
            MergeStrategy::Alternating => step >= reductions / 2,
        };

        let keys: Vec<usize> = stats.active().collect();
        let last = keys.len() - 1;

        let mut best_cost = if pick_greatest {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };
        // Position of the pair's first key within `keys`; `last` selects the
        // wrap pair.
        let mut best_pos = 0;

        for pos in 0..last {
            let a = keys[pos];
            let b = keys[pos + 1];
            let cost = pair_cost(stats, a, b, b - a);
            if is_better(cost, best_cost, pick_greatest) {
                best_cost = cost;
                best_pos = pos;
            }
        }

        if wrap {
            let a = keys[last];
            let b = keys[0];
            let forward_gap = stats.bucket_count() - a + b;
            let distance = forward_gap.min(a - b);
            let cost = pair_cost(stats, a, b, distance);
            if is_better(cost, best_cost, pick_greatest) {
                best_pos = last;
            }
        }

        let (survivor, absorbed) = if best_pos == last {
            (keys[last], keys[0])
        } else {
            (keys[best_pos], keys[best_pos + 1])
        };
        stats.merge_into(survivor, absorbed);
    }
}

#[inline]
fn pair_cost(stats: &ChannelStats, a: usize, b: usize, distance: usize) -> f32 {
    (stats.bucket(a).mass + stats.bucket(b).mass) * penalty(distance)
}

#[inline]
fn is_better(candidate: f32, best: f32, pick_greatest: bool) -> bool {
    if pick_greatest {
        candidate > best
    } else {
        candidate < best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_with(buckets: &[(usize, f32)], bucket_count: usize) -> ChannelStats {
        let mut stats = ChannelStats::new(bucket_count);
        for &(index, mass) in buckets {
            stats.add(index, [(index % 256) as u8, 0, 0], mass);
        }
        stats
    }

    #[test]
    fn test_penalty_is_logarithmic() {
        assert_eq!(penalty(1), 1.0);
        assert_eq!(penalty(3), 2.0);
        assert_eq!(penalty(7), 3.0);
    }

    #[test]
    fn test_target_zero_clears_channel() {
        let mut stats = channel_with(&[(2, 1.0), (5, 1.0), (9, 1.0)], 16);
        reduce(&mut stats, 0, false, MergeStrategy::LeastCost);
        assert_eq!(stats.active_count(), 0);
    }

    #[test]
    fn test_noop_when_at_or_under_target() {
        let mut stats = channel_with(&[(2, 1.0), (5, 1.0)], 16);
        let before: Vec<usize> = stats.active().collect();
        reduce(&mut stats, 2, false, MergeStrategy::LeastCost);
        assert_eq!(stats.active().collect::<Vec<_>>(), before);
        reduce(&mut stats, 5, false, MergeStrategy::LeastCost);
        assert_eq!(stats.active().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_reduces_to_exact_target() {
        for target in 1..=6 {
            let mut stats = channel_with(
                &[(0, 1.0), (3, 2.0), (7, 0.5), (8, 0.5), (20, 4.0), (40, 1.0)],
                64,
            );
            reduce(&mut stats, target, false, MergeStrategy::LeastCost);
            assert_eq!(
                stats.active_count(),
                target.min(6),
                "reduction to target {} landed on wrong count",
                target
            );
        }
    }

    #[test]
    fn test_merges_cheapest_adjacent_pair_first() {
        // Buckets 7 and 8 are adjacent (penalty 1) and tiny: cheapest pair.
        let mut stats = channel_with(&[(0, 5.0), (7, 0.5), (8, 0.5), (20, 5.0)], 32);
        reduce(&mut stats, 3, false, MergeStrategy::LeastCost);
        assert_eq!(stats.active().collect::<Vec<_>>(), vec![0, 7, 20]);
        assert!((stats.bucket(7).mass - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mass_conserved_across_merges() {
        let mut stats = channel_with(
            &[(1, 0.25), (50, 1.5), (51, 0.75), (100, 2.0), (300, 1.0)],
            360,
        );
        let total = stats.total_mass();
        reduce(&mut stats, 2, true, MergeStrategy::LeastCost);
        assert!(
            (stats.active_mass() - total).abs() < 1e-4,
            "merges must move mass, not discard it"
        );
    }

    #[test]
    fn test_wraparound_pair_distance() {
        // Buckets 359 and 0 are 1 apart under wraparound, 359 apart without.
        // With equal masses everywhere, the wrap pair is the cheapest merge
        // only when wraparound is enabled.
        let mut wrapped = channel_with(&[(0, 1.0), (120, 1.0), (240, 1.0), (359, 1.0)], 360);
        reduce(&mut wrapped, 3, true, MergeStrategy::LeastCost);
        assert_eq!(
            wrapped.active().collect::<Vec<_>>(),
            vec![120, 240, 359],
            "wrap pair (359, 0) should merge first, surviving at 359"
        );

        let mut linear = channel_with(&[(0, 1.0), (120, 1.0), (240, 1.0), (359, 1.0)], 360);
        reduce(&mut linear, 3, false, MergeStrategy::LeastCost);
        assert_ne!(
            linear.active().collect::<Vec<_>>(),
            vec![120, 240, 359],
            "without wraparound the (359, 0) pair is not adjacent-cheap"
        );
    }

    #[test]
    fn test_wrap_merge_absorbs_first_into_last() {
        let mut stats = channel_with(&[(2, 1.0), (358, 1.0)], 360);
        reduce(&mut stats, 1, true, MergeStrategy::LeastCost);
        // The wrap pair is (358, 2): second bucket (index 2) merges into the
        // first (index 358).
        assert_eq!(stats.active().collect::<Vec<_>>(), vec![358]);
        assert!((stats.bucket(358).mass - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_ties_resolve_to_first_ascending_pair() {
        // Two identical-cost pairs: (0, 1) and (10, 11). The ascending scan
        // must pick (0, 1).
        let mut stats = channel_with(&[(0, 1.0), (1, 1.0), (10, 1.0), (11, 1.0)], 32);
        reduce(&mut stats, 3, false, MergeStrategy::LeastCost);
        assert_eq!(stats.active().collect::<Vec<_>>(), vec![0, 10, 11]);
    }

    #[test]
    fn test_greatest_cost_strategy_inverts_selection() {
        // (0, 1) is the cheap pair; (10, 30) is the expensive one.
        let mut stats = channel_with(&[(0, 0.1), (1, 0.1), (10, 5.0), (30, 5.0)], 64);
        reduce(&mut stats, 3, false, MergeStrategy::GreatestCost);
        assert_eq!(
            stats.active().collect::<Vec<_>>(),
            vec![0, 1, 10],
            "greatest-cost mode should merge the expensive far pair first"
        );
    }

    #[test]
    fn test_alternating_strategy_terminates_at_target() {
        let mut stats = channel_with(
            &[(0, 1.0), (5, 0.2), (6, 0.2), (40, 3.0), (41, 0.1), (90, 2.0)],
            128,
        );
        reduce(&mut stats, 2, false, MergeStrategy::Alternating);
        assert_eq!(stats.active_count(), 2);
    }
}
