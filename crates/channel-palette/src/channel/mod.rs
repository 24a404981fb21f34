//! Bucket statistics for the hue and lightness channels.
//!
//! [`ChannelStats`] holds the accumulated per-bucket color sums,
//! [`accumulate`](accumulate::accumulate) fills a pair of them from a pixel
//! stream, and [`merge`](merge::reduce) collapses populated buckets down to
//! a target count.

mod accumulate;
mod merge;
mod stats;

pub use accumulate::{accumulate, ImageChannels, HUE_BUCKETS, MAX_LIGHTNESS_BUCKETS};
pub use merge::{penalty, reduce, MergeStrategy};
pub use stats::{Bucket, ChannelStats};
