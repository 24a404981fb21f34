//! Public API: the [`ChannelQuantizer`] entry point and unified error type.

mod error;
mod quantizer;

pub use error::QuantizeError;
pub use quantizer::ChannelQuantizer;
