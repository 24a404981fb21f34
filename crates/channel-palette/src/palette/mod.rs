//! Palette slot allocation and final assembly.
//!
//! [`allocate`](allocate::allocate) decides how many palette slots each
//! channel keeps (reserving black/white anchors first) and runs the bucket
//! reduction; [`assemble`](assemble::assemble) turns the surviving bucket
//! centroids into the output [`Palette`] buffer.

mod allocate;
mod assemble;
mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use allocate::{allocate, Allocation};
pub use assemble::assemble;
pub use error::{AssembleError, Stage};
pub use palette::Palette;
