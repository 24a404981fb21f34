//! Swatcher - perceptual palette extraction for dithering pipelines
//!
//! Command-line front-end for the `channel-palette` quantizer.
//! This library exposes modules for integration testing.

pub mod config;
pub mod error;
pub mod output;
