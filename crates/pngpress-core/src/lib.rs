//! Pngpress Core - PNG export library
//!
//! This crate provides the core PNG export functionality for Pngpress:
//! wrapping decoded RGBA pixel buffers in validated views and compressing
//! them into PNG byte streams, with an optional greedy search over the
//! codec's compression parameters to minimize output size.
//!
//! The crate is stateless between calls and borrows pixel data for the
//! duration of an encode only, so callers may process many rasters in
//! parallel with independent invocations.

pub mod encode;
pub mod raster;

#[cfg(test)]
pub(crate) mod testutil;

pub use encode::{
    encode_trial, save, search, CompressionMethod, CompressionParams, EncodeError, Encoded,
    FilterChoice, SearchOutcome, SearchSpace, Strategy,
};
pub use raster::{Raster, RasterError, RGBA_CHANNELS};
