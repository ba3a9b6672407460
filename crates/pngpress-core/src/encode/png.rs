//! PNG codec adapter: single-shot and parameterized trial encodes.
//!
//! This module delegates all actual compression to the `png` crate and only
//! maps a parameter tuple onto the codec's configuration. Rows are streamed
//! into a growable in-memory sink, never a file: a greedy search runs many
//! trial encodes per raster, and only the byte counts and the winning bytes
//! are ever needed.

use std::io::Write;

use png::{AdaptiveFilterType, BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use super::params::{CompressionMethod, CompressionParams, FilterChoice, Strategy};
use crate::raster::{Raster, RasterError};

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The raster view failed validation.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// A caller-supplied parameter falls outside the codec's accepted range.
    #[error("unsupported params: {field} = {value}, accepted range {min}..={max}")]
    UnsupportedParams {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    /// The facade was asked for a compression method it does not implement.
    #[error("unsupported compression method: {0:?}")]
    UnsupportedMethod(CompressionMethod),

    /// The configured search space enumerates no candidates.
    #[error("search space contains no candidate parameters")]
    EmptySearchSpace,

    /// The codec reported an allocation or write failure.
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode one trial with an explicit parameter tuple.
///
/// The tuple is validated before the codec sees it. On success the returned
/// bytes are a complete PNG stream; on failure no partial output is
/// returned and the sink is released.
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedParams` for out-of-range fields and
/// `EncodeError::EncodingFailed` if the codec cannot complete the stream.
pub fn encode_trial(
    raster: &Raster<'_>,
    params: &CompressionParams,
) -> Result<Vec<u8>, EncodeError> {
    params.validate()?;
    run_encoder(raster, Some(params))
}

/// Encode with the codec's built-in settings, no parameter tuple involved.
pub(crate) fn encode_default(raster: &Raster<'_>) -> Result<Vec<u8>, EncodeError> {
    run_encoder(raster, None)
}

fn run_encoder(
    raster: &Raster<'_>,
    params: Option<&CompressionParams>,
) -> Result<Vec<u8>, EncodeError> {
    let mut sink = Vec::new();
    {
        let mut encoder = Encoder::new(&mut sink, raster.width(), raster.height());
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);

        if let Some(params) = params {
            encoder.set_compression(compression_mode(params.level, params.strategy));
            match params.filter {
                FilterChoice::None => {
                    encoder.set_filter(FilterType::NoFilter);
                    encoder.set_adaptive_filter(AdaptiveFilterType::NonAdaptive);
                }
                FilterChoice::All => {
                    encoder.set_adaptive_filter(AdaptiveFilterType::Adaptive);
                }
            }
        }

        let mut writer = encoder
            .write_header()
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        let mut stream = writer
            .stream_writer()
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

        for row in raster.rows() {
            stream
                .write_all(row)
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }

        stream
            .finish()
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    }
    Ok(sink)
}

/// Map the (level, strategy) pair onto the codec's compression modes.
///
/// The Huffman-only and RLE strategies select the codec's dedicated modes;
/// the default and filtered strategies pick a mode from the level. Tuples
/// the backend cannot distinguish collapse onto the same mode, which is
/// safe for the search: equal-size trials never displace an earlier winner.
#[allow(deprecated)]
fn compression_mode(level: u8, strategy: Strategy) -> Compression {
    match strategy {
        Strategy::HuffmanOnly => Compression::Huffman,
        Strategy::Rle => Compression::Rle,
        Strategy::Default | Strategy::Filtered => match level {
            1..=3 => Compression::Fast,
            4..=6 => Compression::Default,
            _ => Compression::Best,
        },
    }
}
