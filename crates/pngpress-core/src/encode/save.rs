//! Public entry point selecting between the encode paths.

use super::params::{CompressionMethod, CompressionParams, SearchSpace};
use super::png::{encode_default, encode_trial, EncodeError};
use super::search::search;
use crate::raster::Raster;

/// An encoded PNG stream plus the parameters that produced it, when known.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Complete PNG byte stream, ready to be written out by the caller.
    pub bytes: Vec<u8>,
    /// The parameter tuple used, `None` for the codec-default path. Callers
    /// batch-converting similar rasters can persist this and pass it back
    /// as `replay` to skip the search next time.
    pub params: Option<CompressionParams>,
}

/// Encode `raster` with the selected compression method.
///
/// * [`CompressionMethod::Default`] - one encode with the codec's built-in
///   settings; no tuple is reported since none was chosen.
/// * [`CompressionMethod::Greedy`] - with `replay` set, a single validated
///   trial using those parameters, skipping the search a previous run
///   already paid for; otherwise a full greedy search over
///   [`SearchSpace::default`].
///
/// [`CompressionMethod::None`] and [`CompressionMethod::Aggressive`] are
/// rejected with `EncodeError::UnsupportedMethod`.
///
/// # Errors
///
/// Trial failures propagate unchanged; no fallback encode is attempted.
pub fn save(
    raster: &Raster<'_>,
    method: CompressionMethod,
    replay: Option<CompressionParams>,
) -> Result<Encoded, EncodeError> {
    match method {
        CompressionMethod::Default => Ok(Encoded {
            bytes: encode_default(raster)?,
            params: None,
        }),
        CompressionMethod::Greedy => match replay {
            Some(params) => Ok(Encoded {
                bytes: encode_trial(raster, &params)?,
                params: Some(params),
            }),
            None => {
                let outcome = search(raster, &SearchSpace::default())?;
                Ok(Encoded {
                    bytes: outcome.bytes,
                    params: Some(outcome.params),
                })
            }
        },
        other => Err(EncodeError::UnsupportedMethod(other)),
    }
}
