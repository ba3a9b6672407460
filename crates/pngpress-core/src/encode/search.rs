//! Greedy search over the compression parameter space.

use super::params::{CompressionParams, SearchSpace};
use super::png::{encode_trial, EncodeError};
use crate::raster::Raster;

/// The winning parameter tuple and the bytes it produced.
///
/// Created fresh per search and handed to the caller; nothing is retained
/// between invocations.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Parameters of the smallest trial.
    pub params: CompressionParams,
    /// The complete PNG stream that trial produced.
    pub bytes: Vec<u8>,
}

/// Try every candidate in `space` and keep the smallest output.
///
/// Candidates are visited in the space's fixed nested order, and a later
/// candidate replaces the best only when strictly smaller - so the first
/// minimal tuple wins, and repeated runs over the same raster pick the same
/// winner and the same bytes. Each trial's sink is dropped before the next
/// trial starts; only the best-so-far bytes stay live.
///
/// A failing trial aborts the whole search rather than skipping the
/// candidate: codec failures are systemic (allocation, stream accounting),
/// not specific to one tuple.
///
/// # Errors
///
/// Returns `EncodeError::EmptySearchSpace` if the space enumerates no
/// candidates; any trial failure propagates unchanged.
pub fn search(raster: &Raster<'_>, space: &SearchSpace) -> Result<SearchOutcome, EncodeError> {
    let mut best: Option<SearchOutcome> = None;

    for params in space.candidates() {
        let bytes = encode_trial(raster, &params)?;
        if best.as_ref().is_none_or(|b| bytes.len() < b.bytes.len()) {
            best = Some(SearchOutcome { params, bytes });
        }
    }

    best.ok_or(EncodeError::EmptySearchSpace)
}
