//! Compression parameter types and the greedy-search candidate space.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::png::EncodeError;

/// zlib compression levels accepted by [`CompressionParams`].
pub const LEVEL_RANGE: RangeInclusive<u8> = 1..=9;

/// zlib memory levels accepted by [`CompressionParams`].
pub const MEM_LEVEL_RANGE: RangeInclusive<u8> = 1..=9;

/// Entropy-coder strategy handed to the codec, mirroring the zlib strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Strategy {
    /// General-purpose string matching (Z_DEFAULT_STRATEGY).
    Default = 0,
    /// Bias toward Huffman coding, for filtered data (Z_FILTERED).
    Filtered = 1,
    /// Huffman coding only, no string matching (Z_HUFFMAN_ONLY).
    HuffmanOnly = 2,
    /// Run-length matching only (Z_RLE).
    Rle = 3,
}

impl Strategy {
    /// All strategies, in search enumeration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Default,
        Strategy::Filtered,
        Strategy::HuffmanOnly,
        Strategy::Rle,
    ];
}

/// Scanline filter selector.
///
/// Only the two extremes are probed by the search - no filtering at all, or
/// the codec's adaptive per-row choice over all five standard filters. This
/// reproduces the trial surface of optipng's `-o2` preset; keeping the same
/// restricted surface keeps output sizes comparable with that tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterChoice {
    /// No scanline filtering.
    None,
    /// Adaptive per-row selection over all standard filters.
    All,
}

/// One parameter tuple handed to the codec for a single trial encode.
///
/// Serializable so batch converters can persist a winning tuple and replay
/// it on similar rasters without paying for the search again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionParams {
    /// zlib compression level, 1-9.
    pub level: u8,
    /// zlib memory level, 1-9.
    pub mem_level: u8,
    /// zlib strategy.
    pub strategy: Strategy,
    /// Scanline filter selector.
    pub filter: FilterChoice,
}

impl CompressionParams {
    /// Check the numeric fields against the codec's accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::UnsupportedParams` naming the offending field.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if !LEVEL_RANGE.contains(&self.level) {
            return Err(EncodeError::UnsupportedParams {
                field: "level",
                value: self.level,
                min: *LEVEL_RANGE.start(),
                max: *LEVEL_RANGE.end(),
            });
        }
        if !MEM_LEVEL_RANGE.contains(&self.mem_level) {
            return Err(EncodeError::UnsupportedParams {
                field: "mem_level",
                value: self.mem_level,
                min: *MEM_LEVEL_RANGE.start(),
                max: *MEM_LEVEL_RANGE.end(),
            });
        }
        Ok(())
    }
}

/// How [`save`](super::save) compresses a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionMethod {
    /// No compression. Kept for callers that persist the selection; the
    /// facade rejects it.
    None,
    /// Single encode with the codec's built-in settings.
    Default,
    /// Exhaustive trial over the candidate space, keeping the smallest
    /// output.
    Greedy,
    /// Reserved for a future, slower search. The facade rejects it.
    Aggressive,
}

/// The candidate space enumerated by the greedy search.
///
/// The default space reproduces the optipng `-o2` trial set: both filter
/// extremes, all four strategies, level fixed at 9 and memory level fixed
/// at 8 - eight candidates total. The level and memory-level axes accept
/// ranges so a caller can widen the sweep if it is worth the extra trials.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    /// Filter selectors to probe.
    pub filters: Vec<FilterChoice>,
    /// Strategies to probe.
    pub strategies: Vec<Strategy>,
    /// Compression levels to probe.
    pub levels: RangeInclusive<u8>,
    /// Memory levels to probe.
    pub mem_levels: RangeInclusive<u8>,
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self {
            filters: vec![FilterChoice::None, FilterChoice::All],
            strategies: Strategy::ALL.to_vec(),
            levels: 9..=9,
            mem_levels: 8..=8,
        }
    }
}

impl SearchSpace {
    /// Number of candidate tuples the space enumerates.
    pub fn len(&self) -> usize {
        self.filters.len()
            * self.strategies.len()
            * self.levels.clone().count()
            * self.mem_levels.clone().count()
    }

    /// True if the space enumerates no candidates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate tuples in a fixed nested order: filter, then strategy,
    /// then level, then memory level. The search's tie-break (first minimal
    /// candidate wins) makes this order part of the observable behavior.
    pub fn candidates(&self) -> impl Iterator<Item = CompressionParams> + '_ {
        self.filters.iter().flat_map(move |&filter| {
            self.strategies.iter().flat_map(move |&strategy| {
                self.levels.clone().flat_map(move |level| {
                    self.mem_levels.clone().map(move |mem_level| CompressionParams {
                        level,
                        mem_level,
                        strategy,
                        filter,
                    })
                })
            })
        })
    }
}
