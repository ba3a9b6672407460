//! PNG export pipeline for Pngpress.
//!
//! This module provides functionality for:
//! - Encoding RGBA rasters to PNG with the codec's built-in settings
//! - Greedy search over compression parameters to minimize output size
//! - Replaying a previously found parameter tuple without searching
//!
//! # Architecture
//!
//! All encoding is delegated to the `png` crate; this module only selects
//! parameters and measures results. Every trial streams into a growable
//! in-memory sink - a search runs several encodes per raster, and disk I/O
//! per trial would dominate the runtime.
//!
//! # Examples
//!
//! ```ignore
//! use pngpress_core::encode::{save, CompressionMethod};
//! use pngpress_core::raster::Raster;
//!
//! let pixels = vec![0u8; 64 * 64 * 4];
//! let raster = Raster::new(&pixels, 64, 64).unwrap();
//!
//! let encoded = save(&raster, CompressionMethod::Greedy, None).unwrap();
//! println!(
//!     "{} bytes with {:?}",
//!     encoded.bytes.len(),
//!     encoded.params
//! );
//! ```

mod params;
mod png;
mod save;
mod search;

pub use params::{
    CompressionMethod, CompressionParams, FilterChoice, SearchSpace, Strategy, LEVEL_RANGE,
    MEM_LEVEL_RANGE,
};
pub use png::{encode_trial, EncodeError};
pub use save::{save, Encoded};
pub use search::{search, SearchOutcome};
