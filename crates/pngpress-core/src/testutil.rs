//! Shared fixtures for the test modules.

use crate::encode::{CompressionParams, FilterChoice, Strategy};

/// Fixed eight-byte signature every PNG stream starts with.
pub(crate) const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A packed RGBA buffer with every pixel set to `rgba`.
pub(crate) fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for _ in 0..width * height {
        pixels.extend_from_slice(&rgba);
    }
    pixels
}

/// Incompressible pattern from a fixed-seed LCG, so tests stay stable
/// without a random-number dependency.
pub(crate) fn noise(width: u32, height: u32) -> Vec<u8> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..(width as u64) * (height as u64) * 4)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) as u8
        })
        .collect()
}

/// A tuple in the middle of the default search surface.
pub(crate) fn base_params() -> CompressionParams {
    CompressionParams {
        level: 9,
        mem_level: 8,
        strategy: Strategy::Default,
        filter: FilterChoice::None,
    }
}
