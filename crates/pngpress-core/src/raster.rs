//! Borrowed raster views over decoded RGBA pixel data.
//!
//! The surrounding conversion pipeline decodes game assets into tightly
//! packed RGBA buffers; this module wraps such a buffer in a validated,
//! read-only view. The view never takes ownership - pixel data is borrowed
//! for the duration of an encode call only.

use thiserror::Error;

/// Number of channels (bytes) per pixel in packed RGBA8 data.
pub const RGBA_CHANNELS: usize = 4;

/// Errors that can occur when constructing a raster view.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// `width * height * 4` does not fit in `usize` (32-bit targets).
    #[error("dimensions {width}x{height} overflow when computing buffer size")]
    DimensionsOverflow { width: u32, height: u32 },

    /// Buffer length doesn't match the stated dimensions.
    #[error("invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// A read-only view over a tightly packed, row-major RGBA8 pixel buffer.
///
/// Invariant: `pixels.len() == width * height * 4`, checked at construction,
/// so every later consumer can slice rows without re-validating.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> Raster<'a> {
    /// Wrap a packed RGBA8 buffer, validating dimensions and buffer length.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` if either dimension is zero,
    /// `RasterError::DimensionsOverflow` if the byte size does not fit in
    /// `usize`, and `RasterError::InvalidPixelData` if the buffer length
    /// does not equal `width * height * 4`.
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(RGBA_CHANNELS))
            .ok_or(RasterError::DimensionsOverflow { width, height })?;

        if pixels.len() != expected {
            return Err(RasterError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full packed pixel buffer.
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Length of one packed row in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * RGBA_CHANNELS
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.pixels.chunks_exact(self.stride())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_raster() {
        let pixels = vec![0u8; 4 * 3 * 4];
        let raster = Raster::new(&pixels, 4, 3).unwrap();

        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.stride(), 16);
        assert_eq!(raster.pixels().len(), 48);
    }

    #[test]
    fn test_zero_width() {
        let result = Raster::new(&[], 0, 3);
        assert!(matches!(
            result,
            Err(RasterError::InvalidDimensions { width: 0, height: 3 })
        ));
    }

    #[test]
    fn test_zero_height() {
        let result = Raster::new(&[], 3, 0);
        assert!(matches!(
            result,
            Err(RasterError::InvalidDimensions { width: 3, height: 0 })
        ));
    }

    #[test]
    fn test_buffer_too_short() {
        let pixels = vec![0u8; 4 * 3 * 4 - 1];
        let result = Raster::new(&pixels, 4, 3);
        assert!(matches!(
            result,
            Err(RasterError::InvalidPixelData {
                expected: 48,
                actual: 47
            })
        ));
    }

    #[test]
    fn test_buffer_too_long() {
        let pixels = vec![0u8; 4 * 3 * 4 + 4];
        let result = Raster::new(&pixels, 4, 3);
        assert!(matches!(result, Err(RasterError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_single_pixel() {
        let pixels = [1u8, 2, 3, 4];
        let raster = Raster::new(&pixels, 1, 1).unwrap();

        let rows: Vec<&[u8]> = raster.rows().collect();
        assert_eq!(rows, vec![&pixels[..]]);
    }

    #[test]
    fn test_rows_are_tightly_packed() {
        // 2x2 image, each pixel's red channel tags its position
        let pixels = [
            10, 0, 0, 255, 11, 0, 0, 255, //
            20, 0, 0, 255, 21, 0, 0, 255,
        ];
        let raster = Raster::new(&pixels, 2, 2).unwrap();

        let rows: Vec<&[u8]> = raster.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &pixels[0..8]);
        assert_eq!(rows[1], &pixels[8..16]);
    }
}
