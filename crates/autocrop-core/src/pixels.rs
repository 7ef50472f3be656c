//! Pixel buffer access: the borrowed stride-aware view and the owned image.
//!
//! Hosts decode images however they like and hand the packed 8-bit RGBA
//! bytes across this boundary. `PixelView` validates the buffer up front so
//! the detector can index freely afterwards; `ImageBuf` is the owned
//! counterpart the raster operations produce and consume.

use thiserror::Error;

use crate::luminance;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Error types for pixel buffer preconditions.
#[derive(Debug, Error)]
pub enum PixelBufferError {
    /// The declared stride cannot hold one row of pixels.
    #[error("stride {stride} too small for width {width} (needs at least {min} bytes)")]
    InvalidStride { stride: u32, width: u32, min: u64 },

    /// The buffer is shorter than the declared dimensions require.
    #[error("pixel buffer holds {actual} bytes but {expected} are required")]
    InvalidBufferSize { expected: u64, actual: usize },
}

/// Borrowed view over a packed 8-bit RGBA buffer.
///
/// Rows are `stride` bytes apart; the stride may exceed `width * 4` when the
/// producer pads rows, and padding bytes are never read. Construction
/// validates the buffer against the declared dimensions, so the accessors
/// cannot read out of bounds.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    bytes: &'a [u8],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> PixelView<'a> {
    /// Create a view, rejecting buffers too small for the declared layout.
    pub fn new(
        bytes: &'a [u8],
        width: u32,
        height: u32,
        stride: u32,
    ) -> Result<Self, PixelBufferError> {
        let min_stride = width as u64 * BYTES_PER_PIXEL as u64;
        if (stride as u64) < min_stride {
            return Err(PixelBufferError::InvalidStride {
                stride,
                width,
                min: min_stride,
            });
        }

        let expected = stride as u64 * height as u64;
        if (bytes.len() as u64) < expected {
            return Err(PixelBufferError::InvalidBufferSize {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            bytes,
            width,
            height,
            stride,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Distance between row starts, in bytes.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// RGBA bytes of the pixel at (x, y).
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let idx = y as usize * self.stride as usize + x as usize * BYTES_PER_PIXEL;
        [
            self.bytes[idx],
            self.bytes[idx + 1],
            self.bytes[idx + 2],
            self.bytes[idx + 3],
        ]
    }

    /// Brightness of the pixel at (x, y) in the range 0.0 to 1.0.
    ///
    /// Alpha is ignored.
    #[inline]
    pub fn luminance(&self, x: u32, y: u32) -> f64 {
        let [r, g, b, _] = self.rgba(x, y);
        luminance::luminance(r, g, b)
    }

    /// Iterate the pixels of row `y` as RGBA quadruples, skipping padding.
    pub fn row(&self, y: u32) -> impl Iterator<Item = [u8; 4]> + 'a {
        debug_assert!(y < self.height);
        let start = y as usize * self.stride as usize;
        let bytes: &'a [u8] = self.bytes;
        bytes[start..start + self.width as usize * BYTES_PER_PIXEL]
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// An owned packed RGBA image.
///
/// The stride is always exactly `width * 4`; producers with padded rows go
/// through [`PixelView`] instead. Length of `pixels` must be
/// `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuf {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl ImageBuf {
    /// Create a new ImageBuf with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an ImageBuf from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert into an image::RgbaImage for further processing.
    pub fn into_rgba_image(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels)
    }

    /// Packed row stride in bytes.
    pub fn stride(&self) -> u32 {
        self.width * BYTES_PER_PIXEL as u32
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Borrow the image as a validated pixel view.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            bytes: &self.pixels,
            width: self.width,
            height: self.height,
            stride: self.stride(),
        }
    }
}
