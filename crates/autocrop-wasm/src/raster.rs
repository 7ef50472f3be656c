//! WASM bindings for applying selections to the pixel buffer.

use crate::types::{JsImage, JsRect};
use autocrop_core::raster::{crop_to_rect as core_crop, rotate90 as core_rotate90};
use wasm_bindgen::prelude::*;

/// Crop an image to a selection rectangle.
///
/// The rectangle is clamped to the image bounds and the output is at least
/// 1x1 pixels.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = detect_content_region(image, default_threshold());
/// const cropped = crop_to_rect(image, rect);
/// ```
#[wasm_bindgen]
pub fn crop_to_rect(image: &JsImage, region: &JsRect) -> JsImage {
    let result = core_crop(&image.to_buf(), region.rect());
    JsImage::from_buf(result)
}

/// Rotate an image by 90 degrees, swapping its dimensions.
///
/// The remap is exact (no resampling). Pair with `rotate_selection` to keep
/// an existing selection anchored to the same content.
#[wasm_bindgen]
pub fn rotate90(image: &JsImage, clockwise: bool) -> JsImage {
    let result = core_rotate90(&image.to_buf(), clockwise);
    JsImage::from_buf(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel's red channel encodes its
    /// position.
    fn test_image(width: u32, height: u32) -> JsImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[((y * width + x) % 256) as u8, 0, 0, 255]);
            }
        }
        JsImage::new(width, height, pixels)
    }

    #[test]
    fn test_crop_dimensions() {
        let img = test_image(10, 10);
        let result = crop_to_rect(&img, &JsRect::new(2, 3, 4, 5));
        assert_eq!(result.width(), 4);
        assert_eq!(result.height(), 5);
        // First pixel comes from (2, 3).
        assert_eq!(result.pixels()[0], 32);
    }

    #[test]
    fn test_crop_clamps_out_of_bounds() {
        let img = test_image(10, 10);
        let result = crop_to_rect(&img, &JsRect::new(8, 8, 5, 5));
        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 2);
    }

    #[test]
    fn test_rotate90_swaps_dimensions() {
        let img = test_image(6, 3);
        let result = rotate90(&img, true);
        assert_eq!(result.width(), 3);
        assert_eq!(result.height(), 6);
    }

    #[test]
    fn test_rotate90_round_trip() {
        let img = test_image(5, 4);
        let back = rotate90(&rotate90(&img, true), false);
        assert_eq!(back.pixels(), img.pixels());
        assert_eq!(back.width(), img.width());
        assert_eq!(back.height(), img.height());
    }
}
