//! WASM bindings for content-region detection.
//!
//! This module exposes the detector to the host UI, which runs it when the
//! user asks for an automatic crop suggestion and feeds the rectangle into
//! the selection overlay.

use crate::types::{JsImage, JsRect};
use autocrop_core::detect::{detect_content_region as core_detect, DEFAULT_THRESHOLD};
use wasm_bindgen::prelude::*;

/// The detection sensitivity the host UI should start its slider at.
#[wasm_bindgen]
pub fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Detect the rectangle bounding an image's non-background content.
///
/// # Arguments
///
/// * `image` - Source image (packed RGBA)
/// * `threshold` - Sensitivity in 0.0 to 1.0; higher demands denser content
///
/// # Returns
///
/// The tight content rectangle, or the full image when nothing crosses the
/// threshold.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = detect_content_region(image, default_threshold());
/// overlay.show(rect.x, rect.y, rect.width, rect.height);
/// ```
#[wasm_bindgen]
pub fn detect_content_region(image: &JsImage, threshold: f64) -> Result<JsRect, JsValue> {
    let rect = core_detect(
        image.bytes(),
        image.width(),
        image.height(),
        image.width() * 4,
        threshold,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRect::from_rect(rect))
}

/// Detect content bounds from a raw pixel buffer without constructing a
/// `JsImage`.
///
/// Accepts an explicit stride so hosts holding padded buffers (e.g. canvas
/// readback with row alignment) can avoid repacking.
///
/// # Errors
///
/// Fails when the buffer is too small for the declared width, height, and
/// stride.
#[wasm_bindgen]
pub fn detect_content_region_raw(
    pixels: &[u8],
    width: u32,
    height: u32,
    stride: u32,
    threshold: f64,
) -> Result<JsRect, JsValue> {
    let rect = core_detect(pixels, width, height, stride, threshold)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRect::from_rect(rect))
}
