//! WASM-compatible wrapper types for images and rectangles.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Autocrop types, handling the conversion between Rust and JavaScript
//! data representations.

use autocrop_core::{ImageBuf, Rect};
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// The host decodes images (canvas, codec library, file API) and hands the
/// packed RGBA bytes in; this type keeps them in WASM memory so repeated
/// detections and crops avoid re-copying across the boundary.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a
/// copy is made to JavaScript memory as a `Uint8Array`. The `free()` method
/// can be called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    /// Create a JsImage by copying pixels out of a `Uint8Array`.
    ///
    /// Convenient for canvas `ImageData.data`, which is already packed
    /// RGBA in row-major order.
    pub fn from_image_data(data: &js_sys::Uint8Array, width: u32, height: u32) -> JsImage {
        JsImage {
            width,
            height,
            pixels: data.to_vec(),
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Create a JsImage from a core ImageBuf.
    pub(crate) fn from_buf(img: ImageBuf) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert to a core ImageBuf. Clones the pixel data.
    pub(crate) fn to_buf(&self) -> ImageBuf {
        ImageBuf {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }

    /// Borrow the raw pixel bytes.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.pixels
    }
}

/// A selection or content rectangle accessible from JavaScript.
#[wasm_bindgen]
pub struct JsRect {
    inner: Rect,
}

#[wasm_bindgen]
impl JsRect {
    /// Create a rectangle from its origin and extent.
    #[wasm_bindgen(constructor)]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> JsRect {
        JsRect {
            inner: Rect::new(x, y, width, height),
        }
    }

    /// Parse a rectangle from a plain `{x, y, width, height}` object.
    ///
    /// # Errors
    /// Returns an error if the object is missing fields or has the wrong
    /// shape.
    pub fn from_object(value: JsValue) -> Result<JsRect, JsValue> {
        let inner: Rect = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid rectangle: {}", e)))?;
        Ok(JsRect { inner })
    }

    /// Convert to a plain `{x, y, width, height}` object.
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Left edge in pixels
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 {
        self.inner.x
    }

    /// Top edge in pixels
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 {
        self.inner.y
    }

    /// Extent in pixels along x
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 {
        self.inner.width
    }

    /// Extent in pixels along y
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 {
        self.inner.height
    }

    /// Check whether the rectangle encloses no pixels.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl JsRect {
    /// Wrap a core Rect.
    pub(crate) fn from_rect(rect: Rect) -> Self {
        Self { inner: rect }
    }

    /// Access the wrapped core Rect.
    pub(crate) fn rect(&self) -> Rect {
        self.inner
    }
}
