//! Autocrop WASM - WebAssembly bindings for Autocrop
//!
//! This crate exposes the autocrop-core functionality to JavaScript and
//! TypeScript hosts: content-region detection, selection geometry, and
//! raster crop/rotate application. The host owns decoding, rendering, and
//! every other concern; this boundary only moves pixel buffers in and
//! rectangles out.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for images and rectangles
//! - `detect` - Content-region detection bindings
//! - `selection` - Drag clipping and selection rotation bindings
//! - `raster` - Crop and quarter-turn rotation bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImage, detect_content_region, default_threshold }
//!   from '@autocrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsImage(width, height, rgbaBytes);
//! const rect = detect_content_region(image, default_threshold());
//! ```

use wasm_bindgen::prelude::*;

mod detect;
mod raster;
mod selection;
mod types;

// Re-export public types
pub use detect::{default_threshold, detect_content_region, detect_content_region_raw};
pub use raster::{crop_to_rect, rotate90};
pub use selection::{clip_rect, rotate_selection};
pub use types::{JsImage, JsRect};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
