//! WASM bindings for selection-rectangle geometry.
//!
//! The host forwards drag positions (already divided by its display scale)
//! while the user is selecting, and remaps the selection when it rotates
//! the displayed image.

use crate::types::JsRect;
use autocrop_core::selection::{
    clip_rect as core_clip, rotate_selection as core_rotate_selection,
};
use autocrop_core::Point;
use wasm_bindgen::prelude::*;

/// Build a selection rectangle from two drag points, clamped to the image.
///
/// The points may arrive in either order; the result is normalized to
/// non-negative extent and clipped to `[0, max_width] x [0, max_height]`.
/// Coordinates are truncated, not rounded, when converting to pixels.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = clip_rect(dragStart.x, dragStart.y, pos.x, pos.y,
///                        image.width, image.height);
/// ```
#[wasm_bindgen]
pub fn clip_rect(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    max_width: i32,
    max_height: i32,
) -> JsRect {
    JsRect::from_rect(core_clip(
        Point::new(ax, ay),
        Point::new(bx, by),
        max_width,
        max_height,
    ))
}

/// Remap a selection rectangle after the image turns 90 degrees.
///
/// `old_width` and `old_height` are the image dimensions the selection was
/// made against, before the rotation. Call this alongside `rotate90` so the
/// overlay keeps covering the same content.
#[wasm_bindgen]
pub fn rotate_selection(
    selection: &JsRect,
    old_width: i32,
    old_height: i32,
    clockwise: bool,
) -> JsRect {
    JsRect::from_rect(core_rotate_selection(
        selection.rect(),
        old_width,
        old_height,
        clockwise,
    ))
}
