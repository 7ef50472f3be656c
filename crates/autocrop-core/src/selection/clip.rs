//! Drag-selection clipping.

use crate::{Point, Rect};

/// Build a selection rectangle from two drag points, clamped to the image.
///
/// The points may arrive in either order (drag start and current position):
/// coordinates are swapped component-wise so the first corner becomes the
/// minimum. Both corners are then clamped into `[0, max_width]` x
/// `[0, max_height]` and the rectangle is built with truncating integer
/// casts.
///
/// Truncation, not rounding, decides edge-pixel inclusion; a drag ending at
/// x = 9.7 selects through pixel column 9, never 10.
///
/// # Returns
///
/// A rectangle inside the image bounds. Zero-size output is valid (the
/// user has not dragged yet).
pub fn clip_rect(a: Point, b: Point, max_width: i32, max_height: i32) -> Rect {
    let (mut a, mut b) = (a, b);

    if b.x < a.x {
        std::mem::swap(&mut a.x, &mut b.x);
    }
    if b.y < a.y {
        std::mem::swap(&mut a.y, &mut b.y);
    }

    let max_x = max_width as f64;
    let max_y = max_height as f64;
    a.x = a.x.max(0.0).min(max_x);
    a.y = a.y.max(0.0).min(max_y);
    b.x = b.x.max(0.0).min(max_x);
    b.y = b.y.max(0.0).min(max_y);

    Rect {
        x: a.x as i32,
        y: a.y as i32,
        width: (b.x - a.x) as i32,
        height: (b.y - a.y) as i32,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
