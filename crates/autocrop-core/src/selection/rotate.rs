//! Selection remapping under 90-degree image rotation.

use crate::Rect;

/// Remap a selection rectangle after the underlying image turns 90 degrees.
///
/// `old_width` and `old_height` are the dimensions of the image the
/// selection was made against, before the rotation. A quarter turn
/// exchanges the axes, so the remapped rectangle's width and height swap
/// and the result stays anchored to the same pixels inside the rotated
/// image's bounds.
///
/// Remapping clockwise and then counter-clockwise (passing the rotated
/// image's swapped dimensions to the second call) returns the original
/// rectangle exactly.
pub fn rotate_selection(selection: Rect, old_width: i32, old_height: i32, clockwise: bool) -> Rect {
    if clockwise {
        // (x, y) lands at (old_height - 1 - y, x); the rectangle's top-right
        // corner becomes the new top-left.
        Rect {
            x: old_height - selection.height - selection.y,
            y: selection.x,
            width: selection.height,
            height: selection.width,
        }
    } else {
        // (x, y) lands at (y, old_width - 1 - x).
        Rect {
            x: selection.y,
            y: old_width - selection.width - selection.x,
            width: selection.height,
            height: selection.width,
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
