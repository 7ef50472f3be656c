//! Selection rectangle geometry: drag clipping and rotation remapping.
//!
//! These operations never look at pixel content. They keep the user's
//! selection rectangle legal while it is dragged across the image and keep
//! it anchored to the same content when the underlying image is rotated in
//! 90-degree steps.
//!
//! # Coordinate System
//!
//! - Origin is the image's top-left corner
//! - Drag points are floating-point image-space positions
//! - Selection rectangles are integer pixel rectangles

mod clip;
mod rotate;

pub use clip::clip_rect;
pub use rotate::rotate_selection;
