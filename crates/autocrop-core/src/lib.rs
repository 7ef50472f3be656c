//! Autocrop Core - Content-aware crop detection
//!
//! This crate provides the core logic of the Autocrop image cropping tool:
//! detecting the rectangle that tightly bounds an image's non-background
//! content, clipping user drag selections to the image, remapping selections
//! under 90-degree rotation, and applying selections to the pixel buffer.
//!
//! The crate performs no decoding, rendering, or I/O. Hosts hand in decoded
//! RGBA buffers and consume rectangles; every operation is a pure function
//! of its arguments.

pub mod detect;
pub mod luminance;
pub mod pixels;
pub mod raster;
pub mod selection;

pub use detect::{content_rect, detect_content_region, DEFAULT_THRESHOLD};
pub use pixels::{ImageBuf, PixelBufferError, PixelView};
pub use raster::{crop_to_rect, rotate90};
pub use selection::{clip_rect, rotate_selection};

/// Integer rectangle in image pixel space.
///
/// Represents either a detected content region or a user selection. A legal
/// rectangle has non-negative origin and extent and lies within the bounds
/// of the image it refers to; zero-size rectangles are valid (no selection
/// yet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Extent in pixels along x.
    pub width: i32,
    /// Extent in pixels along y.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its origin and extent.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero rectangle, used as the "no selection" state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rectangle covering an entire `width` x `height` image.
    pub fn full(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Check whether the rectangle encloses no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of pixels enclosed. Degenerate rectangles have zero area.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// A position in image space.
///
/// Coordinates are floating-point because drag positions arrive from the
/// host already divided by the display scale; they are only truncated to
/// pixel indices when a selection rectangle is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
