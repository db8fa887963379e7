//! Measurement provider for the thumbnail strip.
//!
//! Layout engines report sizes late (an image finishing its load can add a
//! scrollbar and shrink the viewport), so values are read on demand instead of
//! being cached at construction.

/// Widths and offsets of the strip, in the host's pixel unit.
pub trait StripMetrics {
    /// Width of the visible window onto the strip.
    fn viewport_width(&self) -> f32;

    /// Total width of the strip content.
    fn content_width(&self) -> f32;

    /// Outer width of one thumbnail, margins included.
    fn item_width(&self) -> f32;

    /// Left edge of the thumbnail at `position`, relative to the strip start.
    fn item_left(&self, position: usize) -> f32;
}
