use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Limits and layout constants for the viewer.
pub(crate) const MIN_THUMB_WIDTH: f32 = 16.0;
pub(crate) const MAX_THUMB_WIDTH: f32 = 512.0;
pub(crate) const MIN_THUMB_HEIGHT: f32 = 16.0;
pub(crate) const MAX_THUMB_HEIGHT: f32 = 512.0;
pub(crate) const MAX_THUMB_SPACING: f32 = 64.0;
pub(crate) const MAX_ANIMATION_MS: u64 = 5_000;
pub(crate) const MIN_FETCH_TIMEOUT_SECS: u64 = 1;
pub(crate) const STRIP_PADDING_PX: f32 = 12.0;
pub(crate) const THUMB_BORDER_PX: f32 = 2.0;
pub(crate) const COUNTER_FONT_SIZE_PX: f32 = 16.0;
pub(crate) const FRAME_INTERVAL_MS: u64 = 16;
pub(crate) static STRIP_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("strip-scroll"));
