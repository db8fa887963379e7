use carousel_core::LoadRequest;

mod core;
mod navigation;
mod strip;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    FetchPrimary(LoadRequest),
    Preload(Vec<String>),
    FetchThumbnails(Vec<String>),
    SyncStrip,
    SaveConfig,
    QuitSafely,
}
