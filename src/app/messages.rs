use crate::fetch::LoadedImage;
use carousel_core::{LoadRequest, NodeId};
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextImage,
    PreviousImage,
    /// A press on any node of the gallery tree; the carousel resolves what it
    /// landed on.
    NodePressed(NodeId),
    PrimaryLoaded {
        request: LoadRequest,
        result: Result<LoadedImage, String>,
    },
    Preloaded {
        source: String,
        result: Result<LoadedImage, String>,
    },
    ThumbnailLoaded {
        source: String,
        result: Result<LoadedImage, String>,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    SafeQuit,
    Tick(Instant),
}
