use super::super::state::App;
use super::Effect;
use crate::fetch::LoadedImage;
use carousel_core::{KeyInput, LoadError, LoadEvent, LoadRequest, Navigation, NodeId};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_next_image(&mut self, effects: &mut Vec<Effect>) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let navigation = carousel.next();
        self.apply_navigation(navigation, effects);
    }

    pub(super) fn handle_previous_image(&mut self, effects: &mut Vec<Effect>) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let navigation = carousel.prev();
        self.apply_navigation(navigation, effects);
    }

    pub(super) fn handle_arrow_key(&mut self, key: KeyInput<'_>, effects: &mut Vec<Effect>) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let navigation = carousel.handle_key(key);
        self.apply_navigation(navigation, effects);
    }

    pub(super) fn handle_node_pressed(&mut self, node: NodeId, effects: &mut Vec<Effect>) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let navigation = carousel.handle_click(node);
        self.apply_navigation(navigation, effects);
    }

    pub(super) fn handle_primary_loaded(
        &mut self,
        request: LoadRequest,
        result: Result<LoadedImage, String>,
        effects: &mut Vec<Effect>,
    ) {
        let outcome = match result {
            Ok(image) => {
                debug!(
                    position = request.position,
                    width = image.width,
                    height = image.height,
                    "Primary image fetched"
                );
                self.images.insert(request.source.clone(), image.handle);
                Ok(())
            }
            Err(reason) => Err(LoadError::new(request.source.clone(), reason)),
        };

        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        match carousel.complete_load(&request, outcome) {
            Some(LoadEvent::Loaded(position)) => {
                info!(position, "Showing image");
                self.last_error = None;
                self.push_preload(effects);
            }
            Some(LoadEvent::Failed { position, error }) => {
                warn!(position, "Keeping previous image: {error}");
                self.last_error = Some(error.to_string());
            }
            None => {}
        }
        effects.push(Effect::SyncStrip);
    }

    pub(super) fn handle_preloaded(
        &mut self,
        source: String,
        result: Result<LoadedImage, String>,
        effects: &mut Vec<Effect>,
    ) {
        match result {
            Ok(image) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.record_preloaded(&source);
                }
                self.images.insert(source, image.handle);
            }
            Err(err) => {
                // Stays in `preload_requested`, so it is not retried until the
                // user actually navigates to it.
                debug!(%source, "Preload failed: {err}");
            }
        }
        // Navigation may have moved on while this fetch ran.
        self.push_preload(effects);
    }

    pub(super) fn handle_thumbnail_loaded(
        &mut self,
        source: String,
        result: Result<LoadedImage, String>,
    ) {
        match result {
            Ok(image) => {
                self.images.entry(source).or_insert(image.handle);
            }
            Err(err) => warn!(%source, "Thumbnail unavailable: {err}"),
        }
    }

    fn apply_navigation(&mut self, navigation: Navigation, effects: &mut Vec<Effect>) {
        match navigation {
            Navigation::None => {}
            Navigation::Completed(position) => {
                debug!(position, "Switched to cached image");
                self.last_error = None;
                self.push_preload(effects);
                effects.push(Effect::SyncStrip);
            }
            Navigation::Fetch(request) => effects.push(Effect::FetchPrimary(request)),
            Navigation::Scrolled => effects.push(Effect::SyncStrip),
        }
    }
}
