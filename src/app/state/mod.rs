mod constants;
mod gallery;

use crate::config::AppConfig;
use crate::gallery_loader::is_remote;
use carousel_core::{CarouselController, RetainedTree};
use iced::Task;
use iced::widget::image::Handle;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use gallery::{GalleryNodes, StripGeometry, build_gallery};

pub(in crate::app) type Carousel = CarouselController<RetainedTree, StripGeometry>;

/// Core application state.
pub struct App {
    pub(super) config: AppConfig,
    /// `None` when the carousel refused its configuration; the view then
    /// shows `init_error` instead of the gallery.
    pub(super) carousel: Option<Carousel>,
    pub(super) init_error: Option<String>,
    pub(super) nodes: GalleryNodes,
    pub(super) sources: Vec<String>,
    /// Decoded images keyed by source.
    pub(super) images: HashMap<String, Handle>,
    /// Every source handed to a background preload, successful or not.
    pub(super) preload_requested: HashSet<String>,
    pub(super) last_error: Option<String>,
    pub(super) last_tick: Option<Instant>,
}

impl App {
    pub(super) fn bootstrap(sources: Vec<String>, mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let carousel_config = config.carousel_config();
        let (tree, nodes) = build_gallery(&sources, &carousel_config);
        let geometry = StripGeometry::new(&config, config.window_width, sources.len());

        let (carousel, init_error) = match Carousel::new(carousel_config, tree, geometry) {
            Ok(carousel) => (Some(carousel), None),
            Err(err) => (None, Some(err.to_string())),
        };

        let mut app = App {
            config,
            carousel,
            init_error,
            nodes,
            sources,
            images: HashMap::new(),
            preload_requested: HashSet::new(),
            last_error: None,
            last_tick: None,
        };

        let remote: Vec<String> = app
            .sources
            .iter()
            .filter(|source| is_remote(source))
            .cloned()
            .collect();
        let mut effects = vec![Effect::FetchThumbnails(remote), Effect::SyncStrip];
        let initial = app
            .carousel
            .as_ref()
            .and_then(|carousel| carousel.displayed_source())
            .filter(|source| is_remote(source))
            .map(str::to_string);
        if let Some(source) = initial {
            app.preload_requested.insert(source.clone());
            effects.push(Effect::Preload(vec![source]));
        }
        app.push_preload(&mut effects);

        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    /// Image to draw for `source`: a decoded handle when one exists, the file
    /// itself for local sources.
    pub(super) fn handle_for(&self, source: &str) -> Option<Handle> {
        if let Some(handle) = self.images.get(source) {
            return Some(handle.clone());
        }
        if source.is_empty() || is_remote(source) {
            None
        } else {
            Some(Handle::from_path(source))
        }
    }

    pub(super) fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.config.fetch_timeout_secs)
    }

    /// Queues background fetches for the neighbours the carousel suggests.
    pub(super) fn push_preload(&mut self, effects: &mut Vec<Effect>) {
        let Some(carousel) = &self.carousel else {
            return;
        };
        let fresh: Vec<String> = carousel
            .preload_candidates()
            .into_iter()
            .filter(|source| !self.preload_requested.contains(source))
            .collect();
        if fresh.is_empty() {
            return;
        }
        self.preload_requested.extend(fresh.iter().cloned());
        effects.push(Effect::Preload(fresh));
    }
}

fn clamp_config(config: &mut AppConfig) {
    config.thumb_width = config.thumb_width.clamp(MIN_THUMB_WIDTH, MAX_THUMB_WIDTH);
    config.thumb_height = config.thumb_height.clamp(MIN_THUMB_HEIGHT, MAX_THUMB_HEIGHT);
    config.thumb_spacing = config.thumb_spacing.clamp(0.0, MAX_THUMB_SPACING);
    config.control_width = config.control_width.max(0.0);
    config.animation_ms = config.animation_ms.min(MAX_ANIMATION_MS);
    config.fetch_timeout_secs = config.fetch_timeout_secs.max(MIN_FETCH_TIMEOUT_SECS);
    if !config.window_width.is_finite() || config.window_width <= 0.0 {
        config.window_width = AppConfig::default().window_width;
    }
    if !config.window_height.is_finite() || config.window_height <= 0.0 {
        config.window_height = AppConfig::default().window_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_config_bounds_layout_values() {
        let mut config = AppConfig {
            thumb_width: 2.0,
            thumb_spacing: -4.0,
            animation_ms: 60_000,
            fetch_timeout_secs: 0,
            window_width: f32::NAN,
            ..AppConfig::default()
        };
        clamp_config(&mut config);
        assert_eq!(config.thumb_width, MIN_THUMB_WIDTH);
        assert_eq!(config.thumb_spacing, 0.0);
        assert_eq!(config.animation_ms, MAX_ANIMATION_MS);
        assert_eq!(config.fetch_timeout_secs, 1);
        assert_eq!(config.window_width, 1024.0);
    }
}
