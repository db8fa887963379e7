//! Carousel configuration object.
//!
//! Defaults describe the stock markup: a `#gallery` root with a counter, a
//! primary image block carrying a loading veil, and a preview strip of `li`
//! thumbnails flanked by next/prev controls. Hosts override single fields from
//! TOML; [`CarouselConfig::validate`] runs before any component is built.

use crate::error::CarouselError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarouselConfig {
    #[serde(default = "defaults::id")]
    pub id: String,
    #[serde(default = "defaults::counter_selector")]
    pub counter_selector: String,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub strip: StripConfig,
    /// Wrap from the last item to the first and back.
    #[serde(rename = "loop", default = "defaults::loop_navigation")]
    pub loop_navigation: bool,
    #[serde(default = "defaults::animation_ms")]
    pub animation_ms: u64,
    #[serde(default = "defaults::preload_neighbors")]
    pub preload_neighbors: bool,
    #[serde(default)]
    pub rewrites: Vec<SourceRewrite>,
}

/// Primary image block and its loading veil.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageConfig {
    #[serde(default = "defaults::image_class")]
    pub class_name: String,
    #[serde(default = "defaults::loading_class")]
    pub loading_class: String,
    #[serde(default = "defaults::loading_active_class")]
    pub loading_active_class: String,
}

/// Thumbnail strip, its items and its scroll controls.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripConfig {
    #[serde(default = "defaults::strip_selector")]
    pub selector: String,
    #[serde(default = "defaults::container_selector")]
    pub container_selector: String,
    #[serde(default = "defaults::item_selector")]
    pub item_selector: String,
    #[serde(default = "defaults::active_class")]
    pub active_class: String,
    #[serde(default = "defaults::error_class")]
    pub error_class: String,
    #[serde(default = "defaults::disabled_class")]
    pub disabled_class: String,
    #[serde(default = "defaults::next_class")]
    pub next_class: String,
    #[serde(default = "defaults::prev_class")]
    pub prev_class: String,
}

/// Regex rewrite turning a thumbnail source into its full-size source.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceRewrite {
    pub pattern: String,
    pub replacement: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            id: defaults::id(),
            counter_selector: defaults::counter_selector(),
            image: ImageConfig::default(),
            strip: StripConfig::default(),
            loop_navigation: defaults::loop_navigation(),
            animation_ms: defaults::animation_ms(),
            preload_neighbors: defaults::preload_neighbors(),
            rewrites: Vec::new(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            class_name: defaults::image_class(),
            loading_class: defaults::loading_class(),
            loading_active_class: defaults::loading_active_class(),
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        StripConfig {
            selector: defaults::strip_selector(),
            container_selector: defaults::container_selector(),
            item_selector: defaults::item_selector(),
            active_class: defaults::active_class(),
            error_class: defaults::error_class(),
            disabled_class: defaults::disabled_class(),
            next_class: defaults::next_class(),
            prev_class: defaults::prev_class(),
        }
    }
}

impl CarouselConfig {
    /// Accepts the configuration only if every required field is non-empty.
    pub fn validate(&self) -> Result<(), CarouselError> {
        let required: [(&'static str, &str); 13] = [
            ("id", self.id.as_str()),
            ("counter_selector", self.counter_selector.as_str()),
            ("image.class_name", self.image.class_name.as_str()),
            ("image.loading_class", self.image.loading_class.as_str()),
            ("image.loading_active_class", self.image.loading_active_class.as_str()),
            ("strip.selector", self.strip.selector.as_str()),
            ("strip.container_selector", self.strip.container_selector.as_str()),
            ("strip.item_selector", self.strip.item_selector.as_str()),
            ("strip.active_class", self.strip.active_class.as_str()),
            ("strip.error_class", self.strip.error_class.as_str()),
            ("strip.disabled_class", self.strip.disabled_class.as_str()),
            ("strip.next_class", self.strip.next_class.as_str()),
            ("strip.prev_class", self.strip.prev_class.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CarouselError::ConfigurationInvalid { field });
            }
        }
        // Rewrites are optional, but a declared one needs a pattern.
        if self
            .rewrites
            .iter()
            .any(|rule| rule.pattern.trim().is_empty())
        {
            return Err(CarouselError::ConfigurationInvalid {
                field: "rewrites.pattern",
            });
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn image_selector(&self) -> String {
        format!(".{}", self.image.class_name)
    }

    pub fn veil_selector(&self) -> String {
        format!(".js-{}", self.image.loading_class)
    }

    pub fn next_selector(&self) -> String {
        format!(".js-{}", self.strip.next_class)
    }

    pub fn prev_selector(&self) -> String {
        format!(".js-{}", self.strip.prev_class)
    }
}

mod defaults {
    pub(super) fn id() -> String {
        "gallery".to_string()
    }

    pub(super) fn counter_selector() -> String {
        ".js-gallery-current-index".to_string()
    }

    pub(super) fn image_class() -> String {
        "gallery__image".to_string()
    }

    pub(super) fn loading_class() -> String {
        "gallery__loading".to_string()
    }

    pub(super) fn loading_active_class() -> String {
        "gallery__loading_active".to_string()
    }

    pub(super) fn strip_selector() -> String {
        ".js-gallery-preview-list".to_string()
    }

    pub(super) fn container_selector() -> String {
        ".js-gallery-preview-list-container".to_string()
    }

    pub(super) fn item_selector() -> String {
        "li".to_string()
    }

    pub(super) fn active_class() -> String {
        "active".to_string()
    }

    pub(super) fn error_class() -> String {
        "error".to_string()
    }

    pub(super) fn disabled_class() -> String {
        "disabled".to_string()
    }

    pub(super) fn next_class() -> String {
        "gallery__next".to_string()
    }

    pub(super) fn prev_class() -> String {
        "gallery__prev".to_string()
    }

    pub(super) fn loop_navigation() -> bool {
        true
    }

    pub(super) fn animation_ms() -> u64 {
        300
    }

    pub(super) fn preload_neighbors() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CarouselConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_nested_field_is_reported_by_path() {
        let mut config = CarouselConfig::default();
        config.strip.item_selector = "  ".to_string();
        match config.validate() {
            Err(CarouselError::ConfigurationInvalid { field }) => {
                assert_eq!(field, "strip.item_selector")
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn rewrite_without_pattern_is_rejected() {
        let mut config = CarouselConfig::default();
        config.rewrites.push(SourceRewrite {
            pattern: String::new(),
            replacement: "1024".to_string(),
        });
        assert!(matches!(
            config.validate(),
            Err(CarouselError::ConfigurationInvalid {
                field: "rewrites.pattern"
            })
        ));
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: CarouselConfig = toml::from_str(
            r#"
            loop = false

            [strip]
            active_class = "is-current"
            "#,
        )
        .expect("parse partial config");
        assert!(!config.loop_navigation);
        assert_eq!(config.strip.active_class, "is-current");
        assert_eq!(config.strip.item_selector, "li");
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
    }
}
