use super::defaults;
use super::models::{AppConfig, LogLevel};
use carousel_core::SourceRewrite;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    carousel: CarouselTable,
    #[serde(default)]
    strip: StripTable,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    sources: SourcesConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            loop_navigation: tables.carousel.loop_navigation,
            animation_ms: tables.carousel.animation_ms,
            preload_neighbors: tables.carousel.preload_neighbors,
            thumb_width: tables.strip.thumb_width,
            thumb_height: tables.strip.thumb_height,
            thumb_spacing: tables.strip.spacing,
            control_width: tables.strip.control_width,
            rewrites: tables.sources.rewrites,
            fetch_timeout_secs: tables.sources.fetch_timeout_secs,
            log_level: tables.logging.log_level,
            key_safe_quit: tables.keys.safe_quit,
            key_next_image: tables.keys.next_image,
            key_prev_image: tables.keys.prev_image,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
                pos_x: config.window_pos_x,
                pos_y: config.window_pos_y,
            },
            carousel: CarouselTable {
                loop_navigation: config.loop_navigation,
                animation_ms: config.animation_ms,
                preload_neighbors: config.preload_neighbors,
            },
            strip: StripTable {
                thumb_width: config.thumb_width,
                thumb_height: config.thumb_height,
                spacing: config.thumb_spacing,
                control_width: config.control_width,
            },
            keys: KeysConfig {
                safe_quit: config.key_safe_quit.clone(),
                next_image: config.key_next_image.clone(),
                prev_image: config.key_prev_image.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            sources: SourcesConfig {
                rewrites: config.rewrites.clone(),
                fetch_timeout_secs: config.fetch_timeout_secs,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos_x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct CarouselTable {
    #[serde(rename = "loop", default = "defaults::default_loop_navigation")]
    loop_navigation: bool,
    #[serde(default = "defaults::default_animation_ms")]
    animation_ms: u64,
    #[serde(default = "defaults::default_preload_neighbors")]
    preload_neighbors: bool,
}

impl Default for CarouselTable {
    fn default() -> Self {
        CarouselTable {
            loop_navigation: defaults::default_loop_navigation(),
            animation_ms: defaults::default_animation_ms(),
            preload_neighbors: defaults::default_preload_neighbors(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct StripTable {
    #[serde(default = "defaults::default_thumb_width")]
    thumb_width: f32,
    #[serde(default = "defaults::default_thumb_height")]
    thumb_height: f32,
    #[serde(default = "defaults::default_thumb_spacing")]
    spacing: f32,
    #[serde(default = "defaults::default_control_width")]
    control_width: f32,
}

impl Default for StripTable {
    fn default() -> Self {
        StripTable {
            thumb_width: defaults::default_thumb_width(),
            thumb_height: defaults::default_thumb_height(),
            spacing: defaults::default_thumb_spacing(),
            control_width: defaults::default_control_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
    #[serde(default = "defaults::default_key_next_image")]
    next_image: String,
    #[serde(default = "defaults::default_key_prev_image")]
    prev_image: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            safe_quit: defaults::default_key_safe_quit(),
            next_image: defaults::default_key_next_image(),
            prev_image: defaults::default_key_prev_image(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SourcesConfig {
    #[serde(default = "defaults::default_fetch_timeout_secs")]
    fetch_timeout_secs: u64,
    #[serde(default)]
    rewrites: Vec<SourceRewrite>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            fetch_timeout_secs: defaults::default_fetch_timeout_secs(),
            rewrites: Vec::new(),
        }
    }
}
