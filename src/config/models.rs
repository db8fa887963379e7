use carousel_core::{CarouselConfig, SourceRewrite};
use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "crate::config::defaults::default_loop_navigation")]
    pub loop_navigation: bool,
    #[serde(default = "crate::config::defaults::default_animation_ms")]
    pub animation_ms: u64,
    #[serde(default = "crate::config::defaults::default_preload_neighbors")]
    pub preload_neighbors: bool,
    #[serde(default = "crate::config::defaults::default_thumb_width")]
    pub thumb_width: f32,
    #[serde(default = "crate::config::defaults::default_thumb_height")]
    pub thumb_height: f32,
    #[serde(default = "crate::config::defaults::default_thumb_spacing")]
    pub thumb_spacing: f32,
    #[serde(default = "crate::config::defaults::default_control_width")]
    pub control_width: f32,
    #[serde(default)]
    pub rewrites: Vec<SourceRewrite>,
    #[serde(default = "crate::config::defaults::default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
    #[serde(default = "crate::config::defaults::default_key_next_image")]
    pub key_next_image: String,
    #[serde(default = "crate::config::defaults::default_key_prev_image")]
    pub key_prev_image: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            loop_navigation: crate::config::defaults::default_loop_navigation(),
            animation_ms: crate::config::defaults::default_animation_ms(),
            preload_neighbors: crate::config::defaults::default_preload_neighbors(),
            thumb_width: crate::config::defaults::default_thumb_width(),
            thumb_height: crate::config::defaults::default_thumb_height(),
            thumb_spacing: crate::config::defaults::default_thumb_spacing(),
            control_width: crate::config::defaults::default_control_width(),
            rewrites: Vec::new(),
            fetch_timeout_secs: crate::config::defaults::default_fetch_timeout_secs(),
            log_level: crate::config::defaults::default_log_level(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
            key_next_image: crate::config::defaults::default_key_next_image(),
            key_prev_image: crate::config::defaults::default_key_prev_image(),
        }
    }
}

impl AppConfig {
    /// Carousel settings for the stock markup the viewer builds.
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            loop_navigation: self.loop_navigation,
            animation_ms: self.animation_ms,
            preload_neighbors: self.preload_neighbors,
            rewrites: self.rewrites.clone(),
            ..CarouselConfig::default()
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
