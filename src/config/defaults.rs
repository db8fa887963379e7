pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_loop_navigation() -> bool {
    true
}

pub(crate) fn default_animation_ms() -> u64 {
    300
}

pub(crate) fn default_preload_neighbors() -> bool {
    true
}

pub(crate) fn default_thumb_width() -> f32 {
    120.0
}

pub(crate) fn default_thumb_height() -> f32 {
    80.0
}

pub(crate) fn default_thumb_spacing() -> f32 {
    8.0
}

pub(crate) fn default_control_width() -> f32 {
    36.0
}

pub(crate) fn default_fetch_timeout_secs() -> u64 {
    20
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_key_next_image() -> String {
    "l".to_string()
}

pub(crate) fn default_key_prev_image() -> String {
    "h".to_string()
}
