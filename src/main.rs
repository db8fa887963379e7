//! Entry point for the thumbnail carousel viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Resolve the gallery sources via `gallery_loader`.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application with the sources and config.

mod app;
mod cache;
mod config;
mod fetch;
mod gallery_loader;

use crate::app::run_app;
use crate::config::{CONFIG_PATH, load_config, save_config};
use crate::gallery_loader::load_gallery;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let gallery_path = parse_args()?;
    let config_path = Path::new(CONFIG_PATH);
    let config = load_config(config_path);
    if !config_path.exists() {
        save_config(config_path, &config);
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %gallery_path.display(),
        level = %config.log_level,
        "Starting carousel viewer"
    );
    info!(
        looped = config.loop_navigation,
        animation_ms = config.animation_ms,
        preload = config.preload_neighbors,
        rewrites = config.rewrites.len(),
        "Active carousel configuration"
    );

    let sources = load_gallery(&gallery_path)?;
    run_app(sources, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow!("Usage: thumbstrip <directory | manifest.txt>"))?;

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
