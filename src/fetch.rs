//! Image fetching for the viewer.
//!
//! Local files are read from disk; remote sources go through the download
//! cache and `reqwest`. Bytes are decoded once to make sure they are a real
//! image before they reach the UI, so broken sources surface as load
//! failures instead of blank frames.

use crate::cache::{load_download, save_download};
use crate::gallery_loader::is_remote;
use anyhow::{Context, Result, anyhow};
use iced::widget::image::Handle;
use std::fs;
use std::time::Duration;
use tracing::{debug, warn};

/// A decoded-and-verified image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Fetch and verify `source` on the blocking pool.
pub async fn load_image(source: String, timeout: Duration) -> Result<LoadedImage, String> {
    let label = source.clone();
    tokio::task::spawn_blocking(move || load_image_blocking(&source, timeout))
        .await
        .map_err(|err| format!("Task join error: {err}"))?
        .map_err(|err| {
            warn!(source = %label, "Image load failed: {err:#}");
            format!("{err:#}")
        })
}

fn load_image_blocking(source: &str, timeout: Duration) -> Result<LoadedImage> {
    let bytes = if is_remote(source) {
        match load_download(source) {
            Some(bytes) => bytes,
            None => {
                let bytes = download(source, timeout)?;
                save_download(source, &bytes);
                bytes
            }
        }
    } else {
        fs::read(source).with_context(|| format!("Failed to read {source}"))?
    };
    decode(bytes)
}

fn download(source: &str, timeout: Duration) -> Result<Vec<u8>> {
    debug!(%source, "Downloading image");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let response = client
        .get(source)
        .send()
        .with_context(|| format!("Request to {source} failed"))?
        .error_for_status()
        .with_context(|| format!("Server rejected {source}"))?;
    let bytes = response
        .bytes()
        .with_context(|| format!("Failed to read body of {source}"))?;
    Ok(bytes.to_vec())
}

fn decode(bytes: Vec<u8>) -> Result<LoadedImage> {
    if bytes.is_empty() {
        return Err(anyhow!("Empty image data"));
    }
    let decoded = image::load_from_memory(&bytes).context("Unsupported or corrupt image data")?;
    Ok(LoadedImage {
        width: decoded.width(),
        height: decoded.height(),
        handle: Handle::from_bytes(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbaImage::new(width, height)
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decodes_valid_png_and_reports_size() {
        let loaded = decode(png_bytes(3, 2)).expect("valid png");
        assert_eq!((loaded.width, loaded.height), (3, 2));
    }

    #[test]
    fn rejects_garbage_and_empty_data() {
        assert!(decode(b"definitely not an image".to_vec()).is_err());
        assert!(decode(Vec::new()).is_err());
    }

    #[test]
    fn missing_local_file_is_an_error() {
        let err = load_image_blocking("no/such/file.jpg", Duration::from_secs(1))
            .err()
            .expect("missing file");
        assert!(format!("{err:#}").contains("no/such/file.jpg"));
    }
}
