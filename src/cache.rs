//! On-disk cache for remote image downloads.
//!
//! Files are stored under `.cache/` using a hash of the source URL as the
//! directory name to avoid filesystem issues. Each entry holds the raw bytes
//! exactly as downloaded.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CACHE_DIR: &str = ".cache";

pub fn hash_dir(source: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    Path::new(CACHE_DIR).join(hash)
}

fn download_path(source: &str) -> PathBuf {
    hash_dir(source).join("image.bin")
}

/// Previously downloaded bytes for `source`, if present.
pub fn load_download(source: &str) -> Option<Vec<u8>> {
    let bytes = fs::read(download_path(source)).ok()?;
    if bytes.is_empty() {
        return None;
    }
    debug!(%source, bytes = bytes.len(), "Download cache hit");
    Some(bytes)
}

/// Persist downloaded bytes. Errors are ignored to keep the UI responsive.
pub fn save_download(source: &str, bytes: &[u8]) {
    let path = download_path(source);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, bytes);
}
