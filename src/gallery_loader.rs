//! Resolves the command-line argument into an ordered list of image sources.
//!
//! A directory contributes every supported image file, sorted by name. Any
//! other file is read as a manifest: one local path or http(s) URL per line,
//! blank lines and `#` comments skipped.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing::info;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

pub fn load_gallery(path: &Path) -> Result<Vec<String>> {
    let sources = if path.is_dir() {
        scan_directory(path)?
    } else {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        parse_manifest(&contents)
            .into_iter()
            .map(|entry| resolve_entry(base, entry))
            .collect()
    };

    if sources.is_empty() {
        return Err(anyhow!("No images found in {}", path.display()));
    }
    info!(path = %path.display(), count = sources.len(), "Loaded gallery sources");
    Ok(sources)
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn scan_directory(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();
    files.sort();
    Ok(files
        .into_iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect())
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn parse_manifest(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Relative manifest paths are taken relative to the manifest itself.
fn resolve_entry(base: &Path, entry: &str) -> String {
    if is_remote(entry) || Path::new(entry).is_absolute() {
        entry.to_string()
    } else {
        base.join(entry).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_skips_blank_lines_and_comments() {
        let entries = parse_manifest("# holiday\n\na.jpg\n  https://x.test/b.png  \n#c.jpg\n");
        assert_eq!(entries, vec!["a.jpg", "https://x.test/b.png"]);
    }

    #[test]
    fn extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("shots/IMG_01.JPG")));
        assert!(is_supported_image(Path::new("a.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn relative_entries_follow_the_manifest() {
        let base = Path::new("albums");
        assert_eq!(
            resolve_entry(base, "a.jpg"),
            Path::new("albums").join("a.jpg").to_string_lossy()
        );
        assert_eq!(
            resolve_entry(base, "https://x.test/b.png"),
            "https://x.test/b.png"
        );
    }

    #[test]
    fn directory_scan_is_sorted_and_filtered() {
        let dir = std::env::temp_dir().join(format!("thumbstrip-scan-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        for name in ["b.png", "a.jpg", "readme.md"] {
            fs::write(dir.join(name), b"x").expect("write fixture");
        }

        let sources = load_gallery(&dir).expect("gallery");
        let names: Vec<_> = sources
            .iter()
            .filter_map(|s| Path::new(s).file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_gallery_is_an_error() {
        let dir = std::env::temp_dir().join(format!("thumbstrip-empty-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        assert!(load_gallery(&dir).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
