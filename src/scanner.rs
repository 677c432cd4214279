use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::models::ImageEntry;

/// Recursive image discovery over a directory tree.
///
/// Emitted paths are relative to `relative_root` (the project root for the
/// quiz build, the scan root for the gallery) and forward-slash separated.
#[derive(Debug, Clone)]
pub struct ImageScanner {
    relative_root: PathBuf,
    extensions: Vec<String>,
}

impl ImageScanner {
    pub fn new(relative_root: PathBuf, extensions: Vec<String>) -> Self {
        Self {
            relative_root,
            extensions,
        }
    }

    pub fn scan(&self, img_dir: &Path) -> Result<Vec<ImageEntry>> {
        if !img_dir.exists() {
            return Err(anyhow!("Image directory does not exist: {}", img_dir.display()));
        }
        if !img_dir.is_dir() {
            return Err(anyhow!("Image path is not a directory: {}", img_dir.display()));
        }

        info!("Scanning for images in {}", img_dir.display());
        let mut images = Vec::new();

        for entry_result in WalkDir::new(img_dir) {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error walking directory: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("")
                .to_lowercase();
            if !self.extensions.contains(&extension) {
                debug!("Skipping non-image file: {}", path.display());
                continue;
            }

            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => {
                    warn!("Skipping file with non-UTF-8 name: {}", path.display());
                    continue;
                }
            };

            images.push(ImageEntry {
                path: self.relative_path(path),
                name,
            });
        }

        info!("Found {} images", images.len());
        Ok(images)
    }

    // Relative to the configured root where possible, verbatim otherwise
    // (a scan root outside the project tree). Separators are normalized so
    // output paths are usable as URLs on any platform.
    fn relative_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.relative_root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn default_extensions() -> Vec<String> {
        vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()]
    }

    #[test]
    fn scan_finds_images_recursively_with_relative_paths() {
        let base = TempDir::new().unwrap();
        let img_dir = base.path().join("img");
        fs::create_dir_all(img_dir.join("Arch_Compute")).unwrap();
        fs::write(img_dir.join("Arch_Compute").join("Arch_Amazon-EC2_64.png"), b"png").unwrap();
        fs::write(img_dir.join("top.jpg"), b"jpg").unwrap();

        let scanner = ImageScanner::new(base.path().to_path_buf(), default_extensions());
        let images = scanner.scan(&img_dir).unwrap();

        assert_eq!(images.len(), 2);
        let ec2 = images
            .iter()
            .find(|i| i.name == "Arch_Amazon-EC2_64.png")
            .unwrap();
        assert_eq!(ec2.path, "img/Arch_Compute/Arch_Amazon-EC2_64.png");
        let top = images.iter().find(|i| i.name == "top.jpg").unwrap();
        assert_eq!(top.path, "img/top.jpg");
    }

    #[test]
    fn scan_filters_by_extension_case_insensitively() {
        let base = TempDir::new().unwrap();
        let img_dir = base.path().join("img");
        fs::create_dir_all(&img_dir).unwrap();
        fs::write(img_dir.join("icon.PNG"), b"png").unwrap();
        fs::write(img_dir.join("notes.txt"), b"text").unwrap();
        fs::write(img_dir.join("vector.svg"), b"<svg/>").unwrap();

        let scanner = ImageScanner::new(base.path().to_path_buf(), default_extensions());
        let images = scanner.scan(&img_dir).unwrap();

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].name, "icon.PNG");
    }

    #[test]
    fn scan_root_outside_relative_root_keeps_full_path() {
        let base = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        fs::write(elsewhere.path().join("a.png"), b"png").unwrap();

        let scanner = ImageScanner::new(base.path().to_path_buf(), default_extensions());
        let images = scanner.scan(elsewhere.path()).unwrap();

        assert_eq!(images.len(), 1);
        assert!(images[0].path.ends_with("a.png"));
        assert!(!images[0].path.contains('\\'));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let base = TempDir::new().unwrap();
        let scanner = ImageScanner::new(base.path().to_path_buf(), default_extensions());
        assert!(scanner.scan(&base.path().join("img")).is_err());
    }
}
