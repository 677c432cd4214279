use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::models::ImageEntry;
use crate::scanner::ImageScanner;

/// The gallery also shows vector icons that the quiz build does not index.
pub const GALLERY_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

pub const DEFAULT_SAMPLE_COUNT: usize = 2;

/// Scan `img_dir`, pick `count` images at random and write a standalone
/// HTML page next to them. Returns the output path, or `None` when the
/// tree holds no images at all.
pub fn build_gallery(img_dir: &Path, count: usize) -> Result<Option<PathBuf>> {
    let extensions = GALLERY_EXTENSIONS.iter().map(|e| e.to_string()).collect();
    let scanner = ImageScanner::new(img_dir.to_path_buf(), extensions);
    let images = scanner.scan(img_dir)?;

    if images.is_empty() {
        warn!("No images found under {}", img_dir.display());
        return Ok(None);
    }

    let mut rng = rand::thread_rng();
    let selected: Vec<&ImageEntry> = images
        .choose_multiple(&mut rng, count.min(images.len()))
        .collect();

    let output_path = img_dir.join("random_images.html");
    fs::write(&output_path, render_gallery(&selected))
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Gallery written to {}", output_path.display());
    for img in &selected {
        info!("Selected: {}", img.path);
    }
    Ok(Some(output_path))
}

pub fn render_gallery(images: &[&ImageEntry]) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Random Images</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            background-color: #f0f2f5;
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: 2rem;
        }
        h1 { color: #333; }
        .gallery {
            display: flex;
            gap: 2rem;
            flex-wrap: wrap;
            justify-content: center;
            margin-top: 2rem;
        }
        .card {
            background: white;
            padding: 1.5rem;
            border-radius: 8px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
            text-align: center;
            max-width: 400px;
        }
        img {
            max-width: 100%;
            height: auto;
            max-height: 300px;
            margin-bottom: 1rem;
        }
        .filename {
            font-weight: bold;
            color: #555;
            word-break: break-all;
        }
        .path {
            font-size: 0.8rem;
            color: #888;
            margin-top: 0.5rem;
            word-break: break-all;
        }
    </style>
</head>
<body>
    <h1>Randomly Selected Images</h1>
    <div class="gallery">
"#,
    );

    for img in images {
        let path = escape_html(&img.path);
        let name = escape_html(&img.name);
        html.push_str(&format!(
            r#"
        <div class="card">
            <img src="{path}" alt="{name}">
            <div class="filename">{name}</div>
            <div class="path">{path}</div>
        </div>"#
        ));
    }

    html.push_str(
        "\n    </div>\n</body>\n</html>",
    );
    html
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
