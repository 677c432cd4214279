use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::models::ImageEntry;

/// Pick the best application icon from the scanned tree: an `AWS-Cloud`
/// image that is not the text logo. An `@5x` export wins outright,
/// otherwise the first 64px variant is kept.
pub fn select_app_icon(images: &[ImageEntry]) -> Option<&ImageEntry> {
    let mut best = None;

    for img in images {
        if !img.name.contains("AWS-Cloud") || img.name.contains("logo") {
            continue;
        }
        if img.name.contains("@5x") {
            return Some(img);
        }
        if img.name.contains("64") && best.is_none() {
            best = Some(img);
        }
    }

    best
}

/// Copy the selected icon to `<base_dir>/quiz/icon.png`. Failures are
/// logged and swallowed; a missing icon never breaks the data build.
pub fn copy_app_icon(images: &[ImageEntry], base_dir: &Path) -> Option<PathBuf> {
    let best = match select_app_icon(images) {
        Some(best) => best,
        None => {
            warn!("No suitable app icon found");
            return None;
        }
    };

    let src = base_dir.join(&best.path);
    let dest_dir = base_dir.join("quiz");
    let dest = dest_dir.join("icon.png");
    info!("Copying icon from {} to {}", src.display(), dest.display());

    if let Err(e) = fs::create_dir_all(&dest_dir) {
        error!("Failed to create {}: {}", dest_dir.display(), e);
        return None;
    }
    if let Err(e) = fs::copy(&src, &dest) {
        error!("Failed to copy icon: {}", e);
        return None;
    }

    Some(dest)
}
