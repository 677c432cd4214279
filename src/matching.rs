use std::collections::HashSet;

use tracing::debug;

use crate::models::{ImageEntry, ImageMatch, MatchKind};

/// Classify every image whose filename contains the service name, first
/// rule wins:
///
/// 1. `Arch_Amazon-{S}_64.png` — architecture icon, score 100
/// 2. `Arch_Amazon-{S}_32.png` — architecture icon, score 90
/// 3. `Arch_Amazon-{S}_16.png` — skipped (too small to display)
/// 4. `Res_Amazon-{S}*_48.png` — resource icon, score 80
/// 5. anything else — score 10
///
/// The result is sorted by score descending; the stable sort keeps scan
/// order within a score tier.
pub fn find_images(service_name: &str, images: &[ImageEntry]) -> Vec<ImageMatch> {
    // Filenames hyphenate multi-word service names.
    let search_term = service_name.replace(' ', "-");
    let search_term_lower = search_term.to_lowercase();

    let arch_64 = format!("Arch_Amazon-{}_64.png", search_term);
    let arch_32 = format!("Arch_Amazon-{}_32.png", search_term);
    let arch_16 = format!("Arch_Amazon-{}_16.png", search_term);
    let res_prefix = format!("Res_Amazon-{}", search_term);

    let mut matches = Vec::new();

    for img in images {
        if !img.name.to_lowercase().contains(&search_term_lower) {
            continue;
        }

        if img.name.contains(&arch_64) {
            matches.push(ImageMatch {
                kind: MatchKind::Icon,
                size: Some("64".to_string()),
                path: img.path.clone(),
                score: 100,
            });
            continue;
        }

        if img.name.contains(&arch_32) {
            matches.push(ImageMatch {
                kind: MatchKind::Icon,
                size: Some("32".to_string()),
                path: img.path.clone(),
                score: 90,
            });
            continue;
        }

        if img.name.contains(&arch_16) {
            debug!("Skipping 16px icon: {}", img.name);
            continue;
        }

        if img.name.contains(&res_prefix) && img.name.contains("_48.png") {
            matches.push(ImageMatch {
                kind: MatchKind::Resource,
                size: Some("48".to_string()),
                path: img.path.clone(),
                score: 80,
            });
            continue;
        }

        matches.push(ImageMatch {
            kind: MatchKind::Other,
            size: None,
            path: img.path.clone(),
            score: 10,
        });
    }

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Drop repeated paths, keeping the first (highest-scoring) occurrence.
pub fn dedupe_by_path(matches: Vec<ImageMatch>) -> Vec<ImageMatch> {
    let mut seen: HashSet<String> = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.path.clone()))
        .collect()
}
