use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::icon;
use crate::matching;
use crate::models::{service_slug, Description, ImageEntry, ItemMeta, QuizItem, ServiceRecord};
use crate::scanner::ImageScanner;

#[derive(Debug)]
pub struct BuildSummary {
    pub services: usize,
    pub images: usize,
    pub output_file: PathBuf,
    pub icon: Option<PathBuf>,
}

/// Run the full data build: load the service list, scan the image tree,
/// match images to services and write `quiz_data.json`. Also writes the
/// legacy `img.tree.json` index and copies the app icon.
pub fn build_quiz_data(config: &Config) -> Result<BuildSummary> {
    let services_file = config.resolve_services_file()?;
    info!("Loading services from {}", services_file.display());
    let services = load_services(&services_file)?;

    let scanner = ImageScanner::new(config.base_dir.clone(), config.image_extensions.clone());
    let images = scanner.scan(&config.img_dir())?;

    // Legacy support for the old image-tree pipeline.
    let img_tree_path = config.img_dir().join("img.tree.json");
    write_pretty_json(&img_tree_path, &images)?;
    info!("Saved image tree to {}", img_tree_path.display());

    let mut items = Vec::with_capacity(services.len());
    for svc in &services {
        debug!("Processing {}", svc.service);
        items.push(build_item(svc, &images));
    }

    let output_file = config.output_file();
    info!("Saving {} items to {}", items.len(), output_file.display());
    write_pretty_json(&output_file, &items)?;

    let icon = icon::copy_app_icon(&images, &config.base_dir);

    Ok(BuildSummary {
        services: services.len(),
        images: images.len(),
        output_file,
        icon,
    })
}

fn load_services(path: &Path) -> Result<Vec<ServiceRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open service list {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse service list {}", path.display()))
}

fn build_item(svc: &ServiceRecord, images: &[ImageEntry]) -> QuizItem {
    let found = matching::find_images(&svc.service, images);
    let selected = matching::dedupe_by_path(found);

    QuizItem {
        id: service_slug(&svc.service),
        name: svc.service.clone(),
        category: svc.genre.clone(),
        description: Description {
            en: svc.description_en.clone(),
            ja: svc.description_ja.clone(),
        },
        images: selected,
        meta: ItemMeta {
            free_tier: svc.free_tier.clone(),
        },
    }
}

fn write_pretty_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    // Buffered writes surface short-disk errors on flush.
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
