use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_dir: PathBuf,
    pub img_dir: Option<PathBuf>,
    pub services_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub image_extensions: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            base_dir: env::var("QUIZ_BASE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            img_dir: env::var("QUIZ_IMG_DIR").ok().map(PathBuf::from),
            services_file: env::var("QUIZ_SERVICES_FILE").ok().map(PathBuf::from),
            output_file: env::var("QUIZ_OUTPUT_FILE").ok().map(PathBuf::from),
            image_extensions: parse_extensions(
                &env::var("QUIZ_IMAGE_EXTENSIONS").unwrap_or_else(|_| "png,jpg,jpeg".to_string()),
            ),
        })
    }

    /// Image root, `<base_dir>/img` unless overridden.
    pub fn img_dir(&self) -> PathBuf {
        self.img_dir
            .clone()
            .unwrap_or_else(|| self.base_dir.join("img"))
    }

    /// Destination for quiz_data.json, `<base_dir>/quiz/quiz_data.json` unless overridden.
    pub fn output_file(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join("quiz").join("quiz_data.json"))
    }

    /// Resolve the service list file. Checks `quiz/aws.json` first, then
    /// `data/aws.json` (legacy path support).
    pub fn resolve_services_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.services_file {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(anyhow!("Service list does not exist: {}", path.display()));
        }

        let primary = self.base_dir.join("quiz").join("aws.json");
        if primary.exists() {
            return Ok(primary);
        }

        let legacy = self.base_dir.join("data").join("aws.json");
        if legacy.exists() {
            return Ok(legacy);
        }

        Err(anyhow!(
            "No service list found (checked {} and {})",
            primary.display(),
            legacy.display()
        ))
    }
}

/// Comma-separated extension list, trimmed and lowercased so the scanner
/// can compare against lowercased file extensions directly.
fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(base: &TempDir) -> Config {
        Config {
            base_dir: base.path().to_path_buf(),
            img_dir: None,
            services_file: None,
            output_file: None,
            image_extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }

    #[test]
    fn default_paths_derive_from_base_dir() {
        let base = TempDir::new().unwrap();
        let config = config_for(&base);

        assert_eq!(config.img_dir(), base.path().join("img"));
        assert_eq!(
            config.output_file(),
            base.path().join("quiz").join("quiz_data.json")
        );
    }

    #[test]
    fn services_file_prefers_quiz_dir_over_legacy_data_dir() {
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("quiz")).unwrap();
        fs::create_dir_all(base.path().join("data")).unwrap();
        fs::write(base.path().join("quiz").join("aws.json"), "[]").unwrap();
        fs::write(base.path().join("data").join("aws.json"), "[]").unwrap();

        let config = config_for(&base);
        assert_eq!(
            config.resolve_services_file().unwrap(),
            base.path().join("quiz").join("aws.json")
        );
    }

    #[test]
    fn services_file_falls_back_to_legacy_data_dir() {
        let base = TempDir::new().unwrap();
        fs::create_dir_all(base.path().join("data")).unwrap();
        fs::write(base.path().join("data").join("aws.json"), "[]").unwrap();

        let config = config_for(&base);
        assert_eq!(
            config.resolve_services_file().unwrap(),
            base.path().join("data").join("aws.json")
        );
    }

    #[test]
    fn missing_services_file_is_an_error() {
        let base = TempDir::new().unwrap();
        let config = config_for(&base);
        assert!(config.resolve_services_file().is_err());
    }

    #[test]
    fn extension_list_is_trimmed_and_lowercased() {
        assert_eq!(
            parse_extensions("PNG, jpg ,JPEG"),
            vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()]
        );
        assert_eq!(parse_extensions("svg"), vec!["svg".to_string()]);
    }

    #[test]
    fn explicit_services_file_must_exist() {
        let base = TempDir::new().unwrap();
        let mut config = config_for(&base);
        config.services_file = Some(base.path().join("nope.json"));
        assert!(config.resolve_services_file().is_err());
    }
}
