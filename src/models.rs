use serde::{Deserialize, Serialize};

/// One discovered image file. `path` is relative to the project root and
/// always forward-slash separated so it can be used directly as a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub path: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Architecture icon (`Arch_Amazon-*`)
    Icon,
    /// Resource icon (`Res_Amazon-*`)
    Resource,
    /// Filename contains the service name but fits no known pattern
    Other,
}

/// An image matched to a service, with the priority score the web app uses
/// to pick the best one (`images.find(img => img.score === 100)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMatch {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub path: String,
    pub score: u32,
}

/// Input record from the service list (aws.json). Only the name is
/// required; older lists are missing some of the descriptive fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRecord {
    pub service: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_ja: Option<String>,
    #[serde(default)]
    pub free_tier: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub en: Option<String>,
    pub ja: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMeta {
    pub free_tier: Option<serde_json::Value>,
}

/// Output record consumed by the quiz web app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Description,
    pub images: Vec<ImageMatch>,
    pub meta: ItemMeta,
}

/// Stable item id: `aws-` plus the service name lowercased with spaces
/// replaced by hyphens.
pub fn service_slug(name: &str) -> String {
    format!("aws-{}", name.to_lowercase().replace(' ', "-"))
}
