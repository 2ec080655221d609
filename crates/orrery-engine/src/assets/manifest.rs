use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Texture manifest: logical texture name to image path.
/// Loaded from a JSON file at runtime, e.g.
///
/// ```json
/// { "base_path": "/assets/", "textures": { "sun": "sun.jpg" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Prefix joined onto every relative texture path.
    #[serde(default)]
    pub base_path: String,
    /// Logical name to relative path.
    #[serde(default)]
    pub textures: BTreeMap<String, String>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Full path for a logical name, if listed.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.textures.get(name).map(|path| {
            if self.base_path.is_empty() || path.starts_with('/') || path.contains("://") {
                path.clone()
            } else if self.base_path.ends_with('/') {
                format!("{}{}", self.base_path, path)
            } else {
                format!("{}/{}", self.base_path, path)
            }
        })
    }
}
