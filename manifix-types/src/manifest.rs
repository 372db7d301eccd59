use serde::{Deserialize, Serialize};

/// A parsed web app manifest.
///
/// Only the members the packaging builders read are modeled; everything else
/// a manifest may carry is ignored on deserialization. Members the code-action
/// engine works on are handled textually, not through this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,

    #[serde(default)]
    pub icons: Vec<ManifestIcon>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shortcuts: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_target: Option<serde_json::Value>,
}

/// One entry of a manifest's `icons` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ManifestIcon {
    /// True if the icon declares the given size (e.g. "512x512").
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.as_deref().is_some_and(|s| s.contains(size))
    }

    /// True if the icon declares the given purpose (e.g. "maskable").
    pub fn has_purpose(&self, purpose: &str) -> bool {
        self.purpose.as_deref().is_some_and(|p| p.contains(purpose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_size_and_purpose_matching() {
        let icon = ManifestIcon {
            src: "icons/big.png".to_string(),
            sizes: Some("192x192 512x512".to_string()),
            purpose: Some("any maskable".to_string()),
            mime_type: Some("image/png".to_string()),
        };
        assert!(icon.has_size("512x512"));
        assert!(!icon.has_size("1024x1024"));
        assert!(icon.has_purpose("maskable"));
    }

    #[test]
    fn manifest_tolerates_unknown_members() {
        let json = serde_json::json!({
            "name": "Demo",
            "categories": ["productivity"],
            "icons": [{ "src": "i.png", "sizes": "512x512" }]
        });
        let m: WebManifest = serde_json::from_value(json).expect("deserialize");
        assert_eq!(m.name.as_deref(), Some("Demo"));
        assert_eq!(m.icons.len(), 1);
    }
}
