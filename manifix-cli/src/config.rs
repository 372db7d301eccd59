//! Configuration file loading for manifix.
//!
//! Discovers and loads `manifix.toml` from a directory (usually the one the
//! manifest lives in). CLI arguments take precedence over file settings.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "manifix.toml";

/// Top-level configuration from manifix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifixConfig {
    pub analytics: AnalyticsSection,
    pub package: PackageSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsSection {
    /// Opt-in; analytics stays off unless set.
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageSection {
    /// Override for the Windows MSIX generator endpoint.
    pub msix_endpoint: Option<String>,

    /// Override for the CloudAPK endpoint.
    pub android_endpoint: Option<String>,
}

/// Load `manifix.toml` from `dir`, or defaults when the file is absent.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<ManifixConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!(path = %path, "no config file, using defaults");
        return Ok(ManifixConfig::default());
    }

    let contents = fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
    let config: ManifixConfig =
        toml::from_str(&contents).with_context(|| format!("parse {path}"))?;
    debug!(path = %path, analytics = config.analytics.enabled, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_analytics_off() {
        let config: ManifixConfig = toml::from_str("").expect("parse");
        assert!(!config.analytics.enabled);
        assert!(config.package.msix_endpoint.is_none());
    }

    #[test]
    fn sections_parse() {
        let config: ManifixConfig = toml::from_str(
            r#"
                [analytics]
                enabled = true

                [package]
                android_endpoint = "https://example.test/generate"
            "#,
        )
        .expect("parse");
        assert!(config.analytics.enabled);
        assert_eq!(
            config.package.android_endpoint.as_deref(),
            Some("https://example.test/generate")
        );
        assert!(config.package.msix_endpoint.is_none());
    }
}
