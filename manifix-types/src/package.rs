//! Wire types for the store packaging services.
//!
//! These are serialized as the request bodies the remote services expect, so
//! every field is camelCase on the wire and nullable fields serialize as
//! explicit `null` rather than being omitted.

use serde::{Deserialize, Serialize};

/// Request body for the Windows MSIX generator service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsixPackageInfo {
    pub url: String,
    pub name: String,
    pub package_id: String,
    pub version: String,
    pub allow_signing: bool,
    pub classic_package: ClassicPackage,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<MsixPublisher>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassicPackage {
    pub generate: bool,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsixPublisher {
    pub display_name: String,
    pub common_name: String,
}

/// Request body for the CloudAPK (Android/Trusted Web Activity) service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidPackageOptions {
    pub app_version: String,
    pub app_version_code: u32,
    pub background_color: String,
    pub display: String,
    pub enable_notifications: bool,
    pub enable_site_settings_shortcut: bool,
    pub fallback_type: String,
    pub features: AndroidFeatures,
    pub host: String,
    pub icon_url: String,
    pub maskable_icon_url: Option<String>,
    pub monochrome_icon_url: Option<String>,
    pub include_source_code: bool,
    pub is_chrome_os_only: bool,
    pub launcher_name: String,
    pub name: String,
    pub navigation_color: String,
    pub navigation_color_dark: String,
    pub navigation_divider_color: String,
    pub navigation_divider_color_dark: String,
    pub orientation: String,
    pub package_id: String,

    #[serde(default)]
    pub shortcuts: Vec<serde_json::Value>,

    pub signing: AndroidSigning,
    pub signing_mode: String,
    pub splash_screen_fade_out_duration: u32,
    pub start_url: String,
    pub theme_color: String,

    #[serde(default)]
    pub share_target: serde_json::Value,

    pub web_manifest_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidFeatures {
    pub location_delegation: FeatureToggle,
    pub play_billing: FeatureToggle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggle {
    pub enabled: bool,
}

/// Signing block for the CloudAPK service. Empty passwords mean the service
/// generates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidSigning {
    pub file: Option<String>,
    pub alias: String,
    pub full_name: String,
    pub organization: String,
    pub organizational_unit: String,
    pub country_code: String,
    pub key_password: String,
    pub store_password: String,
}
