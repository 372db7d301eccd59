use crate::error::PackageError;
use manifix_types::manifest::WebManifest;
use manifix_types::package::{
    AndroidFeatures, AndroidPackageOptions, AndroidSigning, ClassicPackage, FeatureToggle,
    MsixPackageInfo, MsixPublisher,
};
use tracing::debug;

const LAUNCHER_NAME_MAX: usize = 30;

/// Build an unsigned MSIX request. The bare minimum the Windows service
/// accepts; the generated package cannot be submitted to the store as-is.
pub fn simple_msix(url: &str, name: &str) -> MsixPackageInfo {
    MsixPackageInfo {
        url: url.to_string(),
        name: name.to_string(),
        package_id: "com.example.pwa".to_string(),
        version: "1.0.1".to_string(),
        allow_signing: true,
        classic_package: ClassicPackage {
            generate: true,
            version: "1.0.0".to_string(),
        },
        publisher: None,
    }
}

/// Build a store-ready MSIX request with publisher identity.
#[allow(clippy::too_many_arguments)]
pub fn publisher_msix(
    url: &str,
    name: &str,
    package_id: &str,
    version: Option<&str>,
    classic_version: Option<&str>,
    publisher_display_name: &str,
    publisher_common_name: &str,
) -> MsixPackageInfo {
    MsixPackageInfo {
        url: url.to_string(),
        name: name.to_string(),
        package_id: package_id.to_string(),
        version: version.unwrap_or("1.0.1").to_string(),
        allow_signing: true,
        classic_package: ClassicPackage {
            generate: true,
            version: classic_version.unwrap_or("1.0.0").to_string(),
        },
        publisher: Some(MsixPublisher {
            display_name: publisher_display_name.to_string(),
            common_name: publisher_common_name.to_string(),
        }),
    }
}

/// Caller-supplied answers for an Android packaging run. Replaces the
/// interactive prompt sequence of editor hosts with an explicit value object.
#[derive(Debug, Clone)]
pub struct AndroidOptionsInput {
    /// The deployed app's origin, e.g. "https://myapp.com".
    pub app_url: String,
    /// Where the manifest is served from.
    pub manifest_url: String,
    pub package_id: String,
    /// App version, defaults to "1.0.0.0" when absent.
    pub version: Option<String>,
}

/// Derive CloudAPK options from a parsed manifest plus caller input.
///
/// A 512x512 icon is mandatory; a maskable icon is recommended but optional
/// (a debug event is logged when it's absent).
pub fn android_options(
    input: &AndroidOptionsInput,
    manifest: &WebManifest,
) -> Result<AndroidPackageOptions, PackageError> {
    let icon = manifest
        .icons
        .iter()
        .find(|i| i.has_size("512x512"))
        .ok_or(PackageError::MissingLargeIcon)?;

    let maskable = manifest.icons.iter().find(|i| i.has_purpose("maskable"));
    if maskable.is_none() {
        debug!("no maskable icon in manifest; packaging without one");
    }

    let name = manifest
        .name
        .clone()
        .or_else(|| manifest.short_name.clone())
        .unwrap_or_else(|| "App".to_string());

    // Launcher name is the short name truncated to the Android limit,
    // falling back to the full app name.
    let launcher_name: String = manifest
        .short_name
        .clone()
        .unwrap_or_else(|| name.clone())
        .chars()
        .take(LAUNCHER_NAME_MAX)
        .collect();

    let background = manifest
        .background_color
        .clone()
        .or_else(|| manifest.theme_color.clone())
        .unwrap_or_else(|| "#FFFFFF".to_string());

    Ok(AndroidPackageOptions {
        app_version: input.version.clone().unwrap_or_else(|| "1.0.0.0".to_string()),
        app_version_code: 1,
        background_color: background.clone(),
        display: manifest
            .display
            .clone()
            .unwrap_or_else(|| "standalone".to_string()),
        enable_notifications: true,
        enable_site_settings_shortcut: true,
        fallback_type: "customtabs".to_string(),
        features: AndroidFeatures {
            location_delegation: FeatureToggle { enabled: true },
            play_billing: FeatureToggle { enabled: false },
        },
        host: input.app_url.clone(),
        icon_url: join_url(&input.app_url, &icon.src),
        maskable_icon_url: maskable.map(|i| join_url(&input.app_url, &i.src)),
        monochrome_icon_url: None,
        include_source_code: false,
        is_chrome_os_only: false,
        launcher_name,
        name: name.clone(),
        navigation_color: background.clone(),
        navigation_color_dark: background.clone(),
        navigation_divider_color: background.clone(),
        navigation_divider_color_dark: background,
        orientation: manifest
            .orientation
            .clone()
            .unwrap_or_else(|| "default".to_string()),
        package_id: input.package_id.clone(),
        shortcuts: manifest.shortcuts.clone(),
        signing: AndroidSigning {
            file: None,
            alias: "my-key-alias".to_string(),
            full_name: format!("{name} Admin"),
            organization: name,
            organizational_unit: "Engineering".to_string(),
            country_code: "US".to_string(),
            // Empty passwords are generated by the CloudAPK service.
            key_password: String::new(),
            store_password: String::new(),
        },
        signing_mode: "new".to_string(),
        splash_screen_fade_out_duration: 300,
        start_url: manifest.start_url.clone().unwrap_or_else(|| "/".to_string()),
        theme_color: manifest
            .theme_color
            .clone()
            .unwrap_or_else(|| "#FFFFFF".to_string()),
        share_target: manifest
            .share_target
            .clone()
            .unwrap_or_else(|| serde_json::json!([])),
        web_manifest_url: input.manifest_url.clone(),
    })
}

/// Template with every Android setting spelled out, for users who want to
/// edit the full request by hand before sending it.
pub fn advanced_android_defaults() -> AndroidPackageOptions {
    AndroidPackageOptions {
        app_version: "1.0.0.0".to_string(),
        app_version_code: 1,
        background_color: "#FFFFFF".to_string(),
        display: "standalone".to_string(),
        enable_notifications: true,
        enable_site_settings_shortcut: true,
        fallback_type: "customtabs".to_string(),
        features: AndroidFeatures {
            location_delegation: FeatureToggle { enabled: true },
            play_billing: FeatureToggle { enabled: false },
        },
        host: "https://myapp.com".to_string(),
        icon_url: "https://myapp.com/icon.png".to_string(),
        maskable_icon_url: Some("https://myapp.com/maskable-icon.png".to_string()),
        monochrome_icon_url: Some("https://myapp.com/monochrome-icon.png".to_string()),
        include_source_code: false,
        is_chrome_os_only: false,
        launcher_name: "app name".to_string(),
        name: "app name".to_string(),
        navigation_color: "#FFFFFF".to_string(),
        navigation_color_dark: "#FFFFFF".to_string(),
        navigation_divider_color: "#FFFFFF".to_string(),
        navigation_divider_color_dark: "#FFFFFF".to_string(),
        orientation: "any".to_string(),
        package_id: "com.myapp.pwa".to_string(),
        shortcuts: vec![],
        signing: AndroidSigning {
            file: None,
            alias: "my-key-alias".to_string(),
            full_name: "Admin".to_string(),
            organization: "My PWA".to_string(),
            organizational_unit: "Engineering".to_string(),
            country_code: "US".to_string(),
            key_password: String::new(),
            store_password: String::new(),
        },
        signing_mode: "new".to_string(),
        splash_screen_fade_out_duration: 300,
        start_url: "/".to_string(),
        theme_color: "#FFFFFF".to_string(),
        share_target: serde_json::json!([]),
        web_manifest_url: "https://myapp.com/manifest.json".to_string(),
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
