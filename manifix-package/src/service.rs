use crate::error::PackageError;
use manifix_types::package::{AndroidPackageOptions, MsixPackageInfo};
use tracing::{debug, info};

/// Windows MSIX generator service.
pub const WINDOWS_PACKAGE_ENDPOINT: &str =
    "https://pwabuilder-win-chromium-platform.centralus.cloudapp.azure.com/msix/generatezip";

/// CloudAPK (Android) packaging service.
pub const ANDROID_PACKAGE_ENDPOINT: &str =
    "https://pwabuilder-cloudapk.azurewebsites.net/generateAppPackage";

/// Remote packaging collaborator.
///
/// Implementations return the raw package archive bytes. Kept as a trait so
/// command code can be exercised against a stub without network access.
pub trait PackagingService {
    fn generate_msix(
        &self,
        info: &MsixPackageInfo,
    ) -> impl Future<Output = Result<Vec<u8>, PackageError>> + Send;

    fn generate_android(
        &self,
        options: &AndroidPackageOptions,
    ) -> impl Future<Output = Result<Vec<u8>, PackageError>> + Send;
}

/// `reqwest`-backed packaging client.
#[derive(Debug, Clone)]
pub struct HttpPackagingService {
    client: reqwest::Client,
    msix_endpoint: String,
    android_endpoint: String,
}

impl Default for HttpPackagingService {
    fn default() -> Self {
        Self::new(WINDOWS_PACKAGE_ENDPOINT, ANDROID_PACKAGE_ENDPOINT)
    }
}

impl HttpPackagingService {
    pub fn new(msix_endpoint: impl Into<String>, android_endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            msix_endpoint: msix_endpoint.into(),
            android_endpoint: android_endpoint.into(),
        }
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Vec<u8>, PackageError> {
        debug!(endpoint, "posting packaging request");
        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(|source| PackageError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PackageError::ServiceStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| PackageError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;
        info!(endpoint, bytes = bytes.len(), "packaging service responded");
        Ok(bytes.to_vec())
    }
}

impl PackagingService for HttpPackagingService {
    async fn generate_msix(&self, info: &MsixPackageInfo) -> Result<Vec<u8>, PackageError> {
        self.post_json(&self.msix_endpoint, info).await
    }

    async fn generate_android(
        &self,
        options: &AndroidPackageOptions,
    ) -> Result<Vec<u8>, PackageError> {
        self.post_json(&self.android_endpoint, options).await
    }
}
