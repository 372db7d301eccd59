use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackageError {
    /// The CloudAPK service requires a 512x512 icon; packaging cannot
    /// proceed without one.
    #[error("manifest has no 512x512 icon; add one before packaging")]
    MissingLargeIcon,

    #[error("http request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("packaging service at {endpoint} returned status {status}")]
    ServiceStatus { endpoint: String, status: u16 },
}
