//! Store packaging support: builds the request bodies the remote packaging
//! services expect and posts them over HTTP.
//!
//! The services themselves (MSIX generator, CloudAPK) are opaque
//! collaborators; this crate only constructs requests and returns response
//! bytes. No retry policy and no authentication by design.

mod builders;
mod error;
mod service;

pub use builders::{
    AndroidOptionsInput, advanced_android_defaults, android_options, publisher_msix, simple_msix,
};
pub use error::PackageError;
pub use service::{
    ANDROID_PACKAGE_ENDPOINT, HttpPackagingService, PackagingService, WINDOWS_PACKAGE_ENDPOINT,
};
