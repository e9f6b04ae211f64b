//! # idm-management
//!
//! Typed async client for the custom domains endpoints of an
//! identity-management API (`/api/v2/custom-domains`).
//!
//! ## Layers
//!
//! | Type | Role |
//! |------|------|
//! | [`Doer`] | Capability that executes one HTTP request. [`HttpDoer`] is the reqwest implementation. |
//! | [`Management`] | Shared client: path and query building, JSON encoding, status handling. |
//! | [`ResourceManager`] | Generic create/read/update/delete/list/action verbs for one collection. |
//! | [`CustomDomainManager`] | The `custom-domains` collection. |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use idm_management::{
//!     CustomDomain, CustomDomainManager, Management, ManagementConfig, ProvisioningType,
//!     VerificationMethod,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ManagementConfig::for_tenant("example.eu.auth0.com", "your-token");
//!     let management = Arc::new(Management::from_config(&config)?);
//!     let domains = CustomDomainManager::new(management);
//!
//!     let mut domain = CustomDomain::new("login.example.com", ProvisioningType::Auth0ManagedCerts)
//!         .with_verification_method(VerificationMethod::Txt);
//!     domains.create(&mut domain).await?;
//!
//!     for method in domain.verification_methods() {
//!         println!("publish: {:?}", method.get("record"));
//!     }
//!
//!     let id = domain.id().unwrap_or_default().to_string();
//!     let domain = domains.verify(&id).await?;
//!     println!("{id}: {:?}", domain.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, ManagementError>`](ManagementError). A response
//! outside 2xx becomes [`ManagementError::Remote`] with the status code and the
//! service's error payload; nothing is validated locally and nothing is retried.

mod config;
mod custom_domain;
mod error;
mod http_client;
mod management;
mod resource;
mod types;
mod utils;

pub mod options;

#[cfg(test)]
mod testing;

pub use config::{ENV_BASE_URL, ENV_DOMAIN, ENV_TOKEN, ManagementConfig};
pub use custom_domain::CustomDomainManager;
pub use error::{ManagementError, RemoteError, Result};
pub use http_client::{ApiRequest, ApiResponse, Doer, HttpDoer, HttpMethod};
pub use management::Management;
pub use options::RequestOption;
pub use resource::ResourceManager;
pub use types::{
    CustomDomain, CustomDomainStatus, CustomDomainVerification, ProvisioningType,
    VerificationMethod,
};
