//! Custom domains: `/custom-domains`.

use std::sync::Arc;

use crate::error::Result;
use crate::management::Management;
use crate::options::RequestOption;
use crate::resource::ResourceManager;
use crate::types::CustomDomain;

const RESOURCE: &str = "custom-domains";

/// Manages custom domains of a tenant.
///
/// A new domain starts out `pending`; the service moves it through
/// `pending_verification` to `ready` once its DNS challenge is satisfied,
/// either on its own schedule or after [`verify`](Self::verify).
#[derive(Debug, Clone)]
pub struct CustomDomainManager {
    inner: ResourceManager<CustomDomain>,
}

impl CustomDomainManager {
    pub fn new(m: Arc<Management>) -> Self {
        Self {
            inner: ResourceManager::new(m, RESOURCE),
        }
    }

    /// Creates a custom domain.
    ///
    /// `domain` should carry at least the hostname, provisioning type and
    /// verification method. On success the service's answer (id, status,
    /// verification challenge, ...) is written back into `domain`.
    ///
    /// The domain must be verified before it starts accepting requests.
    pub async fn create(&self, domain: &mut CustomDomain) -> Result<()> {
        self.inner.create(domain).await
    }

    /// Retrieves a custom domain's configuration and status.
    pub async fn read(&self, id: &str, options: &[RequestOption]) -> Result<CustomDomain> {
        self.inner.read(id, options).await
    }

    /// Asks the service to run the verification process.
    ///
    /// Returns the domain as the service reports it afterwards. Verification
    /// is asynchronous on the service side, so the status may still be
    /// `pending_verification`; callers that need `ready` poll [`read`](Self::read).
    pub async fn verify(&self, id: &str) -> Result<CustomDomain> {
        log::debug!("verifying custom domain {id}");
        self.inner.action(id, "verify").await
    }

    /// Deletes a custom domain and stops serving requests for it.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }

    /// Lists custom domains in the order the service returns them.
    pub async fn list(&self, options: &[RequestOption]) -> Result<Vec<CustomDomain>> {
        self.inner.list(options).await
    }
}
