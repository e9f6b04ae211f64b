use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============ Custom Domain ============

/// Who manages the TLS certificate of a custom domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisioningType {
    /// The service issues and renews the certificate.
    Auth0ManagedCerts,
    /// The caller terminates TLS with their own certificate.
    SelfManagedCerts,
}

/// Configuration status of a custom domain.
///
/// Owned by the remote service; the client only reads it. Values the service
/// adds later decode as [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomDomainStatus {
    Disabled,
    Pending,
    PendingVerification,
    Ready,
    #[serde(other)]
    Unknown,
}

impl CustomDomainStatus {
    /// `true` once the domain is serving traffic.
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// How domain ownership is proven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    /// DNS TXT record challenge.
    Txt,
}

/// Verification challenges published by the service for a custom domain.
///
/// Each method is an opaque JSON object (typically `name`, `record` and
/// `domain` for a TXT challenge); its schema is not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomDomainVerification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Map<String, Value>>>,
}

/// A custom domain as exchanged with the management API.
///
/// Every field is optional: the service returns partial documents depending
/// on the endpoint and on the domain's state, and unset fields are never
/// written to the wire. `Some(false)` is sent, `None` is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomDomain {
    /// Identifier assigned by the service on creation.
    #[serde(
        rename = "custom_domain_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// The hostname, e.g. `login.example.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub provisioning_type: Option<ProvisioningType>,

    /// Whether the domain is marked as primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomDomainStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<VerificationMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<CustomDomainVerification>,
}

impl CustomDomain {
    /// A creation request for `domain` with the given provisioning type.
    pub fn new(domain: impl Into<String>, provisioning_type: ProvisioningType) -> Self {
        Self {
            domain: Some(domain.into()),
            provisioning_type: Some(provisioning_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_verification_method(mut self, method: VerificationMethod) -> Self {
        self.verification_method = Some(method);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Verification challenge descriptors, empty when the service sent none.
    pub fn verification_methods(&self) -> &[Map<String, Value>] {
        self.verification
            .as_ref()
            .and_then(|v| v.methods.as_deref())
            .unwrap_or_default()
    }
}

/// Compact JSON rendering of the fields that are set.
impl std::fmt::Display for CustomDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
