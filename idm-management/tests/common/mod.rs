//! Shared test helpers

#![allow(dead_code)]

use std::sync::Arc;

use idm_management::{
    CustomDomain, CustomDomainManager, Management, ManagementConfig, ProvisioningType,
    VerificationMethod,
};

/// Skip the test when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Unique hostname under `parent`, e.g. `idm-test-1a2b3c4d.example.com`.
pub fn generate_test_hostname(parent: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("idm-test-{}.{parent}", &uuid.to_string()[..8])
}

/// Live tenant context built from `IDM_MANAGEMENT_*` and `TEST_PARENT_DOMAIN`.
pub struct TestContext {
    pub domains: CustomDomainManager,
    pub parent_domain: String,
}

impl TestContext {
    pub fn from_env() -> Option<Self> {
        let config = ManagementConfig::from_env().ok()?;
        let parent_domain = std::env::var("TEST_PARENT_DOMAIN").ok()?;
        let management = Management::from_config(&config).ok()?;

        Some(Self {
            domains: CustomDomainManager::new(Arc::new(management)),
            parent_domain,
        })
    }

    /// Create a throwaway custom domain, returning it as populated by the service.
    pub async fn create_test_domain(&self) -> Option<CustomDomain> {
        let mut domain = CustomDomain::new(
            generate_test_hostname(&self.parent_domain),
            ProvisioningType::Auth0ManagedCerts,
        )
        .with_verification_method(VerificationMethod::Txt);

        self.domains.create(&mut domain).await.ok()?;
        Some(domain)
    }

    pub async fn cleanup_domain(&self, id: &str) {
        let _ = self.domains.delete(id).await;
    }

    /// Delete every leftover `idm-test-` domain.
    pub async fn cleanup_all_test_domains(&self) {
        if let Ok(domains) = self.domains.list(&[]).await {
            for domain in domains {
                if domain.domain().is_some_and(|d| d.starts_with("idm-test-"))
                    && let Some(id) = domain.id()
                {
                    let _ = self.domains.delete(id).await;
                }
            }
        }
    }
}
