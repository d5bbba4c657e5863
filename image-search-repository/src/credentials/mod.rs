//! Credential implementations.
//!
//! Two variants cover the two ways this system runs: inside the hosting
//! platform (managed identity) and on a developer machine (Azure Developer
//! CLI). The variant is a startup-time configuration decision, expressed
//! as a closed enum rather than runtime detection at call sites.

pub mod developer_cli;
pub mod managed_identity;

pub use developer_cli::AzureDeveloperCliCredential;
pub use managed_identity::ManagedIdentityCredential;

use std::sync::Arc;

use crate::interfaces::TokenCredential;

/// The closed set of credential strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// Token acquisition through the hosting platform's identity endpoint.
    ManagedIdentity,
    /// Token acquisition delegated to the logged-in Azure Developer CLI.
    DeveloperCli,
}

impl CredentialKind {
    /// Pick the credential strategy for the current hosting mode.
    ///
    /// Hosted deployments expose a managed identity; everywhere else the
    /// developer's CLI login is used.
    pub fn for_hosting(hosted: bool) -> Self {
        if hosted {
            Self::ManagedIdentity
        } else {
            Self::DeveloperCli
        }
    }
}

/// Construct the credential for the given strategy.
///
/// `tenant_id` is only consulted by the developer CLI variant.
pub fn create_credential(
    kind: CredentialKind,
    tenant_id: Option<String>,
) -> Arc<dyn TokenCredential> {
    match kind {
        CredentialKind::ManagedIdentity => Arc::new(ManagedIdentityCredential::new()),
        CredentialKind::DeveloperCli => Arc::new(AzureDeveloperCliCredential::new(tenant_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_selects_managed_identity() {
        assert_eq!(
            CredentialKind::for_hosting(true),
            CredentialKind::ManagedIdentity
        );
    }

    #[test]
    fn test_local_selects_developer_cli() {
        assert_eq!(
            CredentialKind::for_hosting(false),
            CredentialKind::DeveloperCli
        );
    }
}
