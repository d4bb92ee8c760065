//! Selects which identity-provider adapter the application speaks.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crm_auth::IdentityMapper;
use crm_auth::providers::{
    DirectoryMapper, DirectoryUser, FederatedMapper, FederatedUser, HostedMapper, HostedUser,
};
use crm_core::{Organization, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Hosted,
    Federated,
    Directory,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hosted" => Ok(ProviderKind::Hosted),
            "federated" => Ok(ProviderKind::Federated),
            "directory" => Ok(ProviderKind::Directory),
            other => Err(other.to_string()),
        }
    }
}

impl ProviderKind {
    /// Map a bare `(id, email)` pair through this provider's adapter, the
    /// same path a real provider record would take.
    pub fn map_identity(&self, id: &str, email: &str, organizations: &[Organization]) -> User {
        let email = (!email.is_empty()).then(|| email.to_string());
        match self {
            ProviderKind::Hosted => HostedMapper.map_to_user(&HostedUser {
                id: id.to_string(),
                email,
                ..Default::default()
            }),
            ProviderKind::Federated => FederatedMapper.map_to_user(&FederatedUser {
                uid: id.to_string(),
                email,
                ..Default::default()
            }),
            ProviderKind::Directory => {
                DirectoryMapper::new(organizations).map_to_user(&DirectoryUser {
                    id: id.to_string(),
                    email,
                    ..Default::default()
                })
            }
        }
    }

    pub fn default_user(&self, organizations: &[Organization]) -> User {
        match self {
            ProviderKind::Hosted => HostedMapper.create_default_user(),
            ProviderKind::Federated => FederatedMapper.create_default_user(),
            ProviderKind::Directory => DirectoryMapper::new(organizations).create_default_user(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::{Profile, Tenant};

    #[test]
    fn every_provider_classifies_the_same_way() {
        let orgs = vec![Organization::new("org-ghf", "GHF", "GHF")];
        for kind in [ProviderKind::Hosted, ProviderKind::Federated, ProviderKind::Directory] {
            let user = kind.map_identity("u-1", "ana@ghf.com.br", &orgs);
            assert_eq!(user.profile(), Profile::Ghf, "{kind:?}");
            assert_eq!(user.tenant(), Tenant::SaltGhf, "{kind:?}");

            let fallback = kind.default_user(&orgs);
            assert_eq!(fallback.profile(), Profile::Salt, "{kind:?}");
        }
    }

    #[test]
    fn directory_resolves_against_organizations() {
        let orgs = vec![Organization::new("org-ghf", "GHF", "GHF")];
        let user = ProviderKind::Directory.map_identity("u-1", "ana@ghf.com.br", &orgs);
        assert_eq!(user.organization_id().as_str(), "org-ghf");

        let user = ProviderKind::Hosted.map_identity("u-1", "ana@ghf.com.br", &orgs);
        assert_eq!(user.organization_id().as_str(), "ghf-org-1");
    }

    #[test]
    fn parses_provider_names() {
        assert_eq!(" Federated ".parse::<ProviderKind>(), Ok(ProviderKind::Federated));
        assert!("saml".parse::<ProviderKind>().is_err());
    }
}
