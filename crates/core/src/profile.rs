//! Business-unit classification (`Profile`) and data-isolation grouping (`Tenant`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::OrganizationId;

/// Business-unit classification of a user.
///
/// Many-to-one onto [`Tenant`]: SALT and GHF share a tenant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profile {
    #[default]
    Salt,
    Ghf,
    Neoin,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Salt, Profile::Ghf, Profile::Neoin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Salt => "SALT",
            Profile::Ghf => "GHF",
            Profile::Neoin => "NEOIN",
        }
    }

    /// The tenant this profile belongs to.
    pub fn tenant(&self) -> Tenant {
        match self {
            Profile::Salt | Profile::Ghf => Tenant::SaltGhf,
            Profile::Neoin => Tenant::Neoin,
        }
    }

    /// Organization assigned to users of this profile when no directory is consulted.
    pub fn default_organization_id(&self) -> OrganizationId {
        match self {
            Profile::Salt => OrganizationId::new("salt-org-1"),
            Profile::Ghf => OrganizationId::new("ghf-org-1"),
            Profile::Neoin => OrganizationId::new("neoin-org-1"),
        }
    }
}

impl core::fmt::Display for Profile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SALT" => Ok(Profile::Salt),
            "GHF" => Ok(Profile::Ghf),
            "NEOIN" => Ok(Profile::Neoin),
            other => Err(DomainError::validation(format!("unknown profile '{other}'"))),
        }
    }
}

/// Coarse organizational grouping controlling data isolation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tenant {
    #[default]
    SaltGhf,
    Neoin,
}

impl Tenant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tenant::SaltGhf => "SALT_GHF",
            Tenant::Neoin => "NEOIN",
        }
    }
}

impl core::fmt::Display for Tenant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tenant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SALT_GHF" => Ok(Tenant::SaltGhf),
            "NEOIN" => Ok(Tenant::Neoin),
            other => Err(DomainError::validation(format!("unknown tenant '{other}'"))),
        }
    }
}
