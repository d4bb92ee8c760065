//! External organization entity.

use serde::{Deserialize, Serialize};

use crate::id::OrganizationId;

/// Organization code as stored by the organization backend (e.g. `"NEOIN"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationCode(String);

impl OrganizationCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrganizationCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An organization as known to the organization backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub code: OrganizationCode,
}

impl Organization {
    pub fn new(
        id: impl Into<OrganizationId>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: OrganizationCode::new(code),
        }
    }
}
