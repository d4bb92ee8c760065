use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier carried by a user.
///
/// Roles are opaque strings; only [`Role::MASTER`] has meaning locally (it
/// bypasses every permission check). Everything else is interpreted by the
/// remote authorization backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const MASTER: Role = Role(Cow::Borrowed("MASTER"));
    pub const ADMIN: Role = Role(Cow::Borrowed("ADMIN"));
    pub const USER: Role = Role(Cow::Borrowed("USER"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_master(&self) -> bool {
        self.as_str() == Self::MASTER.as_str()
    }

    /// Roles that unlock the admin navigation shell.
    pub fn is_administrative(&self) -> bool {
        self.is_master() || self.as_str() == Self::ADMIN.as_str()
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::USER
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
