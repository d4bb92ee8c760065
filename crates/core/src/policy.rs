//! Named policies for collaborator failures.
//!
//! Tenant scoping fails open (fall back to a default tenant), permission checks
//! fail closed (deny). Callers pick one of these instead of writing their own
//! error arms, so each policy can be tested on its own.

use core::fmt::Display;

/// Recover from a collaborator failure by returning a fixed fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailOpenDefault<T> {
    fallback: T,
}

impl<T: Clone> FailOpenDefault<T> {
    pub const fn new(fallback: T) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Return the successful value, or the fallback when `outcome` failed.
    pub fn recover<E: Display>(&self, operation: &str, outcome: Result<T, E>) -> T {
        match outcome {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(operation, error = %err, "collaborator failed; using fallback");
                self.fallback.clone()
            }
        }
    }
}

/// Recover from a collaborator failure by denying.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FailClosedDeny;

impl FailClosedDeny {
    pub fn recover<E: Display>(&self, operation: &str, outcome: Result<bool, E>) -> bool {
        match outcome {
            Ok(granted) => granted,
            Err(err) => {
                tracing::error!(operation, error = %err, "collaborator failed; denying");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollaboratorError, Tenant};

    #[test]
    fn fail_open_passes_success_through() {
        let policy = FailOpenDefault::new(Tenant::SaltGhf);
        let out = policy.recover::<CollaboratorError>("resolve", Ok(Tenant::Neoin));
        assert_eq!(out, Tenant::Neoin);
    }

    #[test]
    fn fail_open_returns_fallback_on_error() {
        let policy = FailOpenDefault::new(Tenant::SaltGhf);
        let out = policy.recover("resolve", Err(CollaboratorError::transport("timeout")));
        assert_eq!(out, Tenant::SaltGhf);
        assert_eq!(policy.fallback(), &Tenant::SaltGhf);
    }

    #[test]
    fn fail_closed_passes_decision_through() {
        assert!(FailClosedDeny.recover::<CollaboratorError>("check", Ok(true)));
        assert!(!FailClosedDeny.recover::<CollaboratorError>("check", Ok(false)));
    }

    #[test]
    fn fail_closed_denies_on_error() {
        let out = FailClosedDeny.recover("check", Err(CollaboratorError::rejected("boom")));
        assert!(!out);
    }
}
