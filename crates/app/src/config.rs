//! Environment-driven configuration.

use thiserror::Error;

use crm_observability::{LogFormat, LogSettings, ParseLogFormatError};
use crm_tenancy::{StaticTenantTable, TableError};

use crate::identity::ProviderKind;

pub const ENV_LOG_FILTER: &str = "CRM_LOG_FILTER";
pub const ENV_LOG_FORMAT: &str = "CRM_LOG_FORMAT";
pub const ENV_IDENTITY_PROVIDER: &str = "CRM_IDENTITY_PROVIDER";
pub const ENV_EXTRA_TENANT_MAPPINGS: &str = "CRM_EXTRA_TENANT_MAPPINGS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CRM_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("CRM_IDENTITY_PROVIDER: unknown identity provider '{0}'")]
    UnknownProvider(String),

    #[error("CRM_EXTRA_TENANT_MAPPINGS: {0}")]
    TenantMapping(#[from] TableError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log: LogSettings,
    pub provider: ProviderKind,
    pub tenant_table: StaticTenantTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogSettings::default(),
            provider: ProviderKind::default(),
            tenant_table: StaticTenantTable::builtin(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset or blank
    /// keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(filter) = get(ENV_LOG_FILTER) {
            config.log.filter = filter;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            config.log.format = format.parse::<LogFormat>()?;
        }
        if let Some(provider) = get(ENV_IDENTITY_PROVIDER) {
            config.provider = provider
                .parse()
                .map_err(|_| ConfigError::UnknownProvider(provider.clone()))?;
        }
        if let Some(mappings) = get(ENV_EXTRA_TENANT_MAPPINGS) {
            config.tenant_table = config.tenant_table.with_mappings(&mappings)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::Tenant;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.provider, ProviderKind::Hosted);
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_LOG_FILTER, "crm_auth=debug"),
            (ENV_LOG_FORMAT, "text"),
            (ENV_IDENTITY_PROVIDER, "directory"),
            (ENV_EXTRA_TENANT_MAPPINGS, "acme=NEOIN"),
        ]))
        .unwrap();

        assert_eq!(config.log.filter, "crm_auth=debug");
        assert_eq!(config.log.format, LogFormat::Text);
        assert_eq!(config.provider, ProviderKind::Directory);
        assert_eq!(config.tenant_table.get(&"acme".into()), Some(Tenant::Neoin));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "  ")])).unwrap();
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_IDENTITY_PROVIDER, "ldap")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownProvider("ldap".to_string()));

        let err = AppConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::LogFormat(_)));

        let err =
            AppConfig::from_lookup(lookup(&[(ENV_EXTRA_TENANT_MAPPINGS, "acme")])).unwrap_err();
        assert!(matches!(err, ConfigError::TenantMapping(TableError::Malformed(_))));
    }
}
