//! `crm-app`: configuration and composition root for the CRM front-end core.

pub mod config;
pub mod identity;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use identity::ProviderKind;
pub use state::{AppState, Dashboard};
