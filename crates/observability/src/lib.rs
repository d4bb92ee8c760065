//! Tracing/logging setup shared by CRM binaries.

/// Tracing configuration (filters, format).
pub mod tracing;

pub use crate::tracing::{LogFormat, LogSettings, ParseLogFormatError};

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(settings: &LogSettings) {
    tracing::init(settings);
}
