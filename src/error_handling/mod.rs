//! Error handling and decode statistics.
//!
//! This module provides:
//! - Fatal export errors, one variant per failing stage
//! - Non-fatal per-record warning types
//! - Warning counters reported once per run
//!
//! A fatal error aborts the run without touching the destination. A warning
//! only replaces the affected field with its default value.

mod stats;
mod types;

// Re-export public API
pub use stats::{log_warning_statistics, DecodeStats};
pub use types::{ExportError, InitializationError, WarningType};
