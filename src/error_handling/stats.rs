//! Decode warning statistics.
//!
//! Counts the non-fatal warnings raised while normalizing records so the
//! run can report them once at the end instead of per record.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::WarningType;

/// Per-run warning counters.
///
/// All warning types are initialized to zero on creation. The exporter is
/// single-threaded, so plain counters are enough.
#[derive(Debug, Clone)]
pub struct DecodeStats {
    warnings: HashMap<WarningType, usize>,
}

impl DecodeStats {
    /// Creates counters with every warning type at zero.
    pub fn new() -> Self {
        let warnings = WarningType::iter().map(|w| (w, 0)).collect();
        DecodeStats { warnings }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&mut self, warning: WarningType) {
        *self.warnings.entry(warning).or_insert(0) += 1;
    }

    /// Count for one warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(&warning).copied().unwrap_or(0)
    }

    /// Sum over all warning types.
    pub fn total_warnings(&self) -> usize {
        self.warnings.values().sum()
    }
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs non-zero warning counts at info level.
pub fn log_warning_statistics(stats: &DecodeStats) {
    let total = stats.total_warnings();
    if total == 0 {
        return;
    }

    log::info!("Decode warnings ({} total):", total);
    for warning_type in WarningType::iter() {
        let count = stats.get_warning_count(warning_type);
        if count > 0 {
            log::info!("   {}: {}", warning_type.as_str(), count);
        }
    }
}
