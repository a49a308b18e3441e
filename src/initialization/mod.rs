//! Application initialization.
//!
//! The exporter has a single process-wide resource to set up before a run:
//! the logger. Database handles are scoped to each export and live in
//! `storage`.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
