//! Main application helpers.
//!
//! Output formatting used by the binary once an export has finished.

pub mod summary;

// Re-export public API
pub use summary::{format_summary, format_thousands};
