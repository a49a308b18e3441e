// storage/mod.rs
// Source database access

pub mod pool;

// Re-export commonly used items
pub use pool::{open_source_read_only, DbPool};
