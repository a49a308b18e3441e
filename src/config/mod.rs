//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default paths, environment variable names)
//! - The exported column set of the `products` table
//! - CLI option types and parsing

mod columns;
mod constants;
mod types;

// Re-export all constants
pub use columns::*;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
