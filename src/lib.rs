//! catalog_export library: static JSON export of a SQLite product catalog
//!
//! Reads the `products` table of a catalog database and writes the single
//! JSON document a static storefront loads at startup: every product in
//! ascending price order, plus a `meta` block with the brand and fuel-type
//! facets and the overall price range.
//!
//! # Example
//!
//! ```no_run
//! use catalog_export::export::{export_catalog, ExportOptions};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = ExportOptions {
//!     db_path: PathBuf::from("catalog.db"),
//!     output: PathBuf::from("site/data/products.json"),
//! };
//!
//! let summary = export_catalog(&opts).await?;
//! println!("Exported {} products ({} bytes)", summary.total, summary.bytes_written);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The database driver is async, so exports must run inside a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, WarningType};
pub use export::{export_catalog, ExportOptions, ExportSummary};
pub use run::run_export;

mod run {
    use crate::config::Config;
    use crate::error_handling::ExportError;
    use crate::export::{export_catalog, ExportSummary};

    /// Runs an export with the paths from `config`.
    ///
    /// Logging is not initialized here; the binary does that before calling in.
    ///
    /// # Errors
    ///
    /// Propagates any fatal `ExportError`. See `export_catalog`.
    pub async fn run_export(config: &Config) -> Result<ExportSummary, ExportError> {
        log::debug!(
            "Export configuration: db_path={}, output={}",
            config.db_path.display(),
            config.output.display()
        );
        export_catalog(&config.export_options()).await
    }
}
