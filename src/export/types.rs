//! Export types and options.

use std::path::PathBuf;

/// Options for exporting the catalog.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Database path (opened read-only)
    pub db_path: PathBuf,
    /// Output file path (parent directories are created)
    pub output: PathBuf,
}

/// Outcome of a successful export.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSummary {
    /// Number of exported products
    pub total: usize,
    /// Number of distinct non-empty brands
    pub brand_count: usize,
    /// Number of distinct non-empty fuel types
    pub fuel_type_count: usize,
    /// Lowest current price, or 0 if no product has one
    pub price_min: f64,
    /// Highest current price, or 0 if no product has one
    pub price_max: f64,
    /// Size of the written document
    pub bytes_written: u64,
    /// Where the document was written
    pub output: PathBuf,
    /// Records whose bullet points were replaced by an empty list
    pub decode_warnings: usize,
}
