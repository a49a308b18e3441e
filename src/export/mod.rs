//! Catalog export.
//!
//! Reads the `products` table from the SQLite catalog and writes the single
//! JSON document the static site loads:
//!
//! ```text
//! { "products": [ {...}, ... ],
//!   "meta": { "total", "brands", "fuel_types", "price_min", "price_max" } }
//! ```
//!
//! Every run recomputes the whole document from the current database
//! contents and replaces the previous file.

mod document;
mod queries;
mod row;
mod types;
mod writer;

use futures::TryStreamExt;
use log::info;

use crate::error_handling::{log_warning_statistics, DecodeStats, ExportError};
use crate::storage::{open_source_read_only, DbPool};

pub use document::{CatalogMeta, ExportDocument};
pub use row::{decode_bullet_points, is_truthy_flag, parse_bullet_points, ProductRecord};
pub use types::{ExportOptions, ExportSummary};

/// Exports the catalog at `opts.db_path` to `opts.output`.
///
/// The database is opened read-only and closed before returning, whether the
/// export succeeded or not. The document is fully built in memory before any
/// write, so a failed run leaves the destination untouched.
///
/// # Errors
///
/// - `SourceUnavailable` if the database is missing or cannot be opened
/// - `QueryFailure` if the table or a column is missing, or a value cannot be decoded
/// - `WriteFailure` if the destination directory or file cannot be written
pub async fn export_catalog(opts: &ExportOptions) -> Result<ExportSummary, ExportError> {
    let pool = open_source_read_only(&opts.db_path).await?;

    let loaded = load_products(&pool).await;
    pool.close().await;
    let (products, stats) = loaded?;

    log_warning_statistics(&stats);

    let document = ExportDocument::new(products);
    let bytes = serde_json::to_vec(&document)?;
    let bytes_written = writer::write_atomically(&opts.output, &bytes)?;

    let meta = document.meta;
    info!(
        "Exported {} products ({} bytes) to {}",
        meta.total,
        bytes_written,
        opts.output.display()
    );

    Ok(ExportSummary {
        total: meta.total,
        brand_count: meta.brands.len(),
        fuel_type_count: meta.fuel_types.len(),
        price_min: meta.price_min,
        price_max: meta.price_max,
        bytes_written,
        output: opts.output.clone(),
        decode_warnings: stats.total_warnings(),
    })
}

/// Runs the product query and normalizes every row, in query order.
async fn load_products(pool: &DbPool) -> Result<(Vec<ProductRecord>, DecodeStats), ExportError> {
    let query = queries::build_products_query();
    let mut rows = sqlx::query(&query).fetch(pool);

    let mut products = Vec::new();
    let mut stats = DecodeStats::new();

    while let Some(row) = rows.try_next().await? {
        products.push(row::extract_product(&row, &mut stats)?);
    }

    info!("Read {} products from source", products.len());
    Ok((products, stats))
}
