//! Product query text.
//!
//! The export runs exactly one statement. Rows come back in the order the
//! document needs them: ascending current price, NULL prices first (SQLite
//! sorts NULL before any value in ascending order), ties broken by id so two
//! runs over the same data produce the same bytes.

use crate::config::{COL_ID, COL_PRICE_CURRENT, PRODUCTS_TABLE, PRODUCT_COLUMNS};

/// Builds the projection query over the products table.
pub(crate) fn build_products_query() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} ASC, {} ASC",
        PRODUCT_COLUMNS.join(", "),
        PRODUCTS_TABLE,
        COL_PRICE_CURRENT,
        COL_ID
    )
}
