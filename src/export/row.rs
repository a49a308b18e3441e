//! Product row extraction and normalization.
//!
//! Turns one `products` row into the record shape the static site consumes.
//! Two fields change representation on the way out:
//! - `bullet_points` is stored as JSON text and exported as a JSON array
//! - `is_free_shipping` is stored as 0/1 and exported as a boolean
//!
//! Everything else is copied through, with SQL NULL becoming JSON null.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};

use crate::config::*;
use crate::error_handling::{DecodeStats, WarningType};

/// A single exported product.
///
/// Field order matches the query projection and is the key order in the
/// serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Primary key
    pub id: i64,
    /// Display name
    pub name: Option<String>,
    /// Manufacturer
    pub brand: Option<String>,
    /// Catalog category
    pub category: Option<String>,
    /// Manufacturer model number
    pub model_number: Option<String>,
    /// Fuel type, e.g. propane or natural gas
    pub fuel_type: Option<String>,
    /// Current price
    pub price_current: Option<f64>,
    /// List price
    pub price_retail: Option<f64>,
    /// Sale price
    pub price_sale: Option<f64>,
    /// Current price as shown to shoppers
    pub price_formatted: Option<String>,
    /// List price as shown to shoppers
    pub retail_formatted: Option<String>,
    /// Savings amount as shown to shoppers
    pub savings_formatted: Option<String>,
    /// Savings percentage as shown to shoppers
    pub savings_percent: Option<String>,
    /// Product image
    pub image_url: Option<String>,
    /// Product page
    pub product_url: Option<String>,
    /// Average review rating
    pub rating: Option<f64>,
    /// Number of reviews
    pub review_count: Option<i64>,
    /// Long-form description
    pub description: Option<String>,
    /// Feature bullets, `[]` when absent or malformed
    pub bullet_points: Vec<Value>,
    /// Stock status text
    pub stock_status: Option<String>,
    /// Shipping lead time text
    pub ships_in: Option<String>,
    /// Whether the product ships free
    pub is_free_shipping: bool,
    /// Product video
    pub video_url: Option<String>,
}

/// Parses the stored `bullet_points` text.
///
/// Absent and empty values are not an error; they simply mean "no bullets".
/// Text that is not JSON, or JSON that is not an array, is reported as a
/// warning so the caller can count it.
pub fn parse_bullet_points(raw: Option<&str>) -> Result<Vec<Value>, WarningType> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(Vec::new()),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(WarningType::NonArrayBulletPoints),
        Err(_) => Err(WarningType::InvalidBulletPointsJson),
    }
}

/// Decodes `bullet_points`, falling back to an empty list on any failure.
pub fn decode_bullet_points(raw: Option<&str>) -> Vec<Value> {
    parse_bullet_points(raw).unwrap_or_default()
}

/// Extracts and normalizes one product from a query row.
///
/// Malformed `bullet_points` are counted in `stats` and exported as `[]`.
/// Any other column that cannot be decoded fails the whole row.
pub fn extract_product(
    row: &SqliteRow,
    stats: &mut DecodeStats,
) -> Result<ProductRecord, sqlx::Error> {
    let id: i64 = row.try_get(COL_ID)?;

    let raw_bullets: Option<String> = row.try_get(COL_BULLET_POINTS)?;
    let bullet_points = match parse_bullet_points(raw_bullets.as_deref()) {
        Ok(items) => items,
        Err(warning) => {
            debug!("Product {id}: {warning}, exporting empty bullet_points");
            stats.increment_warning(warning);
            Vec::new()
        }
    };

    Ok(ProductRecord {
        id,
        name: row.try_get(COL_NAME)?,
        brand: row.try_get(COL_BRAND)?,
        category: row.try_get(COL_CATEGORY)?,
        model_number: row.try_get(COL_MODEL_NUMBER)?,
        fuel_type: row.try_get(COL_FUEL_TYPE)?,
        price_current: read_number(row, COL_PRICE_CURRENT)?,
        price_retail: read_number(row, COL_PRICE_RETAIL)?,
        price_sale: read_number(row, COL_PRICE_SALE)?,
        price_formatted: read_display(row, COL_PRICE_FORMATTED)?,
        retail_formatted: read_display(row, COL_RETAIL_FORMATTED)?,
        savings_formatted: read_display(row, COL_SAVINGS_FORMATTED)?,
        savings_percent: read_display(row, COL_SAVINGS_PERCENT)?,
        image_url: row.try_get(COL_IMAGE_URL)?,
        product_url: row.try_get(COL_PRODUCT_URL)?,
        rating: read_number(row, COL_RATING)?,
        review_count: row.try_get(COL_REVIEW_COUNT)?,
        description: row.try_get(COL_DESCRIPTION)?,
        bullet_points,
        stock_status: row.try_get(COL_STOCK_STATUS)?,
        ships_in: row.try_get(COL_SHIPS_IN)?,
        is_free_shipping: read_flag(row, COL_IS_FREE_SHIPPING)?,
        video_url: row.try_get(COL_VIDEO_URL)?,
    })
}

/// Truthiness of a stored 0/1 flag.
pub fn is_truthy_flag(value: Option<i64>) -> bool {
    value.is_some_and(|v| v != 0)
}

/// Storage class of a column value, or `None` for NULL.
fn storage_class(row: &SqliteRow, column: &str) -> Result<Option<String>, sqlx::Error> {
    let raw = row.try_get_raw(column)?;
    if raw.is_null() {
        return Ok(None);
    }
    Ok(Some(raw.type_info().name().to_string()))
}

/// Reads a numeric column stored as either INTEGER or REAL.
///
/// SQLite can hold infinities in REAL columns; JSON cannot, so they fail the
/// row instead of being written as `null`.
fn read_number(row: &SqliteRow, column: &str) -> Result<Option<f64>, sqlx::Error> {
    let value = match storage_class(row, column)?.as_deref() {
        None => return Ok(None),
        #[allow(clippy::cast_precision_loss)]
        Some("INTEGER") => row.try_get::<i64, _>(column)? as f64,
        Some(_) => row.try_get::<f64, _>(column)?,
    };

    if !value.is_finite() {
        return Err(sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: format!("non-finite number {value} cannot be exported as JSON").into(),
        });
    }
    Ok(Some(value))
}

/// Reads a pre-formatted display column. Numbers are rendered as text.
fn read_display(row: &SqliteRow, column: &str) -> Result<Option<String>, sqlx::Error> {
    match storage_class(row, column)?.as_deref() {
        None => Ok(None),
        Some("INTEGER") => Ok(Some(row.try_get::<i64, _>(column)?.to_string())),
        Some("REAL") => Ok(Some(row.try_get::<f64, _>(column)?.to_string())),
        Some(_) => row.try_get::<String, _>(column).map(Some),
    }
}

/// Reads a 0/1 flag column. NULL is false.
fn read_flag(row: &SqliteRow, column: &str) -> Result<bool, sqlx::Error> {
    match storage_class(row, column)?.as_deref() {
        None => Ok(false),
        Some("REAL") => Ok(row.try_get::<f64, _>(column)? != 0.0),
        Some(_) => Ok(is_truthy_flag(Some(row.try_get::<i64, _>(column)?))),
    }
}
