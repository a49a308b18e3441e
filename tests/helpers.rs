// Shared test helpers for catalog database setup and test data creation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;

/// Schema of the scraper's catalog database.
pub const PRODUCTS_DDL: &str = "CREATE TABLE products (
    id INTEGER PRIMARY KEY,
    name TEXT,
    brand TEXT,
    category TEXT,
    model_number TEXT,
    fuel_type TEXT,
    price_current REAL,
    price_retail REAL,
    price_sale REAL,
    price_formatted TEXT,
    retail_formatted TEXT,
    savings_formatted TEXT,
    savings_percent TEXT,
    image_url TEXT,
    product_url TEXT,
    rating REAL,
    review_count INTEGER,
    description TEXT,
    bullet_points TEXT,
    stock_status TEXT,
    ships_in TEXT,
    is_free_shipping INTEGER,
    video_url TEXT,
    scraped_at TEXT
)";

/// Creates a writable catalog database at `db_path` with the given DDL.
pub async fn create_catalog_with_schema(db_path: &Path, ddl: &str) -> SqlitePool {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await
    .expect("Failed to create test database");

    sqlx::query(ddl)
        .execute(&pool)
        .await
        .expect("Failed to create products table");

    pool
}

/// Creates a writable catalog database with the standard products table.
pub async fn create_catalog(db_path: &Path) -> SqlitePool {
    create_catalog_with_schema(db_path, PRODUCTS_DDL).await
}

/// Product fields that tests care about; everything else is left NULL.
#[derive(Debug, Clone, Default)]
pub struct TestProduct {
    pub id: i64,
    pub name: Option<&'static str>,
    pub brand: Option<&'static str>,
    pub fuel_type: Option<&'static str>,
    pub price_current: Option<f64>,
    pub price_formatted: Option<&'static str>,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub bullet_points: Option<&'static str>,
    pub is_free_shipping: Option<i64>,
}

impl TestProduct {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// Inserts a product row.
pub async fn insert_product(pool: &SqlitePool, product: &TestProduct) {
    sqlx::query(
        "INSERT INTO products (
            id, name, brand, fuel_type, price_current, price_formatted,
            rating, review_count, bullet_points, is_free_shipping, scraped_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, '2024-01-01T00:00:00')",
    )
    .bind(product.id)
    .bind(product.name)
    .bind(product.brand)
    .bind(product.fuel_type)
    .bind(product.price_current)
    .bind(product.price_formatted)
    .bind(product.rating)
    .bind(product.review_count)
    .bind(product.bullet_points)
    .bind(product.is_free_shipping)
    .execute(pool)
    .await
    .expect("Failed to insert product");
}

/// Reads and parses an export document.
#[allow(dead_code)] // Not every test file inspects the output
pub fn read_document(path: &Path) -> serde_json::Value {
    let bytes = std::fs::read(path).expect("Failed to read export document");
    serde_json::from_slice(&bytes).expect("Export document is not valid JSON")
}
