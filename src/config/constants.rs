//! Configuration constants.
//!
//! Default locations of the source store and the export document. Both can be
//! overridden on the command line or through the environment.

/// Default path of the SQLite catalog database.
pub const DB_PATH: &str = "./catalog.db";

/// Default path of the generated JSON document.
pub const OUTPUT_PATH: &str = "./data/products.json";

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "CATALOG_DB_PATH";

/// Environment variable overriding the output path.
pub const OUTPUT_PATH_ENV: &str = "CATALOG_OUTPUT_PATH";

/// Name of the table the catalog is read from.
pub const PRODUCTS_TABLE: &str = "products";
