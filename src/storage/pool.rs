//! Source database connection.
//!
//! The catalog is only ever read, so the connection is opened with
//! `SQLITE_OPEN_READONLY` and never creates the file. A single connection is
//! enough for the one query an export runs.

use std::path::Path;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::error_handling::ExportError;

/// Connection pool type used by the exporter.
pub type DbPool = Pool<Sqlite>;

/// Opens the catalog database at `db_path` in read-only mode.
///
/// The database is checked with a cheap pragma before returning, so a path
/// that exists but is not a SQLite database is reported here rather than as
/// a query failure later.
///
/// # Errors
///
/// Returns `ExportError::SourceUnavailable` if the file does not exist, cannot
/// be opened, or is not a database.
pub async fn open_source_read_only(db_path: &Path) -> Result<DbPool, ExportError> {
    let unavailable = |reason: String| ExportError::SourceUnavailable {
        path: db_path.to_path_buf(),
        reason,
    };

    if !db_path.is_file() {
        error!("Source database not found: {}", db_path.display());
        return Err(unavailable("file does not exist".to_string()));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to open source database: {e}");
            unavailable(e.to_string())
        })?;

    if let Err(e) = sqlx::query_scalar::<_, i64>("PRAGMA schema_version")
        .fetch_one(&pool)
        .await
    {
        error!("Source is not a readable SQLite database: {e}");
        pool.close().await;
        return Err(unavailable(e.to_string()));
    }

    info!("Opened source database {} (read-only)", db_path.display());
    Ok(pool)
}
