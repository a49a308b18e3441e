//! Error type definitions.
//!
//! This module defines the fatal export errors and the non-fatal per-record
//! warning types used throughout the exporter.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal errors that abort an export.
///
/// None of these modify the destination: the document is built in memory
/// before anything is written, and the write itself goes through a temporary
/// file that is only renamed into place on success.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The source database is missing or cannot be opened.
    #[error("Source database unavailable at {}: {reason}", .path.display())]
    SourceUnavailable {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// The product query failed, or a column could not be decoded.
    #[error("Product query failed: {0}")]
    QueryFailure(#[from] sqlx::Error),

    /// The document could not be serialized.
    #[error("Failed to serialize export document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The destination directory or file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        /// Destination that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Name of the export stage that failed, for user-facing diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            ExportError::SourceUnavailable { .. } => "open source",
            ExportError::QueryFailure(_) => "query",
            ExportError::Serialization(_) => "serialize",
            ExportError::WriteFailure { .. } => "write",
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

/// Non-fatal problems found while normalizing a single record.
///
/// The record is still exported, with the affected field replaced by its
/// default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// `bullet_points` held text that is not valid JSON
    InvalidBulletPointsJson,
    /// `bullet_points` held valid JSON that is not an array
    NonArrayBulletPoints,
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::InvalidBulletPointsJson => "Invalid bullet_points JSON",
            WarningType::NonArrayBulletPoints => "Non-array bullet_points JSON",
        }
    }
}
