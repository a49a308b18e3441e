//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DB_PATH, DB_PATH_ENV, OUTPUT_PATH, OUTPUT_PATH_ENV};
use crate::export::ExportOptions;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exporter configuration.
///
/// Parsed from the command line by `clap`, but can also be constructed
/// programmatically. Every option has a default, so the binary runs with no
/// arguments at all.
///
/// # Examples
///
/// ```bash
/// # Defaults: ./catalog.db -> ./data/products.json
/// catalog_export
///
/// # Explicit locations
/// catalog_export --db-path ../scraper/catalog.db --output site/data/products.json
///
/// # Through the environment (or a .env file)
/// CATALOG_DB_PATH=/srv/catalog.db catalog_export
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog_export",
    about = "Exports the product catalog database to a static JSON document."
)]
pub struct Config {
    /// Database path (SQLite file)
    #[arg(long, value_parser, env = DB_PATH_ENV, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Output path of the JSON document (parent directories are created)
    #[arg(long, value_parser, env = OUTPUT_PATH_ENV, default_value = OUTPUT_PATH)]
    pub output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Export options derived from this configuration.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            db_path: self.db_path.clone(),
            output: self.output.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
