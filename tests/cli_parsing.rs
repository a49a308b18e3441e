//! Tests for command-line parsing of the exporter configuration.

use catalog_export::config::{LogFormat, LogLevel};
use catalog_export::Config;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_no_arguments_uses_default_paths() {
    // Env fallbacks would shadow the defaults; this test runs without them
    if std::env::var_os("CATALOG_DB_PATH").is_some()
        || std::env::var_os("CATALOG_OUTPUT_PATH").is_some()
    {
        return;
    }

    let config = Config::try_parse_from(["catalog_export"]).expect("Should parse without args");
    assert_eq!(config.db_path, PathBuf::from("./catalog.db"));
    assert_eq!(config.output, PathBuf::from("./data/products.json"));
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_paths_can_be_overridden() {
    let config = Config::try_parse_from([
        "catalog_export",
        "--db-path",
        "/srv/scraper/catalog.db",
        "--output",
        "/srv/site/data/products.json",
    ])
    .expect("Should parse path flags");
    assert_eq!(config.db_path, PathBuf::from("/srv/scraper/catalog.db"));
    assert_eq!(config.output, PathBuf::from("/srv/site/data/products.json"));

    let opts = config.export_options();
    assert_eq!(opts.db_path, config.db_path);
    assert_eq!(opts.output, config.output);
}

#[test]
fn test_log_options() {
    let config = Config::try_parse_from([
        "catalog_export",
        "--log-level",
        "trace",
        "--log-format",
        "json",
    ])
    .expect("Should parse log flags");
    assert!(matches!(config.log_level, LogLevel::Trace));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_invalid_log_format_rejected() {
    let result = Config::try_parse_from(["catalog_export", "--log-format", "xml"]);
    assert!(result.is_err(), "Unknown log format should be rejected");
}

#[test]
fn test_positional_arguments_rejected() {
    let result = Config::try_parse_from(["catalog_export", "catalog.db"]);
    assert!(result.is_err(), "The exporter takes no positional arguments");
}
