//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `catalog_export` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use catalog_export::app::format_summary;
use catalog_export::initialization::init_logger_with;
use catalog_export::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Paths may come from CATALOG_DB_PATH / CATALOG_OUTPUT_PATH in a .env file,
    // either in the current directory or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(&config).await {
        Ok(summary) => {
            println!("{}", format_summary(&summary));
            Ok(())
        }
        Err(e) => {
            eprintln!("catalog_export error: {}: {}", e.stage(), e);
            process::exit(1);
        }
    }
}
