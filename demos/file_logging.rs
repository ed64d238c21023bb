//! File logging example
//!
//! Console gets everything from INFO up in color; the file only gets
//! warnings and above, without escape sequences.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;
use leveled_logger::{error, info, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("leveled_logger_example.log");

    let logger = Logger::builder()
        .min_level(LogLevel::INFO)
        .handler(StreamHandler::stdout().with_formatter(Formatter::default()))
        .handler(
            FileHandler::new(&log_path)?
                .with_level(LogLevel::WARNING)
                .with_formatter(Formatter::plain()),
        )
        .filter(|record: &Record| !record.message().contains("password"))
        .on_error(Arc::new(|handler, err| {
            eprintln!("[LOGGER ERROR] {} failed: {}", handler, err);
        }))
        .build();

    info!(logger, "Application started");
    warning!(logger, "Configuration file not found, using defaults");
    error!(logger, "Failed to reach {}", "db.internal:5432");
    info!(logger, "user password=hunter2");

    println!("\nWrote warnings and errors to {}", log_path.display());
    println!("Records built: {}", logger.metrics().records_built());
    println!("Suppressed by filter: {}", logger.metrics().records_suppressed());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
