//! Basic logger usage example
//!
//! Demonstrates the default console logger and level gating.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{critical, debug, error, info, log, warning};

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    // DEBUG, one colored stdout handler
    let mut logger = Logger::with_default_config();

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    critical!(logger, "This is a critical message");

    println!("\n2. A custom level between INFO and WARNING:");
    let notice = LogLevel::new(25);
    log!(logger, notice, "Shown with its rank as the level name");

    println!("\n3. Raising the minimum level:");
    logger.set_min_level(LogLevel::WARNING);
    println!("   Minimum level set to WARNING - debug and info won't show:");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (hidden)");
    warning!(logger, "Warning message (visible)");

    println!("\n4. A custom template on stderr:");
    let custom = Logger::builder()
        .handler(
            StreamHandler::stderr()
                .with_formatter(Formatter::new("{color}{level:<8}{color_clear} {message}", "%H:%M")?),
        )
        .build();
    info!(custom, "{} requests served", 1024);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
