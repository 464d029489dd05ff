// In src/main.rs

use color_map::{config::CONFIG, generator, Printer};

// Logging
use anyhow::Context; // For context on Results
use log::{debug, info};
use std::io::Write;

/// Main entry point for the `color-map` application.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the color map.
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(CONFIG.logging.default_filter.as_str()),
    );
    if CONFIG.logging.timestamps {
        logger.format_timestamp_micros();
    } else {
        logger.format_timestamp(None);
    }
    logger.init();

    let ignored_args: Vec<String> = std::env::args().skip(1).collect();
    if !ignored_args.is_empty() {
        debug!("Ignoring command-line arguments: {:?}", ignored_args);
    }

    info!("Generating color map...");
    let pairs = generator::generate();

    let mut printer = Printer::stdout();
    let total = printer.print(&pairs).context("Failed to print color map")?;

    let mut out = printer.into_inner();
    writeln!(out, "Color map printed with total pairs: {}", total)
        .context("Failed to write summary line")?;
    out.flush().context("Failed to flush standard output")?;

    info!("color-map exited successfully.");
    Ok(())
}
