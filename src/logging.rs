//! File logging
//!
//! The terminal UI owns stdout and stderr, so log records go to a file when
//! one is requested and are dropped otherwise.

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{File, OpenOptions};
use std::path::Path;

fn open(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global logger, appending to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a logger is already set.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = open(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).context("installing logger")?;
    Ok(())
}
