//! Logger setup for the command line front ends.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use crate::error::{Error, Result};

fn config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build()
}

fn term(level: LevelFilter) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config(), TerminalMode::Mixed, ColorChoice::Auto)
}

fn install(loggers: Vec<Box<dyn SharedLogger>>) -> Result<()> {
    CombinedLogger::init(loggers)
        .map_err(|e| Error::invalid_configuration(format!("logger: {}", e)))
}

/// Log INFO to the terminal and DEBUG to `file`.
///
/// The parent directory of `file` must exist.
pub fn init(file: &Path) -> Result<()> {
    let sink = File::create(file).map_err(|source| Error::Io {
        operation: format!("create {}", file.display()),
        source,
    })?;
    install(vec![
        term(LevelFilter::Info),
        WriteLogger::new(LevelFilter::Debug, config(), sink),
    ])
}

/// Log to the terminal only.
pub fn init_terminal(level: LevelFilter) -> Result<()> {
    install(vec![term(level)])
}
