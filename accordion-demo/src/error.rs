use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Failed to open log file '{}': {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("No cache directory available for the log file, pass --log-file")]
    NoLogDir,

    #[error("Invalid demo items: {0}")]
    Config(#[from] accordion::ConfigError),
}
