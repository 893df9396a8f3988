//! Error types for the front-end and configuration loading.
//!
//! The simulation itself never fails: out-of-range health, falls and cleared
//! levels are all handled as state transitions.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Terminal or other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be read.
    #[error("Failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("Parse error in config '{}': {details}", path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// Config parsed but describes an unplayable world.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Log file could not be created.
    #[error("Failed to open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
