//! Driver error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Child process has no piped stdin")]
    StdinUnavailable,

    #[error("Failed to send line {line_no} ({line:?}) to child: {source}")]
    Write {
        line_no: usize,
        line: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to echo to terminal: {0}")]
    Echo(#[source] io::Error),

    #[error("Failed to wait for child exit: {0}")]
    Wait(#[source] io::Error),

    #[error("Failed to read script {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Script line {line_no} contains a line break")]
    InvalidLine { line_no: usize },
}
