//! Error type for the form runtime.
//!
//! Only the terminal runtime can fail. Key sequences, empty values and
//! repeated confirms are state transitions, never errors.

use std::io;

use thiserror::Error;

/// Unrecoverable failure while starting or driving the terminal.
#[derive(Error, Debug)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("input reader stopped: {0}")]
    Input(String),

    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;
