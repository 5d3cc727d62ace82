//! Error types for blockbuf.
//!
//! Buffer operations themselves never fail: every sized operation reports the
//! number of bytes it actually moved. Errors only surface from configuration
//! validation and from the I/O adapters that talk to readers and writers.

use std::fmt;

/// Errors returned by configuration checks and I/O adapters.
#[derive(Debug)]
pub enum BufferError {
    /// An I/O error occurred while filling from a reader or draining to a writer.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Io(e) => write!(f, "io error: {}", e),
            BufferError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BufferError {
    fn from(e: std::io::Error) -> Self {
        BufferError::Io(e)
    }
}
