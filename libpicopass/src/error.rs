// libpicopass/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("buffer overflow: capacity {capacity} bytes, requested {requested}")]
    BufferOverflow { capacity: usize, requested: usize },

    #[error("frame send failed: {0}")]
    SendFailed(String),

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("physical layer not configured")]
    NotConfigured,
}

pub type Result<T> = std::result::Result<T, Error>;
