//! Error types shared by the math, decode and config modules.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A caller passed arguments the operation cannot work with
    /// (wrong array length, inverted clamp bounds, zero-length vector).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The PPM payload does not have the expected header/body layout.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[cfg(feature = "im-io")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
