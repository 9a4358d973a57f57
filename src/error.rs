//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode, archive, and config errors, and provides semantic
//! variants for frame validation, encoding, and upload filtering failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid frame: {width}x{height}x3 needs {expected} bytes, got {actual}")]
    InvalidFrame {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Failed to encode frame {index} as JPEG: {reason}")]
    Encode { index: usize, reason: String },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Upload not allowed: {filename}")]
    UploadNotAllowed { filename: String },

    #[error("Invalid parameter: {field}={value} ({expected})")]
    InvalidParams {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
