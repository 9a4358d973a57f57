use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JPEG quality: {quality}. Must be between 1 and 100")]
    InvalidQuality { quality: u8 },

    #[error(transparent)]
    Augzip(#[from] augzip::Error),
}
