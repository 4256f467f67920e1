//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Carousel needs at least one slide")]
    EmptyCarousel,

    #[error("Slide {index} is out of range (carousel has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
