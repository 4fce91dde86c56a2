use thiserror::Error;

/// Errors produced while turning image bytes into ASCII art
#[derive(Error, Debug)]
pub enum Error {
    /// The image bytes were recognised but could not be decoded
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The bytes do not start with the signature of a supported format
    #[error("unsupported image format")]
    UnsupportedFormat,

    /// Zero width, empty charset and similar
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reading the input or persisting the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures that come from the image decoder rather than from
    /// the configuration or the output sink.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::UnsupportedFormat)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
