//! asciify - image to ASCII art converter
//!
//! Samples a source image on a downscaled grid with nearest-neighbor
//! lookups, turns each sample's brightness into a glyph from a configurable
//! gradient and optionally prefixes every glyph with a 24-bit ANSI color.
//!
//! # Example
//! ```no_run
//! use asciify::{AsciiConfig, convert, decode};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode(&bytes).unwrap();
//! let config = AsciiConfig::default();
//! print!("{}", convert(&image, &config).unwrap());
//! ```

pub mod brightness;
pub mod charset;
pub mod color;
pub mod config;
pub mod converter;
pub mod decode;
pub mod error;
pub mod processor;
pub mod resample;
pub mod source;

// Re-export main types for convenience
pub use charset::{Charset, DEFAULT_CHARSET, LIGHT_BACKGROUND_CHARSET};
pub use config::{AsciiConfig, ConvertOptions};
pub use converter::Converter;
pub use decode::{Format, decode, decode_reader};
pub use error::{Error, Result};
pub use processor::{convert, convert_many, convert_to_file, write_ascii};
pub use source::SourceImage;

pub use image::DynamicImage;
