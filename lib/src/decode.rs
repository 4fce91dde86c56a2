//! Image decoding with format sniffing
//!
//! Each supported format is one [`Format`] variant. The variant is picked
//! from the leading magic bytes, never from a file name.

use std::fmt;
use std::io::Read;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Png, Format::Jpeg, Format::Gif, Format::Bmp];

    /// Identify the format of `bytes` from its signature
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            ImageFormat::Png => Some(Format::Png),
            ImageFormat::Jpeg => Some(Format::Jpeg),
            ImageFormat::Gif => Some(Format::Gif),
            ImageFormat::Bmp => Some(Format::Bmp),
            _ => None,
        }
    }

    /// Decode `bytes` as this format
    ///
    /// Animated GIFs yield their first frame.
    pub fn decode(self, bytes: &[u8]) -> Result<DynamicImage> {
        Ok(image::load_from_memory_with_format(bytes, self.image_format())?)
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpeg",
            Format::Gif => "gif",
            Format::Bmp => "bmp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Format::Png => ImageFormat::Png,
            Format::Jpeg => ImageFormat::Jpeg,
            Format::Gif => ImageFormat::Gif,
            Format::Bmp => ImageFormat::Bmp,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sniff and decode an in-memory image
///
/// # Errors
/// [`Error::UnsupportedFormat`] when no supported signature matches,
/// [`Error::Decode`] when the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    let format = Format::sniff(bytes).ok_or(Error::UnsupportedFormat)?;
    log::debug!("decoding {} bytes as {format}", bytes.len());
    format.decode(bytes)
}

/// Read a stream to its end, then [`decode`] it
pub fn decode_reader<R: Read>(mut reader: R) -> Result<DynamicImage> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    /// Encode a solid image in the given format
    pub(crate) fn encoded(width: u32, height: u32, pixel: Rgba<u8>, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, pixel));
        let img = if format == ImageFormat::Jpeg {
            // JPEG has no alpha channel
            DynamicImage::ImageRgb8(img.to_rgb8())
        } else {
            img
        };
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_sniff_each_format() {
        let pixel = Rgba([10, 20, 30, 255]);
        for format in Format::ALL {
            let bytes = encoded(4, 4, pixel, format.image_format());
            assert_eq!(Format::sniff(&bytes), Some(format));
        }
    }

    #[test]
    fn test_decode_png() {
        let bytes = encoded(5, 3, Rgba([255, 255, 255, 255]), ImageFormat::Png);
        let img = decode(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (5, 3));
    }

    #[test]
    fn test_decode_reader() {
        let bytes = encoded(2, 7, Rgba([0, 0, 0, 255]), ImageFormat::Bmp);
        let img = decode_reader(Cursor::new(bytes)).unwrap();
        assert_eq!((img.width(), img.height()), (2, 7));
    }

    #[test]
    fn test_unknown_bytes_unsupported() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat));
        assert!(err.is_decode());
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let bytes = encoded(16, 16, Rgba([1, 2, 3, 255]), ImageFormat::Png);
        let err = decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
