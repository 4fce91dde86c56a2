//! Decode-and-convert facade used by the command-line and HTTP frontends

use std::io::Read;
use std::path::Path;

use crate::config::{AsciiConfig, ConvertOptions};
use crate::decode::{decode, decode_reader};
use crate::error::{Error, Result};
use crate::processor;
use crate::resample::target_dimensions;
use crate::source::SourceImage;

/// Holds the default configuration that per-call [`ConvertOptions`] are
/// overlaid on, plus an optional cap on the output grid
#[derive(Debug, Clone, Default)]
pub struct Converter {
    defaults: AsciiConfig,
    max_dimension: Option<u32>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: AsciiConfig) -> Self {
        Self {
            defaults,
            max_dimension: None,
        }
    }

    /// Refuse any output grid wider or taller than `max` cells
    ///
    /// Unbounded by default. Frontends taking dimensions from untrusted
    /// input should set this.
    pub fn with_max_dimension(mut self, max: u32) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn defaults(&self) -> &AsciiConfig {
        &self.defaults
    }

    pub fn max_dimension(&self) -> Option<u32> {
        self.max_dimension
    }

    /// Merge `options` over the defaults and validate the result
    ///
    /// An explicit width or height above the dimension cap is rejected here.
    /// A derived height can only be checked once the image is known.
    pub fn resolve(&self, options: &ConvertOptions) -> Result<AsciiConfig> {
        let config = options.apply_to(&self.defaults);
        config.validate()?;
        self.check_dimension("width", config.width)?;
        self.check_dimension("height", config.height)?;
        Ok(config)
    }

    /// Convert an already decoded image
    pub fn convert_image<I>(&self, image: &I, options: &ConvertOptions) -> Result<String>
    where
        I: SourceImage + ?Sized,
    {
        let config = self.resolve(options)?;
        self.render(image, &config)
    }

    /// Decode `bytes` and convert the image
    ///
    /// The options are validated before any decoding happens.
    pub fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<String> {
        let config = self.resolve(options)?;
        let image = decode(bytes)?;
        self.render(&image, &config)
    }

    /// Read `input` to its end, decode it and convert the image
    pub fn convert_reader<R: Read>(&self, input: R, options: &ConvertOptions) -> Result<String> {
        let config = self.resolve(options)?;
        let image = decode_reader(input)?;
        self.render(&image, &config)
    }

    /// Like [`Converter::convert_reader`], saving the text to `path`
    ///
    /// Nothing is written when decoding or conversion fails.
    pub fn convert_to_file<R, P>(&self, input: R, path: P, options: &ConvertOptions) -> Result<()>
    where
        R: Read,
        P: AsRef<Path>,
    {
        let config = self.resolve(options)?;
        let image = decode_reader(input)?;
        self.check_grid(&image, &config)?;
        processor::convert_to_file(&image, &config, path)
    }

    /// Convert several decoded images with the same options, in parallel
    ///
    /// Results keep the input order. Every image is checked against the
    /// dimension cap before any rendering starts.
    pub fn convert_many<I>(&self, images: &[I], options: &ConvertOptions) -> Result<Vec<String>>
    where
        I: SourceImage + Sync,
    {
        let config = self.resolve(options)?;
        for image in images {
            self.check_grid(image, &config)?;
        }
        processor::convert_many(images, &config)
    }

    fn render<I>(&self, image: &I, config: &AsciiConfig) -> Result<String>
    where
        I: SourceImage + ?Sized,
    {
        let (src_width, src_height) = self.check_grid(image, config)?;
        log::debug!(
            "converting {src_width}x{src_height} image to width {} (height {})",
            config.width,
            config.height
        );
        processor::convert(image, config)
    }

    /// Check the grid `config` produces for `image` against the cap
    ///
    /// Returns the source dimensions.
    fn check_grid<I>(&self, image: &I, config: &AsciiConfig) -> Result<(u32, u32)>
    where
        I: SourceImage + ?Sized,
    {
        let (src_width, src_height) = image.dimensions();
        let (_, rows) = target_dimensions(src_width, src_height, config.width, config.height);
        self.check_dimension("height", rows)?;
        Ok((src_width, src_height))
    }

    fn check_dimension(&self, name: &str, value: u32) -> Result<()> {
        match self.max_dimension {
            Some(max) if value > max => Err(Error::InvalidConfiguration(format!(
                "{name} {value} exceeds the maximum of {max}"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::decode::tests::encoded;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn white_png() -> Vec<u8> {
        encoded(2, 2, Rgba([255, 255, 255, 255]), ImageFormat::Png)
    }

    fn two_by_one() -> ConvertOptions {
        ConvertOptions::new()
            .width(2)
            .height(1)
            .charset(Charset::new(" #").unwrap())
    }

    #[test]
    fn test_convert_bytes() {
        let out = Converter::new().convert_bytes(&white_png(), &two_by_one()).unwrap();
        assert_eq!(out, "##\n");
    }

    #[test]
    fn test_defaults_apply_when_options_unset() {
        let converter = Converter::with_defaults(AsciiConfig {
            width: 3,
            height: 2,
            ..Default::default()
        });
        let out = converter.convert_bytes(&white_png(), &ConvertOptions::new()).unwrap();
        assert_eq!(out, "@@@\n@@@\n");
    }

    #[test]
    fn test_invalid_options_rejected_before_decode() {
        let err = Converter::new()
            .convert_bytes(b"garbage", &ConvertOptions::new().width(0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_decode_error_surfaces() {
        let err = Converter::new()
            .convert_reader(Cursor::new(b"GIF89a but not really".to_vec()), &ConvertOptions::new())
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_convert_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        Converter::new()
            .convert_to_file(Cursor::new(white_png()), &path, &two_by_one())
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "##\n");
    }

    #[test]
    fn test_failed_decode_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let result = Converter::new().convert_to_file(
            Cursor::new(b"nope".to_vec()),
            &path,
            &ConvertOptions::new(),
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_max_dimension_rejects_wide_request() {
        let converter = Converter::new().with_max_dimension(100);
        let err = converter
            .convert_bytes(&white_png(), &ConvertOptions::new().width(200_000))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = converter
            .resolve(&ConvertOptions::new().width(10).height(u32::MAX))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_max_dimension_checks_derived_height() {
        // 1x1000 source at width 100 derives 100 * 1000 * 0.5 = 50000 rows
        let tall = RgbaImage::from_pixel(1, 1000, Rgba([0, 0, 0, 255]));
        let converter = Converter::new().with_max_dimension(100);

        let err = converter
            .convert_image(&tall, &ConvertOptions::new().width(100))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        // 1x2 source at width 100 derives exactly 100 rows
        let ok = RgbaImage::from_pixel(1, 2, Rgba([0, 0, 0, 255]));
        let out = converter
            .convert_image(&ok, &ConvertOptions::new().width(100))
            .unwrap();
        assert_eq!(out.lines().count(), 100);
    }

    #[test]
    fn test_max_dimension_allows_limit() {
        let converter = Converter::new().with_max_dimension(2);
        let out = converter.convert_bytes(&white_png(), &two_by_one()).unwrap();
        assert_eq!(out, "##\n");
        assert_eq!(Converter::new().max_dimension(), None);
    }

    #[test]
    fn test_convert_many_keeps_order() {
        let images = vec![
            RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255])),
            RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])),
        ];
        let out = Converter::new().convert_many(&images, &two_by_one()).unwrap();
        assert_eq!(out, vec!["##\n".to_string(), "  \n".to_string()]);
    }

    #[test]
    fn test_convert_many_checks_every_image() {
        let images = vec![
            RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255])),
            RgbaImage::from_pixel(1, 1000, Rgba([255, 255, 255, 255])),
        ];
        let err = Converter::new()
            .with_max_dimension(50)
            .convert_many(&images, &ConvertOptions::new().width(50))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_convert_to_file_respects_max_dimension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let result = Converter::new().with_max_dimension(1).convert_to_file(
            Cursor::new(white_png()),
            &path,
            &two_by_one(),
        );
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
        assert!(!path.exists());
    }
}
