use crate::brightness::brightness;
use crate::color::{RESET, push_foreground};
use crate::config::AsciiConfig;
use crate::error::Result;
use crate::resample::{source_coord, target_dimensions};
use crate::source::SourceImage;
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

/// Upper bound on the bytes reserved before rendering starts; larger outputs
/// grow the buffer as rows are written
pub const MAX_RESERVE_BYTES: usize = 1 << 20;

/// Longest color escape, `"\x1b[38;2;255;255;255m"`, plus one glyph byte
const COLORED_CELL_BYTES: usize = 20;

/// Converts an image to ASCII art
///
/// Pipeline for every output cell:
/// 1. Resolve the output grid (explicit height or aspect-derived)
/// 2. Pick the nearest-neighbor source pixel
/// 3. Compute its 8-bit brightness
/// 4. Map brightness to a glyph (optionally inverted)
/// 5. Prefix the glyph with a true-color escape when `colored` is set
///
/// Every row ends with `\n`. A single reset escape follows the last row when
/// any color escape was written.
///
/// # Arguments
/// * `image` - The source image, only read
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// The ASCII art, or [`crate::Error::InvalidConfiguration`] if `config` does
/// not validate
pub fn convert<I>(image: &I, config: &AsciiConfig) -> Result<String>
where
    I: SourceImage + ?Sized,
{
    config.validate()?;
    Ok(render(image, config))
}

/// Grid walk behind [`convert`], for an already validated config
fn render<I>(image: &I, config: &AsciiConfig) -> String
where
    I: SourceImage + ?Sized,
{
    let (src_width, src_height) = image.dimensions();
    let (width, height) = target_dimensions(src_width, src_height, config.width, config.height);

    let mut out = String::with_capacity(reserve_hint(width, height, config.colored));

    for y in 0..height {
        let src_y = source_coord(y, src_height, height);

        for x in 0..width {
            let src_x = source_coord(x, src_width, width);
            let rgba = image.rgba16(src_x, src_y);

            if config.colored {
                push_foreground(&mut out, rgba);
            }
            out.push(config.charset.glyph_for(brightness(rgba), config.inverted));
        }
        out.push('\n');
    }

    if config.colored && width > 0 && height > 0 {
        out.push_str(RESET);
    }

    out
}

/// Bytes to reserve up front for a `width` x `height` grid
///
/// Saturates instead of overflowing and never exceeds [`MAX_RESERVE_BYTES`].
pub fn reserve_hint(width: u32, height: u32, colored: bool) -> usize {
    let cell_bytes = if colored { COLORED_CELL_BYTES } else { 1 };
    let rows = height as usize;

    (width as usize)
        .saturating_mul(rows)
        .saturating_mul(cell_bytes)
        .saturating_add(rows)
        .saturating_add(if colored { RESET.len() } else { 0 })
        .min(MAX_RESERVE_BYTES)
}

/// Converts an image and writes the result to `writer`
///
/// The text is rendered completely before the first byte is written.
pub fn write_ascii<I, W>(image: &I, config: &AsciiConfig, mut writer: W) -> Result<()>
where
    I: SourceImage + ?Sized,
    W: Write,
{
    let ascii = convert(image, config)?;
    writer.write_all(ascii.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Converts an image and saves the result to `path`
pub fn convert_to_file<I, P>(image: &I, config: &AsciiConfig, path: P) -> Result<()>
where
    I: SourceImage + ?Sized,
    P: AsRef<Path>,
{
    let ascii = convert(image, config)?;
    std::fs::write(path.as_ref(), ascii)?;
    log::info!("wrote ASCII art to {}", path.as_ref().display());
    Ok(())
}

/// Converts several images with the same configuration
///
/// Images are converted in parallel, each one independently. Outputs keep
/// the order of `images`.
pub fn convert_many<I>(images: &[I], config: &AsciiConfig) -> Result<Vec<String>>
where
    I: SourceImage + Sync,
{
    config.validate()?;
    log::debug!("converting {} images in parallel", images.len());

    Ok(images
        .par_iter()
        .map(|image| render(image, config))
        .collect())
}
