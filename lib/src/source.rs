//! Read-only pixel access for the conversion engine
//!
//! The engine works on the 16-bit channel scale (0..=65535). Sources with
//! 8-bit channels widen them by repeating the byte, so 255 becomes 65535.

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Rgba};
use std::ops::Deref;

/// An addressable grid of RGBA pixels
pub trait SourceImage {
    /// `(width, height)` in pixels
    fn dimensions(&self) -> (u32, u32);

    /// RGBA channels of the pixel at `(x, y)` on the 0..=65535 scale
    ///
    /// Callers must keep `x < width` and `y < height`.
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

/// Widen an 8-bit channel to 16 bits (`v * 257`)
#[inline]
pub fn widen(channel: u8) -> u16 {
    u16::from(channel) << 8 | u16::from(channel)
}

fn widen_all(pixel: [u8; 4]) -> [u16; 4] {
    pixel.map(widen)
}

impl<C> SourceImage for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        widen_all(self.get_pixel(x, y).0)
    }
}

impl<C> SourceImage for ImageBuffer<Rgba<u16>, C>
where
    C: Deref<Target = [u16]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        self.get_pixel(x, y).0
    }
}

impl SourceImage for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        // 16-bit variants keep their full precision, everything else goes
        // through the 8-bit view
        match self {
            DynamicImage::ImageRgba16(buf) => buf.get_pixel(x, y).0,
            DynamicImage::ImageRgb16(buf) => buf.get_pixel(x, y).to_rgba().0,
            DynamicImage::ImageLuma16(buf) => buf.get_pixel(x, y).to_rgba().0,
            DynamicImage::ImageLumaA16(buf) => buf.get_pixel(x, y).to_rgba().0,
            _ => widen_all(GenericImageView::get_pixel(self, x, y).0),
        }
    }
}
