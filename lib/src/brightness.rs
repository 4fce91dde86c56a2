/// Calculate the 8-bit brightness of a 16-bit RGBA pixel
///
/// Formula: ((r + g + b) / 3) / 256, truncating at each step.
/// Alpha is ignored. A pixel with all channels at 65535 maps to 255.
///
/// # Arguments
/// * `rgba` - Pixel channels on the 0..=65535 scale
///
/// # Returns
/// Brightness in `0..=255`
#[inline]
pub fn brightness(rgba: [u16; 4]) -> u8 {
    let [r, g, b, _] = rgba;
    let sum = u32::from(r) + u32::from(g) + u32::from(b);

    // sum / 3 <= 65535, so the shifted value always fits
    (sum / 3 / 256) as u8
}

/// Downscale one 16-bit channel to 8 bits by truncating division
#[inline]
pub fn channel_to_8bit(channel: u16) -> u8 {
    (channel / 256) as u8
}
