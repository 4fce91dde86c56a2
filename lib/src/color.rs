//! ANSI true-color annotation

use std::fmt::Write;

use crate::brightness::channel_to_8bit;

/// Escape that restores the terminal's default attributes
pub const RESET: &str = "\x1b[0m";

/// Prefix shared by every foreground escape
pub const FOREGROUND_PREFIX: &str = "\x1b[38;2;";

/// Append a 24-bit foreground escape for a 16-bit RGBA pixel
///
/// Each channel is downscaled to 8 bits by truncating division, alpha is
/// ignored: `ESC[38;2;{r};{g};{b}m`
pub fn push_foreground(out: &mut String, rgba: [u16; 4]) {
    let [r, g, b, _] = rgba.map(channel_to_8bit);
    // Writing into a String cannot fail
    let _ = write!(out, "{FOREGROUND_PREFIX}{r};{g};{b}m");
}
