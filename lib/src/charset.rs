//! Brightness-to-glyph gradients
//!
//! A charset is an ordered ramp: index 0 is used for the darkest sampled
//! brightness and the last index for the brightest. The ramp is never
//! reordered here, so its direction is entirely up to the caller.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default ramp, space for dark pixels and `@` for bright ones
///
/// Reads well on dark terminal backgrounds.
pub const DEFAULT_CHARSET: &str = " .:-=+*#%@";

/// The default ramp reversed, for light backgrounds
pub const LIGHT_BACKGROUND_CHARSET: &str = "@%#*+=-:. ";

/// Largest value on the 8-bit brightness scale
pub const MAX_BRIGHTNESS: u8 = 255;

/// A non-empty ordered sequence of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    glyphs: Vec<char>,
}

impl Charset {
    /// Build a charset from a string, one glyph per `char`
    ///
    /// Fails with [`Error::InvalidConfiguration`] for an empty string.
    pub fn new(ramp: &str) -> Result<Self> {
        let glyphs: Vec<char> = ramp.chars().collect();
        if glyphs.is_empty() {
            return Err(Error::InvalidConfiguration(
                "charset must contain at least one character".to_string(),
            ));
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a charset built through [`Charset::new`]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Get the glyph for an 8-bit brightness value
    ///
    /// # Arguments
    /// * `brightness` - Brightness in `0..=255`
    /// * `invert` - Whether to flip the brightness before indexing
    ///
    /// # Returns
    /// `charset[floor(brightness * (len - 1) / 255)]`
    pub fn glyph_for(&self, brightness: u8, invert: bool) -> char {
        let brightness = if invert {
            MAX_BRIGHTNESS - brightness
        } else {
            brightness
        };

        // Non-empty by construction, and brightness <= 255 keeps index <= last
        let last = self.glyphs.len() - 1;
        let index = usize::from(brightness) * last / usize::from(MAX_BRIGHTNESS);

        self.glyphs[index]
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
