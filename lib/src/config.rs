use crate::charset::Charset;
use crate::error::{Error, Result};

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiConfig {
    /// Output
    pub width: u32,              // character columns, default 80
    pub height: u32,             // character rows, 0 = derive from aspect ratio

    /// Glyphs
    pub charset: Charset,        // darkest first, default " .:-=+*#%@"

    /// Rendering
    pub colored: bool,           // true-color escape before every glyph, default false
    pub inverted: bool,          // flip brightness before indexing, default false
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            // Output
            width: 80,
            height: 0,

            // Glyphs
            charset: Charset::default(),

            // Rendering
            colored: false,
            inverted: false,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    ///
    /// The charset needs no check here, [`Charset::new`] refuses empty ramps.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidConfiguration(
                "width must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-request overrides, each field replacing exactly one field of a base
/// [`AsciiConfig`] when set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub charset: Option<Charset>,
    pub colored: Option<bool>,
    pub inverted: Option<bool>,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = Some(colored);
        self
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = Some(inverted);
        self
    }

    /// Overlay these options on `base`; unset options keep the base value
    pub fn apply_to(&self, base: &AsciiConfig) -> AsciiConfig {
        AsciiConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            charset: self.charset.clone().unwrap_or_else(|| base.charset.clone()),
            colored: self.colored.unwrap_or(base.colored),
            inverted: self.inverted.unwrap_or(base.inverted),
        }
    }
}
