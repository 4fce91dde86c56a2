use std::path::{Path, PathBuf};

use asciify::{Charset, ConvertOptions, DEFAULT_CHARSET};
use clap::Parser;

/// asciify - Convert images to ASCII art.
#[derive(Parser, Debug)]
#[command(name = "asciify", version, about, long_about = None)]
pub struct Cli {
    /// Input image(s): PNG, JPEG, GIF or BMP.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Width of the ASCII art output, in characters.
    #[arg(short, long, default_value_t = 80, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of the ASCII art output (0 for auto).
    #[arg(short = 'H', long, default_value_t = 0)]
    pub height: u32,

    /// Characters to use, darkest brightness first.
    #[arg(short, long, default_value = DEFAULT_CHARSET)]
    pub charset: Charset,

    /// Output file. With several inputs, a directory receiving one `<name>.txt` per input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable colored output (24-bit ANSI escapes).
    #[arg(long, default_value_t = false)]
    pub color: bool,

    /// Invert brightness.
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Conversion options carried by the flags
    pub fn options(&self) -> ConvertOptions {
        let options = ConvertOptions::new()
            .width(self.width)
            .charset(self.charset.clone())
            .colored(self.color)
            .inverted(self.invert);

        if self.height > 0 {
            options.height(self.height)
        } else {
            options
        }
    }
}

/// `<dir>/<input stem>.txt`
pub fn output_path_for(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    dir.join(format!("{stem}.txt"))
}
