mod cli;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use asciify::{ConvertOptions, Converter, DynamicImage};
use clap::Parser;
use rayon::prelude::*;

use cli::{Cli, output_path_for};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .parse_default_env()
        .init();

    let outputs = run(&cli)?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    for text in outputs {
        stdout.write_all(text.as_bytes())?;
    }
    stdout.flush()?;

    Ok(())
}

/// Convert every input and write files where requested
///
/// # Returns
/// The text destined for standard output, in input order
fn run(cli: &Cli) -> Result<Vec<String>> {
    let converter = Converter::new();
    let options = cli.options();

    // Fail on bad options before touching any input
    converter.resolve(&options)?;

    let converted = convert_all(&converter, &cli.inputs, &options)?;

    match (&cli.output, cli.inputs.len()) {
        (Some(path), 1) => {
            std::fs::write(path, &converted[0].1)
                .with_context(|| format!("Error writing output file {}", path.display()))?;
            log::info!("wrote {}", path.display());
            Ok(Vec::new())
        }
        (Some(dir), _) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Error creating output directory {}", dir.display()))?;
            for (input, text) in &converted {
                let path = output_path_for(dir, input);
                std::fs::write(&path, text)
                    .with_context(|| format!("Error writing output file {}", path.display()))?;
                log::info!("wrote {}", path.display());
            }
            Ok(Vec::new())
        }
        (None, 1) => Ok(converted.into_iter().map(|(_, text)| text).collect()),
        (None, _) => Ok(converted
            .into_iter()
            .map(|(input, text)| format!("==> {} <==\n{text}", input.display()))
            .collect()),
    }
}

/// Read and decode each input in parallel, then convert them as one batch
///
/// The first failure aborts the whole run so no partial output is produced.
fn convert_all(
    converter: &Converter,
    inputs: &[PathBuf],
    options: &ConvertOptions,
) -> Result<Vec<(PathBuf, String)>> {
    let images = inputs
        .par_iter()
        .map(|input| -> Result<DynamicImage> {
            let bytes = std::fs::read(input)
                .with_context(|| format!("Error opening input file {}", input.display()))?;
            let image = asciify::decode(&bytes)
                .with_context(|| format!("Error decoding image {}", input.display()))?;
            log::debug!("decoded {}", input.display());
            Ok(image)
        })
        .collect::<Result<Vec<_>>>()?;

    let texts = converter
        .convert_many(&images, options)
        .context("Error converting images")?;

    Ok(inputs.iter().cloned().zip(texts).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn write_png(dir: &Path, name: &str, pixel: Rgba<u8>) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(2, 2, pixel).save(&path).unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("asciify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_single_input_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let white = write_png(dir.path(), "white.png", Rgba([255, 255, 255, 255]));

        let cli = parse(&["-w", "2", "-H", "1", "-c", " #", white.to_str().unwrap()]);
        assert_eq!(run(&cli).unwrap(), vec!["##\n".to_string()]);
    }

    #[test]
    fn test_single_input_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let white = write_png(dir.path(), "white.png", Rgba([255, 255, 255, 255]));
        let out = dir.path().join("art.txt");

        let cli = parse(&[
            "-w", "2", "-H", "1", "-c", " #", "-o", out.to_str().unwrap(), white.to_str().unwrap(),
        ]);
        assert!(run(&cli).unwrap().is_empty());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "##\n");
    }

    #[test]
    fn test_many_inputs_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let white = write_png(dir.path(), "white.png", Rgba([255, 255, 255, 255]));
        let black = write_png(dir.path(), "black.png", Rgba([0, 0, 0, 255]));

        let cli = parse(&[
            "-w", "2", "-H", "1", "-c", " #", white.to_str().unwrap(), black.to_str().unwrap(),
        ]);
        let outputs = run(&cli).unwrap();
        assert_eq!(outputs.len(), 2);
        assert!(outputs[0].ends_with("white.png <==\n##\n"));
        assert!(outputs[1].ends_with("black.png <==\n  \n"));
    }

    #[test]
    fn test_many_inputs_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let white = write_png(dir.path(), "white.png", Rgba([255, 255, 255, 255]));
        let black = write_png(dir.path(), "black.png", Rgba([0, 0, 0, 255]));
        let out = dir.path().join("art");

        let cli = parse(&[
            "-w", "2", "-H", "1", "-c", " #", "--invert", "-o", out.to_str().unwrap(),
            white.to_str().unwrap(), black.to_str().unwrap(),
        ]);
        run(&cli).unwrap();
        assert_eq!(std::fs::read_to_string(out.join("white.txt")).unwrap(), "  \n");
        assert_eq!(std::fs::read_to_string(out.join("black.txt")).unwrap(), "##\n");
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        let cli = parse(&[missing.to_str().unwrap()]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Error opening input file"));
    }

    #[test]
    fn test_undecodable_input_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.png");
        std::fs::write(&bogus, b"not an image").unwrap();
        let out = dir.path().join("art.txt");

        let cli = parse(&["-o", out.to_str().unwrap(), bogus.to_str().unwrap()]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Error decoding image"));
        assert!(!out.exists());
    }
}
