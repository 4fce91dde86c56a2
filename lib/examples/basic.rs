/// Basic example: Convert a simple test image to ASCII art
///
/// This draws a few shapes and prints them twice, plain and colored
use asciify::{AsciiConfig, Charset, convert};
use image::{Rgba, RgbaImage};

fn main() -> asciify::Result<()> {
    println!("asciify - Basic Example");
    println!("=======================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([40, 40, 40, 255]));

    // Bright circle in the center with a red rim
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 45.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                let shade = (255.0 - dist * 3.0).max(0.0) as u8;
                img.put_pixel(x, y, Rgba([shade, shade, shade, 255]));
            } else if (dist - radius).abs() < 4.0 {
                img.put_pixel(x, y, Rgba([220, 30, 30, 255]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);

    let config = AsciiConfig {
        width: 60,
        ..Default::default()
    };
    print!("{}", convert(&img, &config)?);

    let colored = AsciiConfig {
        charset: Charset::new(" ░▒▓█")?,
        colored: true,
        ..config
    };
    println!();
    print!("{}", convert(&img, &colored)?);

    Ok(())
}
