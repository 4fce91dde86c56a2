use asciify::{AsciiConfig, convert};
use image::{Rgba, RgbaImage};

fn main() -> asciify::Result<()> {
    println!("asciify - Automatic Height Demo");
    println!("===============================\n");

    // Source sizes paired with the requested column count
    let test_cases = vec![
        (100, 50, 80, "100x50 (2:1)"),
        (64, 64, 40, "64x64 (square)"),
        (1920, 1080, 120, "1920x1080 (Full HD)"),
        (100, 1, 3, "100x1 (derives zero rows)"),
    ];

    for (width, height, columns, description) in test_cases {
        println!("Testing: {}", description);

        // Diagonal gradient
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let gray = ((x + y) % 256) as u8;
            Rgba([gray, gray, gray, 255])
        });

        let config = AsciiConfig {
            width: columns,
            ..Default::default()
        };
        let ascii = convert(&img, &config)?;

        println!("  Input:  {}x{}", width, height);
        println!("  Output: {} columns x {} rows", columns, ascii.lines().count());
        println!();
    }

    println!("Rows = floor(columns * height / width * 0.5), since terminal cells");
    println!("are about twice as tall as they are wide.");

    Ok(())
}
