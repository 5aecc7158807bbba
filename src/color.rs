use image::Rgb;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Bar colours
// ---------------------------------------------------------------------------

/// Hue of the bars (sky blue).
const BAR_HUE: f32 = 197.0;

/// Convert an HSL triple into an 8-bit RGB pixel.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb<u8> {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Rgb([
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    ])
}

/// `n` shades of sky blue, darkest first, so the most frequent keyword gets
/// the strongest bar.
pub fn bar_palette(n: usize) -> Vec<Rgb<u8>> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            hsl_to_rgb(BAR_HUE, 0.71, 0.55 + 0.17 * t)
        })
        .collect()
}
