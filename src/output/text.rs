use fontdue::{Font, FontSettings};
use image::{Rgb, RgbImage};

use crate::error::ChartError;

/// DejaVu Sans, Bitstream Vera license (see `assets/DejaVuSans.LICENSE`).
static FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

const ELLIPSIS: char = '…';

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Rasterizes chart text with `fontdue` and blends it into an image.
pub struct TextRenderer {
    font: Font,
}

impl TextRenderer {
    pub fn new() -> Result<Self, ChartError> {
        let font = Font::from_bytes(FONT_BYTES, FontSettings::default()).map_err(ChartError::Font)?;
        Ok(Self { font })
    }

    /// Distance above (`ascent`, positive) and below (`descent`, negative)
    /// the baseline at size `px`.
    pub fn vertical_extent(&self, px: f32) -> (f32, f32) {
        match self.font.horizontal_line_metrics(px) {
            Some(m) => (m.ascent, m.descent),
            None => (px * 0.8, -px * 0.2),
        }
    }

    /// Offset from the middle of the text box to its baseline.
    pub fn baseline_offset(&self, px: f32) -> f32 {
        let (ascent, descent) = self.vertical_extent(px);
        (ascent + descent) / 2.0
    }

    /// Advance width of `text` in pixels.
    pub fn width(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, px).advance_width)
            .sum()
    }

    /// Shorten `text` until it is at most `max_width` pixels wide, marking the
    /// cut with an ellipsis.
    pub fn ellipsize(&self, text: &str, px: f32, max_width: f32) -> String {
        if self.width(text, px) <= max_width {
            return text.to_string();
        }
        let budget = max_width - self.font.metrics(ELLIPSIS, px).advance_width;
        let mut out = String::new();
        let mut used = 0.0;
        for c in text.chars() {
            let w = self.font.metrics(c, px).advance_width;
            if used + w > budget {
                break;
            }
            used += w;
            out.push(c);
        }
        out.push(ELLIPSIS);
        out
    }

    /// Visit every covered pixel of `text`, as (along, across, coverage)
    /// relative to the pen origin on the baseline.  `across` grows downward.
    fn for_each_coverage(&self, text: &str, px: f32, mut f: impl FnMut(i64, i64, u8)) {
        let mut pen = 0.0f32;
        for c in text.chars() {
            let (m, bitmap) = self.font.rasterize(c, px);
            let left = (pen + m.xmin as f32).round() as i64;
            let top = -(m.height as i64 + m.ymin as i64);
            for row in 0..m.height {
                for col in 0..m.width {
                    f(left + col as i64, top + row as i64, bitmap[row * m.width + col]);
                }
            }
            pen += m.advance_width;
        }
    }

    /// Draw `text` left to right, pen starting at (`x`, `baseline`).
    pub fn draw(&self, img: &mut RgbImage, x: i64, baseline: i64, text: &str, px: f32, color: Rgb<u8>) {
        self.for_each_coverage(text, px, |along, across, cov| {
            blend(img, x + along, baseline + across, color, cov);
        });
    }

    /// Draw `text` turned a quarter counter-clockwise, reading bottom to top.
    /// The baseline is the vertical line through `x`; the pen starts at `y`
    /// and glyph tops face left.
    pub fn draw_vertical(&self, img: &mut RgbImage, x: i64, y: i64, text: &str, px: f32, color: Rgb<u8>) {
        self.for_each_coverage(text, px, |along, across, cov| {
            blend(img, x + across, y - along - 1, color, cov);
        });
    }
}

/// Mix `color` into the pixel at (`x`, `y`) by `coverage`.  Off-image
/// pixels are ignored.
fn blend(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: u8) {
    if coverage == 0 || x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let a = coverage as u32;
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for (dst, &src) in pixel.0.iter_mut().zip(color.0.iter()) {
        *dst = ((*dst as u32 * (255 - a) + src as u32 * a + 127) / 255) as u8;
    }
}
