use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use log::{debug, info};

use super::text::TextRenderer;
use crate::color::bar_palette;
use crate::data::model::{FrequencyTable, KeywordFrequency};
use crate::error::ChartError;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// 12 x 8 inches at 100 dpi.
pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 800;

const MARGIN_LEFT: u32 = 110;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 70;
const MARGIN_BOTTOM: u32 = 230;

const LABEL_PX: f32 = 16.0;
const AXIS_PX: f32 = 18.0;
const TITLE_PX: f32 = 26.0;
const TICK_LEN: u32 = 6;
/// Fraction of each slot covered by its bar.
const BAR_FILL: f64 = 0.8;
const Y_TICKS: u64 = 5;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);

/// Pixels available for an x label below the axis, leaving room for the
/// axis title.
fn max_label_width() -> f32 {
    (MARGIN_BOTTOM - TICK_LEN - 8) as f32 - (AXIS_PX * 2.0 + 16.0)
}

/// Round `raw` up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> u64 {
    if raw <= 1.0 {
        return 1;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    (nice * magnitude).round() as u64
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw a bar chart of the first `top` records into a new image.
pub fn draw_bar_chart(records: &[KeywordFrequency], top: usize) -> Result<RgbImage, ChartError> {
    if top == 0 {
        return Err(ChartError::ZeroTop);
    }
    let shown = &records[..top.min(records.len())];
    if shown.is_empty() {
        return Err(ChartError::NoData);
    }

    let text = TextRenderer::new()?;
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, WHITE);

    let plot_left = MARGIN_LEFT;
    let plot_right = WIDTH - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let plot_w = plot_right - plot_left;
    let plot_h = plot_bottom - plot_top;

    // ---- Y scale ----
    let max = shown.iter().map(|r| r.frequency).max().unwrap_or(0).max(1);
    let step = nice_step(max as f64 / Y_TICKS as f64);
    let y_max = max.div_ceil(step) * step;
    let y_of = |v: u64| plot_bottom - ((v as f64 / y_max as f64) * plot_h as f64).round() as u32;
    debug!("chart: {} bars, y axis 0..{y_max} step {step}", shown.len());

    // ---- Grid and y tick labels ----
    let mut v = 0;
    while v <= y_max {
        let y = y_of(v);
        if v > 0 {
            fill_rect(&mut img, plot_left + 1, y, plot_right, y + 1, GRID);
        }
        fill_rect(&mut img, plot_left - TICK_LEN, y, plot_left, y + 1, BLACK);
        let label = v.to_string();
        let lx = (plot_left - TICK_LEN - 6) as f32 - text.width(&label, LABEL_PX);
        let baseline = y as f32 + text.baseline_offset(LABEL_PX);
        text.draw(&mut img, lx.round() as i64, baseline.round() as i64, &label, LABEL_PX, BLACK);
        v += step;
    }

    // ---- Bars and x labels ----
    let colors = bar_palette(shown.len());
    let slot = plot_w as f64 / shown.len() as f64;
    let bar_w = (slot * BAR_FILL).max(1.0);
    let label_room = max_label_width();

    for (i, (record, color)) in shown.iter().zip(colors).enumerate() {
        let center = plot_left as f64 + slot * (i as f64 + 0.5);
        let x0 = (center - bar_w / 2.0).round() as u32;
        let x1 = ((center + bar_w / 2.0).round() as u32).max(x0 + 1);
        fill_rect(&mut img, x0, y_of(record.frequency), x1, plot_bottom, color);

        let cx = center.round() as u32;
        fill_rect(&mut img, cx, plot_bottom, cx + 1, plot_bottom + TICK_LEN, BLACK);

        // Rotated labels end just under their tick.
        let label = text.ellipsize(&record.keyword, LABEL_PX, label_room);
        let lx = cx as f32 + text.baseline_offset(LABEL_PX);
        let ly = (plot_bottom + TICK_LEN + 6) as f32 + text.width(&label, LABEL_PX);
        text.draw_vertical(&mut img, lx.round() as i64, ly.round() as i64, &label, LABEL_PX, BLACK);
    }

    // ---- Axes ----
    fill_rect(&mut img, plot_left - 1, plot_top, plot_left + 1, plot_bottom + 1, BLACK);
    fill_rect(&mut img, plot_left - 1, plot_bottom, plot_right, plot_bottom + 2, BLACK);

    // ---- Titles ----
    let title = format!("Top {top} Keyword Frequencies");
    let tx = (WIDTH as f32 - text.width(&title, TITLE_PX)).max(0.0) / 2.0;
    let (title_ascent, _) = text.vertical_extent(TITLE_PX);
    let ty = 20.0 + title_ascent;
    text.draw(&mut img, tx.round() as i64, ty.round() as i64, &title, TITLE_PX, BLACK);

    let xlabel = "Keyword";
    let xx = plot_left as f32 + (plot_w as f32 - text.width(xlabel, AXIS_PX)).max(0.0) / 2.0;
    let xy = HEIGHT as f32 - 18.0;
    text.draw(&mut img, xx.round() as i64, xy.round() as i64, xlabel, AXIS_PX, BLACK);

    let ylabel = "Frequency";
    let (axis_ascent, _) = text.vertical_extent(AXIS_PX);
    let yy = plot_top as f32 + (plot_h as f32 + text.width(ylabel, AXIS_PX)) / 2.0;
    text.draw_vertical(&mut img, (16.0 + axis_ascent).round() as i64, yy.round() as i64, ylabel, AXIS_PX, BLACK);

    Ok(img)
}

/// Render the top `top` records of `table` and save them as a PNG at `path`.
pub fn render_bar_chart(table: &FrequencyTable, path: &Path, top: usize) -> Result<(), ChartError> {
    if table.is_empty() {
        return Err(ChartError::NoData);
    }
    let img = draw_bar_chart(table.top(top), top)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| ChartError::Save {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Saved plot: {}", path.display());
    Ok(())
}
