use std::path::Path;

use image::RgbImage;
use serde::Serialize;

use crate::model::histogram::Histogram;
use crate::model::normal::CurvePoint;

pub mod raster;

use raster::{BLACK, BLUE, GRAY, GRID, WHITE, fill_rect, hline, line, vline};

/// Figure size 10x6 inches at 100 dpi.
pub const CANVAS_WIDTH: u32 = 1000;
pub const CANVAS_HEIGHT: u32 = 600;
const MARGIN_LEFT: i64 = 80;
const MARGIN_RIGHT: i64 = 30;
const MARGIN_TOP: i64 = 50;
const MARGIN_BOTTOM: i64 = 60;
const GRID_X_DIVS: i64 = 10;
const GRID_Y_DIVS: i64 = 8;
const BAR_ALPHA: f32 = 0.5;
const CURVE_WIDTH: i64 = 2;
const Y_HEADROOM: f64 = 1.05;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curve_label: String,
    pub histogram_label: String,
}

impl PlotLabels {
    pub fn for_score(score_label: &str) -> Self {
        Self {
            title: format!("Normal Distribution of {}s", score_label),
            x_label: score_label.to_string(),
            y_label: "Density".to_string(),
            curve_label: "Normal Distribution".to_string(),
            histogram_label: format!("{} Histogram", score_label),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlotInput<'a> {
    pub histogram: &'a Histogram,
    pub curve: &'a [CurvePoint],
    pub width: u32,
    pub height: u32,
}

/// Data-space bounds of the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn fit(histogram: &Histogram, curve: &[CurvePoint]) -> Self {
        let mut x_min = histogram.edges.first().copied().unwrap_or(0.0);
        let mut x_max = histogram.edges.last().copied().unwrap_or(1.0);
        let mut y_max = histogram.max_density();
        for p in curve {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_max = y_max.max(p.y);
        }
        if x_max <= x_min {
            x_max = x_min + 1.0;
        }
        if y_max <= 0.0 {
            y_max = 1.0;
        }
        Self {
            x_min,
            x_max,
            y_max: y_max * Y_HEADROOM,
        }
    }
}

struct Frame {
    left: i64,
    right: i64,
    top: i64,
    bottom: i64,
    bounds: Bounds,
}

impl Frame {
    fn px(&self, x: f64) -> i64 {
        let t = (x - self.bounds.x_min) / (self.bounds.x_max - self.bounds.x_min);
        self.left + (t * (self.right - self.left) as f64).round() as i64
    }

    fn py(&self, y: f64) -> i64 {
        let t = y / self.bounds.y_max;
        self.bottom - (t * (self.bottom - self.top) as f64).round() as i64
    }
}

pub fn render_plot(input: &PlotInput) -> RgbImage {
    let mut img = RgbImage::from_pixel(input.width, input.height, WHITE);
    let frame = Frame {
        left: MARGIN_LEFT,
        right: input.width as i64 - MARGIN_RIGHT,
        top: MARGIN_TOP,
        bottom: input.height as i64 - MARGIN_BOTTOM,
        bounds: Bounds::fit(input.histogram, input.curve),
    };

    draw_grid(&mut img, &frame);
    draw_bars(&mut img, &frame, input.histogram);
    draw_curve(&mut img, &frame, input.curve);
    draw_axes(&mut img, &frame);
    draw_legend(&mut img, &frame);
    img
}

pub fn save_plot(path: &Path, img: &RgbImage) -> Result<(), PlotError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    img.save(path)?;
    Ok(())
}

fn draw_grid(img: &mut RgbImage, frame: &Frame) {
    for i in 1..GRID_X_DIVS {
        let x = frame.left + (frame.right - frame.left) * i / GRID_X_DIVS;
        vline(img, x, frame.top, frame.bottom, GRID);
    }
    for i in 1..GRID_Y_DIVS {
        let y = frame.top + (frame.bottom - frame.top) * i / GRID_Y_DIVS;
        hline(img, frame.left, frame.right, y, GRID);
    }
}

fn draw_bars(img: &mut RgbImage, frame: &Frame, histogram: &Histogram) {
    for (i, &d) in histogram.density.iter().enumerate() {
        if d <= 0.0 {
            continue;
        }
        let x0 = frame.px(histogram.edges[i]);
        let x1 = frame.px(histogram.edges[i + 1]);
        let y0 = frame.py(d);
        fill_rect(img, x0, y0, x1.max(x0 + 1), frame.bottom, GRAY, BAR_ALPHA);
    }
}

fn draw_curve(img: &mut RgbImage, frame: &Frame, curve: &[CurvePoint]) {
    for pair in curve.windows(2) {
        let a = (frame.px(pair[0].x), frame.py(pair[0].y));
        let b = (frame.px(pair[1].x), frame.py(pair[1].y));
        line(img, a, b, CURVE_WIDTH, BLUE);
    }
}

fn draw_axes(img: &mut RgbImage, frame: &Frame) {
    hline(img, frame.left, frame.right, frame.bottom, BLACK);
    hline(img, frame.left, frame.right, frame.top, BLACK);
    vline(img, frame.left, frame.top, frame.bottom, BLACK);
    vline(img, frame.right, frame.top, frame.bottom, BLACK);
}

fn draw_legend(img: &mut RgbImage, frame: &Frame) {
    let x1 = frame.right - 12;
    let x0 = x1 - 40;
    let y_line = frame.top + 18;
    line(img, (x0, y_line), (x1, y_line), CURVE_WIDTH, BLUE);
    fill_rect(img, x0, y_line + 12, x1, y_line + 26, GRAY, BAR_ALPHA);
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/tests.rs"]
mod tests;
