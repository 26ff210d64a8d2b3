use super::*;
use crate::model::normal::NormalFit;
use crate::plot::raster::blend;

fn sample_histogram() -> Histogram {
    Histogram::build(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap()
}

#[test]
fn test_canvas_size() {
    let h = sample_histogram();
    let img = render_plot(&PlotInput {
        histogram: &h,
        curve: &[],
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    });
    assert_eq!(img.dimensions(), (1000, 600));
}

#[test]
fn test_bars_are_blended_gray() {
    let h = sample_histogram();
    let img = render_plot(&PlotInput {
        histogram: &h,
        curve: &[],
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    });
    // Inside the tallest bar, away from grid lines and the legend.
    assert_eq!(*img.get_pixel(850, 300), image::Rgb([192, 192, 192]));
    // Above the tallest bar.
    assert_eq!(*img.get_pixel(850, 60), WHITE);
    // Frame corner.
    assert_eq!(*img.get_pixel(80, 540), BLACK);
}

#[test]
fn test_curve_is_drawn_blue() {
    let h = sample_histogram();
    let fit = NormalFit {
        mean: 2.0,
        std_dev: 2.0_f64.sqrt(),
    };
    let curve = fit.curve(100);
    let with_curve = render_plot(&PlotInput {
        histogram: &h,
        curve: &curve,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    });
    let without = render_plot(&PlotInput {
        histogram: &h,
        curve: &[],
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    });
    let count_blue = |img: &RgbImage| img.pixels().filter(|p| **p == BLUE).count();
    assert!(count_blue(&with_curve) > count_blue(&without) + 500);
}

#[test]
fn test_bounds_cover_curve_and_bars() {
    let h = sample_histogram();
    let fit = NormalFit {
        mean: 2.0,
        std_dev: 1.0,
    };
    let curve = fit.curve(50);
    let b = Bounds::fit(&h, &curve);
    assert_eq!(b.x_min, -1.0);
    assert_eq!(b.x_max, 5.0);
    assert!((b.y_max - 0.4 * 1.05).abs() < 1e-12);
}

#[test]
fn test_blend() {
    assert_eq!(blend(WHITE, BLACK, 0.5), image::Rgb([128, 128, 128]));
    assert_eq!(blend(WHITE, GRAY, 0.0), WHITE);
    assert_eq!(blend(WHITE, GRAY, 1.0), GRAY);
}

#[test]
fn test_labels_follow_score_field() {
    let labels = PlotLabels::for_score("Total Score");
    assert_eq!(labels.title, "Normal Distribution of Total Scores");
    assert_eq!(labels.histogram_label, "Total Score Histogram");
    assert_eq!(labels.y_label, "Density");
}

#[test]
fn test_save_plot_creates_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("plot.png");
    let h = sample_histogram();
    let img = render_plot(&PlotInput {
        histogram: &h,
        curve: &[],
        width: 200,
        height: 150,
    });
    save_plot(&path, &img).unwrap();
    let loaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(loaded.dimensions(), (200, 150));
}
