use serde::Serialize;

use crate::input::records::ScoreField;
use crate::model::histogram::Histogram;
use crate::model::normal::NormalFit;
use crate::model::ranking::RankEntry;
use crate::model::stats::Descriptive;
use crate::plot::PlotLabels;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    pub path: String,
    pub field: ScoreField,
    pub json_key: &'static str,
    pub n_records: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistogramSummary {
    pub bins: usize,
    pub bin_width: f64,
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
    pub density: Vec<f64>,
}

impl From<&Histogram> for HistogramSummary {
    fn from(h: &Histogram) -> Self {
        Self {
            bins: h.n_bins(),
            bin_width: h.bin_width(),
            edges: h.edges.clone(),
            counts: h.counts.clone(),
            density: h.density.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FitSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub peak_density: f64,
    pub curve_points: usize,
    pub curve_range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub stats: Descriptive,
    pub fit: FitSummary,
    pub histogram: HistogramSummary,
    pub labels: PlotLabels,
    pub plot_file: Option<String>,
    pub ranking: Vec<RankEntry>,
}

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub input_path: String,
    pub field: ScoreField,
    pub n_records: usize,
    pub stats: &'a Descriptive,
    pub fit: &'a NormalFit,
    pub curve_points: usize,
    pub histogram: &'a Histogram,
    pub labels: &'a PlotLabels,
    pub plot_file: Option<String>,
    pub ranking: &'a [RankEntry],
}

pub fn count_line(n_records: usize) -> String {
    format!("Total Data Count: {}", n_records)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}
