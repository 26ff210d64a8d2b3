use crate::model::histogram::Histogram;
use crate::model::normal::{CurvePoint, NormalFit};
use crate::model::stats::Descriptive;
use crate::pipeline::PipelineError;

pub const DEFAULT_BINS: usize = 30;
pub const DEFAULT_CURVE_POINTS: usize = 100;

#[derive(Debug, Clone)]
pub struct Stage3Inputs<'a> {
    pub values: &'a [f64],
    pub stats: &'a Descriptive,
    pub bins: usize,
    pub curve_points: usize,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub fit: NormalFit,
    pub curve: Vec<CurvePoint>,
    pub histogram: Histogram,
}

pub fn run_stage3(inputs: &Stage3Inputs) -> Result<Stage3Output, PipelineError> {
    if inputs.bins == 0 {
        return Err(PipelineError::InvalidParams(
            "histogram needs at least one bin".to_string(),
        ));
    }
    if inputs.curve_points < 2 {
        return Err(PipelineError::InvalidParams(
            "normal curve needs at least two points".to_string(),
        ));
    }

    let fit = NormalFit::from_stats(inputs.stats);
    let curve = fit.curve(inputs.curve_points);
    if fit.is_degenerate() {
        tracing::warn!(
            mean = fit.mean,
            "standard deviation is zero; normal curve omitted"
        );
    }

    let histogram =
        Histogram::build(inputs.values, inputs.bins).ok_or(PipelineError::EmptyInput)?;
    tracing::debug!(
        bins = histogram.n_bins(),
        bin_width = histogram.bin_width(),
        area = histogram.area(),
        "stage3: histogram built"
    );

    Ok(Stage3Output {
        fit,
        curve,
        histogram,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_fit.rs"]
mod tests;
