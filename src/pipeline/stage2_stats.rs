use crate::model::stats::Descriptive;
use crate::pipeline::PipelineError;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub stats: Descriptive,
}

pub fn run_stage2(values: &[f64]) -> Result<Stage2Output, PipelineError> {
    let stats = Descriptive::from_values(values).ok_or(PipelineError::EmptyInput)?;
    tracing::info!(
        mean = stats.mean,
        std_dev = stats.std_dev,
        "stage2: descriptive statistics"
    );
    Ok(Stage2Output { stats })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_stats.rs"]
mod tests;
