use std::path::PathBuf;

use crate::input::records::ScoreField;
use crate::input::{ScoreSet, load_scores};
use crate::pipeline::PipelineError;

#[derive(Debug, Clone)]
pub struct Stage1Params {
    pub input: PathBuf,
    pub field: ScoreField,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub scores: ScoreSet,
}

pub fn run_stage1(params: &Stage1Params) -> Result<Stage1Output, PipelineError> {
    let scores = load_scores(&params.input, params.field)?;
    tracing::info!(
        records = scores.n_records,
        field = params.field.json_key(),
        "stage1: records loaded"
    );
    Ok(Stage1Output { scores })
}
