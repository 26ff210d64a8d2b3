use crate::input::InputError;
use crate::plot::PlotError;

pub mod stage1_load;
pub mod stage2_stats;
pub mod stage3_fit;
pub mod stage4_rank;
pub mod stage5_report;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Plot(#[from] PlotError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no records to analyse")]
    EmptyInput,
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),
}
