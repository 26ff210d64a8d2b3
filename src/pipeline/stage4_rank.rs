use crate::input::ScoreSet;
use crate::model::ranking::{RankEntry, rank_descending};

pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub scores: &'a ScoreSet,
    pub top: usize,
}

#[derive(Debug, Clone)]
pub struct Stage4Output {
    pub ranking: Vec<RankEntry>,
}

pub fn run_stage4(inputs: &Stage4Inputs) -> Stage4Output {
    let ranking = rank_descending(&inputs.scores.values, &inputs.scores.serials, inputs.top);
    if let Some(first) = ranking.first() {
        tracing::debug!(
            entries = ranking.len(),
            top_score = first.score,
            "stage4: ranking built"
        );
    }
    Stage4Output { ranking }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rank.rs"]
mod tests;
