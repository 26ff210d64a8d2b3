use super::*;
use std::path::PathBuf;

use crate::input::records::ScoreField;

fn score_set(values: Vec<f64>, serials: Vec<Option<String>>) -> ScoreSet {
    ScoreSet {
        path: PathBuf::from("userData.json"),
        field: ScoreField::Total,
        n_records: values.len(),
        values,
        serials,
    }
}

#[test]
fn test_stage4_ranks_by_selected_field() {
    let scores = score_set(
        vec![55.0, 91.0, 73.5],
        vec![Some("U1".to_string()), Some("U2".to_string()), None],
    );
    let out = run_stage4(&Stage4Inputs {
        scores: &scores,
        top: DEFAULT_TOP,
    });
    assert_eq!(out.ranking.len(), 3);
    assert_eq!(out.ranking[0].serial.as_deref(), Some("U2"));
    assert_eq!(out.ranking[1].serial, None);
    assert_eq!(out.ranking[2].score, 55.0);
}

#[test]
fn test_stage4_top_zero_disables() {
    let scores = score_set(vec![1.0, 2.0], vec![None, None]);
    let out = run_stage4(&Stage4Inputs {
        scores: &scores,
        top: 0,
    });
    assert!(out.ranking.is_empty());
}
