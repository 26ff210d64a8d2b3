use super::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::input::records::{parse_records, score_from_value};
use crate::input::source::{InputBytes, find_input_path, read_input_bytes};

const SAMPLE: &str = r#"[
  {"serialNum": "A-1", "myCPU": "Ryzen 5 5600X", "cpuScore": 70.5, "gpuScore": 60, "ramScore": 40, "totalScore": 57.0},
  {"serialNum": "A-2", "myGPU": "RTX 3060", "cpuScore": "65.25", "totalScore": 61.5},
  {"serialNum": "A-3", "totalScore": "72", "extra": true}
]"#;

fn write_file(path: &Path, contents: &str) {
    let mut f = File::create(path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_load_total_scores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("userData.json");
    write_file(&path, SAMPLE);

    let set = load_scores(&path, ScoreField::Total).unwrap();
    assert_eq!(set.n_records, 3);
    assert_eq!(set.values, vec![57.0, 61.5, 72.0]);
    assert_eq!(set.serials[2].as_deref(), Some("A-3"));
    assert_eq!(set.path, path);
}

#[test]
fn test_missing_field_reports_record_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("userData.json");
    write_file(&path, SAMPLE);

    let err = load_scores(&path, ScoreField::Gpu).unwrap_err();
    match err {
        InputError::MissingField {
            index,
            serial,
            field,
        } => {
            assert_eq!(index, 1);
            assert_eq!(serial.as_deref(), Some("A-2"));
            assert_eq!(field, "gpuScore");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_null_and_non_numeric_are_missing() {
    let records = parse_records(br#"[{"totalScore": 1}, {"totalScore": null}]"#).unwrap();
    assert!(matches!(
        extract_scores(&records, ScoreField::Total),
        Err(InputError::MissingField { index: 1, .. })
    ));

    let records = parse_records(br#"[{"totalScore": "n/a"}]"#).unwrap();
    assert!(matches!(
        extract_scores(&records, ScoreField::Total),
        Err(InputError::MissingField { index: 0, .. })
    ));
}

#[test]
fn test_missing_field_message() {
    let records = parse_records(br#"[{"serialNum": "X-9"}, {}]"#).unwrap();
    let err = extract_scores(&records, ScoreField::Ram).unwrap_err();
    assert_eq!(
        err.to_string(),
        "record 0 (serialNum X-9) has no numeric `ramScore` value"
    );
    let err = extract_scores(&records[1..], ScoreField::Ram).unwrap_err();
    assert_eq!(err.to_string(), "record 0 has no numeric `ramScore` value");
}

#[test]
fn test_score_from_value() {
    assert_eq!(score_from_value(&serde_json::json!(" 12.5 ")), Some(12.5));
    assert_eq!(score_from_value(&serde_json::json!("NaN")), None);
    assert_eq!(score_from_value(&serde_json::json!(3)), Some(3.0));
    assert_eq!(score_from_value(&serde_json::json!(true)), None);
    assert_eq!(score_from_value(&serde_json::json!({"v": 1})), None);
}

#[test]
fn test_numeric_serial_is_accepted() {
    let records = parse_records(br#"[{"serialNum": 42, "totalScore": 10.0}]"#).unwrap();
    assert_eq!(records[0].serial().as_deref(), Some("42"));
    assert_eq!(extract_scores(&records, ScoreField::Total).unwrap(), vec![10.0]);
}

#[test]
fn test_unselected_field_with_odd_type_is_ignored() {
    let records =
        parse_records(br#"[{"cpuScore": true, "gpuScore": [1], "totalScore": 10.0}]"#).unwrap();
    assert_eq!(extract_scores(&records, ScoreField::Total).unwrap(), vec![10.0]);
    assert!(matches!(
        extract_scores(&records, ScoreField::Cpu),
        Err(InputError::MissingField { index: 0, .. })
    ));
}

#[test]
fn test_non_numeric_selected_field_reports_index() {
    let records = parse_records(
        br#"[{"totalScore": 1.0}, {"totalScore": true}, {"totalScore": {"x": 1}}]"#,
    )
    .unwrap();
    assert!(matches!(
        extract_scores(&records, ScoreField::Total),
        Err(InputError::MissingField { index: 1, .. })
    ));
    assert!(matches!(
        extract_scores(&records[2..], ScoreField::Total),
        Err(InputError::MissingField { index: 0, .. })
    ));
}

#[test]
fn test_plain_file_is_mapped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("userData.json");
    write_file(&path, SAMPLE);

    let bytes = read_input_bytes(&path).unwrap();
    assert!(matches!(bytes, InputBytes::Mapped(_)));
    assert_eq!(&bytes[..], SAMPLE.as_bytes());
}

#[test]
fn test_top_level_must_be_array() {
    let err = parse_records(br#"{"totalScore": 1}"#).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));

    let err = parse_records(b"[1, 2").unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_empty_array_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("userData.json");
    write_file(&path, "[]");

    let set = load_scores(&path, ScoreField::Total).unwrap();
    assert_eq!(set.n_records, 0);
    assert!(set.values.is_empty());
}

#[test]
fn test_empty_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("userData.json");
    write_file(&path, "");
    assert!(matches!(read_input_bytes(&path), Err(InputError::Parse(_))));

    write_file(&path, "  \n");
    assert!(matches!(read_input_bytes(&path), Err(InputError::Parse(_))));
}

#[test]
fn test_gzip_matches_plain() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.json");
    let gz = dir.path().join("packed.json.gz");
    write_file(&plain, SAMPLE);
    write_gz(&gz, SAMPLE);

    let a = load_scores(&plain, ScoreField::Total).unwrap();
    let b = load_scores(&gz, ScoreField::Total).unwrap();
    assert_eq!(a.values, b.values);
    assert_eq!(a.n_records, b.n_records);
}

#[test]
fn test_falls_back_to_gz_sibling() {
    let dir = tempfile::tempdir().unwrap();
    let requested = dir.path().join("userData.json");
    write_gz(&dir.path().join("userData.json.gz"), SAMPLE);

    let resolved = find_input_path(&requested).unwrap();
    assert_eq!(resolved, dir.path().join("userData.json.gz"));

    let err = load_scores(&requested, ScoreField::Cpu).unwrap_err();
    assert!(matches!(err, InputError::MissingField { index: 2, .. }));
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_input_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}
