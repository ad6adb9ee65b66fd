//! Integration test: CSV in, report out, batch independence

use id3_tree::cli::{run_batch, BatchConfig, BatchJob};
use id3_tree::prelude::*;
use std::path::PathBuf;

fn weather_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/weather.nominal.csv")
}

#[test]
fn test_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("arvore - tenis.txt");

    let data = DataLoader::new().load_csv(weather_path()).unwrap();
    let mut tree = Id3Tree::new();
    tree.fit(&data).unwrap();
    ReportWriter::new(&output)
        .write(&data, tree.target(), &tree.format().unwrap())
        .unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("\n\n"));
    assert!(report.contains("outlook  temperature  humidity  windy  play"));
    assert!(report.contains("\n\nTarget label: play\n\n"));
    assert!(report.contains("Induction tree:\n\noutlook = sunny: \n  humidity = high: no"));
    assert!(report.ends_with("windy = TRUE: no\n\n"));
}

#[test]
fn test_batch_failure_does_not_stop_other_jobs() {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig {
        jobs: vec![
            BatchJob::new(weather_path(), dir.path().join("tenis.txt")),
            BatchJob::new(dir.path().join("missing.csv"), dir.path().join("missing.txt")),
            BatchJob {
                input: weather_path(),
                output: dir.path().join("windy.txt"),
                target: Some("windy".to_string()),
            },
        ],
    };

    let summary = run_batch(&config, &DataLoader::new());
    assert_eq!(summary.outcomes.len(), 3);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 1);
    assert!(matches!(summary.outcomes[1].result, Err(Id3Error::IoError(_))));

    assert!(dir.path().join("tenis.txt").exists());
    assert!(!dir.path().join("missing.txt").exists());

    let windy = std::fs::read_to_string(dir.path().join("windy.txt")).unwrap();
    assert!(windy.contains("Target label: windy"));
    let report = summary.outcomes[2].result.as_ref().unwrap();
    assert_eq!(report.target, "windy");
}

#[test]
fn test_batch_rejects_bad_target() {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig {
        jobs: vec![BatchJob {
            input: weather_path(),
            output: dir.path().join("out.txt"),
            target: Some("humidity_level".to_string()),
        }],
    };

    let summary = run_batch(&config, &DataLoader::new());
    assert_eq!(summary.failed(), 1);
    assert!(matches!(summary.outcomes[0].result, Err(Id3Error::FeatureNotFound(_))));
}

#[test]
fn test_saved_model_predicts_new_rows() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("tree.json");

    let data = DataLoader::new().load_csv(weather_path()).unwrap();
    let mut tree = Id3Tree::new();
    tree.fit(&data).unwrap();
    tree.save(model_path.to_str().unwrap()).unwrap();

    let unseen = Dataset::from_records(
        &["windy", "humidity", "outlook", "temperature"],
        &[
            vec!["TRUE", "normal", "sunny", "hot"],
            vec!["TRUE", "high", "rainy", "cool"],
            vec!["FALSE", "high", "overcast", "cool"],
        ],
    )
    .unwrap();

    let loaded = Id3Tree::load(model_path.to_str().unwrap()).unwrap();
    let labels: Vec<String> = loaded
        .predict(&unseen)
        .unwrap()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(labels, vec!["yes", "no", "yes"]);
}
