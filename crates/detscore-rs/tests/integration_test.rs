use std::path::PathBuf;

use detscore_rs::{compute_scores, read_samples_file, total_score, Error, Score};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_load_ground_truth() {
    let gt = read_samples_file(&fixtures_dir().join("gt.csv"), "y").expect("Failed to load GT");
    assert_eq!(gt.len(), 2);
    // The negative row is filtered out
    assert_eq!(gt["faces/0001.png"].len(), 2);
    assert_eq!(gt["faces/0002.png"].len(), 1);
}

#[test]
fn test_score_fixture_run() {
    let gt = read_samples_file(&fixtures_dir().join("gt.csv"), "y").expect("Failed to load GT");
    let dt = read_samples_file(&fixtures_dir().join("dt.csv"), "y").expect("Failed to load DT");

    let scores = compute_scores(&gt, &dt, 0.75, 0.33).expect("scoring should succeed");

    // 0001: the shifted face box matches, the second truth is missed, the
    // far-off candidate is a false positive.
    assert_eq!(
        scores["faces/0001.png"],
        Score {
            false_positives: 1,
            false_negatives: 1,
            candidate_objects: 1,
        }
    );
    // 0002: near-exact detection, clean image.
    assert_eq!(
        scores["faces/0002.png"],
        Score {
            false_positives: 0,
            false_negatives: 0,
            candidate_objects: 0,
        }
    );

    let total = total_score(&scores);
    assert_eq!(total.false_positives, 1);
    assert_eq!(total.false_negatives, 1);
    assert_eq!(total.candidate_objects, 1);
}

#[test]
fn test_missing_candidate_image_fails() {
    let gt = read_samples_file(&fixtures_dir().join("gt.csv"), "y").expect("Failed to load GT");
    let mut dt = read_samples_file(&fixtures_dir().join("dt.csv"), "y").expect("Failed to load DT");
    dt.remove("faces/0002.png");

    let err = compute_scores(&gt, &dt, 0.75, 0.33).unwrap_err();
    assert!(matches!(err, Error::MissingImage(ref id) if id == "faces/0002.png"));
}
