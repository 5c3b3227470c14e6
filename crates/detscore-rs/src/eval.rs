//! Scoring of candidate rectangles against ground truth.
//!
//! Each ground-truth rectangle greedily claims the first candidate it
//! overlaps; unclaimed truths are false negatives, unclaimed candidates
//! false positives.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::rect::Rect;
use crate::samples::SampleMap;

/// Per-image evaluation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Candidates left unmatched after all ground-truth rectangles claimed
    /// theirs.
    pub false_positives: usize,
    /// Ground-truth rectangles no candidate overlapped.
    pub false_negatives: usize,
    /// Count of leftover candidate objects. Always equal to
    /// `false_positives`; kept as its own field because reports print both
    /// columns.
    pub candidate_objects: usize,
}

/// Score every ground-truth image against the candidate map.
///
/// Candidates are claimed greedily: for each ground-truth rectangle in
/// order, the first still-unclaimed candidate that overlaps it (see
/// [`Rect::overlaps`]) is consumed. Images are scored in parallel; each
/// image works on its own copy of the candidate list.
///
/// Fails with [`Error::MissingImage`] if any ground-truth image has no
/// candidate entry — even an image the detector found nothing in must be
/// present, with an empty list, or the run is rejected as a whole.
pub fn compute_scores(
    ground_truth: &SampleMap,
    candidates: &SampleMap,
    match_thresh: f64,
    overlap_thresh: f64,
) -> Result<HashMap<String, Score>> {
    ground_truth
        .par_iter()
        .map(|(image, truths)| {
            let cand = candidates
                .get(image)
                .ok_or_else(|| Error::MissingImage(image.clone()))?;
            let score = score_image(truths, cand, match_thresh, overlap_thresh);
            Ok((image.clone(), score))
        })
        .collect()
}

fn score_image(
    truths: &[Rect],
    candidates: &[Rect],
    match_thresh: f64,
    overlap_thresh: f64,
) -> Score {
    // remove() keeps the remaining candidates in file order, which is the
    // tie-break order for the truths still to come.
    let mut remaining: Vec<Rect> = candidates.to_vec();
    let mut false_negatives = 0;
    for truth in truths {
        match remaining
            .iter()
            .position(|cand| truth.overlaps(cand, match_thresh, overlap_thresh))
        {
            Some(i) => {
                remaining.remove(i);
            }
            None => false_negatives += 1,
        }
    }
    Score {
        false_positives: remaining.len(),
        false_negatives,
        candidate_objects: remaining.len(),
    }
}

/// Elementwise sum of all per-image scores.
pub fn total_score(scores: &HashMap<String, Score>) -> Score {
    scores.values().fold(Score::default(), |acc, s| Score {
        false_positives: acc.false_positives + s.false_positives,
        false_negatives: acc.false_negatives + s.false_negatives,
        candidate_objects: acc.candidate_objects + s.candidate_objects,
    })
}

/// Print one line per image, sorted by image id, followed by the grand
/// total.
pub fn print_scores(scores: &HashMap<String, Score>) {
    let mut images: Vec<&String> = scores.keys().collect();
    images.sort();
    for image in images {
        let score = scores[image.as_str()];
        println!(
            "{}: fp = {}, fn = {}, objs = {}",
            image, score.false_positives, score.false_negatives, score.candidate_objects
        );
    }
    let total = total_score(scores);
    println!(
        "Total: fp = {}, fn = {}, objs = {}",
        total.false_positives, total.false_negatives, total.candidate_objects
    );
}
