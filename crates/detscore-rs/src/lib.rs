pub mod error;
pub mod eval;
pub mod rect;
pub mod samples;

pub use error::{Error, Result};
pub use eval::{compute_scores, print_scores, total_score, Score};
pub use rect::{suppress_overlapping, Rect, DEFAULT_MATCH_THRESH, DEFAULT_OVERLAP_THRESH};
pub use samples::{read_samples_file, write_samples_file, SampleMap};
