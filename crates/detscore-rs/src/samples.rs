//! Samples-file loading and writing.
//!
//! A samples file is a headered CSV with one rectangle per row,
//! `positive,left,top,width,height,filename`. Ground truth and detector
//! output use the same format; the `positive` column marks whether a row is
//! a positive sample, and readers keep only rows matching the marker they
//! ask for.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Rectangles per image, keyed by image path as it appears in the file.
pub type SampleMap = HashMap<String, Vec<Rect>>;

/// One samples-file row. Columns are read by name, written in declaration
/// order.
#[derive(Debug, Deserialize, Serialize)]
struct SampleRow {
    positive: String,
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    filename: String,
}

/// Read a samples file, keeping only rows whose `positive` column equals
/// `keep_positive` (ground truth and detections both use `"y"`).
///
/// Row order within an image is preserved; it is the tie-break order for
/// greedy matching.
pub fn read_samples_file(path: &Path, keep_positive: &str) -> Result<SampleMap> {
    read_samples(csv::Reader::from_path(path)?, keep_positive)
}

fn read_samples<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    keep_positive: &str,
) -> Result<SampleMap> {
    let mut samples = SampleMap::new();
    for row in reader.deserialize() {
        let row: SampleRow = row?;
        if row.positive != keep_positive {
            continue;
        }
        let rect = Rect::new(row.left, row.top, row.width, row.height)?;
        samples.entry(row.filename).or_default().push(rect);
    }
    Ok(samples)
}

/// Write the rectangles of `images` (in the given order) as a samples file,
/// marking every row with `positive`.
///
/// Fails with [`Error::MissingImage`] if a requested image has no entry in
/// the map.
pub fn write_samples_file<W: Write>(
    writer: W,
    images: &[String],
    samples: &SampleMap,
    positive: &str,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for image in images {
        let rects = samples
            .get(image)
            .ok_or_else(|| Error::MissingImage(image.clone()))?;
        for rect in rects {
            csv_writer.serialize(SampleRow {
                positive: positive.to_string(),
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
                filename: image.clone(),
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}
