use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use detscore_rs::{compute_scores, print_scores, read_samples_file};
use detscore_rs::{DEFAULT_MATCH_THRESH, DEFAULT_OVERLAP_THRESH};

#[derive(Parser)]
#[command(name = "detscore")]
#[command(
    about = "Score detector output against ground-truth boxes by rectangle-overlap matching"
)]
struct Cli {
    /// Path to the ground-truth samples CSV file
    #[arg(long)]
    gt: PathBuf,

    /// Path to the candidate detections samples CSV file
    #[arg(long)]
    dt: PathBuf,

    /// Fraction of either rectangle the intersection must cover to match
    #[arg(long, default_value_t = DEFAULT_MATCH_THRESH)]
    match_thresh: f64,

    /// Minimum intersection-over-union for the general overlap test
    #[arg(long, default_value_t = DEFAULT_OVERLAP_THRESH)]
    overlap_thresh: f64,

    /// Marker in the `positive` column selecting the rows to keep
    #[arg(long, default_value = "y")]
    positive: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading ground truth from {}", cli.gt.display());
    let ground_truth = read_samples_file(&cli.gt, &cli.positive)?;

    info!("loading detections from {}", cli.dt.display());
    let candidates = read_samples_file(&cli.dt, &cli.positive)?;

    info!(
        images = ground_truth.len(),
        match_thresh = cli.match_thresh,
        overlap_thresh = cli.overlap_thresh,
        "scoring"
    );
    let scores = compute_scores(
        &ground_truth,
        &candidates,
        cli.match_thresh,
        cli.overlap_thresh,
    )?;

    print_scores(&scores);

    Ok(())
}
