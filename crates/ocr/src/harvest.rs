use std::fs;
use std::path::Path;

use tracing::{info, warn};

use rankscan_core::DatasetVariant;

use crate::pipeline::ScoreExtractor;
use crate::recognizer::OcrEngine;

/// Screenshot the scraper drops in each college directory.
pub const SOURCE_IMAGE: &str = "parms.png";
/// Score file written next to the screenshot; its presence short-circuits
/// reprocessing on later passes.
pub const OUTPUT_CSV: &str = "parameter_scores.csv";

/// Outcome counts for one year's pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HarvestSummary {
    pub extracted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Walk a year root (`output2024` style) and extract every college directory
/// that does not yet have a score file. Per-college failures are logged and
/// skipped; only an unreadable root aborts the walk.
pub fn harvest_year<R: OcrEngine>(
    extractor: &ScoreExtractor<R>,
    root: &Path,
    year: u16,
) -> std::io::Result<HarvestSummary> {
    let root_name = root.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let variant = DatasetVariant::for_root(root_name);
    let mut summary = HarvestSummary::default();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let college_dir = entry.path();
        if !college_dir.is_dir() {
            continue;
        }
        let college = entry.file_name().to_string_lossy().into_owned();

        let image_path = college_dir.join(SOURCE_IMAGE);
        if !image_path.exists() {
            warn!(college = %college, "No image found, skipping");
            summary.skipped += 1;
            continue;
        }

        let output_path = college_dir.join(OUTPUT_CSV);
        if output_path.exists() {
            summary.skipped += 1;
            continue;
        }

        match extractor.extract_file(&image_path, variant, year) {
            Ok(record) => match record.write_csv(&output_path) {
                Ok(()) => summary.extracted += 1,
                Err(e) => {
                    warn!(college = %college, error = %e, "Failed to write score file");
                    summary.failed += 1;
                }
            },
            Err(e) => {
                warn!(college = %college, error = %e, "OCR extraction failed");
                summary.failed += 1;
            }
        }
    }

    info!(
        year,
        extracted = summary.extracted,
        skipped = summary.skipped,
        failed = summary.failed,
        "Year processed"
    );
    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
