use std::path::Path;

use anyhow::Result;
use tracing::warn;

use rankscan_ocr::{harvest_year, ScoreExtractor};

#[cfg(feature = "tesseract")]
use rankscan_ocr::recognizer::tesseract_backend::TesseractEngine;

/// Harvest each year's root under `base_dir` (scraper layout: `output2024`).
pub fn extract(years: &[u16], base_dir: &Path) -> Result<()> {
    let extractor = build_extractor()?;

    for &year in years {
        let root = base_dir.join(format!("output{year}"));
        if !root.is_dir() {
            warn!(root = %root.display(), "Year root not found, skipping");
            continue;
        }
        harvest_year(&extractor, &root, year)?;
    }
    Ok(())
}

#[cfg(feature = "tesseract")]
fn build_extractor() -> Result<ScoreExtractor<TesseractEngine>> {
    Ok(ScoreExtractor::new(TesseractEngine::new(None, "eng")))
}

#[cfg(not(feature = "tesseract"))]
fn build_extractor() -> Result<ScoreExtractor<rankscan_ocr::MockEngine>> {
    anyhow::bail!(
        "this build has no OCR engine; rebuild with `--features tesseract` to run extraction"
    )
}
