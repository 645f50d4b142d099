use std::path::Path;

use image::GrayImage;
use thiserror::Error;

use rankscan_core::{DatasetVariant, ParameterRecord, PARAM_COUNT};

use crate::locate::locate_score_label;
use crate::preprocess::{self, crop_score_band, PreprocessError};
use crate::recognizer::{OcrEngine, OcrError};
use crate::repair::{apply_position_ceilings, repair_score_line};

/// Why extraction produced no record for a college. Every stage reports its
/// own failure so callers can tell a missing label from a miscounted row.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Image preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("No word containing \"score\" was recognized")]
    LabelNotFound,
    #[error("Cropped score band produced {got} text line(s), need at least 2")]
    TooFewLines { got: usize },
    #[error("Expected 17 scores, {got} survived cleaning")]
    FieldCount { got: usize },
}

/// Orchestrates: load → locate label → crop → re-OCR → repair → record.
pub struct ScoreExtractor<R: OcrEngine> {
    engine: R,
}

impl<R: OcrEngine> ScoreExtractor<R> {
    pub fn new(engine: R) -> Self {
        Self { engine }
    }

    /// Extract the parameter record from one college screenshot on disk.
    pub fn extract_file(
        &self,
        path: &Path,
        variant: DatasetVariant,
        year: u16,
    ) -> Result<ParameterRecord, ExtractError> {
        let image = preprocess::load_grayscale(path)?;
        self.extract_image(&image, variant, year)
    }

    /// Extract from an already-decoded grayscale image.
    pub fn extract_image(
        &self,
        image: &GrayImage,
        variant: DatasetVariant,
        year: u16,
    ) -> Result<ParameterRecord, ExtractError> {
        let words = self.engine.recognize_words(image)?;
        let label = locate_score_label(&words).ok_or(ExtractError::LabelNotFound)?;

        let band = crop_score_band(image, label);
        let text = self.engine.recognize_block(&band)?;
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() < 2 {
            return Err(ExtractError::TooFewLines { got: lines.len() });
        }

        // The first line of the band is the parameter header; the second is
        // the score row itself.
        let scores = repair_score_line(lines[1], variant);
        let mut values: [f64; PARAM_COUNT] = scores
            .try_into()
            .map_err(|v: Vec<f64>| ExtractError::FieldCount { got: v.len() })?;
        apply_position_ceilings(&mut values);

        Ok(ParameterRecord::new(year, values))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::MockEngine;
    use crate::types::OcrWord;
    use image::{ImageBuffer, Luma};

    fn page() -> GrayImage {
        ImageBuffer::from_fn(400, 200, |_, _| Luma([230u8]))
    }

    fn score_words() -> Vec<OcrWord> {
        vec![
            OcrWord::new("Institute", 20, 16),
            OcrWord::new("Score", 100, 16),
        ]
    }

    fn seventeen_scores_line() -> &'static str {
        "11.1 12.2 13.3 14.4 15.5 16.6 7.7 8.8 19.9 10.1 11.2 12.3 13.4 14.5 15.6 16.7 87.8"
    }

    #[test]
    fn full_pipeline_produces_seventeen_values() {
        let block = format!("SS FSR FQE\n{}", seventeen_scores_line());
        let extractor = ScoreExtractor::new(MockEngine::new(score_words(), block));

        let record = extractor
            .extract_image(&page(), DatasetVariant::DEFAULT, 2024)
            .unwrap();
        assert_eq!(record.year, 2024);
        assert_eq!(record.values[0], 11.1);
        assert_eq!(record.values[16], 87.8);
    }

    #[test]
    fn ceilings_are_applied_after_repair() {
        // Position 0 reads 25.0, above its ceiling of 20.
        let block = format!(
            "header\n25.0 {}",
            &seventeen_scores_line()["11.1 ".len()..]
        );
        let extractor = ScoreExtractor::new(MockEngine::new(score_words(), block));

        let record = extractor
            .extract_image(&page(), DatasetVariant::DEFAULT, 2024)
            .unwrap();
        assert_eq!(record.values[0], 0.25);
    }

    #[test]
    fn missing_label_is_label_not_found() {
        let extractor = ScoreExtractor::new(MockEngine::new(
            vec![OcrWord::new("Institute", 20, 16)],
            "irrelevant",
        ));
        let err = extractor
            .extract_image(&page(), DatasetVariant::DEFAULT, 2024)
            .unwrap_err();
        assert!(matches!(err, ExtractError::LabelNotFound));
    }

    #[test]
    fn single_line_band_is_too_few_lines() {
        let extractor =
            ScoreExtractor::new(MockEngine::new(score_words(), "only one line\n\n  \n"));
        let err = extractor
            .extract_image(&page(), DatasetVariant::DEFAULT, 2024)
            .unwrap_err();
        assert!(matches!(err, ExtractError::TooFewLines { got: 1 }));
    }

    #[test]
    fn sixteen_values_are_a_field_count_mismatch() {
        let block = format!("header\n{}", &seventeen_scores_line()["11.1 ".len()..]);
        let extractor = ScoreExtractor::new(MockEngine::new(score_words(), block));
        let err = extractor
            .extract_image(&page(), DatasetVariant::DEFAULT, 2024)
            .unwrap_err();
        assert!(matches!(err, ExtractError::FieldCount { got: 16 }));
    }

    #[test]
    fn eighteen_values_are_a_field_count_mismatch() {
        let block = format!("header\n5.5 {}", seventeen_scores_line());
        let extractor = ScoreExtractor::new(MockEngine::new(score_words(), block));
        let err = extractor
            .extract_image(&page(), DatasetVariant::DEFAULT, 2024)
            .unwrap_err();
        assert!(matches!(err, ExtractError::FieldCount { got: 18 }));
    }
}
