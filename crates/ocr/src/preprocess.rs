use image::{DynamicImage, GrayImage};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

use crate::types::ScoreLabel;

/// Pixels of context kept above the detected score label.
const BAND_ABOVE_PX: u32 = 35;
/// Pixels of context kept below the label's bottom edge.
const BAND_BELOW_PX: u32 = 5;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Failed to load image: {0}")]
    Load(#[from] image::ImageError),
    #[error("Failed to encode processed image: {0}")]
    Encode(String),
}

/// Load an image file and convert it to grayscale for OCR.
pub fn load_grayscale(path: &Path) -> Result<GrayImage, PreprocessError> {
    Ok(image::open(path)?.to_luma8())
}

/// Decode raw image bytes (PNG / JPEG / …) to grayscale.
pub fn grayscale_from_bytes(data: &[u8]) -> Result<GrayImage, PreprocessError> {
    Ok(image::load_from_memory(data)?.to_luma8())
}

/// Cut the full-width horizontal band around the score label: 35 px above
/// the label through 5 px below its bottom edge, clamped to the image.
pub fn crop_score_band(image: &GrayImage, label: ScoreLabel) -> GrayImage {
    let y1 = label.top.saturating_sub(BAND_ABOVE_PX);
    let y2 = (label.top + label.height + BAND_BELOW_PX)
        .min(image.height())
        .max(y1);
    image::imageops::crop_imm(image, 0, y1, image.width(), y2 - y1).to_image()
}

/// Encode a grayscale image as PNG bytes.
pub fn encode_png(image: &GrayImage) -> Result<Vec<u8>, PreprocessError> {
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(image.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PreprocessError::Encode(e.to_string()))?;
    Ok(buf)
}
