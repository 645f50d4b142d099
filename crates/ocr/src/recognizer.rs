use image::GrayImage;
use thiserror::Error;

use crate::types::OcrWord;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image encode error: {0}")]
    ImageEncode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("Tesseract not available, build with the `tesseract` feature")]
    NotAvailable,
}

/// Abstraction over an OCR engine.
///
/// Sparse recognition returns individual words with vertical bounding info,
/// used to locate the score label. Block recognition returns line-oriented
/// plain text, used to re-read the cropped score band.
pub trait OcrEngine: Send + Sync {
    fn recognize_words(&self, image: &GrayImage) -> Result<Vec<OcrWord>, OcrError>;
    fn recognize_block(&self, image: &GrayImage) -> Result<String, OcrError>;
}

// ── Mock engine (always available, used for tests) ────────────────────────────

/// Returns pre-set words and text — useful for unit testing the extraction
/// pipeline without requiring Tesseract to be installed.
pub struct MockEngine {
    pub words: Vec<OcrWord>,
    pub block_text: String,
}

impl MockEngine {
    pub fn new(words: Vec<OcrWord>, block_text: impl Into<String>) -> Self {
        Self { words, block_text: block_text.into() }
    }
}

impl OcrEngine for MockEngine {
    fn recognize_words(&self, _image: &GrayImage) -> Result<Vec<OcrWord>, OcrError> {
        Ok(self.words.clone())
    }

    fn recognize_block(&self, _image: &GrayImage) -> Result<String, OcrError> {
        Ok(self.block_text.clone())
    }
}

// ── Tesseract engine (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use std::sync::OnceLock;

    use image::GrayImage;
    use leptess::LepTess;
    use regex::Regex;

    use super::{OcrEngine, OcrError};
    use crate::preprocess;
    use crate::types::OcrWord;

    /// Tesseract-backed engine. Sparse word recognition runs with PSM 11,
    /// block recognition with PSM 6, the settings the scanned screenshots
    /// were tuned against.
    pub struct TesseractEngine {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractEngine {
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self { data_path, lang: lang.to_string() }
        }

        fn session(&self, image: &GrayImage, psm: &str) -> Result<LepTess, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_variable(leptess::Variable::TesseditPagesegMode, psm)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            let png = preprocess::encode_png(image)
                .map_err(|e| OcrError::ImageEncode(e.to_string()))?;
            lt.set_image_from_mem(&png)
                .map_err(|e| OcrError::ImageEncode(e.to_string()))?;
            Ok(lt)
        }
    }

    impl OcrEngine for TesseractEngine {
        fn recognize_words(&self, image: &GrayImage) -> Result<Vec<OcrWord>, OcrError> {
            let mut lt = self.session(image, "11")?;
            let hocr = lt
                .get_hocr_text(0)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            Ok(parse_hocr_words(&hocr))
        }

        fn recognize_block(&self, image: &GrayImage) -> Result<String, OcrError> {
            let mut lt = self.session(image, "6")?;
            lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))
        }
    }

    fn re_hocr_word() -> &'static Regex {
        static R: OnceLock<Regex> = OnceLock::new();
        R.get_or_init(|| {
            Regex::new(
                r#"(?s)<span[^>]*class=['"]ocrx_word['"][^>]*title=['"]bbox (\d+) (\d+) (\d+) (\d+)[^'"]*['"][^>]*>(.*?)</span>"#,
            )
            .expect("invalid regex")
        })
    }

    /// Pull word texts and bounding boxes out of Tesseract's hOCR output.
    fn parse_hocr_words(hocr: &str) -> Vec<OcrWord> {
        re_hocr_word()
            .captures_iter(hocr)
            .filter_map(|c| {
                let y0: u32 = c.get(2)?.as_str().parse().ok()?;
                let y1: u32 = c.get(4)?.as_str().parse().ok()?;
                let text = unescape_hocr(c.get(5)?.as_str());
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Some(OcrWord::new(text, y0, y1.saturating_sub(y0)))
            })
            .collect()
    }

    fn unescape_hocr(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

}
