use serde::{Deserialize, Serialize};

/// A single recognized word with its vertical placement on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrWord {
    pub text: String,
    /// Top edge of the word's bounding box, in pixels from the image top.
    pub top: u32,
    /// Height of the bounding box in pixels.
    pub height: u32,
}

impl OcrWord {
    pub fn new(text: impl Into<String>, top: u32, height: u32) -> Self {
        Self { text: text.into(), top, height }
    }
}

/// Vertical extent of the detected score label. The row of parameter values
/// sits in the band directly around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLabel {
    pub top: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ocr_word_serializes_round_trip() {
        let word = OcrWord::new("Score", 120, 18);
        let json = serde_json::to_string(&word).unwrap();
        let back: OcrWord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }
}
