use crate::types::{OcrWord, ScoreLabel};

/// Find the first recognized word containing "score", case-insensitively,
/// and return its vertical extent. The parameter values sit on the row
/// directly around this label.
pub fn locate_score_label(words: &[OcrWord]) -> Option<ScoreLabel> {
    words
        .iter()
        .find(|w| w.text.to_lowercase().contains("score"))
        .map(|w| ScoreLabel { top: w.top, height: w.height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_matching_word() {
        let words = vec![
            OcrWord::new("Institute", 10, 14),
            OcrWord::new("Score", 120, 18),
            OcrWord::new("Scores", 300, 18),
        ];
        assert_eq!(
            locate_score_label(&words),
            Some(ScoreLabel { top: 120, height: 18 })
        );
    }

    #[test]
    fn match_is_case_insensitive_and_substring() {
        let words = vec![OcrWord::new("SCORE:", 42, 12)];
        assert_eq!(
            locate_score_label(&words),
            Some(ScoreLabel { top: 42, height: 12 })
        );
    }

    #[test]
    fn none_when_label_absent() {
        let words = vec![OcrWord::new("Rank", 10, 14), OcrWord::new("2024", 10, 14)];
        assert_eq!(locate_score_label(&words), None);
    }

    #[test]
    fn none_on_empty_word_list() {
        assert_eq!(locate_score_label(&[]), None);
    }
}
