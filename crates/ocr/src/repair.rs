use std::sync::OnceLock;

use regex::Regex;

use rankscan_core::{DatasetVariant, PARAM_CEILINGS, PARAM_COUNT};

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// Token separators seen in the scans: space, hyphen, underscore, em-dash,
// guillemet.
re!(re_separators, r"[ \-_—«]+");
re!(re_number, r"[-+]?\d*\.\d+|\d+");

/// Values above this bound are two scores recognized as one run of digits.
const MERGED_VALUE_BOUND: f64 = 10_000_000.0;
/// Scale factor that re-separates a merged pair around its decimal point.
const MERGED_VALUE_DIVISOR: f64 = 10_000.0;

/// Repair the noisy OCR text of a score line into individual numeric scores.
///
/// Tokens are split on separator characters and cleaned one at a time:
/// alphabetic garbage is zeroed per the batch variant, stray digit fragments
/// are dropped, runs with multiple decimal points are truncated before the
/// second dot, and oversized values are split back into the two scores they
/// were merged from. Tokens that still fail to parse are dropped.
pub fn repair_score_line(line: &str, variant: DatasetVariant) -> Vec<f64> {
    let stripped = line.replace("Score", "").replace("score", "").replace('|', "");

    let mut scores = Vec::new();
    for raw in re_separators().split(&stripped) {
        let mut token: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
            .collect();

        if variant.zeroes_alpha(&token) {
            token = "0.0".to_string();
        }

        // A lone digit is a fragment of a neighboring number, not a score.
        if token.len() < 2 {
            if let Some(m) = re_number().find(&token) {
                if let Ok(number) = m.as_str().parse::<f64>() {
                    if !token.contains('.') && number < 10.0 {
                        continue;
                    }
                }
            }
        }

        // Two numbers merged dot-to-dot: keep only up to the second dot.
        if token.matches('.').count() > 1 {
            if let Some((second_dot, _)) =
                token.char_indices().filter(|(_, c)| *c == '.').nth(1)
            {
                token.truncate(second_dot);
            }
        }

        let cleaned: String = token
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let Ok(value) = cleaned.parse::<f64>() else {
            continue;
        };

        if value > MERGED_VALUE_BOUND {
            let (high, low) = split_merged(value);
            scores.push(high);
            scores.push(low);
        } else {
            scores.push(value);
        }
    }
    scores
}

/// Re-separate two scores that were recognized as one long number: scale the
/// value down and read the integral and fractional parts as the two scores.
fn split_merged(value: f64) -> (f64, f64) {
    let scaled = value / MERGED_VALUE_DIVISOR;
    let repr = scaled.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), "0"));
    (
        int_part.parse().unwrap_or(scaled.trunc()),
        frac_part.parse().unwrap_or(0.0),
    )
}

/// Correct misplaced decimal points: a value above its position's ceiling is
/// divided by 100.
pub fn apply_position_ceilings(values: &mut [f64; PARAM_COUNT]) {
    for (value, ceiling) in values.iter_mut().zip(PARAM_CEILINGS) {
        if *value > ceiling {
            *value /= 100.0;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
