/// Number of ranking parameters on a score row.
pub const PARAM_COUNT: usize = 17;

/// Parameter abbreviations in score-row order. Output columns are named
/// `{abbreviation}_{year}`.
pub const PARAM_ABBREVS: [&str; PARAM_COUNT] = [
    "SS", "FSR", "FQE", "FRU", "PU", "QP", "IPR", "FPPP", "GPHE", "GUE", "MS", "GPHD", "RD", "WD",
    "ESCS", "PCS", "PR",
];

/// Per-position upper bounds on a plausible score. A value above its bound
/// was recognized with a misplaced decimal point and must be divided by 100.
///
/// These are hand-tuned against the scanned batches; there is no general
/// formula behind them, so they stay a literal table.
pub const PARAM_CEILINGS: [f64; PARAM_COUNT] = [
    20.0, 30.0, 20.0, 30.0, 35.0, 40.0, 15.0, 10.0, 40.0, 15.0, 25.0, 20.0, 30.0, 30.0, 20.0,
    21.0, 100.0,
];

/// CSV header names for one ranking year.
pub fn header_names(year: u16) -> Vec<String> {
    PARAM_ABBREVS.iter().map(|a| format!("{a}_{year}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_carry_year_suffix() {
        let headers = header_names(2024);
        assert_eq!(headers.len(), PARAM_COUNT);
        assert_eq!(headers[0], "SS_2024");
        assert_eq!(headers[16], "PR_2024");
    }

    #[test]
    fn abbreviations_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for abbrev in PARAM_ABBREVS {
            assert!(seen.insert(abbrev), "duplicate abbreviation: {abbrev}");
        }
    }
}
