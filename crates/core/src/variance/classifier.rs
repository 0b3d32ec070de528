//! Variance classification against an ordered band list.
//!
//! Bands partition the line into half-open intervals `(prev_max, max]`:
//! the first band is closed on the left at -∞ and the last band catches
//! everything the earlier bands did not, whatever its own `max_variance`.
//!
//! These functions accept any slice, validated or not. On a non-ascending
//! list a band whose interval is empty can never match, and values that
//! fall between intervals land in the last band. An empty list leaves
//! every value unclassified.

use rust_decimal::Decimal;

use super::types::{ThresholdBand, VarianceBound};

/// Returns the position of the band containing `variance`.
///
/// `None` when the variance is absent or `bands` is empty.
#[must_use]
pub fn classify_index(variance: Option<Decimal>, bands: &[ThresholdBand]) -> Option<usize> {
    let variance = variance?;
    let last = bands.len().checked_sub(1)?;

    let matched = bands[..last].iter().enumerate().position(|(i, band)| {
        let above_previous = i == 0 || bands[i - 1].max_variance.is_below(variance);
        above_previous && band.max_variance.admits(variance)
    });

    Some(matched.unwrap_or(last))
}

/// Returns the label of the band containing `variance`.
///
/// `None` means unclassified: the variance is absent or there are no bands.
#[must_use]
pub fn classify(variance: Option<Decimal>, bands: &[ThresholdBand]) -> Option<&str> {
    classify_index(variance, bands).map(|i| bands[i].label.as_str())
}

/// Describes the interval covered by the band at `index`, e.g. `≤ 0%`,
/// `> 0% and ≤ 10%`, `> 30%`.
///
/// `None` if `index` is out of range.
#[must_use]
pub fn describe_range(bands: &[ThresholdBand], index: usize) -> Option<String> {
    let band = bands.get(index)?;
    let is_last = index + 1 == bands.len();

    let text = match index.checked_sub(1).map(|p| bands[p].max_variance) {
        None if is_last => "any variance".to_string(),
        None => format!("≤ {}%", band.max_variance),
        Some(previous) if is_last => format!("> {previous}%"),
        Some(previous) => match band.max_variance {
            VarianceBound::Unbounded => format!("> {previous}%"),
            VarianceBound::Finite(_) => format!("> {previous}% and ≤ {}%", band.max_variance),
        },
    };

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variance::BandSet;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn band(label: &str, max: Option<Decimal>) -> ThresholdBand {
        ThresholdBand::new(label, max, "#123456")
    }

    #[rstest]
    #[case(dec!(-250), "Excellent")]
    #[case(dec!(0), "Excellent")]
    #[case(dec!(0.001), "Normal")]
    #[case(dec!(10), "Normal")]
    #[case(dec!(10.01), "Warning")]
    #[case(dec!(20), "Warning")]
    #[case(dec!(29.99), "Need Attention")]
    #[case(dec!(30), "Need Attention")]
    #[case(dec!(30.0001), "Need Action")]
    #[case(dec!(1000), "Need Action")]
    fn test_standard_bands(#[case] variance: Decimal, #[case] expected: &str) {
        let bands = BandSet::standard();
        assert_eq!(classify(Some(variance), &bands), Some(expected));
    }

    #[test]
    fn test_absent_variance_is_unclassified() {
        assert_eq!(classify(None, &BandSet::standard()), None);
        assert_eq!(classify_index(None, &BandSet::standard()), None);
    }

    #[test]
    fn test_empty_bands_unclassified() {
        assert_eq!(classify(Some(dec!(5)), &[]), None);
    }

    #[test]
    fn test_single_band_catches_everything() {
        let bands = vec![band("Only", Some(dec!(0)))];
        assert_eq!(classify(Some(dec!(-5)), &bands), Some("Only"));
        assert_eq!(classify(Some(dec!(500)), &bands), Some("Only"));
    }

    #[test]
    fn test_last_band_ignores_its_bound() {
        let bands = vec![band("Low", Some(dec!(10))), band("High", Some(dec!(20)))];
        assert_eq!(classify(Some(dec!(21)), &bands), Some("High"));
    }

    #[test]
    fn test_non_ascending_middle_band_unreachable() {
        // "Dead" covers (20, 5], which is empty.
        let bands = vec![
            band("Low", Some(dec!(20))),
            band("Dead", Some(dec!(5))),
            band("Mid", Some(dec!(40))),
            band("Top", None),
        ];
        assert_eq!(classify(Some(dec!(3)), &bands), Some("Low"));
        // (5, 40] is checked against Dead's bound, not Low's.
        assert_eq!(classify(Some(dec!(25)), &bands), Some("Mid"));
        assert_eq!(classify(Some(dec!(41)), &bands), Some("Top"));
    }

    #[test]
    fn test_gap_falls_to_last_band() {
        // "Back" covers (30, 10], which is empty, so anything above 30
        // goes to the catch-all.
        let bands = vec![
            band("Low", Some(dec!(0))),
            band("High", Some(dec!(30))),
            band("Back", Some(dec!(10))),
            band("Last", None),
        ];
        assert_eq!(classify(Some(dec!(15)), &bands), Some("High"));
        assert_eq!(classify(Some(dec!(35)), &bands), Some("Last"));
    }

    #[test]
    fn test_unbounded_middle_band_swallows_rest() {
        let bands = vec![
            band("Low", Some(dec!(0))),
            band("Open", None),
            band("Never", Some(dec!(50))),
        ];
        assert_eq!(classify(Some(dec!(1000)), &bands), Some("Open"));
    }

    #[test]
    fn test_duplicate_labels_resolve_by_position() {
        let bands = vec![
            band("Same", Some(dec!(0))),
            band("Same", Some(dec!(10))),
            band("Other", None),
        ];
        assert_eq!(classify_index(Some(dec!(-1)), &bands), Some(0));
        assert_eq!(classify_index(Some(dec!(5)), &bands), Some(1));
        assert_eq!(classify(Some(dec!(5)), &bands), Some("Same"));
    }

    #[test]
    fn test_describe_standard_ranges() {
        let bands = BandSet::standard();
        let described: Vec<String> = (0..bands.len())
            .filter_map(|i| describe_range(&bands, i))
            .collect();
        assert_eq!(
            described,
            vec![
                "≤ 0%",
                "> 0% and ≤ 10%",
                "> 10% and ≤ 20%",
                "> 20% and ≤ 30%",
                "> 30%",
            ]
        );
        assert_eq!(describe_range(&bands, 5), None);
    }

    #[test]
    fn test_describe_single_band() {
        let bands = vec![band("Only", None)];
        assert_eq!(describe_range(&bands, 0).as_deref(), Some("any variance"));
    }
}
