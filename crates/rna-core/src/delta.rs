//! Percentage-delta math between label and USDA readings.

/// Signed percentage difference of the USDA reading relative to the label
/// reading: `((usda - label) / label) * 100`.
///
/// Returns `None` when either side is absent or the label reading is zero —
/// "not computable" is not the same as a zero delta. Positive means USDA
/// exceeds the label.
#[must_use]
pub fn delta(label: Option<f64>, usda: Option<f64>) -> Option<f64> {
    let label = label?;
    let usda = usda?;
    if label == 0.0 {
        return None;
    }
    Some(((usda - label) / label) * 100.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::delta;

    #[rstest]
    #[case(Some(10.0), Some(13.0), Some(30.0))]
    #[case(Some(10.0), Some(7.5), Some(-25.0))]
    #[case(Some(200.0), Some(200.0), Some(0.0))]
    fn signed_percentage_of_usda_relative_to_label(
        #[case] label: Option<f64>,
        #[case] usda: Option<f64>,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(delta(label, usda), expected);
    }

    #[rstest]
    #[case(Some(0.0), Some(50.0))]
    #[case(Some(0.0), Some(0.0))]
    #[case(None, Some(12.0))]
    #[case(Some(12.0), None)]
    #[case(None, None)]
    fn zero_label_or_absent_side_is_not_computable(
        #[case] label: Option<f64>,
        #[case] usda: Option<f64>,
    ) {
        assert_eq!(delta(label, usda), None);
    }

    #[test]
    fn sign_matches_usda_minus_label() {
        let up = delta(Some(100.0), Some(120.0)).unwrap();
        let down = delta(Some(100.0), Some(80.0)).unwrap();
        assert!(up > 0.0);
        assert!(down < 0.0);
    }
}
