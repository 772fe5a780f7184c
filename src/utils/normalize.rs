//! Centralized string normalization for spec comparisons.

/// Normalize a specification string for comparison.
///
/// Lowercases the input and strips every character that is not an ASCII
/// letter or digit, so that "`sq.mm`", "`Sq mm`" and "`SQMM`" all compare
/// equal. Every exact-string comparison in the matching engine goes through
/// this helper.
///
/// # Examples
///
/// ```
/// use rfp_solver::utils::normalize::normalize;
///
/// assert_eq!(normalize("3C x 185 sq.mm"), "3cx185sqmm");
/// assert_eq!(normalize("XLPE"), normalize("xlpe"));
/// assert_eq!(normalize("Steel-Wire Armoured"), "steelwirearmoured");
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("IS 7098"), "is7098");
        assert_eq!(normalize("IEC 60502-2"), "iec605022");
        assert_eq!(normalize("Un-armoured!"), "unarmoured");
    }

    #[test]
    fn test_normalize_case_insensitive() {
        assert_eq!(normalize("Aluminium"), normalize("ALUMINIUM"));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_normalize_non_ascii_dropped() {
        // Unit symbols and other non-ASCII are stripped, not folded
        assert_eq!(normalize("185 mm²"), "185mm");
    }
}
