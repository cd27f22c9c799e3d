//! Version ordering for upgrade candidates
//!
//! Maven version strings are not semver (`2.13.2.20220328`, `31.1-jre`,
//! `2,13,20220328`), so candidates are ordered by their numeric parts:
//! split on separators, compare part by part, longer wins on ties.

use std::cmp::Ordering;

/// Compare two version strings by their numeric parts.
///
/// A leading `v` is ignored; parts are split on `.`, `-` and `,` and
/// non-numeric parts are skipped. When all common parts are equal the
/// version with more numeric parts is greater.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse_parts = |s: &str| -> Vec<u64> {
        let s = s.strip_prefix('v').unwrap_or(s);
        s.split(['.', '-', ','])
            .filter_map(|p| p.parse().ok())
            .collect()
    };

    let parts_a = parse_parts(a);
    let parts_b = parse_parts(b);

    for (pa, pb) in parts_a.iter().zip(parts_b.iter()) {
        match pa.cmp(pb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    parts_a.len().cmp(&parts_b.len())
}

/// Returns true if `candidate` is strictly newer than `current`
pub fn is_newer(candidate: &str, current: &str) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_major() {
        assert_eq!(compare_versions("1.0.0", "2.0.0"), Ordering::Less);
    }

    #[test]
    fn test_compare_minor_and_patch() {
        assert_eq!(compare_versions("1.1.0", "1.0.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.0.1", "1.0.2"), Ordering::Less);
    }

    #[test]
    fn test_compare_equal() {
        assert_eq!(compare_versions("1.8.4", "1.8.4"), Ordering::Equal);
    }

    #[test]
    fn test_compare_four_segment_maven_version() {
        assert_eq!(
            compare_versions("2.13.2.20220328", "2.13.3"),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_comma_separated() {
        assert_eq!(
            compare_versions("2,13,20220328", "2.13.2"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_v_prefix_ignored() {
        assert_eq!(compare_versions("v1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn test_compare_suffix_letters_ignored() {
        // -jre carries no numeric part, so 31.1-jre == 31.1
        assert_eq!(compare_versions("31.1-jre", "31.1"), Ordering::Equal);
        assert_eq!(compare_versions("31.2-jre", "31.1-jre"), Ordering::Greater);
    }

    #[test]
    fn test_longer_version_wins_on_tie() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Less);
    }

    #[test]
    fn test_is_newer() {
        assert!(is_newer("1.16.0", "1.15.0"));
        assert!(!is_newer("1.15.0", "1.15.0"));
        assert!(!is_newer("1.14.0", "1.15.0"));
    }
}
