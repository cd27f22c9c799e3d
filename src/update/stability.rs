//! Stability classification for candidate versions
//!
//! Decides whether a version string is a stable release and therefore
//! eligible to be suggested as an upgrade. Candidates that fail every
//! rule (alpha/beta/rc/milestone/snapshot-style identifiers) are
//! suppressed from the update report.
//!
//! The rules are an ordered list of named predicates; each is independent,
//! so the first match wins without affecting the outcome:
//! 1. `stable-keyword`: case-insensitive substring RELEASE, FINAL or GA
//! 2. `numeric-pattern`: `^[0-9,.v-]+(-r)?$` (dotted/comma-separated
//!    numerics like `1.2.3` or `2,13,20220328`, optional `-r` suffix)
//! 3. `jre-suffix`: trailing `-jre` (Guava's release convention)

use regex::Regex;
use std::sync::LazyLock;

/// Keywords whose presence marks a version as a stable release
const STABLE_KEYWORDS: [&str; 3] = ["RELEASE", "FINAL", "GA"];

// Purely numeric/dotted versions, commas and 'v' allowed, optional -r suffix
static NUMERIC_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9,.v-]+(-r)?$").unwrap());

/// A named stability rule
struct StabilityRule {
    name: &'static str,
    check: fn(&str) -> bool,
}

/// Ordered rule list; a version is stable if any rule accepts it
const STABILITY_RULES: [StabilityRule; 3] = [
    StabilityRule {
        name: "stable-keyword",
        check: |version| {
            let upper = version.to_uppercase();
            STABLE_KEYWORDS.iter().any(|kw| upper.contains(kw))
        },
    },
    StabilityRule {
        name: "numeric-pattern",
        check: |version| NUMERIC_VERSION_RE.is_match(version),
    },
    StabilityRule {
        name: "jre-suffix",
        check: |version| version.ends_with("-jre"),
    },
];

/// Returns true if the version string is a stable release.
///
/// Pure and deterministic; an empty or unrecognized string matches no
/// rule and is classified unstable.
pub fn is_stable(version: &str) -> bool {
    STABILITY_RULES.iter().any(|rule| (rule.check)(version))
}

/// Returns true if the version should be suppressed from upgrade suggestions
pub fn is_non_stable(version: &str) -> bool {
    !is_stable(version)
}

/// Returns the name of the first rule accepting the version, if any
pub fn matching_rule(version: &str) -> Option<&'static str> {
    STABILITY_RULES
        .iter()
        .find(|rule| (rule.check)(version))
        .map(|rule| rule.name)
}
