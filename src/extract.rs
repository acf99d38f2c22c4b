//! Free-form text to integers.

use std::sync::LazyLock;

use regex::Regex;

static INT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\d+").expect("integer pattern is valid"));

/// Extract every integer appearing in `text`, left to right.
///
/// A match is a maximal run of digits with an optional leading sign, so
/// matches never overlap. Runs whose value does not fit in an `i64` are
/// skipped.
///
/// ```rust
/// use lazyseq::extract_ints;
///
/// assert_eq!(extract_ints("a=3, b=-7, c=+12"), vec![3, -7, 12]);
/// ```
pub fn extract_ints(text: &str) -> Vec<i64> {
    INT_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
