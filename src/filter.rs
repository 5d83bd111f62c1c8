//! Substring filter over a line sequence.

/// Keep the lines containing `keyword` as a contiguous substring.
///
/// Matching is case-sensitive with no word-boundary requirement, and the
/// relative order of surviving lines is preserved. The header line is not
/// treated specially here; the driver strips it after filtering.
pub fn filter_lines(lines: &[String], keyword: &str) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.contains(keyword))
        .cloned()
        .collect()
}
