//! Naive single-character tokenizer.
//!
//! Splits at every occurrence of the delimiter: consecutive delimiters
//! produce empty tokens and a trailing delimiter produces a trailing
//! empty token. This is exactly the split the header keyword extraction
//! relies on, so no whitespace collapsing is performed.

/// Split `line` at every occurrence of `delim`, O(line length).
pub fn tokenize(line: &str, delim: char) -> Vec<&str> {
    line.split(delim).collect()
}
