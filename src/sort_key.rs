//! Date key extraction and the line comparator built on it.
//!
//! A record carries its date embedded as hyphen-delimited fragments.
//! The sort key is the pair `(day, year)` where `day` is hyphen token 1
//! and `year` is hyphen token 0 of the record. The field names follow
//! token position only; whether those positions are truly day and year
//! in the upstream data is not something the format guarantees.
//!
//! Comparison is lexicographic over the fragment strings, day first and
//! year as tie-break. It is deliberately not numeric and not
//! calendar-aware: fragment "10" orders before "9". Callers relying on
//! this ordering get the exact behavior of the upstream report format.

use crate::error::ReportError;
use crate::tokenize::tokenize;

/// Sort key derived from a record's hyphen-delimited date fragments.
///
/// Field order matters: the derived `Ord` compares `day` first, then
/// `year`, which is exactly the required ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateKey {
    pub day: String,
    pub year: String,
}

impl DateKey {
    /// Extract the key from `line` by splitting on `-`.
    ///
    /// A line with fewer than 2 hyphen tokens has no date key and yields
    /// `MalformedRecord` instead of an out-of-range access.
    pub fn extract(line: &str) -> Result<Self, ReportError> {
        let tokens = tokenize(line, '-');
        if tokens.len() < 2 {
            return Err(ReportError::MalformedRecord {
                line: line.to_string(),
            });
        }
        Ok(Self {
            day: tokens[1].to_string(),
            year: tokens[0].to_string(),
        })
    }
}

/// Stable-sort `lines` by their date keys.
///
/// Every key is extracted before any reordering happens, so a malformed
/// record anywhere in the input fails the whole sort eagerly and the sort
/// closure itself is infallible. Ties keep their relative input order.
pub fn sort_by_date(lines: Vec<String>) -> Result<Vec<String>, ReportError> {
    let mut keyed: Vec<(DateKey, String)> = lines
        .into_iter()
        .map(|line| DateKey::extract(&line).map(|key| (key, line)))
        .collect::<Result<_, _>>()?;

    // Vec::sort_by is stable, which the tie-order contract depends on.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, line)| line).collect())
}
