//! Pipeline driver: read -> keyword -> filter -> strip header -> sort.

use crate::error::ReportError;
use crate::filter::filter_lines;
use crate::sort_key::sort_by_date;
use crate::tokenize::tokenize;

/// Position of the keyword within the header line's space-split fields.
const KEYWORD_FIELD: usize = 1;

/// Extract the search keyword from the header line.
///
/// The keyword is the header's 2nd space-delimited field. A header with
/// fewer fields yields `MalformedHeader`.
pub fn header_keyword(header: &str) -> Result<&str, ReportError> {
    let fields = tokenize(header, ' ');
    fields
        .get(KEYWORD_FIELD)
        .copied()
        .ok_or_else(|| ReportError::MalformedHeader {
            line: header.to_string(),
        })
}

/// Remove the header from the front of the filtered set.
///
/// The header always contains its own keyword, so it is always the first
/// element of the filtered set. The non-empty precondition is still
/// checked explicitly rather than removing index 0 blind.
fn strip_header(mut filtered: Vec<String>, keyword: &str) -> Result<Vec<String>, ReportError> {
    if filtered.is_empty() {
        return Err(ReportError::NoMatch {
            keyword: keyword.to_string(),
        });
    }
    filtered.remove(0);
    Ok(filtered)
}

/// Run the full pipeline over the input lines.
///
/// Steps, in order: reject empty input; extract the keyword from line 0;
/// filter every line (header included) by the keyword; strip the header
/// from the filtered set; reject an empty remainder; stable-sort the
/// remainder by date key. Returns the output lines in final order.
pub fn execute_report(lines: &[String]) -> Result<Vec<String>, ReportError> {
    let header = lines.first().ok_or(ReportError::EmptyInput)?;
    let keyword = header_keyword(header)?;

    let filtered = filter_lines(lines, keyword);
    let matches = strip_header(filtered, keyword)?;
    if matches.is_empty() {
        return Err(ReportError::NoMatch {
            keyword: keyword.to_string(),
        });
    }

    sort_by_date(matches)
}

/// Convenience wrapper: split `input` into lines and run the pipeline.
pub fn execute_report_text(input: &str) -> Result<Vec<String>, ReportError> {
    let lines: Vec<String> = input.lines().map(str::to_string).collect();
    execute_report(&lines)
}
