//! Error types for the filtering and sorting pipeline.

use thiserror::Error;

/// Errors produced while running the report pipeline.
///
/// Every variant is fatal: the run stops at the first failure and nothing
/// is retried. Usage and file-open errors are handled at the binary
/// boundary and do not appear here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The input file contains no lines at all.
    #[error("input file is empty")]
    EmptyInput,

    /// The header line has fewer than 2 space-delimited fields, so no
    /// keyword can be extracted.
    #[error("malformed header line (expected at least 2 fields): {line:?}")]
    MalformedHeader { line: String },

    /// A record selected for sorting splits into fewer than 2
    /// hyphen-delimited tokens, so no date key can be extracted.
    #[error("malformed record (expected a hyphen-delimited date): {line:?}")]
    MalformedRecord { line: String },

    /// No record besides the header contains the keyword.
    #[error("no records match keyword {keyword:?}")]
    NoMatch { keyword: String },
}
