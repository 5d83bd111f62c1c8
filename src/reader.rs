//! Line reader: materializes an input source into an ordered line vector.
//!
//! The whole input is read up front; there is no streaming mode. Line
//! terminators are stripped (`\n` and a preceding `\r` are consumed by
//! `BufRead::lines`); any other bytes pass through untouched, with no
//! CRLF normalization beyond that.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every line from `input`, preserving order.
///
/// Empty input yields an empty vector. I/O errors propagate to the caller.
pub fn read_lines<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    input.lines().collect()
}

/// Open `path` and read every line from it.
///
/// The caller reports open failures together with the offending path.
pub fn read_lines_from_path(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    read_lines(BufReader::new(file))
}
