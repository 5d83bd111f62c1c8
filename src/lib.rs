//! # regsort-rs
//!
//! A batch record filtering and sorting library.
//!
//! Reads a line-oriented record file whose header line carries a search
//! keyword, keeps the records containing that keyword, and orders them by a
//! date key embedded in each record as hyphen-delimited fragments.
//!
//! ## Overview
//!
//! The pipeline runs in one pass over an in-memory line vector:
//! - **Read**: materialize the input into ordered lines
//! - **Keyword**: the header's 2nd space-delimited field
//! - **Filter**: keep lines containing the keyword as a substring
//! - **Sort**: stable order by the `(day, year)` fragment pair, compared
//!   as strings
//!
//! ## Example
//!
//! ```
//! use regsort_rs::execute_report_text;
//!
//! let input = "id keyword\n\
//!              A-15-2020-keyword-x\n\
//!              B-03-2021-keyword-y\n\
//!              C-03-2019-keyword-z\n\
//!              D-99-2020-nomatch\n";
//!
//! let output = execute_report_text(input).unwrap();
//! assert_eq!(
//!     output,
//!     vec![
//!         "B-03-2021-keyword-y",
//!         "C-03-2019-keyword-z",
//!         "A-15-2020-keyword-x",
//!     ]
//! );
//! ```

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod reader;
pub mod sort_key;
pub mod tokenize;

pub use error::ReportError;
pub use filter::filter_lines;
pub use pipeline::{execute_report, execute_report_text, header_keyword};
pub use reader::{read_lines, read_lines_from_path};
pub use sort_key::{DateKey, sort_by_date};
pub use tokenize::tokenize;
