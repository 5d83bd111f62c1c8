//! CLI tool to filter and date-sort a line-oriented record file.
//!
//! Usage:
//!   regsort <input> <output>
//!
//! The input's first line is a header whose 2nd space-delimited field is
//! the search keyword. Records containing the keyword are written to the
//! output file sorted by their hyphen-embedded date key. All diagnostics
//! go to standard output, matching the report format's historical tooling.

use clap::Parser;
use regsort_rs::execute_report;
use regsort_rs::reader::read_lines_from_path;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "regsort")]
#[command(about = "Filter records by the header keyword and sort them by date")]
struct Cli {
    /// Input record file; line 1 is the header carrying the keyword
    input: PathBuf,

    /// Output file for the filtered, date-sorted records
    output: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors go to stdout like every other diagnostic.
            println!("{e}");
            process::exit(1);
        }
    };

    // Open the input before touching the output so a bad input path never
    // creates or truncates the output file.
    let lines = match read_lines_from_path(&cli.input) {
        Ok(lines) => lines,
        Err(e) => {
            println!("Error: could not open input file '{}': {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    let output_file = match File::create(&cli.output) {
        Ok(file) => file,
        Err(e) => {
            println!(
                "Error: could not open output file '{}': {}",
                cli.output.display(),
                e
            );
            process::exit(1);
        }
    };

    let records = match execute_report(&lines) {
        Ok(records) => records,
        Err(e) => {
            println!("Error: {e}");
            process::exit(1);
        }
    };

    let mut writer = BufWriter::new(output_file);
    for record in &records {
        if let Err(e) = writeln!(writer, "{record}") {
            println!(
                "Error: could not write output file '{}': {}",
                cli.output.display(),
                e
            );
            process::exit(1);
        }
    }
    if let Err(e) = writer.flush() {
        println!(
            "Error: could not write output file '{}': {}",
            cli.output.display(),
            e
        );
        process::exit(1);
    }

    println!(
        "{} record(s) written to {}",
        records.len(),
        cli.output.display()
    );
}
