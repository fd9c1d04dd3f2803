//! infercast CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. On failure the error
//! envelope has already been written to stdout; the error is repeated on
//! stderr and the process exits non-zero.

use infercast::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
