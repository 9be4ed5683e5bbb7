//! topwords - report the most frequent words of a web page or text file

use std::process::ExitCode;

use topwords::cli;

fn main() -> ExitCode {
    cli::run()
}
