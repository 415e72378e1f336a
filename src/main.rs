//! Riimi - rhyme analysis for Finnish song lyrics

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = riimi::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
