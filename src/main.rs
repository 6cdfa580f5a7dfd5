//! CLI entry point for the skin overlay merger

use clap::Parser;
use skinmerge::io::cli::{Cli, FileProcessor};
use std::process::ExitCode;

// Exit status for runs rejected before any file was processed
const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut processor = FileProcessor::new(cli);
    // Errors are already reported through the notifier
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) if error.is_user_input() => ExitCode::from(USAGE_EXIT_CODE),
        Err(_) => ExitCode::FAILURE,
    }
}
