use std::process::ExitCode;

use clap::Parser;
use sprout::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse_from(cli::normalize_legacy_flags(std::env::args_os()));
    sprout::logging::init(cli.verbose);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
