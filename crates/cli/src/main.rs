//! Aisle interactive menu

use std::{io, process};

use aisle_cli::{app, config::Config, logging};
use tracing::error;

/// Aisle entry point
pub fn main() {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(error) = app::run(&config, stdin.lock(), stdout.lock()) {
        error!(%error, "aisle stopped");

        #[expect(clippy::print_stderr, reason = "final error report for the user")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
