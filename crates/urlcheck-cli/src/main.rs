use std::process::ExitCode;
use urlcheck_core::logging;

mod cli;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Panics inside evaluation are caught and reported as verdicts; keep the
    // message in the log instead of the default stderr dump.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {}", info);
    }));

    match Cli::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("urlcheck error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
