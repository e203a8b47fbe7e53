use harvest_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch; the command decides the exit code.
    match Cli::run_from_args().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!("error occurred: {:#}", err);
            eprintln!("harvest error: {:#}", err);
            std::process::exit(1);
        }
    }
}
