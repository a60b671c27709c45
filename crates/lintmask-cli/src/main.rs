use clap::Parser;

use lintmask_cli::Cli;
use lintmask_core::constants::{TOOL_ERROR_EXIT, VERSION};

fn main() -> std::process::ExitCode {
    lintmask_core::tracing::init_tracing();
    tracing::debug!(version = VERSION, "lintmask starting");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version print to stdout and are not failures.
            return if err.use_stderr() {
                std::process::ExitCode::from(TOOL_ERROR_EXIT)
            } else {
                std::process::ExitCode::SUCCESS
            };
        }
    };

    match lintmask_cli::run(cli) {
        Ok(code) => lintmask_cli::terminate(code),
        Err(err) => lintmask_cli::fail(&err),
    }
}
