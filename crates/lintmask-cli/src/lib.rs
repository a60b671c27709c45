//! lintmask CLI: command-line front end for the exit-code aggregator.
//!
//! Parses arguments, resolves configuration, optionally runs the linter, and
//! maps the orchestrated exit code onto the process exit status. Failures at
//! this boundary exit with the usage bit (32) so they read as a usage error.

pub mod commands;

use clap::{Parser, Subcommand};

use lintmask_core::constants::TOOL_ERROR_EXIT;
use lintmask_core::errors::{LintmaskError, LintmaskErrorCode};

/// Policy-driven exit codes for pylint.
#[derive(Debug, Parser)]
#[command(name = "lintmask", about = "Policy-driven exit codes for pylint")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Aggregate a pylint exit status obtained elsewhere.
    Check(commands::check::CheckArgs),
    /// Run pylint and aggregate its exit status and score.
    Run(commands::run::RunArgs),
    /// Print the effective configuration as TOML.
    Config(commands::config::ConfigArgs),
}

/// Dispatch a parsed command line. Returns the process exit code.
pub fn run(cli: Cli) -> Result<u64, LintmaskError> {
    match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Run(args) => commands::run::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    }
}

/// Convert an orchestrated exit code into a process exit code.
pub fn terminate(code: u64) -> std::process::ExitCode {
    if code == 0 {
        tracing::info!(code, "lintmask exiting");
    } else {
        tracing::info!(code, "lintmask exiting with blocking issues");
    }
    // Category bits sum to at most 127.
    std::process::ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}

/// Report a boundary failure on stderr and exit with the usage bit.
pub fn fail(err: &LintmaskError) -> std::process::ExitCode {
    tracing::error!(code = err.error_code(), error = %err, "lintmask failed");
    eprintln!("lintmask: error: {}", err.coded_string());
    std::process::ExitCode::from(TOOL_ERROR_EXIT)
}
