//! The `check` subcommand: aggregate a status produced elsewhere.

use lintmask_core::errors::LintmaskError;

use super::{evaluate_and_report, validate_status, GateArgs};

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Exit status returned by pylint.
    #[arg(value_name = "STATUS", allow_negative_numbers = true)]
    pub status: i64,

    /// Quality score reported by pylint (the "rated at X/10" value).
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub score: Option<f64>,

    #[command(flatten)]
    pub gate: GateArgs,
}

/// Executes the `check` subcommand and returns the exit code.
pub fn execute(args: CheckArgs) -> Result<u64, LintmaskError> {
    let status = validate_status(args.status)?;
    let (config, orchestrator) = args.gate.resolve()?;
    evaluate_and_report(&config, &orchestrator, status, args.score)
}
