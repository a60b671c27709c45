//! CLI subcommands and the options they share.

pub mod check;
pub mod config;
pub mod run;

use std::path::PathBuf;

use lintmask_core::config::{CliOverrides, LintmaskConfig};
use lintmask_core::errors::{LintmaskError, StatusError};
use lintmask_enforcement::reporters::create_reporter;
use lintmask_enforcement::ExitOrchestrator;

/// Options shared by every subcommand that computes an exit code.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GateArgs {
    /// Categories that count towards the exit code. Acceptable values are:
    /// F[Fatal], E[Error], W[Warning], R[Refactor], C[Convention], U[Usage].
    /// "-r=R,C" reports only Refactor and Convention. Default: F,E,W,U.
    #[arg(long = "exit-report", short = 'r', value_name = "<F,E,W,R,C,U>")]
    pub exit_report: Option<String>,

    /// Fail with the quality bit (64) when the score is below this value.
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub fail_under: Option<f64>,

    /// Report format: console or json.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Print the status value in binary with its decoded categories.
    #[arg(long)]
    pub show_workings: bool,

    /// Directory searched for lintmask.toml.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

impl GateArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            exit_report: self.exit_report.clone(),
            fail_under: self.fail_under,
            format: self.format.clone(),
            show_workings: self.show_workings.then_some(true),
        }
    }

    /// Resolve configuration and build the orchestrator from it.
    pub fn resolve(&self) -> Result<(LintmaskConfig, ExitOrchestrator), LintmaskError> {
        let config = LintmaskConfig::load(&self.root, Some(&self.overrides()))?;
        let orchestrator = ExitOrchestrator::from_config(&config)?;
        Ok((config, orchestrator))
    }
}

/// Reject statuses the aggregator cannot represent.
pub fn validate_status(status: i64) -> Result<u64, StatusError> {
    u64::try_from(status).map_err(|_| StatusError::NegativeStatus(status))
}

/// Evaluate, print the report on stdout, and return the exit code.
pub fn evaluate_and_report(
    config: &LintmaskConfig,
    orchestrator: &ExitOrchestrator,
    status: u64,
    score: Option<f64>,
) -> Result<u64, LintmaskError> {
    let report = orchestrator.evaluate(status, score)?;
    let reporter = create_reporter(
        config.output.effective_format(),
        config.output.effective_show_workings(),
    )?;
    let rendered = reporter.generate(&report)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(report.exit_code)
}
