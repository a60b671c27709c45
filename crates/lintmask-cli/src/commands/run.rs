//! The `run` subcommand: spawn pylint, then aggregate its status and score.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use lintmask_core::errors::{LintmaskError, RunError, StatusError};

use super::{evaluate_and_report, validate_status, GateArgs};

/// pylint's score line: `Your code has been rated at 7.50/10 (previous run: ...)`.
static RATING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"rated at (-?\d+(?:\.\d+)?)/10").ok());

#[derive(Debug, clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub gate: GateArgs,

    /// Fail instead of skipping the quality gate when no score is printed.
    #[arg(long)]
    pub require_score: bool,

    /// The linter command line, e.g. `pylint src`.
    #[arg(
        value_name = "LINTER",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// What the linter left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct LinterOutput {
    pub status: i64,
    pub stdout: String,
}

/// Executes the `run` subcommand and returns the exit code.
pub fn execute(args: RunArgs) -> Result<u64, LintmaskError> {
    let (config, orchestrator) = args.gate.resolve()?;

    let output = run_linter(&args.command)?;
    let status = validate_status(output.status)?;
    let score = parse_score(&output.stdout);

    if score.is_none() && args.require_score {
        return Err(StatusError::MissingScore {
            threshold: orchestrator.quality_gate().threshold(),
        }
        .into());
    }

    tracing::debug!(status, ?score, "linter finished");
    evaluate_and_report(&config, &orchestrator, status, score)
}

/// Run the linter, passing its stdout through and keeping a copy.
pub fn run_linter(command: &[String]) -> Result<LinterOutput, RunError> {
    let (program, args) = command.split_first().ok_or(RunError::EmptyCommand)?;

    tracing::info!(program = %program, ?args, "spawning linter");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| RunError::Spawn {
            program: program.clone(),
            source,
        })?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output.stdout)?;
    stdout.flush()?;

    let status = output.status.code().ok_or_else(|| RunError::TerminatedBySignal {
        program: program.clone(),
    })?;

    Ok(LinterOutput {
        status: i64::from(status),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}

/// Extract the last score pylint printed, if any.
pub fn parse_score(stdout: &str) -> Option<f64> {
    RATING
        .as_ref()?
        .captures_iter(stdout)
        .last()
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pylint_rating_line() {
        let stdout = "\
************* Module app
app.py:1:0: C0114: Missing module docstring (missing-module-docstring)

------------------------------------------------------------------
Your code has been rated at 7.50/10 (previous run: 7.00/10, +0.50)
";
        assert_eq!(parse_score(stdout), Some(7.5));
    }

    #[test]
    fn parses_negative_and_integer_ratings() {
        assert_eq!(parse_score("Your code has been rated at -2.31/10"), Some(-2.31));
        assert_eq!(parse_score("Your code has been rated at 10/10"), Some(10.0));
    }

    #[test]
    fn missing_rating_yields_none() {
        assert_eq!(parse_score("app.py:1:0: F0001: No module named app"), None);
        assert_eq!(parse_score(""), None);
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(run_linter(&[]), Err(RunError::EmptyCommand)));
    }

    #[test]
    fn unknown_program_fails_to_spawn() {
        let command = vec!["lintmask-test-no-such-linter".to_string()];
        assert!(matches!(run_linter(&command), Err(RunError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn captures_status_and_stdout() {
        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            "echo 'Your code has been rated at 5.00/10'; exit 12".to_string(),
        ];
        let output = run_linter(&command).unwrap();
        assert_eq!(output.status, 12);
        assert_eq!(parse_score(&output.stdout), Some(5.0));
    }
}
