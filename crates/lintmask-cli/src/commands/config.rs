//! The `config` subcommand: show the effective configuration.

use lintmask_core::errors::LintmaskError;

use super::GateArgs;

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub gate: GateArgs,
}

/// Resolves configuration, validates it, and prints it as TOML.
pub fn execute(args: ConfigArgs) -> Result<u64, LintmaskError> {
    let (config, _) = args.gate.resolve()?;
    print!("{}", config.effective().to_toml()?);
    Ok(0)
}
