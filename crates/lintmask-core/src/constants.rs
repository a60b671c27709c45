//! Shared constants for lintmask.

use crate::category::Category;

/// lintmask version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default enforcement string: Fatal, Error, Warning and Usage block.
pub const DEFAULT_EXIT_REPORT: &str = "F,E,W,U";

/// Default quality threshold. Any non-negative score passes.
pub const DEFAULT_FAIL_UNDER: f64 = 0.0;

/// Default report format.
pub const DEFAULT_FORMAT: &str = "console";

/// Report formats understood by the reporters.
pub const AVAILABLE_FORMATS: &[&str] = &["console", "json"];

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "lintmask.toml";

/// Env var holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "LINTMASK_LOG";

/// Process exit code for failures at the boundary (bad arguments, bad
/// config, linter could not be spawned). Reported as a usage error.
pub const TOOL_ERROR_EXIT: u8 = Category::Usage.bit() as u8;
