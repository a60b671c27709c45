//! Top-level lintmask configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{parse_exit_report, EnforcementConfig, OutputConfig, QualityConfig};
use crate::constants::{AVAILABLE_FORMATS, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LINTMASK_*`)
/// 3. Project config (`lintmask.toml` in project root)
/// 4. User config (`~/.lintmask/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintmaskConfig {
    pub enforcement: EnforcementConfig,
    pub quality: QualityConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub exit_report: Option<String>,
    pub fail_under: Option<f64>,
    pub format: Option<String>,
    pub show_workings: Option<bool>,
}

impl LintmaskConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::Malformed { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            exit_report = config.enforcement.effective_exit_report(),
            fail_under = config.quality.effective_fail_under(),
            format = config.output.effective_format(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Malformed {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &LintmaskConfig) -> Result<(), ConfigError> {
        parse_exit_report(config.enforcement.effective_exit_report())?;
        if let Some(threshold) = config.quality.fail_under {
            if !threshold.is_finite() {
                return Err(ConfigError::InvalidSetting {
                    field: "quality.fail_under".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        let format = config.output.effective_format();
        if !AVAILABLE_FORMATS.contains(&format) {
            return Err(ConfigError::InvalidSetting {
                field: "output.format".to_string(),
                message: format!(
                    "unknown format {format:?}, expected one of: {}",
                    AVAILABLE_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.lintmask/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LintmaskConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        let file_config: LintmaskConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Malformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut LintmaskConfig, other: &LintmaskConfig) {
        if other.enforcement.exit_report.is_some() {
            base.enforcement.exit_report = other.enforcement.exit_report.clone();
        }
        if other.quality.fail_under.is_some() {
            base.quality.fail_under = other.quality.fail_under;
        }
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.show_workings.is_some() {
            base.output.show_workings = other.output.show_workings;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable numeric or boolean values are skipped.
    fn apply_env_overrides(config: &mut LintmaskConfig) {
        if let Ok(val) = std::env::var("LINTMASK_EXIT_REPORT") {
            config.enforcement.exit_report = Some(val);
        }
        if let Ok(val) = std::env::var("LINTMASK_FAIL_UNDER") {
            match val.parse::<f64>() {
                Ok(v) => config.quality.fail_under = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable LINTMASK_FAIL_UNDER"),
            }
        }
        if let Ok(val) = std::env::var("LINTMASK_FORMAT") {
            config.output.format = Some(val);
        }
        if let Ok(val) = std::env::var("LINTMASK_SHOW_WORKINGS") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.show_workings = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut LintmaskConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.exit_report {
            config.enforcement.exit_report = Some(v.clone());
        }
        if let Some(v) = cli.fail_under {
            config.quality.fail_under = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
        if let Some(v) = cli.show_workings {
            config.output.show_workings = Some(v);
        }
    }

    /// A copy with every unset field replaced by its compiled default.
    pub fn effective(&self) -> LintmaskConfig {
        LintmaskConfig {
            enforcement: EnforcementConfig {
                exit_report: Some(self.enforcement.effective_exit_report().to_string()),
            },
            quality: QualityConfig {
                fail_under: Some(self.quality.effective_fail_under()),
            },
            output: OutputConfig {
                format: Some(self.output.effective_format().to_string()),
                show_workings: Some(self.output.effective_show_workings()),
            },
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Returns the user-level lintmask config directory: `~/.lintmask/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".lintmask"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
