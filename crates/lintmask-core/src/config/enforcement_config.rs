//! Enforcement configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EXIT_REPORT;
use crate::errors::ConfigError;

/// Configuration for which linter categories block.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnforcementConfig {
    /// Comma-delimited subset of `F,E,W,R,C,U`. Default: "F,E,W,U".
    pub exit_report: Option<String>,
}

impl EnforcementConfig {
    /// Returns the effective enforcement string, defaulting to "F,E,W,U".
    pub fn effective_exit_report(&self) -> &str {
        self.exit_report.as_deref().unwrap_or(DEFAULT_EXIT_REPORT)
    }
}

/// Split a comma-delimited enforcement string into single letters.
///
/// Empty tokens are skipped, so `""` yields no letters. Tokens are not
/// trimmed: `"F, E"` carries the token `" E"`, which is rejected along with
/// anything else that is not exactly one ASCII letter. Letters are returned
/// as written; the policy matches them case-sensitively and ignores unknown
/// ones, lowercase included.
pub fn parse_exit_report(exit_report: &str) -> Result<Vec<char>, ConfigError> {
    let mut letters = Vec::new();
    for token in exit_report.split(',').filter(|t| !t.is_empty()) {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => letters.push(letter),
            _ => {
                return Err(ConfigError::InvalidSetting {
                    field: "enforcement.exit_report".to_string(),
                    message: format!(
                        "malformed token {token:?} in {exit_report:?}: expected single letters from F,E,W,R,C,U"
                    ),
                });
            }
        }
    }
    Ok(letters)
}
