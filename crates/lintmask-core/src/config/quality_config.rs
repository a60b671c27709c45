//! Quality gate configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FAIL_UNDER;

/// Configuration for the quality score gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QualityConfig {
    /// Scores strictly below this value fail the gate. Default: 0.0.
    pub fail_under: Option<f64>,
}

impl QualityConfig {
    /// Returns the effective threshold, defaulting to 0.0.
    pub fn effective_fail_under(&self) -> f64 {
        self.fail_under.unwrap_or(DEFAULT_FAIL_UNDER)
    }
}
