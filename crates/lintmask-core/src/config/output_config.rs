//! Report output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FORMAT;

/// Configuration for how the report is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: "console" | "json". Default: "console".
    pub format: Option<String>,
    /// Print the raw status in binary with its decoded labels. Default: false.
    pub show_workings: Option<bool>,
}

impl OutputConfig {
    /// Returns the effective format, defaulting to "console".
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    /// Returns whether show-workings is on, defaulting to false.
    pub fn effective_show_workings(&self) -> bool {
        self.show_workings.unwrap_or(false)
    }
}
