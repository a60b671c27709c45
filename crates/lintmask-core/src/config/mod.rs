//! Configuration system for lintmask.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod enforcement_config;
pub mod lintmask_config;
pub mod output_config;
pub mod quality_config;

pub use enforcement_config::{parse_exit_report, EnforcementConfig};
pub use lintmask_config::{CliOverrides, LintmaskConfig};
pub use output_config::OutputConfig;
pub use quality_config::QualityConfig;
