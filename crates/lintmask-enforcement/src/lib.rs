//! Enforcement layer: turns a linter status into a process exit code.
//!
//! Subsystems:
//! - `decode`: raw status bits to ordered categories
//! - `policy`: which linter categories block
//! - `aggregate`: triggered/blocking categories and the linter exit code
//! - `quality`: score threshold gate contributing the quality bit
//! - `orchestrator`: sums both codes into the final exit code
//! - `reporters`: console and JSON output

pub mod aggregate;
pub mod decode;
pub mod orchestrator;
pub mod policy;
pub mod quality;
pub mod reporters;

pub use aggregate::{aggregate, Aggregation};
pub use decode::{decode, labels, show_workings};
pub use orchestrator::{ExitOrchestrator, ExitReport};
pub use policy::EnforcementPolicy;
pub use quality::{check, QualityGate, QualityVerdict};
