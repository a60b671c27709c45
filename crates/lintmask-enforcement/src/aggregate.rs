//! Exit code aggregator.

use serde::Serialize;

use lintmask_core::category::LINTER_MASK;
use lintmask_core::CategorySet;

use crate::decode::decode;
use crate::policy::EnforcementPolicy;

/// Linter status decoded and weighed against an enforcement policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    /// The status value as received.
    pub raw_status: u64,
    /// Every linter category set in the status, enforced or not.
    pub triggered: CategorySet,
    /// Sum of the enforced values of the triggered categories.
    pub exit_code: u64,
    /// Triggered categories that are enforced: `decode(exit_code)`.
    pub blocking: CategorySet,
}

impl Aggregation {
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Decode a linter status and compute the exit code it maps to under `policy`.
///
/// Unlike [`decode`], which reports every bit of the table, only linter bits
/// are considered here: the status is masked with `LINTER_MASK`, so a stray
/// quality bit or anything above it is never reported as triggered.
pub fn aggregate(value: u64, policy: &EnforcementPolicy) -> Aggregation {
    let triggered = decode(value & LINTER_MASK);
    let exit_code: u64 = triggered.iter().map(|c| policy.resolve(*c)).sum();
    let blocking = decode(exit_code);

    debug_assert!(
        blocking
            .iter()
            .copied()
            .eq(triggered.iter().copied().filter(|c| policy.is_enforced(*c))),
        "re-decoded exit code must equal the enforced triggered categories"
    );

    tracing::debug!(
        raw_status = value,
        exit_code,
        triggered = triggered.len(),
        blocking = blocking.len(),
        "linter status aggregated"
    );

    Aggregation {
        raw_status: value,
        triggered,
        exit_code,
        blocking,
    }
}
