//! Bitmask decoder.

use lintmask_core::{Category, CategorySet};

/// Every category whose bit is set in `value`, ascending by bit.
///
/// Bits that no category owns are ignored, so any value decodes.
pub fn decode(value: u64) -> CategorySet {
    Category::ALL
        .into_iter()
        .filter(|c| value & c.bit() != 0)
        .collect()
}

/// Labels of the categories set in `value`, in report order.
pub fn labels(value: u64) -> Vec<&'static str> {
    decode(value).iter().map(|c| c.label()).collect()
}

/// One-line breakdown of a status value: `12 (1100) = [warning message issued, ...]`.
pub fn show_workings(value: u64) -> String {
    format!("{value} ({value:b}) = [{}]", labels(value).join(", "))
}
