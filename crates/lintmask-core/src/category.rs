//! The fixed category table.
//!
//! Each category owns one bit of the linter's status value. The declaration
//! order is ascending by bit and is the canonical iteration and report order.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered set of categories, small enough to stay on the stack.
pub type CategorySet = SmallVec<[Category; 8]>;

/// A class of analysis finding, or the quality gate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fatal,
    Error,
    Warning,
    Refactor,
    Convention,
    Usage,
    Quality,
}

/// Bits the linter itself can set.
pub const LINTER_MASK: u64 = Category::Fatal.bit()
    | Category::Error.bit()
    | Category::Warning.bit()
    | Category::Refactor.bit()
    | Category::Convention.bit()
    | Category::Usage.bit();

// The orchestrator adds codes together, so every bit must stay disjoint.
const _: () = {
    let all = Category::ALL;
    let mut seen: u64 = 0;
    let mut prev: u64 = 0;
    let mut i = 0;
    while i < all.len() {
        let bit = all[i].bit();
        assert!(bit.is_power_of_two(), "category bit must be a power of two");
        assert!(bit > prev, "categories must be ordered by ascending bit");
        assert!(seen & bit == 0, "category bits must be distinct");
        seen |= bit;
        prev = bit;
        i += 1;
    }
    assert!(
        LINTER_MASK & Category::Quality.bit() == 0,
        "quality bit overlaps the linter categories"
    );
};

impl Category {
    /// Every category, ascending by bit.
    pub const ALL: [Category; 7] = [
        Self::Fatal,
        Self::Error,
        Self::Warning,
        Self::Refactor,
        Self::Convention,
        Self::Usage,
        Self::Quality,
    ];

    /// The six categories reported by the linter, ascending by bit.
    pub const LINTER: [Category; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warning,
        Self::Refactor,
        Self::Convention,
        Self::Usage,
    ];

    /// The category's bit in a status value.
    pub const fn bit(self) -> u64 {
        match self {
            Self::Fatal => 1,
            Self::Error => 2,
            Self::Warning => 4,
            Self::Refactor => 8,
            Self::Convention => 16,
            Self::Usage => 32,
            Self::Quality => 64,
        }
    }

    /// Human-readable label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fatal => "fatal message issued",
            Self::Error => "error message issued",
            Self::Warning => "warning message issued",
            Self::Refactor => "refactor message issued",
            Self::Convention => "convention message issued",
            Self::Usage => "usage error",
            Self::Quality => "quality score below threshold",
        }
    }

    /// Enforcement letter. The quality gate has none.
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Fatal => Some('F'),
            Self::Error => Some('E'),
            Self::Warning => Some('W'),
            Self::Refactor => Some('R'),
            Self::Convention => Some('C'),
            Self::Usage => Some('U'),
            Self::Quality => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Refactor => "refactor",
            Self::Convention => "convention",
            Self::Usage => "usage",
            Self::Quality => "quality",
        }
    }

    /// Look up a linter category by its enforcement letter. Only the
    /// uppercase letters match.
    pub fn from_letter(letter: char) -> Option<Category> {
        Self::LINTER.into_iter().find(|c| c.letter() == Some(letter))
    }

    /// Position of this category among the linter categories.
    pub const fn linter_index(self) -> Option<usize> {
        match self {
            Self::Fatal => Some(0),
            Self::Error => Some(1),
            Self::Warning => Some(2),
            Self::Refactor => Some(3),
            Self::Convention => Some(4),
            Self::Usage => Some(5),
            Self::Quality => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
