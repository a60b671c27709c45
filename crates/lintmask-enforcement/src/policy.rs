//! Enforcement policy: which linter categories contribute to the exit code.

use std::fmt;
use std::str::FromStr;

use lintmask_core::config::{parse_exit_report, EnforcementConfig};
use lintmask_core::errors::ConfigError;
use lintmask_core::{Category, CategorySet};

/// Immutable per-category enforcement, built once from configuration.
///
/// The token list fully determines the policy: a category whose letter is
/// absent is suppressed, whatever the defaults say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnforcementPolicy {
    enforced: [bool; Category::LINTER.len()],
}

impl EnforcementPolicy {
    /// Policy with every linter category suppressed.
    pub const fn suppress_all() -> Self {
        Self {
            enforced: [false; Category::LINTER.len()],
        }
    }

    /// Policy with every linter category enforced.
    pub const fn enforce_all() -> Self {
        Self {
            enforced: [true; Category::LINTER.len()],
        }
    }

    /// Build a policy from enforcement letters.
    ///
    /// Each token must be exactly one of `F,E,W,R,C,U`. Anything else,
    /// including lowercase letters and padded tokens, is skipped with a warning.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut policy = Self::suppress_all();
        for token in tokens {
            let token = token.as_ref();
            let mut chars = token.chars();
            let category = match (chars.next(), chars.next()) {
                (Some(letter), None) => Category::from_letter(letter),
                _ => None,
            };
            match category.and_then(Category::linter_index) {
                Some(index) => policy.enforced[index] = true,
                None => tracing::warn!(token, "ignoring unknown enforcement token"),
            }
        }
        tracing::debug!(policy = %policy, "enforcement policy built");
        policy
    }

    /// Parse a comma-delimited enforcement string such as `"F,E,W,U"`.
    ///
    /// Fails on structurally malformed input (a token that is not a single
    /// letter); unknown letters are ignored.
    pub fn parse(exit_report: &str) -> Result<Self, ConfigError> {
        let letters = parse_exit_report(exit_report)?;
        Ok(Self::from_tokens(letters.iter().map(|c| c.to_string())))
    }

    pub fn from_config(config: &EnforcementConfig) -> Result<Self, ConfigError> {
        Self::parse(config.effective_exit_report())
    }

    /// The category's enforced value: its own bit, or 0 when suppressed.
    /// The quality category is never governed by this policy.
    pub fn resolve(&self, category: Category) -> u64 {
        if self.is_enforced(category) {
            category.bit()
        } else {
            0
        }
    }

    pub fn is_enforced(&self, category: Category) -> bool {
        category
            .linter_index()
            .is_some_and(|index| self.enforced[index])
    }

    /// Enforced linter categories, ascending by bit.
    pub fn enforced_categories(&self) -> CategorySet {
        Category::LINTER
            .into_iter()
            .filter(|c| self.is_enforced(*c))
            .collect()
    }

    /// Canonical enforcement string, e.g. `"F,E,W,U"`.
    pub fn to_exit_report(&self) -> String {
        self.enforced_categories()
            .iter()
            .filter_map(|c| c.letter())
            .map(String::from)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for EnforcementPolicy {
    /// Fatal, Error, Warning and Usage enforced; Refactor and Convention suppressed.
    fn default() -> Self {
        Self::from_tokens(["F", "E", "W", "U"])
    }
}

impl FromStr for EnforcementPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EnforcementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_exit_report())
    }
}
