//! Core types, errors, config, tracing, and constants for lintmask.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use category::{Category, CategorySet};
