//! Observability for lintmask.
//! `tracing` crate with `EnvFilter`, log output on stderr.

pub mod setup;

pub use setup::init_tracing;
