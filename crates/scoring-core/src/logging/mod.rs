//! Logging for the scoring system.
//! `tracing` with `EnvFilter`, optional JSON output.

mod setup;

pub use setup::{init_tracing, init_tracing_with_config};
