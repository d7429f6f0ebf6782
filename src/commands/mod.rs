//! Command implementations
//!
//! - `cli`: the option table of the `slog` binary
//! - `log`: reads options, fetches the log, filters it and prints it

pub mod cli;
pub mod log;
