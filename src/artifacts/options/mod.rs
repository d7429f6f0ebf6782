//! Declarative command line option engine
//!
//! - `spec`: the option table (`OptionSpecs`) and its builder
//! - `parser`: resolves argv against the table into `ParsedOptions`
//! - `usage`: renders help text from the table
//!
//! Inputs that match no option are never rejected; they are kept so callers can
//! forward them to another program.

pub mod parser;
pub mod spec;
pub mod usage;
