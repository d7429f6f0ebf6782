//! Data structures and algorithms
//!
//! - `options`: declarative command line option engine
//! - `log`: commit records, svn XML reading and commit filtering
//! - `format`: commit log renderings

pub mod format;
pub mod log;
pub mod options;
