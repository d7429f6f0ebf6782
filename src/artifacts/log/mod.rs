//! Subversion commit history
//!
//! - `commit`: the commit record and the subject text patterns run against
//! - `svn_xml`: reads `svn log --xml -v` output into commits
//! - `pattern`: delimited regular expressions (`/fix/i`)
//! - `filter`: author allow/deny lists and conjunctive pattern matching
//!
//! ## Filtering
//!
//! A commit is dropped when its author is denied, when an allow list exists and
//! does not name its author, or when any pattern fails to match its subject.
//! Commits are never modified and the surviving ones keep their order.

pub mod commit;
pub mod filter;
pub mod pattern;
pub mod svn_xml;
