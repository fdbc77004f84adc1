//! Version control backends
//!
//! System git only: release commands run through the `git` binary with a
//! cleaned subprocess environment, no git crates.

pub mod git;
