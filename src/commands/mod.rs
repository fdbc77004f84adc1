//! CLI commands for vbump
//!
//! One user-facing command:
//!
//! - **release**: bump the version literal in the target file and publish
//!   the result as a git release (stage, commit, annotated tag, push)

pub mod release;

pub use release::run_release;
