//! Release planning and gating
//!
//! Turns command-line bump words into an ordered command list, applies
//! them cumulatively to the current version, and gates the result against
//! unchanged/regressed releases.

pub mod plan;

pub use plan::{BumpCommand, ReleasePlan, apply_commands, gate, parse_commands};
