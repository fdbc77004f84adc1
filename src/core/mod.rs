//! Core engine for vbump
//!
//! - **error**: unified error type with contextual help and exit codes
//! - **version**: strict three-component semver parsing and bump math
//! - **lexer**: lossless tokenizer backing the format-preserving edit
//! - **editor**: the single-field file editor (scan, mutate, rewrite)
//! - **vcs**: git release commands via the system git binary

pub mod editor;
pub mod error;
pub mod lexer;
pub mod vcs;
pub mod version;
