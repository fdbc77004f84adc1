//! Release planning: bump commands, cumulative application, release gate

use crate::core::error::{BumpError, BumpResult, Refusal};
use crate::core::vcs::git::GitRelease;
use crate::core::version::{self, Bump};
use semver::Version;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single bump command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpCommand {
  /// Relative bump (`major`, `minor`, `patch` and their `+X.Y.Z` aliases)
  Bump(Bump),
  /// Replace the version wholesale
  Absolute(Version),
}

impl BumpCommand {
  /// Parse one command word; `None` if unrecognized
  pub fn parse(word: &str) -> Option<Self> {
    match word {
      "major" | "+1.0.0" => Some(BumpCommand::Bump(Bump::Major)),
      "minor" | "+0.1.0" => Some(BumpCommand::Bump(Bump::Minor)),
      "patch" | "+0.0.1" => Some(BumpCommand::Bump(Bump::Patch)),
      _ => version::parse_version(word).ok().map(BumpCommand::Absolute),
    }
  }

  pub fn apply(&self, version: &Version) -> Version {
    match self {
      BumpCommand::Bump(bump) => bump.apply(version),
      BumpCommand::Absolute(v) => v.clone(),
    }
  }
}

/// Parse all command words, reporting every unrecognized one at once
pub fn parse_commands(words: &[String]) -> BumpResult<Vec<BumpCommand>> {
  let mut commands = Vec::new();
  let mut unrecognized = Vec::new();

  for word in words {
    match BumpCommand::parse(word) {
      Some(command) => commands.push(command),
      None => unrecognized.push(word.as_str()),
    }
  }

  if !unrecognized.is_empty() {
    unrecognized.sort_unstable();
    unrecognized.dedup();
    return Err(BumpError::with_help(
      format!("unrecognized commands: {}", unrecognized.join(" ")),
      "Valid commands: major, minor, patch, +1.0.0, +0.1.0, +0.0.1, or an absolute version like 3.2.1",
    ));
  }

  Ok(commands)
}

/// Apply commands in order, returning each intermediate version
///
/// Commands are cumulative: `["major", "patch"]` on 1.2.3 yields 1.0.0
/// then 1.0.1. The last element (or the start, if there are no commands)
/// is the release version.
pub fn apply_commands(start: &Version, commands: &[BumpCommand]) -> Vec<Version> {
  let mut versions = Vec::with_capacity(commands.len());
  let mut current = start.clone();

  for command in commands {
    current = command.apply(&current);
    versions.push(current.clone());
  }

  versions
}

/// Release gate: refuse unchanged or regressed versions unless forced
pub fn gate(old: &Version, new: &Version, force: bool) -> BumpResult<()> {
  if force {
    return Ok(());
  }

  if new == old {
    return Err(BumpError::Refused(Refusal::Unchanged { version: new.clone() }));
  }

  if new < old {
    return Err(BumpError::Refused(Refusal::Regression {
      old: old.clone(),
      new: new.clone(),
    }));
  }

  Ok(())
}

/// Serializable summary of what a release run will do
#[derive(Debug, Clone, Serialize)]
pub struct ReleasePlan {
  pub file: PathBuf,
  pub old_version: Version,
  pub new_version: Version,
  /// Rendered git command lines, in execution order
  pub commands: Vec<String>,
}

impl ReleasePlan {
  pub fn new(file: &Path, old_version: &Version, new_version: &Version) -> Self {
    let git = GitRelease::new(file, new_version);
    Self {
      file: file.to_path_buf(),
      old_version: old_version.clone(),
      new_version: new_version.clone(),
      commands: git.command_lines(),
    }
  }
}
