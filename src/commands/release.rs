//! Release command implementation
//!
//! The full run, in order: parse bump commands, read the current version
//! out of the target file, apply the commands cumulatively, then either
//! print the plan (--debug) or gate, confirm, rewrite the file, and run
//! the git release commands. Nothing is written before the gate and the
//! prompt have both passed.

use crate::core::editor::VersionFile;
use crate::core::error::BumpResult;
use crate::core::vcs::git::GitRelease;
use crate::release::plan::{self, ReleasePlan};
use crate::ui::prompt::ask_yes_no;
use std::path::PathBuf;

/// Run the release command
pub fn run_release(
  command_words: Vec<String>,
  file: PathBuf,
  force: bool,
  yes: bool,
  debug: bool,
  verbose: bool,
  json: bool,
) -> BumpResult<()> {
  // Reject unrecognized words before touching the file
  let commands = plan::parse_commands(&command_words)?;

  let mut version_file = VersionFile::open(&file)?;
  let old_version = version_file.current_version()?;

  if verbose {
    println!("{}", old_version);
  }

  let mut new_version = old_version.clone();
  for step in plan::apply_commands(&old_version, &commands) {
    if verbose {
      println!("-> {}", step);
    }
    new_version = step;
  }

  version_file.set_version(&new_version)?;
  let release = GitRelease::new(&file, &new_version);

  if debug {
    print_plan(&version_file, &release, &old_version, &new_version, json)?;
    return Ok(());
  }

  plan::gate(&old_version, &new_version, force)?;

  if !yes {
    let question = format!(
      "Last version was v{}. Do you want to release v{}",
      old_version, new_version
    );
    if !ask_yes_no(&question, true) {
      println!("Aborted.");
      return Ok(());
    }
  }

  version_file.write()?;
  release.run()?;

  println!("✅ Released v{}", new_version);

  Ok(())
}

/// Print what a run would do, without writing or executing anything
fn print_plan(
  version_file: &VersionFile,
  release: &GitRelease,
  old_version: &semver::Version,
  new_version: &semver::Version,
  json: bool,
) -> BumpResult<()> {
  if json {
    let plan = ReleasePlan::new(version_file.path(), old_version, new_version);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    return Ok(());
  }

  let header = format!("{}:", version_file.path().display());
  println!("{}", header);
  println!("{}", "=".repeat(header.len()));
  print!("{}", version_file.serialize());
  println!();

  for line in release.command_lines() {
    println!("{}", line);
  }

  Ok(())
}
