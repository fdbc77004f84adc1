//! Release command construction and execution via system git
//!
//! Uses the system `git` binary through `std::process::Command`. The
//! subprocess environment is cleared down to PATH and HOME so global
//! config cannot change command behavior mid-release.

use crate::core::error::{BumpError, BumpResult, GitError};
use semver::Version;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The ordered git commands that publish a release
///
/// Stage the file, commit it, annotate-tag the version, push the tag.
/// Nothing runs until `run` is called, so the same value backs both the
/// debug/JSON plan output and the real execution.
pub struct GitRelease {
  file: PathBuf,
  version: Version,
}

impl GitRelease {
  pub fn new(file: &Path, version: &Version) -> Self {
    Self {
      file: file.to_path_buf(),
      version: version.clone(),
    }
  }

  /// Argument vectors in execution order (without the leading `git`)
  pub fn commands(&self) -> Vec<Vec<String>> {
    let message = format!("Release v{}", self.version);
    let tag = self.version.to_string();
    let file = self.file.display().to_string();

    vec![
      vec!["add".into(), file.clone()],
      vec!["commit".into(), "-m".into(), message.clone(), file],
      vec!["tag".into(), "-a".into(), "-m".into(), message, tag.clone()],
      vec!["push".into(), "origin".into(), tag],
    ]
  }

  /// Rendered command lines for display and `--json` output
  pub fn command_lines(&self) -> Vec<String> {
    self.commands().iter().map(|args| render(args)).collect()
  }

  /// Run each command in order, stopping at the first failure
  pub fn run(&self) -> BumpResult<()> {
    for args in self.commands() {
      run_git(&args)?;
    }
    Ok(())
  }
}

fn run_git(args: &[String]) -> BumpResult<()> {
  let rendered = render(args);

  let output = git_cmd()
    .args(args)
    .output()
    .map_err(|e| {
      BumpError::Git(GitError::Spawn {
        command: rendered.clone(),
        source: e,
      })
    })?;

  if !output.status.success() {
    return Err(BumpError::Git(GitError::CommandFailed {
      command: rendered,
      stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }));
  }

  Ok(())
}

/// Create a git command with an isolated environment
///
/// Whitelists only PATH and HOME; repository-local config still applies.
fn git_cmd() -> Command {
  let mut cmd = Command::new("git");

  cmd.env_clear();
  if let Ok(path) = std::env::var("PATH") {
    cmd.env("PATH", path);
  }
  if let Ok(home) = std::env::var("HOME") {
    cmd.env("HOME", home);
  }

  cmd.arg("-c").arg("advice.detachedHead=false");

  cmd
}

/// Shell-style rendering for display; arguments with spaces are quoted
fn render(args: &[String]) -> String {
  let mut line = String::from("git");
  for arg in args {
    line.push(' ');
    if arg.contains(' ') {
      line.push('\'');
      line.push_str(arg);
      line.push('\'');
    } else {
      line.push_str(arg);
    }
  }
  line
}
