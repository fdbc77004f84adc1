//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A test git repository with a version-carrying file and a bare remote
///
/// The remote lets `git push origin <tag>` succeed in a sandbox.
pub struct TestRepo {
  _root: TempDir,
  _remote: TempDir,
  pub path: PathBuf,
}

impl TestRepo {
  /// Create a repo containing `setup.py` with the given file body, committed
  pub fn new(setup_py: &str) -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    std::fs::write(path.join("setup.py"), setup_py)?;
    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial commit"])?;

    // Bare remote so pushes have somewhere to go
    let remote = TempDir::new()?;
    git(remote.path(), &["init", "--bare"])?;
    let remote_path = remote.path().to_str().context("remote path not UTF-8")?.to_string();
    git(&path, &["remote", "add", "origin", &remote_path])?;

    Ok(Self {
      _root: root,
      _remote: remote,
      path,
    })
  }

  /// Read a file relative to the repo root
  pub fn read_file(&self, file: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(file))?)
  }

  /// Subject line of the latest commit
  pub fn last_commit_subject(&self) -> Result<String> {
    let output = git(&self.path, &["log", "-1", "--pretty=%s"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// List local tags
  pub fn tags(&self) -> Result<Vec<String>> {
    let output = git(&self.path, &["tag", "-l"])?;
    Ok(
      String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect(),
    )
  }

  /// List tag refs visible on the remote
  pub fn remote_tags(&self) -> Result<String> {
    let output = git(&self.path, &["ls-remote", "--tags", "origin"])?;
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the vbump binary, failing the test on a non-zero exit
pub fn run_vbump(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_vbump_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "vbump command failed: vbump {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the vbump binary and hand back the output regardless of exit status
pub fn run_vbump_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let vbump_bin = env!("CARGO_BIN_EXE_vbump");

  Command::new(vbump_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run vbump")
}
