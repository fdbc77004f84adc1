//! End-to-end tests for the release flow

use crate::helpers::{TestRepo, run_vbump, run_vbump_raw};
use anyhow::Result;

const SETUP_PY: &str = r#"# version note
from setuptools import setup

setup(
    name="demo",
    version = "1.0.0",
)
"#;

#[test]
fn test_debug_leaves_file_untouched() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  let output = run_vbump(&repo.path, &["-d", "patch"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  // Plan shows the rewritten body and the git commands
  assert!(stdout.contains("version = \"1.0.1\""));
  assert!(stdout.contains("git tag -a -m 'Release v1.0.1' 1.0.1"));
  assert!(stdout.contains("git push origin 1.0.1"));

  // Neither the file nor the repo changed
  assert_eq!(repo.read_file("setup.py")?, SETUP_PY);
  assert!(repo.tags()?.is_empty());
  assert_eq!(repo.last_commit_subject()?, "Initial commit");

  Ok(())
}

#[test]
fn test_patch_bump_commits_tags_and_pushes() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  run_vbump(&repo.path, &["-y", "patch"])?;

  let rewritten = repo.read_file("setup.py")?;
  assert!(rewritten.contains("version = \"1.0.1\""));
  // Surrounding formatting survives byte-for-byte
  assert!(rewritten.starts_with("# version note\n"));
  assert_eq!(rewritten, SETUP_PY.replace("\"1.0.0\"", "\"1.0.1\""));

  assert_eq!(repo.last_commit_subject()?, "Release v1.0.1");
  assert_eq!(repo.tags()?, vec!["1.0.1"]);
  assert!(repo.remote_tags()?.contains("refs/tags/1.0.1"));

  Ok(())
}

#[test]
fn test_cumulative_commands() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  // 1.0.0 -> 2.0.0 -> 2.0.1
  run_vbump(&repo.path, &["-y", "major", "patch"])?;

  assert!(repo.read_file("setup.py")?.contains("version = \"2.0.1\""));
  assert_eq!(repo.tags()?, vec!["2.0.1"]);

  Ok(())
}

#[test]
fn test_single_quotes_preserved() -> Result<()> {
  let repo = TestRepo::new("version = '1.0.0'\n")?;

  run_vbump(&repo.path, &["-y", "patch"])?;

  assert_eq!(repo.read_file("setup.py")?, "version = '1.0.1'\n");

  Ok(())
}

#[test]
fn test_unchanged_version_refused() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  // Absolute version equal to the current one
  let output = run_vbump_raw(&repo.path, &["-y", "1.0.0"])?;
  assert_eq!(output.status.code(), Some(3));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Version (1.0.0) unchanged."));

  // Nothing written, nothing tagged
  assert_eq!(repo.read_file("setup.py")?, SETUP_PY);
  assert!(repo.tags()?.is_empty());

  Ok(())
}

#[test]
fn test_regression_refused_without_force() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  let output = run_vbump_raw(&repo.path, &["-y", "0.9.0"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("Version 0.9.0 is smaller than 1.0.0."));

  // --force overrides the gate
  run_vbump(&repo.path, &["-y", "-f", "0.9.0"])?;
  assert!(repo.read_file("setup.py")?.contains("version = \"0.9.0\""));
  assert_eq!(repo.tags()?, vec!["0.9.0"]);

  Ok(())
}

#[test]
fn test_unrecognized_commands_listed() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  let output = run_vbump_raw(&repo.path, &["frobnicate", "patch", "wat"])?;
  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("unrecognized commands: frobnicate wat"));

  Ok(())
}

#[test]
fn test_no_version_assignment() -> Result<()> {
  let repo = TestRepo::new("name = \"demo\"\n")?;

  let output = run_vbump_raw(&repo.path, &["-d", "patch"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("no version assignment found"));

  Ok(())
}

#[test]
fn test_non_string_assignment() -> Result<()> {
  let repo = TestRepo::new("version = 5\n")?;

  let output = run_vbump_raw(&repo.path, &["-d", "patch"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("malformed version assignment"));

  Ok(())
}

#[test]
fn test_verbose_prints_transitions() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  let output = run_vbump(&repo.path, &["-d", "-v", "major", "patch"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("1.0.0\n"));
  assert!(stdout.contains("-> 2.0.0"));
  assert!(stdout.contains("-> 2.0.1"));

  Ok(())
}

#[test]
fn test_json_plan() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;

  let output = run_vbump(&repo.path, &["-d", "--json", "minor"])?;
  let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(plan["old_version"], "1.0.0");
  assert_eq!(plan["new_version"], "1.1.0");
  assert_eq!(plan["file"], "setup.py");
  let commands: Vec<String> = plan["commands"]
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c.as_str().unwrap().to_string())
    .collect();
  assert_eq!(commands[0], "git add setup.py");
  assert_eq!(commands[3], "git push origin 1.1.0");

  Ok(())
}

#[test]
fn test_custom_input_path() -> Result<()> {
  let repo = TestRepo::new(SETUP_PY)?;
  std::fs::write(repo.path.join("meta.cfg"), "version = \"0.3.0\"\n")?;
  crate::helpers::git(&repo.path, &["add", "meta.cfg"])?;
  crate::helpers::git(&repo.path, &["commit", "-m", "Add meta.cfg"])?;

  run_vbump(&repo.path, &["-y", "--in", "meta.cfg", "minor"])?;

  assert_eq!(repo.read_file("meta.cfg")?, "version = \"0.4.0\"\n");
  // The default file is untouched
  assert_eq!(repo.read_file("setup.py")?, SETUP_PY);
  assert_eq!(repo.tags()?, vec!["0.4.0"]);

  Ok(())
}
