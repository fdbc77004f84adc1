//! Error types for vbump with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and
//! provides contextual help messages to users. Every run-terminating error
//! maps to a stable process exit code.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for vbump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad command words, malformed file or version)
  User = 1,
  /// System error (git, I/O)
  System = 2,
  /// Release gate refusal (unchanged or regressed version without --force)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for vbump
#[derive(Debug)]
pub enum BumpError {
  /// Malformed version string or literal quoting
  Format(FormatError),

  /// Version assignment scan failures
  Scan(ScanError),

  /// Release gate refusals
  Refused(Refusal),

  /// Git operation errors
  Git(GitError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl BumpError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    BumpError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    BumpError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      BumpError::Message { message, context, help } => BumpError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      BumpError::Io(e) => BumpError::Message {
        message: format!("{}: {}", ctx_str, e),
        context: None,
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      BumpError::Format(_) => ExitCode::User,
      BumpError::Scan(_) => ExitCode::User,
      BumpError::Refused(_) => ExitCode::Validation,
      BumpError::Git(_) => ExitCode::System,
      BumpError::Io(_) => ExitCode::System,
      BumpError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      BumpError::Scan(e) => e.help_message(),
      BumpError::Refused(e) => e.help_message(),
      BumpError::Git(e) => e.help_message(),
      BumpError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for BumpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BumpError::Format(e) => write!(f, "{}", e),
      BumpError::Scan(e) => write!(f, "{}", e),
      BumpError::Refused(e) => write!(f, "{}", e),
      BumpError::Git(e) => write!(f, "{}", e),
      BumpError::Io(e) => write!(f, "I/O error: {}", e),
      BumpError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for BumpError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      BumpError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for BumpError {
  fn from(err: io::Error) -> Self {
    BumpError::Io(err)
  }
}

impl From<String> for BumpError {
  fn from(msg: String) -> Self {
    BumpError::message(msg)
  }
}

impl From<&str> for BumpError {
  fn from(msg: &str) -> Self {
    BumpError::message(msg)
  }
}

impl From<serde_json::Error> for BumpError {
  fn from(err: serde_json::Error) -> Self {
    BumpError::message(format!("JSON error: {}", err))
  }
}

impl From<anyhow::Error> for BumpError {
  fn from(err: anyhow::Error) -> Self {
    BumpError::message(err.to_string())
  }
}

/// Malformed version strings and literal quoting
#[derive(Debug)]
pub enum FormatError {
  /// Wrong number of dot-separated components
  ComponentCount { text: String, count: usize },

  /// A component is not a non-negative integer
  Component { text: String, component: String },

  /// The literal is not wrapped in a matching quote pair
  Unquoted { text: String },
}

impl fmt::Display for FormatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FormatError::ComponentCount { text, count } => {
        write!(
          f,
          "invalid version '{}': expected 3 dot-separated components, found {}",
          text, count
        )
      }
      FormatError::Component { text, component } => {
        write!(
          f,
          "invalid version '{}': component '{}' is not a non-negative integer",
          text, component
        )
      }
      FormatError::Unquoted { text } => {
        write!(f, "version literal {} is not wrapped in a matching quote pair", text)
      }
    }
  }
}

/// Version assignment scan failures
#[derive(Debug)]
pub enum ScanError {
  /// End of file reached without a `version =` assignment
  NoAssignment { path: PathBuf },

  /// `version` found but not followed by `=` then a string literal
  Malformed {
    expected: &'static str,
    found: String,
    line: u32,
  },
}

impl ScanError {
  fn help_message(&self) -> Option<String> {
    match self {
      ScanError::NoAssignment { .. } => Some(
        "The file must contain an assignment like `version = \"1.2.3\"`. Use -i/--in to pick a different file."
          .to_string(),
      ),
      ScanError::Malformed { .. } => {
        Some("Only a quoted string literal can be bumped: `version = \"1.2.3\"`.".to_string())
      }
    }
  }
}

impl fmt::Display for ScanError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ScanError::NoAssignment { path } => {
        write!(f, "no version assignment found in {}", path.display())
      }
      ScanError::Malformed { expected, found, line } => {
        write!(
          f,
          "malformed version assignment on line {}: expected {}, found {}",
          line, expected, found
        )
      }
    }
  }
}

/// Release gate refusals
#[derive(Debug)]
pub enum Refusal {
  /// New version equals the old one
  Unchanged { version: semver::Version },

  /// New version is numerically smaller than the old one
  Regression {
    old: semver::Version,
    new: semver::Version,
  },
}

impl Refusal {
  fn help_message(&self) -> Option<String> {
    Some("Use -f/--force to release anyway.".to_string())
  }
}

impl fmt::Display for Refusal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Refusal::Unchanged { version } => {
        write!(f, "Version ({}) unchanged.", version)
      }
      Refusal::Regression { old, new } => {
        write!(f, "Version {} is smaller than {}.", new, old)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Could not spawn the git binary
  Spawn { command: String, source: io::Error },

  /// Git command exited non-zero
  CommandFailed { command: String, stderr: String },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::CommandFailed { stderr, .. } => {
        if stderr.contains("non-fast-forward") {
          Some("The remote has commits you don't have. Pull first.".to_string())
        } else if stderr.contains("permission denied") || stderr.contains("403") {
          Some("Check your SSH key permissions and remote access.".to_string())
        } else {
          None
        }
      }
      GitError::Spawn { .. } => Some("Is git installed and on PATH?".to_string()),
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::Spawn { command, source } => {
        write!(f, "failed to run {}: {}", command, source)
      }
      GitError::CommandFailed { command, stderr } => {
        write!(f, "git command failed: {}\n{}", command, stderr)
      }
    }
  }
}

/// Result type alias for vbump
pub type BumpResult<T> = Result<T, BumpError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> BumpResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> BumpResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<BumpError>,
{
  fn context(self, ctx: impl Into<String>) -> BumpResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> BumpResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &BumpError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
