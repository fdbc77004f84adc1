//! Format-preserving editor for a single version assignment
//!
//! Locates the first `version = "X.Y.Z"` assignment in a text file and
//! exposes the string literal as the one mutable unit. Everything else
//! (whitespace, comments, unrelated code) is carried through the token
//! stream untouched, so the rewritten file is byte-identical to the
//! original outside the literal.

use crate::core::error::{BumpError, BumpResult, FormatError, ResultExt, ScanError};
use crate::core::lexer::{self, Token, TokenKind};
use crate::core::version;
use semver::Version;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Quote character convention of the original literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
  Single,
  Double,
}

impl QuoteStyle {
  fn as_char(self) -> char {
    match self {
      QuoteStyle::Single => '\'',
      QuoteStyle::Double => '"',
    }
  }
}

/// A tokenized build file with one distinguished version literal
///
/// The stream is held as an immutable prefix (everything through the `=`),
/// the literal token, and an immutable suffix. Serialization concatenates
/// the three regions; only the literal's text ever changes.
#[derive(Debug)]
pub struct VersionFile {
  path: PathBuf,
  prefix: Vec<Token>,
  literal: Token,
  suffix: Vec<Token>,
}

impl VersionFile {
  /// Read and tokenize a file, locating its version assignment
  pub fn open(path: &Path) -> BumpResult<Self> {
    let source =
      fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    Self::from_source(path, &source)
  }

  /// Scan a token stream for the first `version = <string>` assignment
  ///
  /// Intra-line whitespace between the name, the `=`, and the literal is
  /// not adjacency-breaking; anything else in those positions (a comment,
  /// a line break, a bare number) fails without rescanning. First match
  /// wins and the remainder of the file is copied verbatim.
  fn from_source(path: &Path, source: &str) -> BumpResult<Self> {
    let mut tokens = lexer::tokenize(source).into_iter();
    let mut prefix: Vec<Token> = Vec::new();

    // Seek the assignment target. Strings and comments are single tokens,
    // so a `version` inside either never matches here.
    let name_line = loop {
      match tokens.next() {
        Some(token) => {
          let matched = token.kind == TokenKind::Name && token.text == "version";
          let line = token.line;
          prefix.push(token);
          if matched {
            break line;
          }
        }
        None => {
          return Err(BumpError::Scan(ScanError::NoAssignment {
            path: path.to_path_buf(),
          }));
        }
      }
    };

    // Expect `=`
    loop {
      match tokens.next() {
        Some(t) if t.kind == TokenKind::Whitespace => prefix.push(t),
        Some(t) if t.kind == TokenKind::Operator && t.text == "=" => {
          prefix.push(t);
          break;
        }
        Some(t) => return Err(malformed("`=`", &t)),
        None => return Err(malformed_eof("`=`", name_line)),
      }
    }

    // Expect the string literal
    let literal = loop {
      match tokens.next() {
        Some(t) if t.kind == TokenKind::Whitespace => prefix.push(t),
        Some(t) if t.kind == TokenKind::StringLit => break t,
        Some(t) => return Err(malformed("a quoted string", &t)),
        None => return Err(malformed_eof("a quoted string", name_line)),
      }
    };

    Ok(Self {
      path: path.to_path_buf(),
      prefix,
      literal,
      suffix: tokens.collect(),
    })
  }

  /// The version currently held by the literal
  pub fn current_version(&self) -> BumpResult<Version> {
    version::parse_version(self.literal_value()?)
  }

  /// Rewrite the literal to hold `version`, preserving the quote style
  pub fn set_version(&mut self, version: &Version) -> BumpResult<()> {
    let quote = self.quote_style()?.as_char();
    self.literal.text = format!("{quote}{version}{quote}");
    Ok(())
  }

  /// Reconstruct the full file text with only the literal changed
  pub fn serialize(&self) -> String {
    let mut out = String::new();
    for token in &self.prefix {
      out.push_str(&token.text);
    }
    out.push_str(&self.literal.text);
    for token in &self.suffix {
      out.push_str(&token.text);
    }
    out
  }

  /// Atomically replace the file on disk with the serialized stream
  ///
  /// Writes a temp file in the target's directory and renames it over the
  /// original, so a failed write never leaves a truncated file behind.
  pub fn write(&self) -> BumpResult<()> {
    let dir = match self.path.parent() {
      Some(p) if !p.as_os_str().is_empty() => p,
      _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
      .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp
      .write_all(self.serialize().as_bytes())
      .with_context(|| format!("Failed to write {}", self.path.display()))?;
    tmp
      .persist(&self.path)
      .map_err(|e| BumpError::message(format!("Failed to replace {}: {}", self.path.display(), e)))?;

    Ok(())
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Literal text with exactly one layer of matching quotes stripped
  fn literal_value(&self) -> BumpResult<&str> {
    let text = &self.literal.text;
    let mut chars = text.chars();
    match (chars.next(), text.chars().next_back()) {
      (Some(first), Some(last))
        if text.len() >= 2 && first == last && (first == '\'' || first == '"') =>
      {
        Ok(&text[1..text.len() - 1])
      }
      _ => Err(BumpError::Format(FormatError::Unquoted { text: text.clone() })),
    }
  }

  fn quote_style(&self) -> BumpResult<QuoteStyle> {
    match self.literal.text.chars().next() {
      Some('\'') => Ok(QuoteStyle::Single),
      Some('"') => Ok(QuoteStyle::Double),
      _ => Err(BumpError::Format(FormatError::Unquoted {
        text: self.literal.text.clone(),
      })),
    }
  }
}

fn malformed(expected: &'static str, found: &Token) -> BumpError {
  let found_desc = match found.kind {
    TokenKind::Newline => "end of line".to_string(),
    TokenKind::Comment => "a comment".to_string(),
    _ => format!("`{}`", found.text),
  };
  BumpError::Scan(ScanError::Malformed {
    expected,
    found: found_desc,
    line: found.line,
  })
}

fn malformed_eof(expected: &'static str, line: u32) -> BumpError {
  BumpError::Scan(ScanError::Malformed {
    expected,
    found: "end of file".to_string(),
    line,
  })
}
