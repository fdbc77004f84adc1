//! Strict semantic-version parsing and bump operations
//!
//! The literal being edited is expected to hold a plain `X.Y.Z`: exactly
//! three dot-separated non-negative integers. Pre-release and build
//! suffixes (`1.0.0-rc1`) are rejected even though full semver would allow
//! them, so every `Version` constructed here carries empty `pre`/`build`.

use crate::core::error::{BumpError, BumpResult, FormatError};
use semver::Version;
use serde::{Deserialize, Serialize};

/// Parse a strict three-component version string
///
/// Surrounding whitespace is trimmed first. Comparison and rendering come
/// from `semver::Version` itself (numeric per component: `0.0.10 > 0.0.9`).
pub fn parse_version(text: &str) -> BumpResult<Version> {
  let trimmed = text.trim();
  let parts: Vec<&str> = trimmed.split('.').collect();

  if parts.len() != 3 {
    return Err(BumpError::Format(FormatError::ComponentCount {
      text: trimmed.to_string(),
      count: parts.len(),
    }));
  }

  let mut components = [0u64; 3];
  for (slot, part) in components.iter_mut().zip(&parts) {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
      return Err(BumpError::Format(FormatError::Component {
        text: trimmed.to_string(),
        component: part.to_string(),
      }));
    }
    *slot = part.parse().map_err(|_| {
      BumpError::Format(FormatError::Component {
        text: trimmed.to_string(),
        component: part.to_string(),
      })
    })?;
  }

  Ok(Version::new(components[0], components[1], components[2]))
}

/// Version bump kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
  /// Major bump (resets minor and patch)
  Major,
  /// Minor bump (resets patch)
  Minor,
  /// Patch bump (leaves the others unchanged)
  Patch,
}

impl Bump {
  /// Apply bump to a semver version
  pub fn apply(&self, version: &Version) -> Version {
    match self {
      Bump::Major => Version::new(version.major + 1, 0, 0),
      Bump::Minor => Version::new(version.major, version.minor + 1, 0),
      Bump::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
  }
}
