//! Locating and cleaning the text body of a fetched page.
//!
//! This is deliberately not an HTML parser: the body is found by a single
//! substring search for a known marker, and cleanup is a fixed list of
//! literal replacements.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The comment that opens the text of the work on lib.ru pages.
pub const DEFAULT_MARKER: &str = "<!----------- Собственно произведение --------------->";

/// A literal text substitution applied during cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
  /// The exact text to look for.
  pub from: String,
  /// What to put in its place.
  #[serde(default)]
  pub to: String,
}

impl Replacement {
  pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
    Self {
      from: from.into(),
      to: to.into(),
    }
  }
}

/// Replacements applied when none are configured: non-breaking space
/// entities become spaces and definition-list tags are dropped.
pub fn default_replacements() -> Vec<Replacement> {
  vec![Replacement::new("&nbsp;", " "), Replacement::new("<dd>", "")]
}

/// Returns the part of `html` starting at the first occurrence of `marker`.
///
/// The marker itself is kept at the start of the returned slice.
///
/// # Errors
///
/// Returns [`Error::BoundaryNotFound`] if `marker` does not occur.
pub fn extract_body<'a>(html: &'a str, marker: &str) -> Result<&'a str> {
  match html.find(marker) {
    Some(index) => Ok(&html[index..]),
    None => Err(Error::BoundaryNotFound {
      marker: marker.to_string(),
    }),
  }
}

/// Applies each replacement, in order, to every occurrence in `text`.
pub fn clean_markup(text: &str, replacements: &[Replacement]) -> String {
  let mut cleaned = text.to_string();
  for replacement in replacements {
    if replacement.from.is_empty() {
      continue;
    }
    cleaned = cleaned.replace(&replacement.from, &replacement.to);
  }
  cleaned
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_extract_body_keeps_marker() {
    let html = format!("<html><head></head>{}Text here", DEFAULT_MARKER);
    let body = extract_body(&html, DEFAULT_MARKER).unwrap();
    assert!(body.starts_with(DEFAULT_MARKER));
    assert!(body.ends_with("Text here"));
  }

  #[test]
  fn test_extract_body_first_occurrence() {
    let body = extract_body("a MARK b MARK c", "MARK").unwrap();
    assert_eq!(body, "MARK b MARK c");
  }

  #[test]
  fn test_missing_marker() {
    let err = extract_body("<html>nothing</html>", DEFAULT_MARKER).unwrap_err();
    assert!(matches!(err, Error::BoundaryNotFound { .. }));
  }

  #[test]
  fn test_default_cleanup() {
    let cleaned = clean_markup("<dd>&nbsp;&nbsp;Well,&nbsp;Prince", &default_replacements());
    assert_eq!(cleaned, "  Well, Prince");
  }

  #[test]
  fn test_empty_pattern_is_skipped() {
    let cleaned = clean_markup("abc", &[Replacement::new("", "x")]);
    assert_eq!(cleaned, "abc");
  }
}
