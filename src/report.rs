//! Presentation of ranking results.

use crate::types::{FrequencyMap, TopKResult, WordCount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of ranking one document, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
  /// The most frequent words, by descending count.
  pub words: Vec<WordCount>,
  /// Number of distinct words in the document.
  pub distinct: usize,
  /// Number of words counted in the document.
  pub total: usize,
}

impl Report {
  /// Builds a report from a document's counts and its top entries.
  pub fn new(freqs: &FrequencyMap, top: TopKResult) -> Self {
    Self {
      words: top.into_vec(),
      distinct: freqs.len(),
      total: freqs.total(),
    }
  }

  /// Renders the report as pretty-printed JSON.
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

/// One `word -> count` line per entry.
impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for entry in &self.words {
      writeln!(f, "{}", entry)?;
    }
    Ok(())
  }
}
